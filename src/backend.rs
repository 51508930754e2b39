//! The seam between the bootstrap sequence and the graphics API.
//!
//! [`Backend`] exposes exactly the calls the bootstrap needs, with opaque
//! associated handle types. [`crate::vulkan::Vulkan`] implements it over
//! `ash`; tests implement it with a recording fake.
//!
//! Handles returned from the `create_*` methods are only ever released
//! through the matching `destroy_*` method, and only by the owning wrapper
//! types ([`crate::instance::Instance`], [`crate::debug::DebugMessenger`],
//! [`crate::device::Device`]) when they drop.

use std::fmt::Debug;

use ash::{prelude::VkResult, vk};

use crate::physical_device::PhysicalDevice;

#[derive(Debug, Clone)]
pub struct InstanceInfo<'a> {
    pub application_name: &'a str,
    pub application_version: u32,
    pub engine_name: &'a str,
    pub engine_version: u32,
    pub api_version: u32,
    pub extensions: &'a [String],
    pub layers: &'a [String],
}

#[derive(Clone, Copy)]
pub struct MessengerInfo {
    pub severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    pub message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    pub callback: vk::PFN_vkDebugUtilsMessengerCallbackEXT,
}

impl Debug for MessengerInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessengerInfo")
            .field("severity", &self.severity)
            .field("message_type", &self.message_type)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct DeviceInfo<'a> {
    pub queue_family_index: u32,
    pub queue_priorities: &'a [f32],
    pub features: vk::PhysicalDeviceFeatures,
    pub layers: &'a [String],
}

pub trait Backend {
    type Instance;
    type Messenger;
    type PhysicalDevice: Copy + Debug;
    type Device;
    type Queue: Copy + Debug;

    fn instance_layers(&self) -> VkResult<Vec<String>>;

    fn instance_extensions(&self) -> VkResult<Vec<String>>;

    /// `messenger` is chained into the instance create info so that
    /// messages emitted while the instance is being created are reported.
    fn create_instance(
        &self,
        info: &InstanceInfo<'_>,
        messenger: Option<&MessengerInfo>,
    ) -> VkResult<Self::Instance>;

    /// # Safety
    /// Every object created from `instance` must already be destroyed.
    unsafe fn destroy_instance(&self, instance: &Self::Instance);

    fn create_messenger(
        &self,
        instance: &Self::Instance,
        info: &MessengerInfo,
    ) -> VkResult<Self::Messenger>;

    /// # Safety
    /// `messenger` must have been created from `instance` and not yet destroyed.
    unsafe fn destroy_messenger(&self, instance: &Self::Instance, messenger: &Self::Messenger);

    fn physical_devices(
        &self,
        instance: &Self::Instance,
    ) -> VkResult<Vec<PhysicalDevice<Self::PhysicalDevice>>>;

    fn create_device(
        &self,
        instance: &Self::Instance,
        physical_device: Self::PhysicalDevice,
        info: &DeviceInfo<'_>,
    ) -> VkResult<Self::Device>;

    fn device_queue(&self, device: &Self::Device, queue_family_index: u32, queue_index: u32)
        -> Self::Queue;

    /// # Safety
    /// Queues retrieved from `device` must no longer be used.
    unsafe fn destroy_device(&self, device: &Self::Device);
}

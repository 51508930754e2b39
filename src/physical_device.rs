use ash::vk;

use crate::{
    error::NoDeviceReason,
    queue::{self, QueueFamilyIndices},
};

#[derive(Debug, Clone, Copy)]
pub struct QueueFamily {
    pub index: u32,
    pub properties: vk::QueueFamilyProperties,
}

#[derive(Debug, Clone)]
pub struct PhysicalDevice<H = vk::PhysicalDevice> {
    pub handle: H,
    pub name: String,
    pub properties: vk::PhysicalDeviceProperties,
    pub features: vk::PhysicalDeviceFeatures,
    pub queue_families: Vec<QueueFamily>,
}

impl<H> PhysicalDevice<H> {
    pub fn device_type(&self) -> vk::PhysicalDeviceType {
        self.properties.device_type
    }

    pub fn queue_family_indices(&self) -> QueueFamilyIndices {
        queue::find_queue_families(&self.queue_families)
    }
}

// Only discrete GPUs with geometry shaders qualify. Integrated GPUs are
// rejected even when they would otherwise work.
pub fn is_device_suitable<H>(physical_device: &PhysicalDevice<H>) -> bool {
    physical_device
        .device_type()
        .eq(&vk::PhysicalDeviceType::DISCRETE_GPU)
        && physical_device.features.geometry_shader == vk::TRUE
        && physical_device.queue_family_indices().is_complete()
}

/// Returns the first device in enumeration order that satisfies `predicate`.
/// Devices are not ranked.
pub fn select_physical_device<H>(
    physical_devices: Vec<PhysicalDevice<H>>,
    mut predicate: impl FnMut(&PhysicalDevice<H>) -> bool,
) -> Result<PhysicalDevice<H>, NoDeviceReason> {
    if physical_devices.is_empty() {
        return Err(NoDeviceReason::NoDevices);
    }
    let count = physical_devices.len();
    physical_devices
        .into_iter()
        .find(|physical_device| predicate(physical_device))
        .ok_or(NoDeviceReason::NoneSuitable { count })
}

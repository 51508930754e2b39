#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use ash::{prelude::VkResult, vk};
use vk_bootstrap::{
    backend::{Backend, DeviceInfo, InstanceInfo, MessengerInfo},
    physical_device::{PhysicalDevice, QueueFamily},
    Stage,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    EnumerateLayers,
    EnumerateExtensions,
    CreateInstance {
        extensions: Vec<String>,
        layers: Vec<String>,
        chained_messenger: bool,
    },
    DestroyInstance(u64),
    CreateMessenger(u64),
    DestroyMessenger(u64),
    EnumeratePhysicalDevices,
    CreateDevice {
        physical_device: u64,
        queue_family_index: u32,
        queue_priorities: Vec<f32>,
        layers: Vec<String>,
        default_features: bool,
    },
    GetQueue {
        device: u64,
        queue_family_index: u32,
        queue_index: u32,
    },
    DestroyDevice(u64),
}

#[derive(Default)]
pub struct FakeBackend {
    pub layers: Vec<String>,
    pub devices: Vec<PhysicalDevice<u64>>,
    pub fail: Option<Stage>,
    pub calls: Rc<RefCell<Vec<Call>>>,
    next_id: Cell<u64>,
}

impl FakeBackend {
    pub fn new(devices: Vec<PhysicalDevice<u64>>) -> Self {
        Self {
            layers: vec!["VK_LAYER_KHRONOS_validation".to_owned()],
            devices,
            ..Default::default()
        }
    }

    pub fn failing(mut self, stage: Stage) -> Self {
        self.fail = Some(stage);
        self
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate(&self, stage: Stage) -> VkResult<u64> {
        if self.fail == Some(stage) {
            return Err(vk::Result::ERROR_INITIALIZATION_FAILED);
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        Ok(id)
    }
}

impl Backend for FakeBackend {
    type Instance = u64;
    type Messenger = u64;
    type PhysicalDevice = u64;
    type Device = u64;
    type Queue = u64;

    fn instance_layers(&self) -> VkResult<Vec<String>> {
        self.record(Call::EnumerateLayers);
        Ok(self.layers.clone())
    }

    fn instance_extensions(&self) -> VkResult<Vec<String>> {
        self.record(Call::EnumerateExtensions);
        Ok(vec!["VK_KHR_surface".to_owned(), "VK_EXT_debug_utils".to_owned()])
    }

    fn create_instance(
        &self,
        info: &InstanceInfo<'_>,
        messenger: Option<&MessengerInfo>,
    ) -> VkResult<u64> {
        self.record(Call::CreateInstance {
            extensions: info.extensions.to_vec(),
            layers: info.layers.to_vec(),
            chained_messenger: messenger.is_some(),
        });
        self.allocate(Stage::Instance)
    }

    unsafe fn destroy_instance(&self, instance: &u64) {
        self.record(Call::DestroyInstance(*instance));
    }

    fn create_messenger(&self, instance: &u64, _info: &MessengerInfo) -> VkResult<u64> {
        self.record(Call::CreateMessenger(*instance));
        self.allocate(Stage::DebugMessenger)
    }

    unsafe fn destroy_messenger(&self, _instance: &u64, messenger: &u64) {
        self.record(Call::DestroyMessenger(*messenger));
    }

    fn physical_devices(&self, _instance: &u64) -> VkResult<Vec<PhysicalDevice<u64>>> {
        self.record(Call::EnumeratePhysicalDevices);
        if self.fail == Some(Stage::PhysicalDeviceEnumeration) {
            return Err(vk::Result::ERROR_INITIALIZATION_FAILED);
        }
        Ok(self.devices.clone())
    }

    fn create_device(
        &self,
        _instance: &u64,
        physical_device: u64,
        info: &DeviceInfo<'_>,
    ) -> VkResult<u64> {
        self.record(Call::CreateDevice {
            physical_device,
            queue_family_index: info.queue_family_index,
            queue_priorities: info.queue_priorities.to_vec(),
            layers: info.layers.to_vec(),
            default_features: info.features.geometry_shader == vk::FALSE
                && info.features.sampler_anisotropy == vk::FALSE
                && info.features.tessellation_shader == vk::FALSE,
        });
        self.allocate(Stage::LogicalDevice)
    }

    fn device_queue(&self, device: &u64, queue_family_index: u32, queue_index: u32) -> u64 {
        self.record(Call::GetQueue {
            device: *device,
            queue_family_index,
            queue_index,
        });
        1000 + *device
    }

    unsafe fn destroy_device(&self, device: &u64) {
        self.record(Call::DestroyDevice(*device));
    }
}

pub fn physical_device(
    handle: u64,
    device_type: vk::PhysicalDeviceType,
    queue_flags: &[vk::QueueFlags],
) -> PhysicalDevice<u64> {
    PhysicalDevice {
        handle,
        name: format!("fake gpu {handle}"),
        properties: vk::PhysicalDeviceProperties {
            device_type,
            ..Default::default()
        },
        features: vk::PhysicalDeviceFeatures {
            geometry_shader: vk::TRUE,
            ..Default::default()
        },
        queue_families: queue_flags
            .iter()
            .enumerate()
            .map(|(index, &queue_flags)| QueueFamily {
                index: index as u32,
                properties: vk::QueueFamilyProperties {
                    queue_flags,
                    queue_count: 1,
                    ..Default::default()
                },
            })
            .collect(),
    }
}

pub fn discrete_gpu(handle: u64) -> PhysicalDevice<u64> {
    physical_device(
        handle,
        vk::PhysicalDeviceType::DISCRETE_GPU,
        &[vk::QueueFlags::TRANSFER, vk::QueueFlags::GRAPHICS],
    )
}

pub fn integrated_gpu(handle: u64) -> PhysicalDevice<u64> {
    physical_device(
        handle,
        vk::PhysicalDeviceType::INTEGRATED_GPU,
        &[vk::QueueFlags::GRAPHICS],
    )
}

pub fn window_extensions() -> Vec<String> {
    vec!["VK_KHR_surface".to_owned(), "VK_KHR_xcb_surface".to_owned()]
}

pub fn destroys(calls: &[Call]) -> Vec<Call> {
    calls
        .iter()
        .filter(|call| {
            matches!(
                call,
                Call::DestroyInstance(_) | Call::DestroyMessenger(_) | Call::DestroyDevice(_)
            )
        })
        .cloned()
        .collect()
}

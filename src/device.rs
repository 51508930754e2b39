use std::sync::Arc;

use ash::vk;

use crate::{
    backend::{Backend, DeviceInfo},
    error::{InitError, Stage},
    instance::Instance,
    physical_device::{PhysicalDevice, QueueFamily},
    queue::QueueFamilyIndices,
    vulkan::Vulkan,
};

#[derive(Debug)]
pub struct Queue<H = vk::Queue> {
    pub handle: H,
    pub queue_family: QueueFamily,
}

pub struct Device<B: Backend = Vulkan> {
    pub handle: B::Device,
    pub instance: Arc<Instance<B>>,
    pub physical_device: PhysicalDevice<B::PhysicalDevice>,
    pub queue_family_indices: QueueFamilyIndices,
    queue: Queue<B::Queue>,
}

impl<B: Backend> Device<B> {
    /// Creates one graphics queue at priority 1.0 with no optional features or
    /// device extensions. `layers` repeats the instance layers for older
    /// implementations that still read device layers.
    pub fn new(
        instance: Arc<Instance<B>>,
        physical_device: PhysicalDevice<B::PhysicalDevice>,
        queue_family_indices: QueueFamilyIndices,
        layers: &[String],
    ) -> Result<Self, InitError> {
        let queue_family = queue_family_indices
            .graphics_family
            .and_then(|index| {
                physical_device
                    .queue_families
                    .iter()
                    .copied()
                    .find(|queue_family| queue_family.index == index)
            })
            .ok_or(InitError::Initialization {
                stage: Stage::LogicalDevice,
                result: vk::Result::ERROR_INITIALIZATION_FAILED,
            })?;

        let info = DeviceInfo {
            queue_family_index: queue_family.index,
            queue_priorities: &[1.0],
            features: vk::PhysicalDeviceFeatures::default(),
            layers,
        };
        let handle = instance
            .backend
            .create_device(&instance.handle, physical_device.handle, &info)
            .map_err(InitError::at(Stage::LogicalDevice))?;
        let queue = Queue {
            handle: instance.backend.device_queue(&handle, queue_family.index, 0),
            queue_family,
        };
        log::debug!(
            "created logical device on {} with graphics queue family {}",
            physical_device.name,
            queue_family.index
        );
        Ok(Self {
            handle,
            instance,
            physical_device,
            queue_family_indices,
            queue,
        })
    }

    pub fn queue(&self) -> &Queue<B::Queue> {
        &self.queue
    }
}

impl<B: Backend> Drop for Device<B> {
    fn drop(&mut self) {
        log::debug!("destroying logical device");
        // SAFETY: the queue is only reachable through `&self`.
        unsafe { self.instance.backend.destroy_device(&self.handle) };
    }
}

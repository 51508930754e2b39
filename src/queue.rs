use ash::vk;

use crate::physical_device::QueueFamily;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueFamilyIndices {
    pub graphics_family: Option<u32>,
}

impl QueueFamilyIndices {
    pub fn is_complete(&self) -> bool {
        self.graphics_family.is_some()
    }
}

/// Lowest-index family wins for each capability; scanning stops once all are found.
pub fn find_queue_families(queue_families: &[QueueFamily]) -> QueueFamilyIndices {
    let mut indices = QueueFamilyIndices::default();
    for queue_family in queue_families {
        if queue_family
            .properties
            .queue_flags
            .contains(vk::QueueFlags::GRAPHICS)
        {
            indices.graphics_family = Some(queue_family.index);
        }
        if indices.is_complete() {
            break;
        }
    }
    indices
}

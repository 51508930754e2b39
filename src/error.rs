use std::fmt;

use ash::vk;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LayerEnumeration,
    ExtensionEnumeration,
    Instance,
    DebugMessenger,
    PhysicalDeviceEnumeration,
    LogicalDevice,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::LayerEnumeration => "layer enumeration",
            Stage::ExtensionEnumeration => "extension enumeration",
            Stage::Instance => "instance",
            Stage::DebugMessenger => "debug messenger",
            Stage::PhysicalDeviceEnumeration => "physical device enumeration",
            Stage::LogicalDevice => "logical device",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NoDeviceReason {
    #[error("failed to find GPUs with Vulkan support")]
    NoDevices,
    #[error("failed to find a suitable GPU among {count} enumerated devices")]
    NoneSuitable { count: usize },
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error("validation layers requested, but not available: {missing:?}")]
    ValidationUnavailable { missing: Vec<String> },
    #[error("failed to create {stage}: {result}")]
    Initialization { stage: Stage, result: vk::Result },
    #[error(transparent)]
    NoSuitableDevice(#[from] NoDeviceReason),
}

impl InitError {
    pub fn at(stage: Stage) -> impl FnOnce(vk::Result) -> Self {
        move |result| InitError::Initialization { stage, result }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            InitError::Initialization { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialization_message_names_stage() {
        let error = InitError::at(Stage::Instance)(vk::Result::ERROR_INCOMPATIBLE_DRIVER);
        let message = error.to_string();
        assert!(message.starts_with("failed to create instance"));
        assert_eq!(error.stage(), Some(Stage::Instance));
    }

    #[test]
    fn test_no_device_reasons_are_distinct() {
        let none = InitError::from(NoDeviceReason::NoDevices);
        let unsuitable = InitError::from(NoDeviceReason::NoneSuitable { count: 3 });
        assert_ne!(none.to_string(), unsuitable.to_string());
        assert!(unsuitable.to_string().contains('3'));
        assert_eq!(none.stage(), None);
    }

    #[test]
    fn test_validation_message_lists_missing_layers() {
        let error = InitError::ValidationUnavailable {
            missing: vec!["VK_LAYER_KHRONOS_validation".to_owned()],
        };
        assert!(error.to_string().contains("VK_LAYER_KHRONOS_validation"));
    }
}

use ash::vk;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub validation: bool,
    pub validation_layers: Vec<String>,
    pub application_name: String,
    pub application_version: u32,
    pub engine_name: String,
    pub engine_version: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validation: cfg!(debug_assertions),
            validation_layers: vec!["VK_LAYER_KHRONOS_validation".to_owned()],
            application_name: "Hello Triangle".to_owned(),
            application_version: vk::make_api_version(0, 1, 0, 0),
            engine_name: "No Engine".to_owned(),
            engine_version: vk::make_api_version(0, 1, 0, 0),
        }
    }
}

impl Config {
    /// Layers to enable on the instance and device; empty unless validating.
    pub fn enabled_layers(&self) -> &[String] {
        if self.validation {
            &self.validation_layers
        } else {
            &[]
        }
    }
}

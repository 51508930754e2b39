use std::sync::Arc;

use crate::{
    backend::Backend,
    capabilities,
    config::Config,
    debug::{self, DebugMessenger},
    device::Device,
    error::{InitError, Stage},
    instance::Instance,
    physical_device,
    vulkan::Vulkan,
};

/// Everything needed to talk to one GPU.
///
/// Fields drop in declaration order: the device first, then the debug
/// messenger, then the last reference to the instance. If `new` fails
/// partway, whatever was already created is released the same way.
pub struct Context<B: Backend = Vulkan> {
    pub device: Device<B>,
    pub debug_messenger: Option<DebugMessenger<B>>,
    pub instance: Arc<Instance<B>>,
}

impl<B: Backend> Context<B> {
    pub fn new(backend: B, config: &Config, window_extensions: &[String]) -> Result<Self, InitError> {
        let layers = config.enabled_layers().to_vec();
        if !layers.is_empty() {
            let installed = backend
                .instance_layers()
                .map_err(InitError::at(Stage::LayerEnumeration))?;
            if !capabilities::validation_layers_available(&layers, &installed) {
                return Err(InitError::ValidationUnavailable {
                    missing: capabilities::missing_layers(&layers, &installed),
                });
            }
        }

        let available = backend
            .instance_extensions()
            .map_err(InitError::at(Stage::ExtensionEnumeration))?;
        log::debug!("available instance extensions: {available:?}");

        let extensions = capabilities::required_extensions(window_extensions, config.validation);
        let messenger_info = config.validation.then(debug::messenger_info);

        let instance = Arc::new(Instance::new(
            backend,
            config,
            extensions,
            layers.clone(),
            messenger_info.as_ref(),
        )?);
        let debug_messenger = messenger_info
            .as_ref()
            .map(|info| DebugMessenger::new(&instance, info))
            .transpose()?;

        let physical_device = instance.select_physical_device(physical_device::is_device_suitable)?;
        let queue_family_indices = physical_device.queue_family_indices();
        let device = Device::new(instance.clone(), physical_device, queue_family_indices, &layers)?;

        Ok(Self {
            device,
            debug_messenger,
            instance,
        })
    }
}

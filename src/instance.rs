use ash::vk;

use crate::{
    backend::{Backend, InstanceInfo, MessengerInfo},
    config::Config,
    error::{InitError, Stage},
    physical_device::{self, PhysicalDevice},
    vulkan::Vulkan,
};

pub struct Instance<B: Backend = Vulkan> {
    pub backend: B,
    pub handle: B::Instance,
    pub extensions: Vec<String>,
    pub layers: Vec<String>,
}

impl<B: Backend> Instance<B> {
    /// The caller checks layer availability before calling this.
    pub fn new(
        backend: B,
        config: &Config,
        extensions: Vec<String>,
        layers: Vec<String>,
        messenger: Option<&MessengerInfo>,
    ) -> Result<Self, InitError> {
        let info = InstanceInfo {
            application_name: &config.application_name,
            application_version: config.application_version,
            engine_name: &config.engine_name,
            engine_version: config.engine_version,
            api_version: vk::API_VERSION_1_0,
            extensions: &extensions,
            layers: &layers,
        };
        let handle = backend
            .create_instance(&info, messenger)
            .map_err(InitError::at(Stage::Instance))?;
        log::debug!("created instance with extensions {extensions:?} and layers {layers:?}");
        Ok(Self {
            backend,
            handle,
            extensions,
            layers,
        })
    }

    pub fn physical_devices(&self) -> Result<Vec<PhysicalDevice<B::PhysicalDevice>>, InitError> {
        self.backend
            .physical_devices(&self.handle)
            .map_err(InitError::at(Stage::PhysicalDeviceEnumeration))
    }

    pub fn select_physical_device(
        &self,
        predicate: impl FnMut(&PhysicalDevice<B::PhysicalDevice>) -> bool,
    ) -> Result<PhysicalDevice<B::PhysicalDevice>, InitError> {
        let physical_devices = self.physical_devices()?;
        log::debug!("found {} physical devices", physical_devices.len());
        let physical_device = physical_device::select_physical_device(physical_devices, predicate)?;
        log::info!(
            "selected physical device {} ({:?})",
            physical_device.name,
            physical_device.device_type()
        );
        Ok(physical_device)
    }
}

impl<B: Backend> Drop for Instance<B> {
    fn drop(&mut self) {
        log::debug!("destroying instance");
        // SAFETY: the debug messenger and device both hold an `Arc` to this
        // instance, so they are gone by the time it drops.
        unsafe { self.backend.destroy_instance(&self.handle) };
    }
}

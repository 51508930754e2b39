use std::{
    ffi::{c_char, CStr, CString},
    slice,
};

use ash::{extensions::ext::DebugUtils, prelude::VkResult, vk};

use crate::{
    backend::{Backend, DeviceInfo, InstanceInfo, MessengerInfo},
    physical_device::{PhysicalDevice, QueueFamily},
};

pub struct Vulkan {
    pub entry: ash::Entry,
}

impl Vulkan {
    pub fn load() -> anyhow::Result<Self> {
        let entry = unsafe { ash::Entry::load()? };
        Ok(Self { entry })
    }
}

pub struct DebugUtilsMessenger {
    pub functions: DebugUtils,
    pub handle: vk::DebugUtilsMessengerEXT,
}

fn c_strings(names: &[String]) -> VkResult<Vec<CString>> {
    names
        .iter()
        .map(|name| {
            CString::new(name.as_str()).map_err(|_| vk::Result::ERROR_INITIALIZATION_FAILED)
        })
        .collect()
}

fn pointers(names: &[CString]) -> Vec<*const c_char> {
    names.iter().map(|name| name.as_ptr()).collect()
}

fn to_string(name: &[c_char]) -> String {
    unsafe { CStr::from_ptr(name.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

fn debug_utils_create_info(info: &MessengerInfo) -> vk::DebugUtilsMessengerCreateInfoEXT {
    vk::DebugUtilsMessengerCreateInfoEXT::builder()
        .message_severity(info.severity)
        .message_type(info.message_type)
        .pfn_user_callback(info.callback)
        .build()
}

impl Backend for Vulkan {
    type Instance = ash::Instance;
    type Messenger = DebugUtilsMessenger;
    type PhysicalDevice = vk::PhysicalDevice;
    type Device = ash::Device;
    type Queue = vk::Queue;

    fn instance_layers(&self) -> VkResult<Vec<String>> {
        let layers = self.entry.enumerate_instance_layer_properties()?;
        Ok(layers
            .iter()
            .map(|layer| to_string(&layer.layer_name))
            .collect())
    }

    fn instance_extensions(&self) -> VkResult<Vec<String>> {
        let extensions = self.entry.enumerate_instance_extension_properties(None)?;
        Ok(extensions
            .iter()
            .map(|extension| to_string(&extension.extension_name))
            .collect())
    }

    fn create_instance(
        &self,
        info: &InstanceInfo<'_>,
        messenger: Option<&MessengerInfo>,
    ) -> VkResult<Self::Instance> {
        let application_name = CString::new(info.application_name)
            .map_err(|_| vk::Result::ERROR_INITIALIZATION_FAILED)?;
        let engine_name =
            CString::new(info.engine_name).map_err(|_| vk::Result::ERROR_INITIALIZATION_FAILED)?;
        let extension_names = c_strings(info.extensions)?;
        let layer_names = c_strings(info.layers)?;
        let enabled_extension_names = pointers(&extension_names);
        let enabled_layer_names = pointers(&layer_names);

        let application_info = vk::ApplicationInfo::builder()
            .application_name(&application_name)
            .application_version(info.application_version)
            .engine_name(&engine_name)
            .engine_version(info.engine_version)
            .api_version(info.api_version);

        let mut debug_create_info = messenger.map(debug_utils_create_info);
        let mut create_info = vk::InstanceCreateInfo::builder()
            .application_info(&application_info)
            .enabled_layer_names(&enabled_layer_names)
            .enabled_extension_names(&enabled_extension_names);
        if let Some(debug_create_info) = debug_create_info.as_mut() {
            create_info = create_info.push_next(debug_create_info);
        }

        unsafe { self.entry.create_instance(&create_info, None) }
    }

    unsafe fn destroy_instance(&self, instance: &Self::Instance) {
        instance.destroy_instance(None);
    }

    fn create_messenger(
        &self,
        instance: &Self::Instance,
        info: &MessengerInfo,
    ) -> VkResult<Self::Messenger> {
        let functions = DebugUtils::new(&self.entry, instance);
        let handle = unsafe {
            functions.create_debug_utils_messenger(&debug_utils_create_info(info), None)?
        };
        Ok(DebugUtilsMessenger { functions, handle })
    }

    unsafe fn destroy_messenger(&self, _instance: &Self::Instance, messenger: &Self::Messenger) {
        messenger
            .functions
            .destroy_debug_utils_messenger(messenger.handle, None);
    }

    fn physical_devices(
        &self,
        instance: &Self::Instance,
    ) -> VkResult<Vec<PhysicalDevice<Self::PhysicalDevice>>> {
        let physical_devices = unsafe { instance.enumerate_physical_devices()? };
        let physical_devices = physical_devices
            .iter()
            .map(|&physical_device| {
                let properties = unsafe { instance.get_physical_device_properties(physical_device) };
                let features = unsafe { instance.get_physical_device_features(physical_device) };
                let queue_families = unsafe {
                    instance.get_physical_device_queue_family_properties(physical_device)
                }
                .iter()
                .enumerate()
                .map(|(index, &properties)| QueueFamily {
                    index: index as u32,
                    properties,
                })
                .collect();
                PhysicalDevice {
                    handle: physical_device,
                    name: to_string(&properties.device_name),
                    properties,
                    features,
                    queue_families,
                }
            })
            .collect();
        Ok(physical_devices)
    }

    fn create_device(
        &self,
        instance: &Self::Instance,
        physical_device: Self::PhysicalDevice,
        info: &DeviceInfo<'_>,
    ) -> VkResult<Self::Device> {
        let queue_create_info = vk::DeviceQueueCreateInfo::builder()
            .queue_family_index(info.queue_family_index)
            .queue_priorities(info.queue_priorities)
            .build();
        let layer_names = c_strings(info.layers)?;
        let enabled_layer_names = pointers(&layer_names);
        unsafe {
            instance.create_device(
                physical_device,
                &vk::DeviceCreateInfo::builder()
                    .queue_create_infos(slice::from_ref(&queue_create_info))
                    .enabled_layer_names(&enabled_layer_names)
                    .enabled_features(&info.features),
                None,
            )
        }
    }

    fn device_queue(
        &self,
        device: &Self::Device,
        queue_family_index: u32,
        queue_index: u32,
    ) -> Self::Queue {
        unsafe { device.get_device_queue(queue_family_index, queue_index) }
    }

    unsafe fn destroy_device(&self, device: &Self::Device) {
        device.destroy_device(None);
    }
}

//! Validation message channel.
//!
//! Messages are forwarded to the `log` facade under the `vulkan` target.
//! Verbose messages are never requested from the driver, and are dropped by
//! [`Severity::classify`] if they arrive anyway.

use std::{borrow::Cow, ffi::CStr, sync::Arc};

use ash::vk;

use crate::{
    backend::{Backend, MessengerInfo},
    error::{InitError, Stage},
    instance::Instance,
    vulkan::Vulkan,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn classify(flags: vk::DebugUtilsMessageSeverityFlagsEXT) -> Option<Self> {
        if flags.contains(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR) {
            Some(Severity::Error)
        } else if flags.contains(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING) {
            Some(Severity::Warning)
        } else if flags.contains(vk::DebugUtilsMessageSeverityFlagsEXT::INFO) {
            Some(Severity::Info)
        } else {
            None
        }
    }
}

impl From<Severity> for log::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error => log::Level::Error,
        }
    }
}

pub fn messenger_info() -> MessengerInfo {
    MessengerInfo {
        severity: vk::DebugUtilsMessageSeverityFlagsEXT::INFO
            | vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
            | vk::DebugUtilsMessageSeverityFlagsEXT::ERROR,
        message_type: vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
            | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
            | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
        callback: Some(vulkan_debug_callback),
    }
}

pub fn log_message(
    severity: Severity,
    message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    message: &str,
) {
    log::log!(target: "vulkan", log::Level::from(severity), "[{:?}] {}", message_type, message);
}

unsafe extern "system" fn vulkan_debug_callback(
    message_severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    p_callback_data: *const vk::DebugUtilsMessengerCallbackDataEXT,
    _p_user_data: *mut std::ffi::c_void,
) -> vk::Bool32 {
    if let Some(severity) = Severity::classify(message_severity) {
        let message = if p_callback_data.is_null() || (*p_callback_data).p_message.is_null() {
            Cow::Borrowed("")
        } else {
            CStr::from_ptr((*p_callback_data).p_message).to_string_lossy()
        };
        log_message(severity, message_type, &message);
    }
    // Never abort the call that triggered the message.
    vk::FALSE
}

pub struct DebugMessenger<B: Backend = Vulkan> {
    pub instance: Arc<Instance<B>>,
    pub handle: B::Messenger,
}

impl<B: Backend> DebugMessenger<B> {
    pub fn new(instance: &Arc<Instance<B>>, info: &MessengerInfo) -> Result<Self, InitError> {
        let handle = instance
            .backend
            .create_messenger(&instance.handle, info)
            .map_err(InitError::at(Stage::DebugMessenger))?;
        log::debug!("created debug messenger");
        Ok(Self {
            instance: instance.clone(),
            handle,
        })
    }
}

impl<B: Backend> Drop for DebugMessenger<B> {
    fn drop(&mut self) {
        log::debug!("destroying debug messenger");
        // SAFETY: created from `self.instance`, which this messenger keeps alive.
        unsafe {
            self.instance
                .backend
                .destroy_messenger(&self.instance.handle, &self.handle)
        };
    }
}

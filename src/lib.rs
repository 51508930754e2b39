pub mod backend;
pub mod capabilities;
pub mod config;
pub mod context;
pub mod debug;
pub mod device;
pub mod error;
pub mod instance;
pub mod physical_device;
pub mod queue;
pub mod vulkan;

pub use config::Config;
pub use context::Context;
pub use error::{InitError, NoDeviceReason, Stage};
pub use vulkan::Vulkan;

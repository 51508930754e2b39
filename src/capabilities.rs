//! Host capability queries: which instance extensions the window system
//! needs, and whether requested validation layers are installed.

use std::ffi::CStr;

use ash::extensions::{ext, khr};
use raw_window_handle::RawDisplayHandle;

fn name(name: &CStr) -> String {
    name.to_string_lossy().into_owned()
}

pub fn debug_utils_extension() -> String {
    name(ext::DebugUtils::name())
}

/// Surface extensions required to present to windows on `display`.
pub fn window_extensions(display: RawDisplayHandle) -> anyhow::Result<Vec<String>> {
    let platform = match display {
        RawDisplayHandle::Windows(_) => khr::Win32Surface::name(),
        RawDisplayHandle::Xlib(_) => khr::XlibSurface::name(),
        RawDisplayHandle::Xcb(_) => khr::XcbSurface::name(),
        RawDisplayHandle::Wayland(_) => khr::WaylandSurface::name(),
        RawDisplayHandle::Android(_) => khr::AndroidSurface::name(),
        RawDisplayHandle::AppKit(_) | RawDisplayHandle::UiKit(_) => ext::MetalSurface::name(),
        other => anyhow::bail!("unsupported display handle: {other:?}"),
    };
    Ok(vec![name(khr::Surface::name()), name(platform)])
}

pub fn required_extensions(window_extensions: &[String], validation: bool) -> Vec<String> {
    let mut extensions = window_extensions.to_vec();
    if validation {
        extensions.push(debug_utils_extension());
    }
    extensions
}

pub fn missing_layers(requested: &[String], installed: &[String]) -> Vec<String> {
    requested
        .iter()
        .filter(|layer| !installed.contains(layer))
        .cloned()
        .collect()
}

pub fn validation_layers_available(requested: &[String], installed: &[String]) -> bool {
    requested.iter().all(|layer| installed.contains(layer))
}

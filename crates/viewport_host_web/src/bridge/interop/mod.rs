//! Shared DOM interop for the browser bridge.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the adapter modules.

use std::rc::Rc;

use viewport_host::HostEnvelope;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub use imp::WindowListener;

pub fn window_inner_width() -> Result<f64, String> {
    imp::window_inner_width()
}

pub fn root_client_width() -> Result<f64, String> {
    imp::root_client_width()
}

pub fn has_parent_frame() -> bool {
    imp::has_parent_frame()
}

pub fn post_to_parent(envelope: &HostEnvelope) -> Result<(), String> {
    imp::post_to_parent(envelope)
}

pub fn add_window_listener(
    event: &'static str,
    callback: Rc<dyn Fn()>,
) -> Result<WindowListener, String> {
    imp::add_window_listener(event, callback)
}

pub fn console_warn(message: &str) {
    imp::console_warn(message)
}

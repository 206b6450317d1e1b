//! Browser capability bridge for the `viewport_host_web` adapters.
//!
//! Adapters never touch `web_sys` directly; they go through these functions so the native build
//! (tests, tooling) links against the `non_wasm` fallbacks instead.

mod interop;

use std::rc::Rc;

use viewport_host::HostEnvelope;

pub use interop::WindowListener;

pub fn window_inner_width() -> Result<f64, String> {
    interop::window_inner_width()
}

pub fn root_client_width() -> Result<f64, String> {
    interop::root_client_width()
}

pub fn has_parent_frame() -> bool {
    interop::has_parent_frame()
}

pub fn post_to_parent(envelope: &HostEnvelope) -> Result<(), String> {
    interop::post_to_parent(envelope)
}

pub fn add_window_listener(
    event: &'static str,
    callback: Rc<dyn Fn()>,
) -> Result<WindowListener, String> {
    interop::add_window_listener(event, callback)
}

/// Writes a warning to the browser console (stderr on native builds).
pub fn console_warn(message: &str) {
    interop::console_warn(message)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use viewport_host::{HostEnvelope, HostMessage};

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn window_public_api_non_wasm_parity() {
        let expected = "Browser window APIs are only available when compiled for wasm32".to_string();

        assert_eq!(
            window_inner_width().expect_err("inner width should fail"),
            expected
        );
        assert_eq!(
            root_client_width().expect_err("root width should fail"),
            expected
        );
        assert!(!has_parent_frame());
        assert_eq!(
            post_to_parent(&HostEnvelope::new(HostMessage::component_ready()))
                .expect_err("post should fail"),
            expected
        );
        assert_eq!(
            add_window_listener("resize", Rc::new(|| {})).expect_err("listen should fail"),
            expected
        );
    }
}

use super::*;

fn unsupported() -> String {
    "Browser window APIs are only available when compiled for wasm32".to_string()
}

#[derive(Debug)]
pub struct WindowListener;

impl WindowListener {
    pub fn remove(self) {}
}

pub fn window_inner_width() -> Result<f64, String> {
    Err(unsupported())
}

pub fn root_client_width() -> Result<f64, String> {
    Err(unsupported())
}

pub fn has_parent_frame() -> bool {
    false
}

pub fn post_to_parent(_envelope: &HostEnvelope) -> Result<(), String> {
    Err(unsupported())
}

pub fn add_window_listener(
    _event: &'static str,
    _callback: Rc<dyn Fn()>,
) -> Result<WindowListener, String> {
    Err(unsupported())
}

pub fn console_warn(message: &str) {
    eprintln!("warning: {message}");
}

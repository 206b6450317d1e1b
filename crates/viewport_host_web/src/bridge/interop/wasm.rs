use serde::Serialize;
use wasm_bindgen::{closure::Closure, JsCast};

use super::*;

pub struct WindowListener {
    window: web_sys::Window,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    pub fn remove(self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

impl std::fmt::Debug for WindowListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowListener")
            .field("event", &self.event)
            .finish()
    }
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

pub fn window_inner_width() -> Result<f64, String> {
    window()?
        .inner_width()
        .map_err(|err| format!("innerWidth query failed: {err:?}"))?
        .as_f64()
        .ok_or_else(|| "innerWidth is not a number".to_string())
}

pub fn root_client_width() -> Result<f64, String> {
    let document = window()?
        .document()
        .ok_or_else(|| "document unavailable".to_string())?;
    let root = document
        .document_element()
        .ok_or_else(|| "document root element unavailable".to_string())?;
    Ok(f64::from(root.client_width()))
}

pub fn has_parent_frame() -> bool {
    let Ok(window) = window() else {
        return false;
    };
    match window.parent() {
        Ok(Some(parent)) => !js_sys::Object::is(&parent, &window),
        _ => false,
    }
}

pub fn post_to_parent(envelope: &HostEnvelope) -> Result<(), String> {
    let parent = window()?
        .parent()
        .map_err(|err| format!("parent frame query failed: {err:?}"))?
        .ok_or_else(|| "parent frame unavailable".to_string())?;
    let payload = envelope
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| format!("host envelope encode failed: {err}"))?;
    parent
        .post_message(&payload, "*")
        .map_err(|err| format!("postMessage failed: {err:?}"))
}

pub fn add_window_listener(
    event: &'static str,
    callback: Rc<dyn Fn()>,
) -> Result<WindowListener, String> {
    let window = window()?;
    let closure = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| callback()));
    window
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| format!("addEventListener(`{event}`) failed: {err:?}"))?;
    Ok(WindowListener {
        window,
        event,
        closure,
    })
}

pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(message));
}

//! Window geometry adapter.

use viewport_host::{
    ViewportEnvironment, ViewportError, INNER_WIDTH_SOURCE, ROOT_CLIENT_WIDTH_SOURCE,
};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Reads viewport geometry from the current browsing context.
pub struct WebViewportEnvironment;

impl ViewportEnvironment for WebViewportEnvironment {
    fn inner_width(&self) -> Result<f64, ViewportError> {
        bridge::window_inner_width().map_err(|_| ViewportError::EnvironmentUnavailable {
            source_name: INNER_WIDTH_SOURCE,
        })
    }

    fn root_client_width(&self) -> Result<f64, ViewportError> {
        bridge::root_client_width().map_err(|_| ViewportError::EnvironmentUnavailable {
            source_name: ROOT_CLIENT_WIDTH_SOURCE,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use viewport_host::{measure_viewport_width, ViewportWidth};

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_environment_measures_zero() {
        let env = WebViewportEnvironment;
        assert!(env.inner_width().is_err());
        assert!(env.root_client_width().is_err());
        assert_eq!(measure_viewport_width(&env), ViewportWidth::ZERO);
    }
}

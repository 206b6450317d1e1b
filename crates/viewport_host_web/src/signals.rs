//! Window event listener adapter.

use viewport_host::{SignalCallback, SignalSource, Subscription, ViewportError, ViewportSignal};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Registers `resize` and `orientationchange` listeners on the current window.
pub struct WindowSignalSource;

impl SignalSource for WindowSignalSource {
    fn subscribe(
        &self,
        signal: ViewportSignal,
        callback: SignalCallback,
    ) -> Result<Subscription, ViewportError> {
        let listener = bridge::add_window_listener(signal.event_name(), callback).map_err(
            |reason| ViewportError::SubscribeFailed {
                signal: signal.event_name(),
                reason,
            },
        )?;
        Ok(Subscription::new(signal, move || listener.remove()))
    }
}

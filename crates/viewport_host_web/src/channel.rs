//! Host channel that posts to the embedding page.

use std::cell::Cell;
use std::rc::Rc;

use viewport_host::{
    HostCall, HostChannel, HostEnvelope, HostMessage, ViewportError, ViewportWidth,
};

use crate::bridge;

#[derive(Debug, Clone, Default)]
/// Posts [`HostEnvelope`]s to `window.parent`.
///
/// The channel is established only when the widget runs inside a parent frame. Outside one,
/// every call is dropped. Dropped calls are counted and, in debug builds, written to the console;
/// the host never sees them.
pub struct ParentFrameChannel {
    established: bool,
    dropped: Rc<Cell<usize>>,
}

impl ParentFrameChannel {
    /// Detects the parent frame and sends the ready handshake when one exists.
    pub fn connect() -> Self {
        let channel = Self {
            established: bridge::has_parent_frame(),
            dropped: Rc::default(),
        };
        if channel.established {
            if let Err(err) =
                bridge::post_to_parent(&HostEnvelope::new(HostMessage::component_ready()))
            {
                report_dropped("componentReady handshake", &ViewportError::Dispatch(err));
            }
        }
        channel
    }

    /// Returns whether a parent frame was found.
    pub fn is_established(&self) -> bool {
        self.established
    }

    /// Number of [`HostChannel`] calls dropped so far, shared across clones.
    pub fn dropped_calls(&self) -> usize {
        self.dropped.get()
    }

    /// Posts one call and reports the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::ChannelUnready`] outside a parent frame, or
    /// [`ViewportError::Dispatch`] when encoding or `postMessage` fails.
    pub fn post(&self, call: HostCall) -> Result<(), ViewportError> {
        if !self.established {
            return Err(ViewportError::ChannelUnready);
        }
        bridge::post_to_parent(&HostEnvelope::from(call)).map_err(ViewportError::Dispatch)
    }

    fn deliver(&self, call: HostCall) {
        if let Err(err) = self.post(call) {
            self.dropped.set(self.dropped.get() + 1);
            report_dropped(&format!("{call:?}"), &err);
        }
    }
}

impl HostChannel for ParentFrameChannel {
    fn announce_height(&self, px: u32) {
        self.deliver(HostCall::AnnounceHeight(px));
    }

    fn set_value(&self, width: ViewportWidth) {
        self.deliver(HostCall::SetValue(width));
    }
}

fn dropped_call_message(what: &str, err: &ViewportError) -> String {
    format!("viewport host call dropped ({what}): {err}")
}

fn report_dropped(what: &str, err: &ViewportError) {
    if cfg!(debug_assertions) {
        bridge::console_warn(&dropped_call_message(what, err));
    }
}

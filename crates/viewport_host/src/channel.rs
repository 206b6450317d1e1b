//! Host-channel contract and in-memory adapters.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::environment::ViewportWidth;

/// One call issued through a [`HostChannel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    /// Frame height announcement, in pixels.
    AnnounceHeight(u32),
    /// Value forward carrying a measured viewport width.
    SetValue(ViewportWidth),
}

/// Fire-and-forget channel from the embedded widget to its host page.
///
/// Implementations drop calls while the channel is not established and never report failure
/// back to the caller.
pub trait HostChannel {
    /// Tells the host how many vertical pixels the widget frame should occupy.
    fn announce_height(&self, px: u32);

    /// Publishes the widget's current value to the host.
    fn set_value(&self, width: ViewportWidth);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op host channel for unsupported targets and standalone development.
pub struct NoopHostChannel;

impl HostChannel for NoopHostChannel {
    fn announce_height(&self, _px: u32) {}

    fn set_value(&self, _width: ViewportWidth) {}
}

#[derive(Debug, Clone)]
/// In-memory channel that records every delivered call in order.
///
/// Clones share the same log, so a test can hand one clone to the reporter and inspect the other.
/// A channel marked unready drops calls the way an unattached frame would.
pub struct RecordingHostChannel {
    calls: Rc<RefCell<Vec<HostCall>>>,
    ready: Rc<Cell<bool>>,
}

impl Default for RecordingHostChannel {
    fn default() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            ready: Rc::new(Cell::new(true)),
        }
    }
}

impl RecordingHostChannel {
    /// Creates a channel that starts out unestablished.
    pub fn unready() -> Self {
        let channel = Self::default();
        channel.set_ready(false);
        channel
    }

    /// Marks the channel as established or not.
    pub fn set_ready(&self, ready: bool) {
        self.ready.set(ready);
    }

    /// Returns a snapshot of delivered calls.
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    /// Returns the widths delivered through `set_value`, in order.
    pub fn values(&self) -> Vec<u32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::SetValue(width) => Some(width.px()),
                HostCall::AnnounceHeight(_) => None,
            })
            .collect()
    }

    fn record(&self, call: HostCall) {
        if self.ready.get() {
            self.calls.borrow_mut().push(call);
        }
    }
}

impl HostChannel for RecordingHostChannel {
    fn announce_height(&self, px: u32) {
        self.record(HostCall::AnnounceHeight(px));
    }

    fn set_value(&self, width: ViewportWidth) {
        self.record(HostCall::SetValue(width));
    }
}

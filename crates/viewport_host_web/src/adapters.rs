use std::rc::Rc;

use viewport_host::{HostChannel, NoopHostChannel, ReporterServices, ViewportWidth};

use crate::{ParentFrameChannel, WebViewportEnvironment, WindowSignalSource};

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `viewport_host_web` adapters.
pub enum HostStrategy {
    /// Widget embedded in the dashboard page; values go to `window.parent`.
    Browser,
    /// Standalone development; geometry is still read but nothing is posted.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Adapter enum that erases the concrete channel behind [`HostChannel`].
#[derive(Debug, Clone)]
pub enum HostChannelAdapter {
    /// Posts to the parent frame.
    Browser(ParentFrameChannel),
    /// Drops every call.
    Stub(NoopHostChannel),
}

impl HostChannel for HostChannelAdapter {
    fn announce_height(&self, px: u32) {
        match self {
            Self::Browser(channel) => channel.announce_height(px),
            Self::Stub(channel) => channel.announce_height(px),
        }
    }

    fn set_value(&self, width: ViewportWidth) {
        match self {
            Self::Browser(channel) => channel.set_value(width),
            Self::Stub(channel) => channel.set_value(width),
        }
    }
}

/// Builds the host channel for the selected strategy.
///
/// The browser strategy performs the ready handshake as part of construction.
pub fn host_channel() -> HostChannelAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => HostChannelAdapter::Browser(ParentFrameChannel::connect()),
        HostStrategy::Stub => HostChannelAdapter::Stub(NoopHostChannel),
    }
}

/// Builds the full service bundle the widget mounts with.
pub fn build_reporter_services() -> ReporterServices {
    ReporterServices::new(
        Rc::new(host_channel()),
        Rc::new(WebViewportEnvironment),
        Rc::new(WindowSignalSource),
    )
}

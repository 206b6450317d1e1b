//! Typed contracts and the headless reporter state machine for the viewport widget.
//!
//! This crate is the platform-neutral boundary between the embedded widget and its host page. It
//! exposes the host-channel, environment, and window-signal service traits, the width policy, the
//! host-frame wire envelope, and the [`ViewportReporter`] lifecycle. Concrete browser adapters live
//! in `viewport_host_web`; the Leptos mount point lives in `viewport_widget`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod channel;
pub mod environment;
pub mod error;
pub mod protocol;
pub mod reporter;
pub mod services;
pub mod signal;

pub use channel::{HostCall, HostChannel, NoopHostChannel, RecordingHostChannel};
pub use environment::{
    measure_viewport_width, StaticEnvironment, ViewportEnvironment, ViewportWidth,
    INNER_WIDTH_SOURCE, ROOT_CLIENT_WIDTH_SOURCE,
};
pub use error::ViewportError;
pub use protocol::{HostEnvelope, HostMessage, ValueDataType, COMPONENT_API_VERSION};
pub use reporter::{MountOutcome, ReporterPhase, ViewportReporter, WIDGET_FRAME_HEIGHT_PX};
pub use services::ReporterServices;
pub use signal::{ManualSignalSource, SignalCallback, SignalSource, Subscription, ViewportSignal};

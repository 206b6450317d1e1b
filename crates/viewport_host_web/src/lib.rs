//! Browser (`wasm32`) implementations of [`viewport_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for the viewport widget: the parent-frame
//! host channel, window geometry reads, and window event listeners.
//!
//! All DOM access goes through `bridge`, which splits into `wasm` and `non_wasm` interop so the
//! adapters also build natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the service bundle factory.
pub mod adapters;
mod bridge;
pub mod channel;
pub mod environment;
pub mod signals;

pub use adapters::{
    build_reporter_services, host_channel, host_strategy_name, selected_host_strategy,
    HostChannelAdapter, HostStrategy,
};
pub use channel::ParentFrameChannel;
pub use environment::WebViewportEnvironment;
pub use signals::WindowSignalSource;

//! Error taxonomy shared by the reporter and its host adapters.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures observed at the widget's host seams.
///
/// None of these reach the host page. The reporter maps each one onto its fallback policy and
/// hands the rest to the mounting layer for logging.
pub enum ViewportError {
    /// A window or document geometry source is absent or threw when queried.
    #[error("viewport source unavailable: {source_name}")]
    EnvironmentUnavailable {
        /// Stable label of the queried source (for example `window.innerWidth`).
        source_name: &'static str,
    },
    /// The host channel has not been established for this frame.
    #[error("host channel not established")]
    ChannelUnready,
    /// Registering a window notification listener failed.
    #[error("failed to subscribe to `{signal}`: {reason}")]
    SubscribeFailed {
        /// DOM event name of the signal.
        signal: &'static str,
        /// Host-provided failure detail.
        reason: String,
    },
    /// A host message could not be encoded or posted.
    #[error("host message dispatch failed: {0}")]
    Dispatch(String),
    /// `mount` was called on an instance that is already mounted or torn down.
    #[error("reporter cannot mount from the `{phase}` phase")]
    InvalidLifecycle {
        /// Phase the instance was in when `mount` was attempted.
        phase: &'static str,
    },
}

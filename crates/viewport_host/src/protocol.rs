//! Wire envelope posted from the widget frame to the dashboard page.
//!
//! The dashboard's component bridge listens for `message` events on the host window and only
//! accepts objects flagged with `isStreamlitMessage`. Each envelope carries a `type` tag naming
//! the operation plus its flattened payload.

use serde::{Deserialize, Serialize};

use crate::{channel::HostCall, environment::ViewportWidth};

/// Component bridge API version announced in the ready handshake.
pub const COMPONENT_API_VERSION: u32 = 1;

/// Encoding hint attached to component values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueDataType {
    /// The value is plain JSON.
    #[serde(rename = "json")]
    Json,
}

/// Operations understood by the host's component bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostMessage {
    /// Handshake sent once when the channel opens.
    #[serde(rename = "streamlit:componentReady", rename_all = "camelCase")]
    ComponentReady {
        /// Bridge API version.
        api_version: u32,
    },
    /// Frame height announcement.
    #[serde(rename = "streamlit:setFrameHeight")]
    SetFrameHeight {
        /// Height in pixels.
        height: u32,
    },
    /// Component value update.
    #[serde(rename = "streamlit:setComponentValue", rename_all = "camelCase")]
    SetComponentValue {
        /// Reported viewport width.
        value: ViewportWidth,
        /// Encoding hint for `value`.
        data_type: ValueDataType,
    },
}

impl HostMessage {
    /// The ready handshake for the current API version.
    pub const fn component_ready() -> Self {
        Self::ComponentReady {
            api_version: COMPONENT_API_VERSION,
        }
    }
}

impl From<HostCall> for HostMessage {
    fn from(call: HostCall) -> Self {
        match call {
            HostCall::AnnounceHeight(height) => Self::SetFrameHeight { height },
            HostCall::SetValue(value) => Self::SetComponentValue {
                value,
                data_type: ValueDataType::Json,
            },
        }
    }
}

/// Posted object: the bridge marker plus one [`HostMessage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostEnvelope {
    /// Marker the host bridge filters on; always `true` for outbound messages.
    pub is_streamlit_message: bool,
    /// Tagged operation payload.
    #[serde(flatten)]
    pub message: HostMessage,
}

impl HostEnvelope {
    /// Wraps `message` for posting.
    pub fn new(message: HostMessage) -> Self {
        Self {
            is_streamlit_message: true,
            message,
        }
    }
}

impl From<HostCall> for HostEnvelope {
    fn from(call: HostCall) -> Self {
        Self::new(call.into())
    }
}

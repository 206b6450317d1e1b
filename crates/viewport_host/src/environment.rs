//! Viewport geometry sources and the width selection policy.

use std::{cell::Cell, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::error::ViewportError;

/// Diagnostic label for the top-level window's inner width.
pub const INNER_WIDTH_SOURCE: &str = "window.innerWidth";
/// Diagnostic label for the document root element's client width.
pub const ROOT_CLIENT_WIDTH_SOURCE: &str = "document.documentElement.clientWidth";

/// Viewport width in device-independent pixels.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ViewportWidth(u32);

impl ViewportWidth {
    /// Width reported when no geometry source is usable.
    pub const ZERO: Self = Self(0);

    /// Wraps a pixel count.
    pub const fn new(px: u32) -> Self {
        Self(px)
    }

    /// Returns the pixel count.
    pub const fn px(self) -> u32 {
        self.0
    }

    /// Converts a raw CSS pixel reading into a usable width.
    ///
    /// Zero, negative, and non-finite readings yield `None` so the caller moves on to the next
    /// source.
    pub fn from_css_px(raw: f64) -> Option<Self> {
        if !raw.is_finite() || raw < 1.0 {
            return None;
        }
        Some(Self(raw.round().min(f64::from(u32::MAX)) as u32))
    }
}

impl std::fmt::Display for ViewportWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Read access to the embedding window's geometry.
pub trait ViewportEnvironment {
    /// Inner width of the top-level window.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::EnvironmentUnavailable`] when the window is absent or the query
    /// throws.
    fn inner_width(&self) -> Result<f64, ViewportError>;

    /// Client width of the document root element.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::EnvironmentUnavailable`] when the document or its root element is
    /// absent.
    fn root_client_width(&self) -> Result<f64, ViewportError>;
}

/// Measures the current viewport width.
///
/// Sources are consulted in a fixed order: the window's inner width, then the document root's
/// client width, then `0`. The result is a total function of the environment state.
pub fn measure_viewport_width(environment: &dyn ViewportEnvironment) -> ViewportWidth {
    environment
        .inner_width()
        .ok()
        .and_then(ViewportWidth::from_css_px)
        .or_else(|| {
            environment
                .root_client_width()
                .ok()
                .and_then(ViewportWidth::from_css_px)
        })
        .unwrap_or(ViewportWidth::ZERO)
}

#[derive(Debug, Clone, Default)]
/// Settable in-memory environment used by tests and non-browser targets.
///
/// `None` models a source that is absent. Clones share state, so a test can resize the
/// environment after handing a clone to the reporter.
pub struct StaticEnvironment {
    inner_width: Rc<Cell<Option<f64>>>,
    root_client_width: Rc<Cell<Option<f64>>>,
}

impl StaticEnvironment {
    /// Creates an environment with the given source readings.
    pub fn new(inner_width: Option<f64>, root_client_width: Option<f64>) -> Self {
        Self {
            inner_width: Rc::new(Cell::new(inner_width)),
            root_client_width: Rc::new(Cell::new(root_client_width)),
        }
    }

    /// Creates an environment whose window reports `px` for both sources.
    pub fn with_width(px: u32) -> Self {
        Self::new(Some(f64::from(px)), Some(f64::from(px)))
    }

    /// Replaces the window inner-width reading.
    pub fn set_inner_width(&self, value: Option<f64>) {
        self.inner_width.set(value);
    }

    /// Replaces the document root client-width reading.
    pub fn set_root_client_width(&self, value: Option<f64>) {
        self.root_client_width.set(value);
    }

    /// Simulates a window resize that both sources observe.
    pub fn resize_to(&self, px: u32) {
        self.set_inner_width(Some(f64::from(px)));
        self.set_root_client_width(Some(f64::from(px)));
    }
}

impl ViewportEnvironment for StaticEnvironment {
    fn inner_width(&self) -> Result<f64, ViewportError> {
        self.inner_width
            .get()
            .ok_or(ViewportError::EnvironmentUnavailable {
                source_name: INNER_WIDTH_SOURCE,
            })
    }

    fn root_client_width(&self) -> Result<f64, ViewportError> {
        self.root_client_width
            .get()
            .ok_or(ViewportError::EnvironmentUnavailable {
                source_name: ROOT_CLIENT_WIDTH_SOURCE,
            })
    }
}

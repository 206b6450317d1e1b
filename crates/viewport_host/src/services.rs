//! Host service bundle handed to the reporter at mount time.

use std::rc::Rc;

use crate::{
    channel::NoopHostChannel, environment::StaticEnvironment, signal::ManualSignalSource,
    HostChannel, SignalSource, ViewportEnvironment,
};

/// Concrete host capabilities for one widget instance.
#[derive(Clone)]
pub struct ReporterServices {
    /// Channel to the embedding page.
    pub channel: Rc<dyn HostChannel>,
    /// Window geometry reader.
    pub environment: Rc<dyn ViewportEnvironment>,
    /// Resize and orientation notifications.
    pub signals: Rc<dyn SignalSource>,
}

impl ReporterServices {
    /// Bundles explicit adapters.
    pub fn new(
        channel: Rc<dyn HostChannel>,
        environment: Rc<dyn ViewportEnvironment>,
        signals: Rc<dyn SignalSource>,
    ) -> Self {
        Self {
            channel,
            environment,
            signals,
        }
    }

    /// Services that observe nothing and deliver nothing.
    pub fn detached() -> Self {
        Self::new(
            Rc::new(NoopHostChannel),
            Rc::new(StaticEnvironment::default()),
            Rc::new(ManualSignalSource::default()),
        )
    }
}

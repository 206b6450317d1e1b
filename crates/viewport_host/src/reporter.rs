//! Headless viewport reporter lifecycle.
//!
//! A reporter announces a zero frame height, forwards the current width, and then forwards a
//! fresh width on every resize or orientation change until it is unmounted. Subscriptions are
//! installed only after the initial announce-and-forward pair so no event-sourced value can
//! precede it. Unmount is terminal and idempotent, and dropping a mounted reporter unmounts it.

use std::{
    cell::Cell,
    rc::{Rc, Weak},
};

use crate::{
    environment::measure_viewport_width,
    error::ViewportError,
    services::ReporterServices,
    signal::{SignalCallback, SignalSource, Subscription, ViewportSignal},
    HostChannel, ViewportEnvironment,
};

/// Frame height the widget requests from its host.
pub const WIDGET_FRAME_HEIGHT_PX: u32 = 0;

/// Lifecycle phase of one reporter instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterPhase {
    /// Constructed but never mounted.
    Idle,
    /// Announced, forwarding, and subscribed.
    Mounted,
    /// Torn down; terminal for this instance.
    Unmounted,
}

impl ReporterPhase {
    /// Stable label for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Mounted => "mounted",
            Self::Unmounted => "unmounted",
        }
    }
}

/// Subscription failures collected while mounting.
///
/// A failed subscription does not abort the mount; the reporter keeps whatever it could install
/// and still tears that down on unmount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountOutcome {
    failures: Vec<ViewportError>,
}

impl MountOutcome {
    /// Errors from subscriptions that could not be installed.
    pub fn failures(&self) -> &[ViewportError] {
        &self.failures
    }

    /// Returns whether every subscription was installed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

struct ReporterCore {
    channel: Rc<dyn HostChannel>,
    environment: Rc<dyn ViewportEnvironment>,
    live: Cell<bool>,
}

impl ReporterCore {
    fn forward_width(&self) {
        if !self.live.get() {
            return;
        }
        let width = measure_viewport_width(self.environment.as_ref());
        self.channel.set_value(width);
    }
}

/// Headless widget core reporting viewport width to the host page.
pub struct ViewportReporter {
    core: Rc<ReporterCore>,
    subscriptions: Vec<Subscription>,
    phase: ReporterPhase,
}

impl ViewportReporter {
    /// Creates an idle reporter bound to a host channel and environment.
    pub fn new(channel: Rc<dyn HostChannel>, environment: Rc<dyn ViewportEnvironment>) -> Self {
        Self {
            core: Rc::new(ReporterCore {
                channel,
                environment,
                live: Cell::new(false),
            }),
            subscriptions: Vec::with_capacity(ViewportSignal::ALL.len()),
            phase: ReporterPhase::Idle,
        }
    }

    /// Creates and mounts a reporter from a service bundle.
    ///
    /// # Errors
    ///
    /// Never fails for a fresh instance; the `Result` mirrors [`ViewportReporter::mount`].
    pub fn mount_with(services: &ReporterServices) -> Result<(Self, MountOutcome), ViewportError> {
        let mut reporter = Self::new(services.channel.clone(), services.environment.clone());
        let outcome = reporter.mount(services.signals.as_ref())?;
        Ok((reporter, outcome))
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ReporterPhase {
        self.phase
    }

    /// Number of listener registrations currently held.
    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions
            .iter()
            .filter(|subscription| subscription.is_active())
            .count()
    }

    /// Announces the frame height, forwards the initial width, then subscribes to every
    /// [`ViewportSignal`].
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::InvalidLifecycle`] when the instance is already mounted or was
    /// unmounted. Subscription failures are reported through [`MountOutcome`] instead.
    pub fn mount(&mut self, signals: &dyn SignalSource) -> Result<MountOutcome, ViewportError> {
        if self.phase != ReporterPhase::Idle {
            return Err(ViewportError::InvalidLifecycle {
                phase: self.phase.as_str(),
            });
        }

        self.phase = ReporterPhase::Mounted;
        self.core.live.set(true);
        self.core.channel.announce_height(WIDGET_FRAME_HEIGHT_PX);
        self.core.forward_width();

        let mut outcome = MountOutcome::default();
        for signal in ViewportSignal::ALL {
            match signals.subscribe(signal, self.forwarder()) {
                Ok(subscription) => self.subscriptions.push(subscription),
                Err(err) => outcome.failures.push(err),
            }
        }
        Ok(outcome)
    }

    /// Stops forwarding and releases every subscription.
    ///
    /// Safe to call in any phase and any number of times.
    pub fn unmount(&mut self) {
        self.core.live.set(false);
        for mut subscription in self.subscriptions.drain(..) {
            subscription.release();
        }
        if self.phase == ReporterPhase::Mounted {
            self.phase = ReporterPhase::Unmounted;
        }
    }

    fn forwarder(&self) -> SignalCallback {
        let core: Weak<ReporterCore> = Rc::downgrade(&self.core);
        Rc::new(move || {
            if let Some(core) = core.upgrade() {
                core.forward_width();
            }
        })
    }
}

impl Drop for ViewportReporter {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl std::fmt::Debug for ViewportReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportReporter")
            .field("phase", &self.phase)
            .field("subscriptions", &self.subscriptions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        HostCall, ManualSignalSource, RecordingHostChannel, StaticEnvironment, ViewportWidth,
    };

    struct Harness {
        channel: RecordingHostChannel,
        environment: StaticEnvironment,
        signals: ManualSignalSource,
    }

    impl Harness {
        fn at_width(px: u32) -> Self {
            Self {
                channel: RecordingHostChannel::default(),
                environment: StaticEnvironment::with_width(px),
                signals: ManualSignalSource::default(),
            }
        }

        fn reporter(&self) -> ViewportReporter {
            ViewportReporter::new(
                Rc::new(self.channel.clone()),
                Rc::new(self.environment.clone()),
            )
        }

        fn mounted(&self) -> ViewportReporter {
            let mut reporter = self.reporter();
            let outcome = reporter.mount(&self.signals).expect("mount");
            assert!(outcome.is_complete());
            reporter
        }
    }

    #[test]
    fn mount_announces_zero_height_once_before_any_value() {
        let harness = Harness::at_width(800);
        let _reporter = harness.mounted();

        assert_eq!(
            harness.channel.calls(),
            vec![
                HostCall::AnnounceHeight(0),
                HostCall::SetValue(ViewportWidth::new(800)),
            ]
        );
    }

    #[test]
    fn every_signal_forwards_one_value_without_coalescing() {
        let harness = Harness::at_width(800);
        let _reporter = harness.mounted();

        harness.signals.emit(ViewportSignal::Resize);
        harness.signals.emit(ViewportSignal::Resize);
        harness.environment.resize_to(600);
        harness.signals.emit(ViewportSignal::OrientationChange);
        harness.signals.emit(ViewportSignal::Resize);

        assert_eq!(harness.channel.values(), vec![800, 800, 800, 600, 600]);
        let announcements = harness
            .channel
            .calls()
            .into_iter()
            .filter(|call| matches!(call, HostCall::AnnounceHeight(_)))
            .count();
        assert_eq!(announcements, 1);
    }

    #[test]
    fn forwarded_width_follows_source_fallback_at_event_time() {
        let harness = Harness::at_width(1280);
        let _reporter = harness.mounted();

        harness.environment.set_inner_width(None);
        harness.environment.set_root_client_width(Some(375.0));
        harness.signals.emit(ViewportSignal::Resize);

        harness.environment.set_root_client_width(None);
        harness.signals.emit(ViewportSignal::OrientationChange);

        assert_eq!(harness.channel.values(), vec![1280, 375, 0]);
    }

    #[test]
    fn mount_installs_one_subscription_per_signal() {
        let harness = Harness::at_width(800);
        let reporter = harness.mounted();

        assert_eq!(reporter.phase(), ReporterPhase::Mounted);
        assert_eq!(reporter.active_subscriptions(), 2);
        assert_eq!(harness.signals.active_count(ViewportSignal::Resize), 1);
        assert_eq!(
            harness.signals.active_count(ViewportSignal::OrientationChange),
            1
        );
    }

    #[test]
    fn unmount_twice_leaves_no_active_subscription() {
        let harness = Harness::at_width(800);
        let mut reporter = harness.mounted();

        reporter.unmount();
        reporter.unmount();

        assert_eq!(reporter.phase(), ReporterPhase::Unmounted);
        assert_eq!(reporter.active_subscriptions(), 0);
        assert_eq!(harness.signals.total_active(), 0);
    }

    #[test]
    fn no_forward_after_unmount() {
        let harness = Harness::at_width(800);
        let mut reporter = harness.mounted();
        reporter.unmount();

        harness.environment.resize_to(320);
        assert_eq!(harness.signals.emit(ViewportSignal::Resize), 0);
        assert_eq!(harness.channel.calls().len(), 2);
    }

    #[test]
    fn dropping_a_mounted_reporter_releases_subscriptions() {
        let harness = Harness::at_width(800);
        let reporter = harness.mounted();
        drop(reporter);

        assert_eq!(harness.signals.total_active(), 0);
        harness.signals.emit(ViewportSignal::OrientationChange);
        assert_eq!(harness.channel.values(), vec![800]);
    }

    #[test]
    fn unmounted_reporter_cannot_remount() {
        let harness = Harness::at_width(800);
        let mut reporter = harness.mounted();
        reporter.unmount();

        let err = reporter
            .mount(&harness.signals)
            .expect_err("remount should be rejected");
        assert_eq!(
            err,
            ViewportError::InvalidLifecycle { phase: "unmounted" }
        );
        assert_eq!(harness.signals.total_active(), 0);
        assert_eq!(harness.channel.calls().len(), 2);
    }

    #[test]
    fn double_mount_is_rejected_without_extra_calls() {
        let harness = Harness::at_width(800);
        let mut reporter = harness.mounted();

        assert!(reporter.mount(&harness.signals).is_err());
        assert_eq!(harness.channel.calls().len(), 2);
        assert_eq!(reporter.active_subscriptions(), 2);
    }

    #[test]
    fn unmounting_an_idle_reporter_is_a_no_op() {
        let harness = Harness::at_width(800);
        let mut reporter = harness.reporter();
        reporter.unmount();

        assert_eq!(reporter.phase(), ReporterPhase::Idle);
        assert!(harness.channel.calls().is_empty());
    }

    #[test]
    fn failed_subscription_keeps_the_other_and_tears_down_cleanly() {
        let harness = Harness::at_width(800);
        harness.signals.reject(ViewportSignal::OrientationChange);

        let mut reporter = harness.reporter();
        let outcome = reporter.mount(&harness.signals).expect("mount");
        assert!(!outcome.is_complete());
        assert_eq!(outcome.failures().len(), 1);
        assert_eq!(reporter.active_subscriptions(), 1);

        harness.environment.resize_to(500);
        harness.signals.emit(ViewportSignal::Resize);
        assert_eq!(harness.channel.values(), vec![800, 500]);

        reporter.unmount();
        assert_eq!(harness.signals.total_active(), 0);
    }

    #[test]
    fn unready_channel_swallows_calls_without_retry() {
        let harness = Harness {
            channel: RecordingHostChannel::unready(),
            environment: StaticEnvironment::with_width(800),
            signals: ManualSignalSource::default(),
        };
        let _reporter = harness.mounted();

        harness.signals.emit(ViewportSignal::Resize);
        harness.channel.set_ready(true);
        harness.signals.emit(ViewportSignal::Resize);

        assert_eq!(
            harness.channel.calls(),
            vec![HostCall::SetValue(ViewportWidth::new(800))]
        );
    }

    #[test]
    fn mount_with_services_bundle() {
        let harness = Harness::at_width(390);
        let services = ReporterServices::new(
            Rc::new(harness.channel.clone()),
            Rc::new(harness.environment.clone()),
            Rc::new(harness.signals.clone()),
        );

        let (reporter, outcome) = ViewportReporter::mount_with(&services).expect("mount");
        assert!(outcome.is_complete());
        assert_eq!(reporter.phase(), ReporterPhase::Mounted);
        assert_eq!(harness.channel.values(), vec![390]);
    }

    #[test]
    fn end_to_end_mount_resize_unmount() {
        let harness = Harness::at_width(1024);
        let mut reporter = harness.mounted();
        assert_eq!(
            harness.channel.calls(),
            vec![
                HostCall::AnnounceHeight(0),
                HostCall::SetValue(ViewportWidth::new(1024)),
            ]
        );

        harness.environment.resize_to(480);
        harness.signals.emit(ViewportSignal::Resize);
        assert_eq!(
            harness.channel.calls().last(),
            Some(&HostCall::SetValue(ViewportWidth::new(480)))
        );

        reporter.unmount();
        harness.environment.resize_to(320);
        harness.signals.emit(ViewportSignal::Resize);
        assert_eq!(harness.channel.calls().len(), 3);
    }
}

//! Window notification sources and scoped subscriptions.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use crate::error::ViewportError;

/// Window notifications that can change the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportSignal {
    /// Window `resize`.
    Resize,
    /// Device `orientationchange`.
    OrientationChange,
}

impl ViewportSignal {
    /// Every signal the reporter observes, in subscription order.
    pub const ALL: [Self; 2] = [Self::Resize, Self::OrientationChange];

    /// Returns the DOM event name for this signal.
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::OrientationChange => "orientationchange",
        }
    }
}

/// Shared callback invoked once per signal firing.
pub type SignalCallback = Rc<dyn Fn()>;

/// Host source of window notifications.
pub trait SignalSource {
    /// Registers `callback` for `signal` and returns the guard that owns the registration.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::SubscribeFailed`] when the host rejects the listener.
    fn subscribe(
        &self,
        signal: ViewportSignal,
        callback: SignalCallback,
    ) -> Result<Subscription, ViewportError>;
}

/// Scoped ownership of one listener registration.
///
/// The listener is removed by [`Subscription::release`] or when the guard drops, whichever comes
/// first. Releasing twice is a no-op.
pub struct Subscription {
    signal: ViewportSignal,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps a host-specific release action.
    pub fn new(signal: ViewportSignal, release: impl FnOnce() + 'static) -> Self {
        Self {
            signal,
            release: Some(Box::new(release)),
        }
    }

    /// Signal this registration listens to.
    pub fn signal(&self) -> ViewportSignal {
        self.signal
    }

    /// Returns whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Removes the listener.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("signal", &self.signal)
            .field("active", &self.is_active())
            .finish()
    }
}

#[derive(Default)]
struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(u64, ViewportSignal, SignalCallback)>,
    rejected: Vec<ViewportSignal>,
}

impl ListenerRegistry {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(entry, _, _)| *entry == id)
    }
}

#[derive(Clone, Default)]
/// In-memory signal source driven by explicit [`ManualSignalSource::emit`] calls.
pub struct ManualSignalSource {
    registry: Rc<RefCell<ListenerRegistry>>,
}

impl ManualSignalSource {
    /// Makes future subscriptions to `signal` fail, simulating a host that rejects the listener.
    pub fn reject(&self, signal: ViewportSignal) {
        self.registry.borrow_mut().rejected.push(signal);
    }

    /// Fires `signal` and returns how many listeners ran.
    ///
    /// A listener released by an earlier callback during the same emit does not run.
    pub fn emit(&self, signal: ViewportSignal) -> usize {
        let targets: Vec<(u64, SignalCallback)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, registered, _)| *registered == signal)
            .map(|(id, _, callback)| (*id, callback.clone()))
            .collect();

        let mut fired = 0;
        for (id, callback) in targets {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            callback();
            fired += 1;
        }
        fired
    }

    /// Number of live registrations for `signal`.
    pub fn active_count(&self, signal: ViewportSignal) -> usize {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, registered, _)| *registered == signal)
            .count()
    }

    /// Number of live registrations across every signal.
    pub fn total_active(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl SignalSource for ManualSignalSource {
    fn subscribe(
        &self,
        signal: ViewportSignal,
        callback: SignalCallback,
    ) -> Result<Subscription, ViewportError> {
        let mut registry = self.registry.borrow_mut();
        if registry.rejected.contains(&signal) {
            return Err(ViewportError::SubscribeFailed {
                signal: signal.event_name(),
                reason: "listener rejected by host".to_string(),
            });
        }

        registry.next_id += 1;
        let id = registry.next_id;
        registry.listeners.push((id, signal, callback));

        let weak: Weak<RefCell<ListenerRegistry>> = Rc::downgrade(&self.registry);
        Ok(Subscription::new(signal, move || {
            if let Some(registry) = weak.upgrade() {
                registry
                    .borrow_mut()
                    .listeners
                    .retain(|(entry, _, _)| *entry != id);
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn counter() -> (Rc<Cell<usize>>, SignalCallback) {
        let hits = Rc::new(Cell::new(0));
        let callback: SignalCallback = {
            let hits = hits.clone();
            Rc::new(move || hits.set(hits.get() + 1))
        };
        (hits, callback)
    }

    #[test]
    fn event_names_match_dom_events() {
        assert_eq!(ViewportSignal::Resize.event_name(), "resize");
        assert_eq!(
            ViewportSignal::OrientationChange.event_name(),
            "orientationchange"
        );
    }

    #[test]
    fn emit_reaches_only_matching_listeners() {
        let source = ManualSignalSource::default();
        let (hits, callback) = counter();
        let _subscription = source
            .subscribe(ViewportSignal::Resize, callback)
            .expect("subscribe");

        assert_eq!(source.emit(ViewportSignal::OrientationChange), 0);
        assert_eq!(source.emit(ViewportSignal::Resize), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn dropping_guard_removes_listener() {
        let source = ManualSignalSource::default();
        let (hits, callback) = counter();
        let subscription = source
            .subscribe(ViewportSignal::Resize, callback)
            .expect("subscribe");
        assert_eq!(source.active_count(ViewportSignal::Resize), 1);

        drop(subscription);
        assert_eq!(source.active_count(ViewportSignal::Resize), 0);
        assert_eq!(source.emit(ViewportSignal::Resize), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn release_is_idempotent() {
        let source = ManualSignalSource::default();
        let (_hits, callback) = counter();
        let mut subscription = source
            .subscribe(ViewportSignal::OrientationChange, callback)
            .expect("subscribe");

        subscription.release();
        subscription.release();
        assert!(!subscription.is_active());
        assert_eq!(source.total_active(), 0);
    }

    #[test]
    fn rejected_signal_reports_subscribe_failure() {
        let source = ManualSignalSource::default();
        source.reject(ViewportSignal::OrientationChange);
        let (_hits, callback) = counter();

        let err = source
            .subscribe(ViewportSignal::OrientationChange, callback)
            .expect_err("subscription should be rejected");
        assert_eq!(
            err.to_string(),
            "failed to subscribe to `orientationchange`: listener rejected by host"
        );
    }

    #[test]
    fn listener_released_mid_emit_does_not_run() {
        let source = ManualSignalSource::default();
        let (hits, second_callback) = counter();
        let second = Rc::new(RefCell::new(None::<Subscription>));

        let first_callback: SignalCallback = {
            let second = second.clone();
            Rc::new(move || {
                if let Some(mut subscription) = second.borrow_mut().take() {
                    subscription.release();
                }
            })
        };
        let _first = source
            .subscribe(ViewportSignal::Resize, first_callback)
            .expect("subscribe first");
        *second.borrow_mut() = Some(
            source
                .subscribe(ViewportSignal::Resize, second_callback)
                .expect("subscribe second"),
        );

        assert_eq!(source.emit(ViewportSignal::Resize), 1);
        assert_eq!(hits.get(), 0);
    }
}

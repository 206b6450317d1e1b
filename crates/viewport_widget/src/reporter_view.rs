use leptos::*;
use viewport_host::{ReporterServices, ViewportReporter};

/// Headless component that reports the viewport width to the embedding page.
///
/// Renders nothing. The reporter mounts while the component body runs and unmounts when the
/// owning reactive scope is cleaned up.
#[component]
pub fn ViewportReporterWidget(
    /// Host services; defaults to the browser adapters selected for this build.
    #[prop(optional)]
    services: Option<ReporterServices>,
) -> impl IntoView {
    mount_in_current_owner(services.unwrap_or_else(viewport_host_web::build_reporter_services));
}

/// Mounts a reporter and ties its unmount to the current reactive owner.
fn mount_in_current_owner(services: ReporterServices) {
    match ViewportReporter::mount_with(&services) {
        Ok((reporter, outcome)) => {
            for err in outcome.failures() {
                logging::warn!("viewport listener unavailable: {err}");
            }
            on_cleanup(move || {
                let mut reporter = reporter;
                reporter.unmount();
            });
        }
        Err(err) => logging::warn!("viewport reporter mount failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use viewport_host::{
        HostCall, ManualSignalSource, RecordingHostChannel, StaticEnvironment, ViewportSignal,
        ViewportWidth,
    };

    use super::*;

    #[test]
    fn owner_cleanup_unmounts_the_reporter() {
        let runtime = create_runtime();
        let channel = RecordingHostChannel::default();
        let environment = StaticEnvironment::with_width(768);
        let signals = ManualSignalSource::default();
        let services = ReporterServices::new(
            Rc::new(channel.clone()),
            Rc::new(environment.clone()),
            Rc::new(signals.clone()),
        );

        let mount = as_child_of_current_owner(mount_in_current_owner);
        let ((), disposer) = mount(services);
        assert_eq!(
            channel.calls(),
            vec![
                HostCall::AnnounceHeight(0),
                HostCall::SetValue(ViewportWidth::new(768)),
            ]
        );
        assert_eq!(signals.total_active(), 2);

        environment.resize_to(500);
        signals.emit(ViewportSignal::OrientationChange);
        assert_eq!(channel.values(), vec![768, 500]);

        drop(disposer);
        assert_eq!(signals.total_active(), 0);

        environment.resize_to(320);
        assert_eq!(signals.emit(ViewportSignal::Resize), 0);
        assert_eq!(channel.values(), vec![768, 500]);

        runtime.dispose();
    }

    #[test]
    fn rejected_listener_still_mounts_and_cleans_up() {
        let runtime = create_runtime();
        let channel = RecordingHostChannel::default();
        let signals = ManualSignalSource::default();
        signals.reject(ViewportSignal::OrientationChange);
        let services = ReporterServices::new(
            Rc::new(channel.clone()),
            Rc::new(StaticEnvironment::with_width(375)),
            Rc::new(signals.clone()),
        );

        let mount = as_child_of_current_owner(mount_in_current_owner);
        let ((), disposer) = mount(services);
        assert_eq!(channel.values(), vec![375]);
        assert_eq!(signals.active_count(ViewportSignal::Resize), 1);
        assert_eq!(signals.active_count(ViewportSignal::OrientationChange), 0);

        drop(disposer);
        assert_eq!(signals.total_active(), 0);

        runtime.dispose();
    }
}

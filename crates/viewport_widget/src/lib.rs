//! Embeddable headless widget that reports the host window's viewport width.

mod reporter_view;

pub use reporter_view::ViewportReporterWidget;

/// Installs the panic hook and mounts the widget into the frame's `<body>`.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::logging::debug_warn!(
        "viewport widget mounting with `{}` host strategy",
        viewport_host_web::host_strategy_name()
    );
    leptos::mount_to_body(|| leptos::view! { <ViewportReporterWidget /> })
}

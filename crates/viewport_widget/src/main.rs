//! Binary entrypoint for the trunk-built widget bundle.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    viewport_widget::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Use `cargo xtask build-widget` to produce the component bundle or `cargo xtask launch` to run the dashboard."
    );
}

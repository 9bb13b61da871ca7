//! Binary entrypoint for the webview UI bundle.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    if let Err(err) = webview_ui::mount() {
        tracing::error!(error = %err, "webview startup aborted");
        panic!("webview startup aborted: {err}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `webview_ui_app` for wasm32 with the `csr` feature and WEBVIEW_PLATFORM set to a known profile."
    );
}

mod web_app;

use platform_context::PlatformContext;
use platform_host::ConfigError;

pub use web_app::{HostView, Navbar, NavigationRequest, Providers, WebviewApp};

/// Installs console diagnostics and resolves the build-time platform.
///
/// Resolution happens exactly once, before anything is mounted.
///
/// # Errors
///
/// Returns the fatal [`ConfigError`] when the build platform is missing or inconsistent.
pub fn bootstrap() -> Result<PlatformContext, ConfigError> {
    platform_host_web::install_console_diagnostics(tracing::Level::INFO);
    let resolved = platform_host_web::resolve_build_platform()?;
    Ok(PlatformContext::new(resolved))
}

/// Resolves the platform and mounts the application.
///
/// # Errors
///
/// Returns the fatal [`ConfigError`] from [`bootstrap`]; nothing is mounted in that case.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() -> Result<(), ConfigError> {
    console_error_panic_hook::set_once();
    let platform = bootstrap()?;
    leptos::mount_to_body(move || {
        leptos::view! {
            <Providers platform=platform>
                <WebviewApp />
            </Providers>
        }
    });
    Ok(())
}

//! Browser (`wasm32`) host bridges for [`platform_host`] transports.
//!
//! This crate wires the editor-embedded and standalone-shell message bridges into a
//! [`platform_host::TransportRegistry`] and resolves the build-time platform against the builtin
//! profiles. It also ships the console diagnostics layer that makes dropped deliveries visible in
//! the webview devtools.
//!
//! Bridge bindings live under `bridge/`, with `bridge::interop` split into wasm and non-wasm
//! implementations.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Build-time platform resolution and the default transport registry.
pub mod adapters;
mod bridge;
pub mod diagnostics;
pub mod transports;

pub use adapters::{
    build_platform_name, default_transport_registry, resolve_build_platform, resolve_platform,
};
pub use diagnostics::{install_console_diagnostics, ConsoleLogLayer};
pub use transports::{HostBridgeTransport, StandaloneBridgeTransport};

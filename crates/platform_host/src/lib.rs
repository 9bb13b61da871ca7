//! Platform profiles, message encoding policy, and host transport contracts for the webview UI.
//!
//! This crate is the host-agnostic core: it loads the static profile table, exposes the
//! [`TransportRegistry`] seam that concrete bridges plug into, and resolves one
//! [`ResolvedPlatform`] per process. Browser bridge implementations live in
//! `platform_host_web`; UI access goes through `platform_context`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod encoding;
pub mod error;
pub mod profile;
pub mod resolve;
pub mod transport;

pub use encoding::MessageEncoding;
pub use error::{CodecError, ConfigError, DeliveryError};
pub use profile::{
    build_platform_id, PlatformProfile, ProfileStore, TransportKind, HOST_BRIDGE_TRANSPORT,
    STANDALONE_BRIDGE_TRANSPORT,
};
pub use resolve::{resolve, ResolvedPlatform};
pub use transport::{HostMessage, HostTransport, MemoryTransport, NoopTransport, TransportRegistry};

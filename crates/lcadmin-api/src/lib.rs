// lcadmin-api: Async Rust client for the LCA data catalog backend

pub mod client;
pub mod envelope;
pub mod error;
pub mod retry;
pub mod transport;
pub mod types;

mod endpoints;

pub use client::CatalogClient;
pub use envelope::{Envelope, Page, unwrap_envelope};
pub use error::Error;
pub use retry::RetryPolicy;
pub use transport::{TlsMode, TransportConfig};

//! Memo service library: domain core, inbound HTTP adapter, outbound
//! persistence and security adapters, and server wiring.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;

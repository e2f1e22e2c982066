//! Content and membership backend for the House of Bijou website.
//!
//! The crate follows a hexagonal layout: [`domain`] holds entities, services
//! and the driven ports; [`inbound`] adapts HTTP requests onto the services;
//! [`outbound`] implements the ports for PostgreSQL and for in-process use.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;

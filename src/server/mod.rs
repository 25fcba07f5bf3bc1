//! Parking status HTTP service.
//!
//! A liveness surface only: `GET /`, `GET /health` and `GET /api/health`.
//! Build a [`Server`] explicitly and hand it to [`Server::serve`].

mod response;
mod router;
mod serve;

pub use response::{ErrorDetail, HealthStatus, ServiceStatus};
pub use router::route;
pub use serve::{serve_listener, Server, ServerConfig, DEFAULT_ADDR};

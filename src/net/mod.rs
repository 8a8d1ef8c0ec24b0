//! Networking: the configured API client and the backend wire schema.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` is the single point of HTTP egress and owns both interceptors,
//! `transport` is the seam to the HTTP stack, `types` defines the wire schema,
//! and the remaining modules are thin per-resource call wrappers.

pub mod auth;
pub mod budgets;
pub mod categories;
pub mod client;
pub mod goals;
pub mod insights;
pub mod profile;
pub mod transactions;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use client::{ApiClient, Base};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, RequestBody, Transport, TransportError};

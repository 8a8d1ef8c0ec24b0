//! FinTrack client: API access, session contract, and view-state flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every aggregate the product shows (totals, forecasts, breakdowns, AI
//! insights) is computed by the backend. This crate is the single point of
//! HTTP egress to it plus the small amount of client-side logic around that:
//! form validation, the persisted session token, and per-view state.
//!
//! ARCHITECTURE
//! ============
//! - `net` owns the configured [`ApiClient`] with its two interceptors
//!   (bearer injection, 401 forced logout) and the typed endpoint wrappers.
//! - `session` is the injectable token service; `nav` is the location the
//!   401 interceptor redirects.
//! - `scope` ties outstanding requests to the view that issued them.
//! - `forms` validates user input before anything reaches the network.
//! - `state` holds the page-level flows that consume the client.

pub mod config;
pub mod error;
pub mod forms;
pub mod nav;
pub mod net;
pub mod scope;
pub mod session;
pub mod state;

pub use config::ClientConfig;
pub use error::ApiError;
pub use nav::{MemoryNavigator, Navigator, Route};
pub use net::ApiClient;
pub use scope::ViewScope;
pub use session::{FileStorage, MemoryStorage, SessionService, TokenStorage};

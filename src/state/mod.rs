//! Page-level flows built on the API client.
//!
//! DESIGN
//! ======
//! State is split by page (`auth`, `dashboard`, `transactions`, ...) so a
//! front end can depend on small focused models. Each flow validates input
//! with `forms`, calls the client, and returns plain data; turning outcomes
//! into user-visible notices is left to the caller via [`notice::Notice`].

pub mod auth;
pub mod budgets;
pub mod chrome;
pub mod dashboard;
pub mod goals;
pub mod notice;
pub mod profile;
pub mod reports;
pub mod transactions;

#[cfg(test)]
pub(crate) mod fixtures;

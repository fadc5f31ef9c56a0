//! Core module for the academic records portal

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod fixtures;
pub mod hierarchy;
pub mod local_state;
pub mod models;
pub mod pages;
pub mod roll_number;
pub mod routes;
pub mod session;
pub mod submit;

/// Returns the current version of the `campus_erp` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

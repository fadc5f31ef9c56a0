//! Shared library for `campus_erp`
//! Academic records, hierarchy lookups, list filtering, role gating and page
//! rendering used by the `campuserp` CLI.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;

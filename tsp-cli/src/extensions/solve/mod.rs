//! Contains solver configuration and result reporting.

pub mod config;
pub mod formats;

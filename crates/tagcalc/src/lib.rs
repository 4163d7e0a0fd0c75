//! tagcalc library: configuration, logging setup and mode dispatch for the
//! `tagcalc` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
pub mod version;

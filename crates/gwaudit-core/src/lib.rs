//! gwaudit-core: shared errors, configuration, tracing, and constants
//! for the gateway configuration auditor.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

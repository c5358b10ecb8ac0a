//! Observability for gwaudit.
//! `tracing` crate with `EnvFilter`, driven by `GWAUDIT_LOG`.

pub mod metrics;
pub mod setup;

pub use setup::init_tracing;

//! Gateway service description: raw file types, loader, and the
//! normalized model the rule predicates read.

pub mod duration;
pub mod loader;
pub mod model;
pub mod namespaces;
pub mod parser;
pub mod raw;

pub use loader::load_service_config;
pub use model::{Agent, Backend, Components, Endpoint, Service, TlsState};
pub use parser::parse;
pub use raw::ServiceConfig;

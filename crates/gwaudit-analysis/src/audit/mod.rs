//! Audit layer: rule catalog, predicates, and the filtering engine.
//!
//! - `types`: Severity, Recommendation, AuditResult
//! - `rule`: a recommendation bound to a predicate
//! - `predicates`: checks over the service model, including the
//!   parameterized families
//! - `catalog`: the builtin ordered rule set
//! - `engine`: ignore / severity filtering and evaluation

pub mod catalog;
pub mod engine;
pub mod predicates;
pub mod rule;
pub mod types;

pub use catalog::Catalog;
pub use engine::{audit, Auditor};
pub use rule::{Predicate, Rule};
pub use types::*;

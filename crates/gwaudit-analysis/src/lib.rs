//! gwaudit-analysis: audits API gateway service descriptions against a
//! catalog of best-practice rules.
//!
//! ```no_run
//! use gwaudit_analysis::audit::audit;
//! use gwaudit_analysis::service::load_service_config;
//!
//! let config = load_service_config("gateway.json".as_ref()).unwrap();
//! let result = audit(&config, &["1.1.1"], &["CRITICAL", "HIGH"]).unwrap();
//! for rec in &result.recommendations {
//!     println!("{} [{}] {}", rec.rule, rec.severity, rec.message);
//! }
//! ```

pub mod audit;
pub mod reporters;
pub mod service;

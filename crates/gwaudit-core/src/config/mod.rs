//! Configuration system for gwaudit.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod audit_config;
pub mod gwaudit_config;
pub mod report_config;

pub use audit_config::AuditConfig;
pub use gwaudit_config::{CliOverrides, GwauditConfig};
pub use report_config::ReportConfig;

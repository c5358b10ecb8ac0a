//! Audit engine: filters the catalog and evaluates predicates.

use std::time::Instant;

use gwaudit_core::config::AuditConfig;
use gwaudit_core::errors::AuditError;
use gwaudit_core::tracing::metrics::{AUDIT_TIME_US, RULES_EVALUATED, RULES_FIRED, RULES_IGNORED};
use rustc_hash::FxHashSet;

use super::catalog::Catalog;
use super::types::AuditResult;
use crate::service::{parse, ServiceConfig};

/// Runs audits against one catalog.
#[derive(Debug, Clone, Copy)]
pub struct Auditor<'c> {
    catalog: &'c Catalog,
}

impl Default for Auditor<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Auditor<'static> {
    /// Auditor over the builtin catalog.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::builtin(),
        }
    }
}

impl<'c> Auditor<'c> {
    pub fn with_catalog(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Audits `config`.
    ///
    /// A rule surfaces only if its id is not in `ignore`, its severity
    /// string is in `severities`, and its predicate holds. Ignore wins over
    /// everything, an empty `severities` yields nothing, and unknown ids or
    /// severity strings simply match nothing. Output keeps catalog order.
    pub fn audit<I, S>(
        &self,
        config: &ServiceConfig,
        ignore: &[I],
        severities: &[S],
    ) -> Result<AuditResult, AuditError>
    where
        I: AsRef<str>,
        S: AsRef<str>,
    {
        let _span = tracing::debug_span!("audit", rules = self.catalog.len()).entered();
        let start = Instant::now();

        let service = parse(config);

        let ignored: FxHashSet<&str> = ignore.iter().map(|i| i.as_ref()).collect();
        let allowed: FxHashSet<&str> = severities.iter().map(|s| s.as_ref()).collect();

        let mut result = AuditResult::default();
        let mut evaluated = 0usize;
        let mut skipped = 0usize;

        for rule in self.catalog {
            if ignored.contains(rule.id()) {
                skipped += 1;
                continue;
            }
            if !allowed.contains(rule.severity().as_str()) {
                continue;
            }
            evaluated += 1;
            if rule.evaluate(&service) {
                result.recommendations.push(rule.recommendation().clone());
            }
        }

        tracing::debug!(
            { RULES_EVALUATED } = evaluated,
            { RULES_FIRED } = result.recommendations.len(),
            { RULES_IGNORED } = skipped,
            { AUDIT_TIME_US } = start.elapsed().as_micros() as u64,
            "audit complete"
        );

        Ok(result)
    }

    /// Audits `config` with the filters of a resolved tool configuration.
    /// An unset severity list means every level.
    pub fn audit_with(
        &self,
        config: &ServiceConfig,
        filters: &AuditConfig,
    ) -> Result<AuditResult, AuditError> {
        self.audit(config, filters.effective_ignore(), &filters.effective_severities())
    }
}

/// Audits `config` against the builtin catalog.
pub fn audit<I, S>(
    config: &ServiceConfig,
    ignore: &[I],
    severities: &[S],
) -> Result<AuditResult, AuditError>
where
    I: AsRef<str>,
    S: AsRef<str>,
{
    Auditor::new().audit(config, ignore, severities)
}

//! A rule: a recommendation bound to a predicate over the service model.

use std::fmt;

use super::types::{Recommendation, Severity};
use crate::service::Service;

/// A pure, total check over the service model. Missing data is `false`.
pub type Predicate = Box<dyn Fn(&Service) -> bool + Send + Sync>;

pub struct Rule {
    recommendation: Recommendation,
    evaluate: Predicate,
}

impl Rule {
    /// The only way to build a rule.
    pub fn new<F>(id: &str, severity: Severity, message: &str, predicate: F) -> Self
    where
        F: Fn(&Service) -> bool + Send + Sync + 'static,
    {
        Self {
            recommendation: Recommendation {
                rule: id.to_string(),
                severity,
                message: message.to_string(),
            },
            evaluate: Box::new(predicate),
        }
    }

    pub fn id(&self) -> &str {
        &self.recommendation.rule
    }

    pub fn severity(&self) -> Severity {
        self.recommendation.severity
    }

    pub fn message(&self) -> &str {
        &self.recommendation.message
    }

    pub fn recommendation(&self) -> &Recommendation {
        &self.recommendation
    }

    /// Runs the predicate.
    pub fn evaluate(&self, service: &Service) -> bool {
        (self.evaluate)(service)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("recommendation", &self.recommendation)
            .finish_non_exhaustive()
    }
}

//! Per-field issue tracking
//!
//! Collects every recovered field failure during a mapping call. Nothing is
//! logged and dropped: each recovery lands in the returned report so callers
//! can decide whether a partial document is acceptable.

use crate::error::Severity;
use crate::types::{FieldIssue, IssueCode, IssueReport, IssueSummary};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

/// Accumulates recovered per-field failures for one mapping call
#[derive(Debug, Default)]
pub struct IssueTracker {
    items: Vec<FieldIssue>,
}

impl IssueTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a recovered failure; the offending field has been omitted
    /// or skipped by the time this is called.
    pub fn add(&mut self, code: IssueCode, path: &str, message: &str, value: Option<Value>) {
        let severity = severity_of(code);
        warn!(%code, path, message, "field recovered");
        self.items.push(FieldIssue {
            code,
            path: path.to_string(),
            message: message.to_string(),
            severity,
            value,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Finalize into the report returned to the caller
    pub fn build_report(self) -> IssueReport {
        let max_severity = self.items.iter().map(|i| i.severity).max();

        let mut by_code: HashMap<String, usize> = HashMap::new();
        for item in &self.items {
            *by_code.entry(item.code.to_string()).or_insert(0) += 1;
        }

        let summary = IssueSummary {
            total_items: self.items.len(),
            by_code,
        };

        IssueReport {
            items: self.items,
            max_severity,
            summary,
        }
    }
}

/// Severity of each recoverable failure class
fn severity_of(code: IssueCode) -> Severity {
    match code {
        // The document names something the schema cannot place
        IssueCode::UnknownField => Severity::Warning,
        IssueCode::MissingAccessor => Severity::Warning,
        IssueCode::MissingLinkage => Severity::Warning,
        // The schema promised something the data could not deliver
        IssueCode::UnsupportedType => Severity::Error,
        IssueCode::UnregisteredType => Severity::Error,
        IssueCode::MissingIdentifier => Severity::Error,
        IssueCode::Coercion => Severity::Error,
    }
}

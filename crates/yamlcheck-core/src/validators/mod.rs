//! The five validators
//!
//! Each validator is a pure function over a resource slice and one rule
//! table. Resources are walked in document order and rules in table order;
//! every violation is collected and nothing short-circuits except a resource
//! with no name, which is reported once and skipped for the rest of that pass.

pub mod allowed;
pub mod dependency;
pub mod length;
pub mod mandatory;
pub mod types;

pub use allowed::check_allowed_values;
pub use dependency::check_dependencies;
pub use length::check_lengths;
pub use mandatory::check_mandatory;
pub use types::check_types;

use crate::finding::{Finding, FindingKind};
use crate::resource::Resource;
use crate::rules::RuleKind;

/// Accumulates the findings of one validator pass over one file.
pub(crate) struct Collector<'a> {
    file: &'a str,
    rule: RuleKind,
    findings: Vec<Finding>,
}

impl<'a> Collector<'a> {
    pub(crate) fn new(file: &'a str, rule: RuleKind) -> Self {
        Self {
            file,
            rule,
            findings: Vec::new(),
        }
    }

    /// Record a finding. Returns `false` when the resource has no name; the
    /// caller must stop checking that resource.
    pub(crate) fn flag(&mut self, resource: &Resource, field: &str, kind: FindingKind) -> bool {
        let finding = Finding::on(self.file, resource, field, self.rule, kind);
        let named = !finding.is_malformed();
        self.findings.push(finding);
        named
    }

    pub(crate) fn finish(self) -> Vec<Finding> {
        self.findings
    }
}

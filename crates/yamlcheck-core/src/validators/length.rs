//! Exact-length and length-range checks

use super::Collector;
use crate::finding::{Finding, FindingKind};
use crate::resource::{FieldState, Resource};
use crate::rules::{LengthRule, RuleKind};
use crate::value::canonical_length;

/// Report string or integer fields whose canonical string form has a
/// length outside the constraint. Values of any other type are skipped.
pub fn check_lengths(file: &str, resources: &[Resource], rules: &[LengthRule]) -> Vec<Finding> {
    let mut collector = Collector::new(file, RuleKind::Length);

    for resource in resources {
        for rule in rules {
            let FieldState::Present(value) = resource.field(&rule.field) else {
                continue;
            };
            let Some(length) = canonical_length(value) else {
                continue;
            };
            if rule.constraint.admits(length) {
                continue;
            }
            if !collector.flag(resource, &rule.field, FindingKind::LengthViolation) {
                break;
            }
        }
    }

    collector.finish()
}

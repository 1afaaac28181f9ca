//! Presence checks for required fields

use super::Collector;
use crate::finding::{Finding, FindingKind};
use crate::resource::{FieldState, Resource};
use crate::rules::RuleKind;

/// Report every required field that is missing or null on each resource.
///
/// A missing field yields one `MissingField` finding; a key that exists
/// with a null value yields one `NullField` finding.
pub fn check_mandatory(file: &str, resources: &[Resource], required: &[String]) -> Vec<Finding> {
    let mut collector = Collector::new(file, RuleKind::Mandatory);

    for resource in resources {
        for field in required {
            let kind = match resource.field(field) {
                FieldState::Absent => FindingKind::MissingField,
                FieldState::Null => FindingKind::NullField,
                FieldState::Present(_) => continue,
            };
            if !collector.flag(resource, field, kind) {
                break;
            }
        }
    }

    collector.finish()
}

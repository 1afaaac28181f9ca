//! Allowed-value set membership

use super::Collector;
use crate::finding::{Finding, FindingKind};
use crate::resource::Resource;
use crate::rules::{AllowedValuesRule, RuleKind};
use crate::value::{render_literal_list, strictly_equal};

/// Report fields whose value is not one of the permitted literals.
///
/// Any existing key is checked, so a null value must itself be listed
/// (as `~` or `null`) to be accepted.
pub fn check_allowed_values(
    file: &str,
    resources: &[Resource],
    rules: &[AllowedValuesRule],
) -> Vec<Finding> {
    let mut collector = Collector::new(file, RuleKind::AllowedValues);

    for resource in resources {
        for rule in rules {
            let Some(value) = resource.field(&rule.field).value() else {
                continue;
            };
            if rule.allowed.iter().any(|permitted| strictly_equal(value, permitted)) {
                continue;
            }
            let kind = FindingKind::DisallowedValue {
                allowed: render_literal_list(&rule.allowed),
            };
            if !collector.flag(resource, &rule.field, kind) {
                break;
            }
        }
    }

    collector.finish()
}

//! Conditional dependencies gated by a boolean trigger field

use super::Collector;
use crate::finding::{Finding, FindingKind};
use crate::resource::{FieldState, Resource};
use crate::rules::{DependencyRule, RuleKind};
use serde_yaml::Value;

/// When a trigger is exactly `true`, its dependent fields must be set.
/// Otherwise (false, null, any other value, or no trigger key at all) the
/// dependent fields must not be set.
pub fn check_dependencies(
    file: &str,
    resources: &[Resource],
    rules: &[DependencyRule],
) -> Vec<Finding> {
    let mut collector = Collector::new(file, RuleKind::Dependency);

    'resources: for resource in resources {
        for rule in rules {
            let triggered = matches!(resource.field(&rule.trigger), FieldState::Present(Value::Bool(true)));

            for dependent in &rule.mandatory {
                let is_set = resource.field(dependent).is_set();
                let kind = match (triggered, is_set) {
                    (true, false) => FindingKind::RequiredWhenTrue {
                        trigger: rule.trigger.clone(),
                    },
                    (false, true) => FindingKind::ForbiddenWhenFalse {
                        trigger: rule.trigger.clone(),
                    },
                    _ => continue,
                };
                if !collector.flag(resource, dependent, kind) {
                    continue 'resources;
                }
            }
        }
    }

    collector.finish()
}

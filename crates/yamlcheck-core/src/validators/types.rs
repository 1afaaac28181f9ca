//! Nominal type checks

use super::Collector;
use crate::finding::{Finding, FindingKind};
use crate::resource::{FieldState, Resource};
use crate::rules::{RuleKind, TypeRule};
use crate::value::type_tag;

/// Report set fields whose type tag differs from the expected tag.
/// Null and missing fields are not type checked.
pub fn check_types(file: &str, resources: &[Resource], rules: &[TypeRule]) -> Vec<Finding> {
    let mut collector = Collector::new(file, RuleKind::Type);

    for resource in resources {
        for rule in rules {
            let FieldState::Present(value) = resource.field(&rule.field) else {
                continue;
            };
            let actual = type_tag(value);
            if actual == rule.expected {
                continue;
            }
            let kind = FindingKind::TypeMismatch {
                expected: rule.expected.clone(),
                actual: actual.to_string(),
            };
            if !collector.flag(resource, &rule.field, kind) {
                break;
            }
        }
    }

    collector.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::test_support::{lines, resources};
    use pretty_assertions::assert_eq;

    fn rule(field: &str, expected: &str) -> TypeRule {
        TypeRule {
            field: field.to_string(),
            expected: expected.to_string(),
        }
    }

    #[test]
    fn test_string_for_int_is_reported() {
        let rs = resources("- {name: db, port: '5432'}\n");
        assert_eq!(
            lines(&check_types("db.yaml", &rs, &[rule("port", "int")])),
            vec!["In the file db.yaml, the data type of port is incorrect for the resource db."]
        );
    }

    #[test]
    fn test_integer_for_int_passes() {
        let rs = resources("- {name: db, port: 5432}\n");
        assert!(check_types("db.yaml", &rs, &[rule("port", "int")]).is_empty());
    }

    #[test]
    fn test_bool_is_never_an_int() {
        let rs = resources("- {name: db, port: true}\n");
        let findings = check_types("db.yaml", &rs, &[rule("port", "int")]);
        assert_eq!(
            findings[0].kind,
            FindingKind::TypeMismatch {
                expected: "int".to_string(),
                actual: "bool".to_string(),
            }
        );
    }

    #[test]
    fn test_int_is_never_a_float() {
        let rs = resources("- {name: db, ratio: 1}\n- {name: db2, ratio: 1.0}\n");
        let findings = check_types("db.yaml", &rs, &[rule("ratio", "float")]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].resource.as_deref(), Some("db"));
    }

    #[test]
    fn test_null_and_missing_fields_are_skipped() {
        let rs = resources("- {name: db, port: ~}\n- {name: other}\n");
        assert!(check_types("db.yaml", &rs, &[rule("port", "int")]).is_empty());
    }

    #[test]
    fn test_collection_tags() {
        let rs = resources("- {name: db, tags: [a], labels: {k: v}}\n");
        let findings = check_types(
            "db.yaml",
            &rs,
            &[rule("tags", "list"), rule("labels", "dict"), rule("name", "str")],
        );
        assert!(findings.is_empty());
    }
}

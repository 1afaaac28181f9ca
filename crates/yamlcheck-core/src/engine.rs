//! Runs every enabled validator over record documents

use crate::document::RecordDocument;
use crate::finding::Finding;
use crate::report::{FileReport, ValidationReport};
use crate::rules::{RuleKind, RuleSet};
use crate::validators::{
    check_allowed_values, check_dependencies, check_lengths, check_mandatory, check_types,
};
use tracing::{debug, info};

/// Validate one document: validators run in [`RuleKind::ALL`] order and
/// each contributes its findings in resource-then-field order.
pub fn validate_document(rules: &RuleSet, document: &RecordDocument) -> Vec<Finding> {
    let file = document.file.as_str();
    let resources = document.resources.as_slice();
    let mut findings = Vec::new();

    for kind in RuleKind::ALL {
        let found = match kind {
            RuleKind::Mandatory => rules
                .mandatory
                .as_deref()
                .map(|required| check_mandatory(file, resources, required)),
            RuleKind::Dependency => rules
                .dependency
                .as_deref()
                .map(|table| check_dependencies(file, resources, table)),
            RuleKind::Type => rules
                .types
                .as_deref()
                .map(|table| check_types(file, resources, table)),
            RuleKind::Length => rules
                .length
                .as_deref()
                .map(|table| check_lengths(file, resources, table)),
            RuleKind::AllowedValues => rules
                .allowed_values
                .as_deref()
                .map(|table| check_allowed_values(file, resources, table)),
        };

        if let Some(found) = found {
            debug!("{}: {} check found {} violations", file, kind, found.len());
            findings.extend(found);
        }
    }

    findings
}

/// Validate a batch of documents, keeping their order.
pub fn validate_documents<'a, I>(rules: &RuleSet, documents: I) -> ValidationReport
where
    I: IntoIterator<Item = &'a RecordDocument>,
{
    let mut report = ValidationReport::new();
    for document in documents {
        report.add_file(FileReport {
            file: document.file.clone(),
            resources: document.resources.len(),
            findings: validate_document(rules, document),
        });
    }

    info!(
        "Validated {} files, {} findings",
        report.files.len(),
        report.total_findings()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RULES: &str = r#"
mandatory: [name, region]
dependency:
  encrypted:
    mandatory: [kms_key]
type:
  size: int
length:
  region: [9]
allowed_values:
  tier: [small, large]
"#;

    #[test]
    fn test_validator_order_within_a_file() {
        let rules = RuleSet::from_yaml_str(RULES).unwrap();
        let doc = RecordDocument::from_yaml_str(
            "vols.yaml",
            "- {name: v1, size: '10', tier: huge, encrypted: true}\n",
        )
        .unwrap();

        let kinds: Vec<RuleKind> = validate_document(&rules, &doc)
            .iter()
            .map(|f| f.rule)
            .collect();
        assert_eq!(
            kinds,
            vec![
                RuleKind::Mandatory,
                RuleKind::Dependency,
                RuleKind::Type,
                RuleKind::AllowedValues,
            ]
        );
    }

    #[test]
    fn test_disabled_validators_do_not_run() {
        let rules = RuleSet::from_yaml_str("type:\n  size: int\n").unwrap();
        let doc = RecordDocument::from_yaml_str("a.yaml", "- {size: 3}\n").unwrap();
        assert!(validate_document(&rules, &doc).is_empty());
    }

    #[test]
    fn test_documents_keep_discovery_order() {
        let rules = RuleSet::from_yaml_str("mandatory: [region]\n").unwrap();
        let docs = vec![
            RecordDocument::from_yaml_str("z.yaml", "- {name: a}\n").unwrap(),
            RecordDocument::from_yaml_str("a.yaml", "- {name: b}\n").unwrap(),
        ];
        let report = validate_documents(&rules, &docs);
        let files: Vec<&str> = report.findings().map(|f| f.file.as_str()).collect();
        assert_eq!(files, vec!["z.yaml", "a.yaml"]);
        assert!(!report.is_success());
    }
}

//! Validation findings and their message wording
//!
//! The `Display` output of a [`Finding`] is the exact line printed in the
//! error report; golden tests compare it byte for byte.

use crate::resource::Resource;
use crate::rules::RuleKind;
use serde::Serialize;
use std::fmt;

/// What a finding is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingKind {
    MissingField,
    NullField,
    RequiredWhenTrue { trigger: String },
    ForbiddenWhenFalse { trigger: String },
    TypeMismatch { expected: String, actual: String },
    LengthViolation,
    DisallowedValue { allowed: String },
    /// The resource has no usable `name`, so the finding that was due on it
    /// could not be reported against a name.
    MalformedResource { position: usize },
}

/// A single validation violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub file: String,
    pub resource: Option<String>,
    pub field: String,
    pub rule: RuleKind,
    #[serde(flatten)]
    pub kind: FindingKind,
}

impl Finding {
    /// Build a finding on `resource`, degrading to a malformed-resource
    /// finding when the resource cannot be named.
    pub fn on(
        file: &str,
        resource: &Resource,
        field: &str,
        rule: RuleKind,
        kind: FindingKind,
    ) -> Self {
        match resource.name() {
            Some(name) => Self {
                file: file.to_string(),
                resource: Some(name),
                field: field.to_string(),
                rule,
                kind,
            },
            None => Self::malformed(file, resource, field, rule),
        }
    }

    pub fn malformed(file: &str, resource: &Resource, field: &str, rule: RuleKind) -> Self {
        Self {
            file: file.to_string(),
            resource: None,
            field: field.to_string(),
            rule,
            kind: FindingKind::MalformedResource {
                position: resource.position(),
            },
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, FindingKind::MalformedResource { .. })
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = &self.file;
        let field = &self.field;
        let name = self.resource.as_deref().unwrap_or_default();

        match &self.kind {
            FindingKind::MissingField => write!(
                f,
                "In the file {file}, the key {field} is not present for the resource {name}."
            ),
            FindingKind::NullField => write!(
                f,
                "In the file {file}, the key {field} is present, but its value is missing for the resource {name}."
            ),
            FindingKind::RequiredWhenTrue { trigger } => write!(
                f,
                "In the file {file}, the key {field} is mandatory for the resource {name} when {trigger} is true."
            ),
            FindingKind::ForbiddenWhenFalse { trigger } => write!(
                f,
                "In the file {file}, for the resource {name}, {field} is false, but the key {trigger} is incorrectly present.."
            ),
            FindingKind::TypeMismatch { .. } => write!(
                f,
                "In the file {file}, the data type of {field} is incorrect for the resource {name}."
            ),
            FindingKind::LengthViolation => write!(
                f,
                "In the file {file}, the length of {field} is incorrect for the resource {name}."
            ),
            FindingKind::DisallowedValue { allowed } => write!(
                f,
                "In the file {file}, the value of {field} can be any of {allowed} for the resource {name}"
            ),
            FindingKind::MalformedResource { position } => write!(
                f,
                "In the file {file}, the resource at position {position} is malformed: it has no name field."
            ),
        }
    }
}

//! Rule documents and the five rule tables
//!
//! A rules document is a YAML mapping with up to five top-level keys. Each
//! present key enables one validator; map-shaped tables keep document order
//! so findings come out in the order rules were written. Shape errors are
//! reported here, at load time, rather than being skipped during validation.

use crate::error::{Error, Result};
use crate::value::KNOWN_TYPE_TAGS;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// The five validator kinds, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Mandatory,
    Dependency,
    Type,
    Length,
    AllowedValues,
}

impl RuleKind {
    pub const ALL: [RuleKind; 5] = [
        RuleKind::Mandatory,
        RuleKind::Dependency,
        RuleKind::Type,
        RuleKind::Length,
        RuleKind::AllowedValues,
    ];

    /// Top-level key of this table in a rules document.
    pub fn key(&self) -> &'static str {
        match self {
            RuleKind::Mandatory => "mandatory",
            RuleKind::Dependency => "dependency",
            RuleKind::Type => "type",
            RuleKind::Length => "length",
            RuleKind::AllowedValues => "allowed_values",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fields that must be set when `trigger` is true and unset otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyRule {
    pub trigger: String,
    pub mandatory: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeRule {
    pub field: String,
    pub expected: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthConstraint {
    Exact(usize),
    /// Inclusive on both ends.
    Range { min: usize, max: usize },
}

impl LengthConstraint {
    pub fn admits(&self, length: usize) -> bool {
        match *self {
            LengthConstraint::Exact(expected) => length == expected,
            LengthConstraint::Range { min, max } => (min..=max).contains(&length),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LengthRule {
    pub field: String,
    pub constraint: LengthConstraint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllowedValuesRule {
    pub field: String,
    pub allowed: Vec<Value>,
}

/// Parsed rules document. `None` disables the corresponding validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    pub mandatory: Option<Vec<String>>,
    pub dependency: Option<Vec<DependencyRule>>,
    pub types: Option<Vec<TypeRule>>,
    pub length: Option<Vec<LengthRule>>,
    pub allowed_values: Option<Vec<AllowedValuesRule>>,
}

impl RuleSet {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let root: Value = serde_yaml::from_str(content)?;
        Self::from_value(root)
    }

    pub fn from_value(root: Value) -> Result<Self> {
        let document = match root {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(document) => document,
            other => {
                return Err(Error::invalid_rule(
                    "<root>",
                    format!("expected a mapping, found {}", crate::value::type_tag(&other)),
                ))
            }
        };

        let mut rules = Self::default();
        for (key, table) in document {
            let Some(name) = key.as_str() else {
                warn!("Ignoring non-string top-level rule key {:?}", key);
                continue;
            };
            let Some(kind) = RuleKind::from_key(name) else {
                warn!("Ignoring unknown rule table '{}'", name);
                continue;
            };
            if table.is_null() {
                warn!("Rule table '{}' is empty; validator disabled", name);
                continue;
            }

            match kind {
                RuleKind::Mandatory => rules.mandatory = Some(string_list(kind.key(), &table)?),
                RuleKind::Dependency => rules.dependency = Some(parse_dependency(&table)?),
                RuleKind::Type => rules.types = Some(parse_types(&table)?),
                RuleKind::Length => rules.length = Some(parse_length(&table)?),
                RuleKind::AllowedValues => {
                    rules.allowed_values = Some(parse_allowed_values(&table)?)
                }
            }
        }

        debug!("Loaded rules, enabled validators: {:?}", rules.enabled_kinds());
        Ok(rules)
    }

    /// Validator kinds with a table present, in run order.
    pub fn enabled_kinds(&self) -> Vec<RuleKind> {
        RuleKind::ALL
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
            .collect()
    }

    pub fn is_enabled(&self, kind: RuleKind) -> bool {
        match kind {
            RuleKind::Mandatory => self.mandatory.is_some(),
            RuleKind::Dependency => self.dependency.is_some(),
            RuleKind::Type => self.types.is_some(),
            RuleKind::Length => self.length.is_some(),
            RuleKind::AllowedValues => self.allowed_values.is_some(),
        }
    }
}

fn table_mapping<'a>(table_name: &str, table: &'a Value) -> Result<&'a Mapping> {
    table.as_mapping().ok_or_else(|| {
        Error::invalid_rule(
            table_name,
            format!("expected a mapping, found {}", crate::value::type_tag(table)),
        )
    })
}

fn field_name(table_name: &str, key: &Value) -> Result<String> {
    key.as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_rule(table_name, format!("field names must be strings, found {:?}", key)))
}

fn string_list(table_name: &str, value: &Value) -> Result<Vec<String>> {
    let items = value.as_sequence().ok_or_else(|| {
        Error::invalid_rule(
            table_name,
            format!("expected a list of field names, found {}", crate::value::type_tag(value)),
        )
    })?;
    items.iter().map(|item| field_name(table_name, item)).collect()
}

fn parse_dependency(table: &Value) -> Result<Vec<DependencyRule>> {
    let table_name = RuleKind::Dependency.key();
    let mut rules = Vec::new();

    for (trigger_key, rule_body) in table_mapping(table_name, table)? {
        let trigger = field_name(table_name, trigger_key)?;
        let mandatory = match rule_body {
            Value::Null => Vec::new(),
            Value::Mapping(body) => {
                for extra in body.keys().filter(|k| k.as_str() != Some("mandatory")) {
                    warn!("Ignoring key {:?} in dependency rule '{}'", extra, trigger);
                }
                match body.get("mandatory") {
                    None | Some(Value::Null) => Vec::new(),
                    Some(list) => string_list(table_name, list)?,
                }
            }
            other => {
                return Err(Error::invalid_rule(
                    table_name,
                    format!(
                        "rule for '{}' must be a mapping with a 'mandatory' list, found {}",
                        trigger,
                        crate::value::type_tag(other)
                    ),
                ))
            }
        };
        rules.push(DependencyRule { trigger, mandatory });
    }

    Ok(rules)
}

fn parse_types(table: &Value) -> Result<Vec<TypeRule>> {
    let table_name = RuleKind::Type.key();
    let mut rules = Vec::new();

    for (field_key, tag_value) in table_mapping(table_name, table)? {
        let field = field_name(table_name, field_key)?;
        let expected = tag_value.as_str().ok_or_else(|| {
            Error::invalid_rule(table_name, format!("type tag for '{}' must be a string", field))
        })?;
        if !KNOWN_TYPE_TAGS.contains(&expected) {
            warn!(
                "Unknown type tag '{}' for '{}'; every value of this field will be reported",
                expected, field
            );
        }
        rules.push(TypeRule {
            field,
            expected: expected.to_string(),
        });
    }

    Ok(rules)
}

fn parse_length(table: &Value) -> Result<Vec<LengthRule>> {
    let table_name = RuleKind::Length.key();
    let mut rules = Vec::new();

    for (field_key, bounds_value) in table_mapping(table_name, table)? {
        let field = field_name(table_name, field_key)?;
        let constraint = length_constraint(&field, bounds_value)?;
        rules.push(LengthRule { field, constraint });
    }

    Ok(rules)
}

fn length_constraint(field: &str, bounds_value: &Value) -> Result<LengthConstraint> {
    let invalid = || Error::InvalidLengthConstraint {
        field: field.to_string(),
        found: crate::value::render_literal(bounds_value),
    };

    let bounds = bounds_value.as_sequence().ok_or_else(invalid)?;
    let bounds: Vec<usize> = bounds
        .iter()
        .map(|bound| bound.as_u64().and_then(|b| usize::try_from(b).ok()))
        .collect::<Option<_>>()
        .ok_or_else(invalid)?;

    match bounds.as_slice() {
        [exact] => Ok(LengthConstraint::Exact(*exact)),
        [min, max] if min <= max => Ok(LengthConstraint::Range {
            min: *min,
            max: *max,
        }),
        _ => Err(invalid()),
    }
}

fn parse_allowed_values(table: &Value) -> Result<Vec<AllowedValuesRule>> {
    let table_name = RuleKind::AllowedValues.key();
    let mut rules = Vec::new();

    for (field_key, permitted) in table_mapping(table_name, table)? {
        let field = field_name(table_name, field_key)?;
        let allowed = permitted.as_sequence().cloned().ok_or_else(|| {
            Error::invalid_rule(
                table_name,
                format!(
                    "permitted values for '{}' must be a list, found {}",
                    field,
                    crate::value::type_tag(permitted)
                ),
            )
        })?;
        rules.push(AllowedValuesRule { field, allowed });
    }

    Ok(rules)
}

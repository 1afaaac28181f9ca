//! Rule engine for validating YAML resource records
//!
//! A [`RuleSet`] holds up to five rule tables (mandatory, dependency, type,
//! length, allowed_values). Each enabled table drives one validator over
//! the resources of a [`RecordDocument`], and every violation becomes a
//! [`Finding`] whose display form is the reported message.
//!
//! # Example
//!
//! ```
//! use yamlcheck_core::{validate_document, RecordDocument, RuleSet};
//!
//! let rules = RuleSet::from_yaml_str("mandatory: [name, region]").unwrap();
//! let doc = RecordDocument::from_yaml_str(
//!     "buckets.yaml",
//!     "- name: logs\n  region: eu-west-1\n- name: assets\n",
//! )
//! .unwrap();
//!
//! let findings = validate_document(&rules, &doc);
//! assert_eq!(
//!     findings[0].to_string(),
//!     "In the file buckets.yaml, the key region is not present for the resource assets."
//! );
//! ```

pub mod document;
pub mod engine;
pub mod error;
pub mod finding;
pub mod report;
pub mod resource;
pub mod rules;
pub mod validators;
pub mod value;

pub use document::RecordDocument;
pub use engine::{validate_document, validate_documents};
pub use error::{Error, Result};
pub use finding::{Finding, FindingKind};
pub use report::{FileReport, ValidationReport};
pub use resource::{FieldState, Resource};
pub use rules::{RuleKind, RuleSet};

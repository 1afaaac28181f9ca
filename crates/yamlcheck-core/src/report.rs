//! Validation report aggregation
//!
//! Collects findings per file, in the order files were validated, and
//! renders them as plain text lines or JSON.

use crate::finding::Finding;
use crate::rules::RuleKind;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub summary: ValidationSummary,
    pub files: Vec<FileReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationSummary {
    pub success: bool,
    pub files_checked: usize,
    pub resources_checked: usize,
    pub findings: usize,
    pub malformed_resources: usize,
    pub by_rule: BTreeMap<RuleKind, usize>,
}

impl Default for ValidationSummary {
    fn default() -> Self {
        Self {
            success: true,
            files_checked: 0,
            resources_checked: 0,
            findings: 0,
            malformed_resources: 0,
            by_rule: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    pub resources: usize,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, file: FileReport) {
        self.summary.files_checked += 1;
        self.summary.resources_checked += file.resources;
        self.summary.findings += file.findings.len();

        for finding in &file.findings {
            *self.summary.by_rule.entry(finding.rule).or_default() += 1;
            if finding.is_malformed() {
                self.summary.malformed_resources += 1;
            }
        }

        if !file.findings.is_empty() {
            self.summary.success = false;
        }
        self.files.push(file);
    }

    pub fn is_success(&self) -> bool {
        self.summary.success
    }

    pub fn total_findings(&self) -> usize {
        self.summary.findings
    }

    /// All findings, file by file.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.files.iter().flat_map(|file| file.findings.iter())
    }

    /// One rendered message per finding.
    pub fn lines(&self) -> Vec<String> {
        self.findings().map(ToString::to_string).collect()
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for finding in self.findings() {
            writeln!(f, "{}", finding)?;
        }
        Ok(())
    }
}

//! One validation run: discover, load, validate, report

use crate::discovery::discover_record_files;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use yamlcheck_core::{validate_document, FileReport, RecordDocument, RuleSet, ValidationReport};

pub const NOTHING_TO_VALIDATE: &str = "No YAML files found to validate.";
pub const SUCCESS: &str = "Validation successful!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Progress lines followed by one line per finding
    #[default]
    Text,
    /// A single JSON report
    Json,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub rules: PathBuf,
    pub search_dirs: Vec<PathBuf>,
    pub format: OutputFormat,
}

#[derive(Debug)]
pub enum Outcome {
    /// No record documents were discovered.
    NothingToValidate,
    Completed(ValidationReport),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::NothingToValidate => 0,
            Outcome::Completed(report) if report.is_success() => 0,
            Outcome::Completed(_) => 1,
        }
    }
}

/// Run a validation pass, writing the report to `out`.
///
/// Discovery happens before the rules document is read, so an empty
/// search never touches the rules file. Unreadable or malformed documents
/// abort the run with an error.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<Outcome> {
    let files = discover_record_files(&config.search_dirs);
    if files.is_empty() {
        writeln!(out, "{}", NOTHING_TO_VALIDATE)?;
        return Ok(Outcome::NothingToValidate);
    }

    let rules = RuleSet::load(&config.rules).with_context(|| {
        format!("Failed to load rules document {}", config.rules.display())
    })?;
    info!(
        "Loaded rules from {} ({} validators enabled)",
        config.rules.display(),
        rules.enabled_kinds().len()
    );

    let mut report = ValidationReport::new();
    for path in &files {
        let document = RecordDocument::load(path)
            .with_context(|| format!("Failed to load record document {}", path.display()))?;

        if config.format == OutputFormat::Text {
            writeln!(out, "Validating {}...", document.file)?;
        }

        let findings = validate_document(&rules, &document);
        report.add_file(FileReport {
            file: document.file.clone(),
            resources: document.resources.len(),
            findings,
        });
    }

    match config.format {
        OutputFormat::Text => {
            if report.is_success() {
                writeln!(out, "{}", SUCCESS)?;
            } else {
                write!(out, "{}", report)?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }

    info!(
        "Checked {} resources in {} files, {} findings",
        report.summary.resources_checked,
        report.summary.files_checked,
        report.total_findings()
    );
    Ok(Outcome::Completed(report))
}

//! Library interface for the yamlcheck CLI

pub mod discovery;
pub mod run;

pub use discovery::{discover_record_files, DEFAULT_SEARCH_DIRS};
pub use run::{run, Outcome, OutputFormat, RunConfig};

/// Printed when the rules document argument is missing.
pub const USAGE: &str = "Usage: yamlcheck <conditions_file>";

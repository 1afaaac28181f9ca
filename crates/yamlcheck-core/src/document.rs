//! Record documents: a file identifier plus the resources it defines

use crate::error::{Error, Result};
use crate::resource::Resource;
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordDocument {
    /// Identifier used in findings, normally the path as discovered.
    pub file: String,
    pub resources: Vec<Resource>,
}

impl RecordDocument {
    pub fn new(file: impl Into<String>, resources: Vec<Resource>) -> Self {
        Self {
            file: file.into(),
            resources,
        }
    }

    /// Read and parse a record document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(path.display().to_string(), &content)
    }

    /// Parse a record document whose top level is a sequence of mappings.
    ///
    /// An empty document yields no resources.
    pub fn from_yaml_str(file: impl Into<String>, content: &str) -> Result<Self> {
        let file = file.into();
        if content.trim().is_empty() {
            return Ok(Self::new(file, Vec::new()));
        }
        let root: Value = serde_yaml::from_str(content)?;

        let items = match root {
            Value::Null => Vec::new(),
            Value::Sequence(items) => items,
            other => {
                return Err(Error::MalformedDocument {
                    file,
                    message: format!(
                        "expected a sequence of resources, found {}",
                        crate::value::type_tag(&other)
                    ),
                })
            }
        };

        let mut resources = Vec::with_capacity(items.len());
        for (position, item) in items.into_iter().enumerate() {
            match item {
                Value::Mapping(fields) => resources.push(Resource::new(position, fields)),
                other => {
                    return Err(Error::MalformedDocument {
                        file,
                        message: format!(
                            "resource at position {} is a {}, not a mapping",
                            position,
                            crate::value::type_tag(&other)
                        ),
                    })
                }
            }
        }

        debug!("Parsed {} resources from {}", resources.len(), file);
        Ok(Self { file, resources })
    }
}

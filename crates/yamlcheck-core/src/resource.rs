//! Resource records as seen by the validators

use crate::value::render_scalar;
use serde_yaml::{Mapping, Value};

/// Field that every resource must carry for findings to name it.
pub const NAME_FIELD: &str = "name";

static NULL: Value = Value::Null;

/// Outcome of looking up a field on a resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldState<'a> {
    /// The key does not exist.
    Absent,
    /// The key exists with a null value.
    Null,
    /// The key exists with a non-null value.
    Present(&'a Value),
}

impl<'a> FieldState<'a> {
    /// True for `Null` and `Present`, mirroring key membership.
    pub fn exists(&self) -> bool {
        !matches!(self, FieldState::Absent)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, FieldState::Present(_))
    }

    /// The raw value for any existing key, `Null` included.
    pub fn value(&self) -> Option<&'a Value> {
        match *self {
            FieldState::Absent => None,
            FieldState::Null => Some(&NULL),
            FieldState::Present(value) => Some(value),
        }
    }
}

/// One record from a record document.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    position: usize,
    fields: Mapping,
}

impl Resource {
    pub fn new(position: usize, fields: Mapping) -> Self {
        Self { position, fields }
    }

    /// Zero-based position of this resource within its document.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn fields(&self) -> &Mapping {
        &self.fields
    }

    pub fn field(&self, key: &str) -> FieldState<'_> {
        match self.fields.get(key) {
            None => FieldState::Absent,
            Some(value) if value.is_null() => FieldState::Null,
            Some(value) => FieldState::Present(value),
        }
    }

    /// The rendered `name` field, or `None` when it is missing, null, or not a scalar.
    pub fn name(&self) -> Option<String> {
        self.fields.get(NAME_FIELD).and_then(render_scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(src: &str) -> Resource {
        let fields: Mapping = serde_yaml::from_str(src).expect("valid mapping");
        Resource::new(0, fields)
    }

    #[test]
    fn test_field_states() {
        let r = resource("name: web\nport: 80\nzone: ~\n");
        assert_eq!(r.field("zone"), FieldState::Null);
        assert_eq!(r.field("missing"), FieldState::Absent);
        assert!(r.field("port").is_set());
        assert!(r.field("zone").exists());
        assert!(!r.field("zone").is_set());
        assert_eq!(r.field("zone").value(), Some(&Value::Null));
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(resource("name: web").name(), Some("web".to_string()));
        assert_eq!(resource("name: 7").name(), Some("7".to_string()));
        assert_eq!(resource("name: ~").name(), None);
        assert_eq!(resource("id: 1").name(), None);
        assert_eq!(resource("name: [a]").name(), None);
    }
}

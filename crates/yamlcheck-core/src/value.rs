//! Value policy shared by the validators.
//!
//! Type matching is nominal: every YAML value maps to exactly one tag and
//! a rule matches only on tag equality, so `true` is never an `int` and `1`
//! is never a `float`. Set membership is strict value equality with no
//! numeric or boolean coercion.

use serde_yaml::Value;

/// Tags understood by the `type` rule table.
pub const KNOWN_TYPE_TAGS: &[&str] = &["str", "int", "float", "bool", "list", "dict", "NoneType"];

/// Nominal type tag of a value.
pub fn type_tag(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "dict",
        Value::Tagged(tagged) => type_tag(&tagged.value),
    }
}

/// Strict equality used for allowed-value membership.
///
/// `serde_yaml` already compares integers and floats as distinct number
/// kinds, and booleans never compare equal to numbers.
pub fn strictly_equal(left: &Value, right: &Value) -> bool {
    left == right
}

/// Character count of the canonical string form of a string or integer.
///
/// Returns `None` for every other kind of value; those are not length checked.
pub fn canonical_length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Number(n) if !n.is_f64() => Some(n.to_string().chars().count()),
        Value::Tagged(tagged) => canonical_length(&tagged.value),
        _ => None,
    }
}

/// Render a scalar the way it appears inside a message, e.g. a resource name.
///
/// Returns `None` for null and for non-scalar values.
pub fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(render_bool(*b).to_string()),
        Value::Number(n) => Some(render_number(n)),
        Value::Tagged(tagged) => render_scalar(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Render a literal in list-literal notation: `'text'`, `1`, `True`, `None`.
pub fn render_literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(b) => render_bool(*b).to_string(),
        Value::Number(n) => render_number(n),
        Value::String(s) => quote(s),
        Value::Sequence(items) => render_literal_list(items),
        Value::Mapping(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", render_literal(k), render_literal(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => render_literal(&tagged.value),
    }
}

/// Render a list of literals, e.g. `['a', 'b', 3]`.
pub fn render_literal_list(items: &[Value]) -> String {
    let rendered: Vec<String> = items.iter().map(render_literal).collect();
    format!("[{}]", rendered.join(", "))
}

fn render_bool(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

fn render_number(n: &serde_yaml::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => {
            if f.is_nan() {
                "nan".to_string()
            } else if f.is_infinite() {
                let sign = if f < 0.0 { "-" } else { "" };
                format!("{}inf", sign)
            } else if f.fract() == 0.0 && f.abs() < 1e16 {
                format!("{:.1}", f)
            } else {
                format!("{}", f)
            }
        }
        _ => n.to_string(),
    }
}

fn quote(s: &str) -> String {
    let delimiter = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(delimiter);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

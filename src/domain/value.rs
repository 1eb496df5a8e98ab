//! Environment variable domain types
//!
//! Provides EnvValue, the closed set of value kinds a variable can carry,
//! and EnvVar, one name/value pair ready for printing.

use serde_json::Value;
use std::fmt;

/// Value of an emitted variable
///
/// Parameter-mode values are always `String`; JSON-mode values keep the kind
/// of the JSON field they came from.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvValue {
    /// Text, written verbatim
    String(String),
    /// JSON number, written in its JSON textual form
    Number(serde_json::Number),
    /// `true` or `false`
    Boolean(bool),
    /// JSON null, written as an empty string
    Null,
    /// Nested JSON object or array, written as compact JSON
    Object(Value),
}

impl From<Value> for EnvValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => EnvValue::String(s),
            Value::Number(n) => EnvValue::Number(n),
            Value::Bool(b) => EnvValue::Boolean(b),
            Value::Null => EnvValue::Null,
            nested @ (Value::Object(_) | Value::Array(_)) => EnvValue::Object(nested),
        }
    }
}

impl From<String> for EnvValue {
    fn from(value: String) -> Self {
        EnvValue::String(value)
    }
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        EnvValue::String(value.to_string())
    }
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvValue::String(s) => f.write_str(s),
            EnvValue::Number(n) => write!(f, "{}", n),
            EnvValue::Boolean(b) => write!(f, "{}", b),
            EnvValue::Null => Ok(()),
            EnvValue::Object(v) => write!(f, "{}", v),
        }
    }
}

/// A variable ready to be printed
#[derive(Debug, Clone, PartialEq)]
pub struct EnvVar {
    /// Variable name
    pub name: String,
    /// Variable value
    pub value: EnvValue,
}

impl EnvVar {
    /// Create a new variable
    pub fn new(name: impl Into<String>, value: impl Into<EnvValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_kinds() {
        assert_eq!(EnvValue::from(json!("x")), EnvValue::String("x".to_string()));
        assert_eq!(EnvValue::from(json!(true)), EnvValue::Boolean(true));
        assert_eq!(EnvValue::from(json!(null)), EnvValue::Null);
        assert!(matches!(EnvValue::from(json!(1)), EnvValue::Number(_)));
        assert!(matches!(EnvValue::from(json!([1, 2])), EnvValue::Object(_)));
        assert!(matches!(EnvValue::from(json!({"a": 1})), EnvValue::Object(_)));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(EnvValue::from(json!(1)).to_string(), "1");
        assert_eq!(EnvValue::from(json!(2.5)).to_string(), "2.5");
        assert_eq!(EnvValue::from(json!(-7)).to_string(), "-7");
        assert_eq!(EnvValue::from(json!(false)).to_string(), "false");
        assert_eq!(EnvValue::Null.to_string(), "");
        assert_eq!(
            EnvValue::from(json!({"k": [1, "v"]})).to_string(),
            r#"{"k":[1,"v"]}"#
        );
    }

    #[test]
    fn test_string_display_is_verbatim() {
        let value = EnvValue::from("it's \"quoted\"");
        assert_eq!(value.to_string(), "it's \"quoted\"");
    }
}

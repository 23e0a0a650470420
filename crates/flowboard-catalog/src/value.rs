//! Parameter value and value type definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// A parameter value carried by a pipeline step.
///
/// Values are a small tagged union rather than arbitrary JSON: assignment is
/// permissive (any variant can be stored under any key) and conformance with
/// the declared [`ValueType`] is checked by the validator, not at write time.
///
/// The untagged representation round-trips the plain JSON the execution
/// engine consumes (`"text"`, `42`, `true`, `{...}`, `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Explicit null, treated the same as an absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value.
    String(String),
    /// Nested string-keyed mapping.
    Map(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    /// Returns whether this value counts as unset for required-parameter
    /// checks: null or the empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            ParamValue::Null => true,
            ParamValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns the value type this value inhabits, or `None` for null.
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            ParamValue::Null => None,
            ParamValue::Bool(_) => Some(ValueType::Bool),
            ParamValue::Number(_) => Some(ValueType::Number),
            ParamValue::String(_) => Some(ValueType::String),
            ParamValue::Map(_) => Some(ValueType::Map),
        }
    }

    /// Returns the contained string, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Declared type of an operation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ValueType {
    /// Text parameter.
    String,
    /// Numeric parameter.
    Number,
    /// Boolean parameter.
    Bool,
    /// String-keyed mapping parameter.
    Map,
}

impl ValueType {
    /// Returns whether the given value conforms to this type.
    ///
    /// Null never conforms; it is handled separately as an unset value.
    pub fn matches(&self, value: &ParamValue) -> bool {
        value.value_type() == Some(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_round_trip() {
        let value = ParamValue::Map(BTreeMap::from([
            ("path".to_owned(), ParamValue::from("data.csv")),
            ("limit".to_owned(), ParamValue::from(10.0)),
            ("strict".to_owned(), ParamValue::from(true)),
        ]));

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"limit":10.0,"path":"data.csv","strict":true}"#);

        let parsed: ParamValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_null_parses() {
        let parsed: ParamValue = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, ParamValue::Null);
        assert!(parsed.is_blank());
    }

    #[test]
    fn test_blank_values() {
        assert!(ParamValue::from("").is_blank());
        assert!(!ParamValue::from("x").is_blank());
        assert!(!ParamValue::from(0.0).is_blank());
        assert!(!ParamValue::from(false).is_blank());
    }

    #[test]
    fn test_type_matching() {
        assert!(ValueType::String.matches(&ParamValue::from("a")));
        assert!(ValueType::Number.matches(&ParamValue::from(1.5)));
        assert!(!ValueType::Number.matches(&ParamValue::from("1.5")));
        assert!(!ValueType::Bool.matches(&ParamValue::Null));
    }

    #[test]
    fn test_value_type_wire_names() {
        let json = serde_json::to_string(&ValueType::String).unwrap();
        assert_eq!(json, "\"string\"");
        let parsed: ValueType = serde_json::from_str("\"map\"").unwrap();
        assert_eq!(parsed, ValueType::Map);
    }
}

//! Ability parameters.
//!
//! An ability instance on a card carries a small parameter map, e.g.
//! `amount = 4` for a heal or `card = "skeleton", count = 2` for a summon.
//! The engine reads the keys it knows and ignores the rest.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A parameter value: number or text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Text(String),
}

impl ParamValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            ParamValue::Text(_) => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Int(_) => None,
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(i64::from(v))
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

/// Parameter map of an ability instance.
pub type Params = FxHashMap<String, ParamValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_value_int() {
        let val: ParamValue = 4i32.into();
        assert_eq!(val.as_int(), Some(4));
        assert_eq!(val.as_text(), None);
    }

    #[test]
    fn test_param_value_text() {
        let val: ParamValue = "skeleton".into();
        assert_eq!(val.as_text(), Some("skeleton"));
        assert_eq!(val.as_int(), None);
    }

    #[test]
    fn test_untagged_json() {
        let params: Params = serde_json::from_str(r#"{ "amount": 3, "card": "goblin" }"#).unwrap();
        assert_eq!(params["amount"], ParamValue::Int(3));
        assert_eq!(params["card"], ParamValue::Text("goblin".into()));
    }
}

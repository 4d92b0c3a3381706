//! Caller-supplied variable attributes
//!
//! Attributes are written verbatim: no key validation and no coercion beyond
//! mapping each [`AttrValue`] onto the matching NetCDF attribute type.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute name to value, written in key order
pub type Attributes = BTreeMap<String, AttrValue>;

/// Primitive attribute values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<AttrValue> for netcdf::AttributeValue {
    fn from(value: AttrValue) -> Self {
        match value {
            AttrValue::Str(s) => netcdf::AttributeValue::Str(s),
            AttrValue::Int(i) => netcdf::AttributeValue::Longlong(i),
            AttrValue::Float(f) => netcdf::AttributeValue::Double(f),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        AttrValue::Float(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_numbers_keep_their_kind() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"units": "K", "count": 3, "scale": 0.5}"#).unwrap();
        assert_eq!(attrs["units"], AttrValue::Str("K".to_string()));
        assert_eq!(attrs["count"], AttrValue::Int(3));
        assert_eq!(attrs["scale"], AttrValue::Float(0.5));
    }

    #[test]
    fn maps_onto_netcdf_attribute_types() {
        assert!(matches!(
            netcdf::AttributeValue::from(AttrValue::from("degC")),
            netcdf::AttributeValue::Str(s) if s == "degC"
        ));
        assert!(matches!(
            netcdf::AttributeValue::from(AttrValue::from(7)),
            netcdf::AttributeValue::Longlong(7)
        ));
        assert!(matches!(
            netcdf::AttributeValue::from(AttrValue::from(1.5f32)),
            netcdf::AttributeValue::Double(v) if v == 1.5
        ));
    }
}

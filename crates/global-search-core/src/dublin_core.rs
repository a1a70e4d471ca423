//! Dublin Core record shape used by the global-search index.
//!
//! Every record family is reduced to the same fifteen elements. Each element
//! is a list of strings and may be [`Field::Absent`] when the upstream schema
//! had nothing to say about it; absent elements are left out of the JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::field::Field;

/// Key under which upstream records nest their Dublin Core elements.
const METADATA_KEY: &str = "metadata";

/// A record in the common Dublin Core JSON shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DublinCoreRecord {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub contributors: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub titles: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub creators: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub identifiers: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub relations: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub rights: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub dates: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub subjects: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub descriptions: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub publishers: Field<Vec<String>>,
    /// Resource types, usually vocabulary paths before post-processing.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub types: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub sources: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub languages: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub locations: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub formats: Field<Vec<String>>,
}

impl DublinCoreRecord {
    /// Read a record from upstream JSON.
    ///
    /// The elements are taken from the `"metadata"` object when there is
    /// one, otherwise from the top level. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] when the input is not a JSON object,
    /// and [`Error::Serialization`] when an element has the wrong shape.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::InvalidRecord(format!(
                "expected a JSON object, found {}",
                json_kind(value)
            )));
        };

        let source = match map.get(METADATA_KEY) {
            Some(metadata @ Value::Object(_)) => metadata,
            _ => value,
        };

        Ok(Self::deserialize(source)?)
    }

    /// Render the record as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Schema-less telemetry row.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Scalar;

/// One record of a category table: field name → scalar, tagged with the
/// category it came from. Rows are read-only inputs to the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub category: String,
    pub fields: BTreeMap<String, Scalar>,
}

impl Row {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insertion.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Scalar> {
        self.fields.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Scalar>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a row from a decoded JSON object.
    pub fn from_json_object(
        category: impl Into<String>,
        object: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            category: category.into(),
            fields: object
                .into_iter()
                .map(|(k, v)| (k, Scalar::from(v)))
                .collect(),
        }
    }
}

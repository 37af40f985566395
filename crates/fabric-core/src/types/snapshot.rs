//! One full diagnostic capture, already materialized in memory.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Row, Scalar};
use crate::errors::SnapshotError;

/// Precomputed per-category aggregate object (field name → value). Only the
/// numeric fields are read by the engine.
pub type Summary = BTreeMap<String, Scalar>;

/// Category id → rows, plus summary objects keyed by summary key (usually
/// the category id). Immutable once handed to the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    categories: BTreeMap<String, Vec<Row>>,
    #[serde(default)]
    summaries: BTreeMap<String, Summary>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rows to a category. Each row is retagged with the category.
    pub fn add_rows(&mut self, category: &str, rows: impl IntoIterator<Item = Row>) {
        let slot = self.categories.entry(category.to_string()).or_default();
        slot.extend(rows.into_iter().map(|mut row| {
            if row.category != category {
                row.category = category.to_string();
            }
            row
        }));
    }

    pub fn with_rows(mut self, category: &str, rows: impl IntoIterator<Item = Row>) -> Self {
        self.add_rows(category, rows);
        self
    }

    pub fn set_summary(&mut self, key: &str, summary: Summary) {
        self.summaries.insert(key.to_string(), summary);
    }

    pub fn with_summary(mut self, key: &str, summary: Summary) -> Self {
        self.set_summary(key, summary);
        self
    }

    /// Rows of a category; empty when the category is absent.
    pub fn rows(&self, category: &str) -> &[Row] {
        self.categories.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn summary(&self, key: &str) -> Option<&Summary> {
        self.summaries.get(key)
    }

    /// Every category or summary key present in the snapshot, sorted.
    pub fn keys(&self) -> BTreeSet<&str> {
        self.categories
            .keys()
            .chain(self.summaries.keys())
            .map(String::as_str)
            .collect()
    }

    pub fn total_rows(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty) && self.summaries.is_empty()
    }

    /// Decode a snapshot from JSON.
    ///
    /// Accepted shape:
    /// `{ "categories": { "<id>": { "rows": [ {..}, .. ], "summary": {..} } },
    ///    "summaries": { "<key>": {..} } }`
    ///
    /// A category may also be given as a bare array of rows, and a document
    /// without a `categories` key is read as the category map itself.
    pub fn from_json(input: &str) -> Result<Self, SnapshotError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, SnapshotError> {
        let Value::Object(mut root) = value else {
            return Err(SnapshotError::MalformedCategory {
                category: "<root>".to_string(),
                message: "snapshot must be a JSON object".to_string(),
            });
        };

        let mut snapshot = Self::new();

        if let Some(summaries) = root.remove("summaries") {
            let Value::Object(summaries) = summaries else {
                return Err(SnapshotError::MalformedCategory {
                    category: "summaries".to_string(),
                    message: "expected an object of summary objects".to_string(),
                });
            };
            for (key, summary) in summaries {
                let summary = decode_summary(&key, summary)?;
                snapshot.set_summary(&key, summary);
            }
        }

        let categories = match root.remove("categories") {
            Some(Value::Object(categories)) => categories,
            Some(_) => {
                return Err(SnapshotError::MalformedCategory {
                    category: "categories".to_string(),
                    message: "expected an object keyed by category id".to_string(),
                })
            }
            None => root,
        };

        for (category, body) in categories {
            match body {
                Value::Array(items) => {
                    let rows = decode_rows(&category, items)?;
                    snapshot.add_rows(&category, rows);
                }
                Value::Object(mut body) => {
                    if let Some(rows) = body.remove("rows") {
                        let Value::Array(items) = rows else {
                            return Err(SnapshotError::MalformedCategory {
                                category,
                                message: "\"rows\" must be an array".to_string(),
                            });
                        };
                        let rows = decode_rows(&category, items)?;
                        snapshot.add_rows(&category, rows);
                    } else {
                        snapshot.categories.entry(category.clone()).or_default();
                    }
                    if let Some(summary) = body.remove("summary") {
                        if !summary.is_null() {
                            let summary = decode_summary(&category, summary)?;
                            snapshot.set_summary(&category, summary);
                        }
                    }
                }
                Value::Null => {
                    snapshot.categories.entry(category).or_default();
                }
                _ => {
                    return Err(SnapshotError::MalformedCategory {
                        category,
                        message: "expected an array of rows or a {rows, summary} object"
                            .to_string(),
                    })
                }
            }
        }

        Ok(snapshot)
    }
}

fn decode_rows(category: &str, items: Vec<Value>) -> Result<Vec<Row>, SnapshotError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(object) => Ok(Row::from_json_object(category, object)),
            _ => Err(SnapshotError::MalformedCategory {
                category: category.to_string(),
                message: format!("row {index} is not an object"),
            }),
        })
        .collect()
}

fn decode_summary(key: &str, value: Value) -> Result<Summary, SnapshotError> {
    match value {
        Value::Object(object) => Ok(object
            .into_iter()
            .map(|(k, v)| (k, Scalar::from(v)))
            .collect()),
        _ => Err(SnapshotError::MalformedCategory {
            category: key.to_string(),
            message: "summary must be an object".to_string(),
        }),
    }
}

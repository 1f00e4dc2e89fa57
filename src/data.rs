//! Submitted form input.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Key/value pairs submitted with a request.
///
/// This is the decoded request body (or query string, for GET forms);
/// how the bytes were parsed is the HTTP layer's concern. Values are
/// always strings, matching what an HTML form submits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    values: HashMap<String, String>,
}

impl FormData {
    /// Creates an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a submission from key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Creates a submission from a JSON object, stringifying scalar
    /// values and skipping arrays, objects and nulls.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let mut data = Self::new();
        if let Some(object) = value.as_object() {
            for (key, value) in object {
                let text = match value {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Bool(b) => b.to_string(),
                    serde_json::Value::Number(n) => n.to_string(),
                    _ => continue,
                };
                data.insert(key, text);
            }
        }
        data
    }

    /// Inserts a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns a submitted value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns whether a key was submitted at all.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns whether nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of submitted pairs.
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

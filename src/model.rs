//! The persistence seam between a form and its backing record.

use std::collections::HashMap;

use thiserror::Error;

/// Errors reported by a bound model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The model has no such attribute.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// The attribute rejected the submitted value.
    #[error("invalid value for attribute `{attribute}`: {detail}")]
    InvalidValue { attribute: String, detail: String },

    /// The model failed to persist.
    #[error("persistence failed: {0}")]
    Persistence(String),
}

/// A record a form can read attributes from, write accepted values to,
/// and ask to persist itself.
///
/// Forms never interpret attribute values; everything crosses this seam
/// as strings and the implementation decides how to coerce and store
/// them. `persist` is called at most once per submission cycle, after
/// every field has applied its value.
pub trait FormModel {
    /// Returns the current value of an attribute, if set.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Writes a submitted value into an attribute.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ModelError>;

    /// Persists the model.
    fn persist(&mut self) -> Result<(), ModelError>;
}

/// An in-memory [`FormModel`] backed by a string map.
///
/// Useful for prototyping and for forms whose accepted values are read
/// back out by the caller instead of being stored anywhere.
#[derive(Debug, Clone, Default)]
pub struct MapModel {
    attrs: HashMap<String, String>,
}

impl MapModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model pre-filled from attribute pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            attrs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

impl FormModel for MapModel {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attrs.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ModelError> {
        self.attrs.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn persist(&mut self) -> Result<(), ModelError> {
        Ok(())
    }
}

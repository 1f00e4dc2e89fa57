//! Field-type registry.
//!
//! Forms resolve type names (`"text"`, `"date"`, ...) through an
//! explicit registry of constructors instead of any runtime class
//! lookup, so an unknown type is a plain configuration error and custom
//! types are registered up front.

use std::collections::HashMap;

use crate::error::FormError;
use crate::field::Field;
use crate::fields;

/// Constructor signature: `(name, label)` to a fresh field.
pub type FieldConstructor = fn(&str, &str) -> Field;

/// Maps type names to field constructors.
#[derive(Clone)]
pub struct FieldRegistry {
    constructors: HashMap<String, FieldConstructor>,
}

impl std::fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("FieldRegistry")
            .field("types", &names)
            .finish()
    }
}

impl FieldRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Creates a registry with every built-in field type.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("text", fields::text);
        registry.register("hidden", fields::hidden);
        registry.register("password", fields::password);
        registry.register("email", fields::email);
        registry.register("number", fields::number);
        registry.register("date", fields::date);
        registry.register("file", fields::file);
        registry.register("image", fields::image);
        registry.register("textarea", fields::textarea);
        registry.register("select", fields::select);
        registry.register("radiogroup", fields::radiogroup);
        registry.register("checkbox", fields::checkbox);
        registry.register("submit", fields::submit);
        registry
    }

    /// Registers a constructor, replacing any previous one of the same
    /// name.
    pub fn register(&mut self, type_name: impl Into<String>, constructor: FieldConstructor) {
        self.constructors.insert(type_name.into(), constructor);
    }

    /// Returns whether a type name is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }

    /// Instantiates a field of the given type.
    pub fn create(&self, type_name: &str, name: &str, label: &str) -> Result<Field, FormError> {
        self.constructors
            .get(type_name)
            .map(|constructor| constructor(name, label))
            .ok_or_else(|| FormError::UnknownFieldType(type_name.to_string()))
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

//! Field value validators.
//!
//! Validators carry their own user-facing message so the rule compiler
//! can bake the field label into it, the way attribute labels flow into
//! framework validator output.

use chrono::NaiveDate;
use regex::Regex;

/// A single check over a submitted value.
pub trait Validator: Send + Sync {
    /// Validates a value, returning the message on failure.
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Returns the failure message.
    fn message(&self) -> &str;

    /// Whether this validator runs when the submitted value is empty.
    ///
    /// Only presence checks do; every other rule is skipped for empty
    /// input so optional fields stay optional.
    fn applies_to_empty(&self) -> bool {
        false
    }
}

/// Requires a non-blank value.
#[derive(Debug, Clone)]
pub struct Required {
    message: String,
}

impl Required {
    /// Creates the validator with the given failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Validator for Required {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn applies_to_empty(&self) -> bool {
        true
    }
}

/// Enforces a minimum length in characters.
#[derive(Debug, Clone)]
pub struct MinLength {
    min: usize,
    message: String,
}

impl MinLength {
    /// Creates the validator.
    pub fn new(min: usize, message: impl Into<String>) -> Self {
        Self {
            min,
            message: message.into(),
        }
    }
}

impl Validator for MinLength {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.chars().count() < self.min {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Enforces a maximum length in characters.
#[derive(Debug, Clone)]
pub struct MaxLength {
    max: usize,
    message: String,
}

impl MaxLength {
    /// Creates the validator.
    pub fn new(max: usize, message: impl Into<String>) -> Self {
        Self {
            max,
            message: message.into(),
        }
    }
}

impl Validator for MaxLength {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.chars().count() > self.max {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Accepts syntactically plausible email addresses.
#[derive(Debug, Clone)]
pub struct Email {
    pattern: Regex,
    message: String,
}

impl Email {
    /// Creates the validator.
    pub fn new(message: impl Into<String>) -> Self {
        // Constant pattern, cannot fail to compile.
        let pattern = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email pattern is valid");
        Self {
            pattern,
            message: message.into(),
        }
    }
}

impl Validator for Email {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Accepts http/https URLs.
#[derive(Debug, Clone)]
pub struct Url {
    message: String,
}

impl Url {
    /// Creates the validator.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Validator for Url {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Matches a caller-supplied regex.
#[derive(Debug, Clone)]
pub struct Pattern {
    pattern: Regex,
    message: String,
}

impl Pattern {
    /// Creates the validator; fails if the pattern does not compile.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for Pattern {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Requires a parseable floating point number.
#[derive(Debug, Clone)]
pub struct Numeric {
    message: String,
}

impl Numeric {
    /// Creates the validator.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Validator for Numeric {
    fn validate(&self, value: &str) -> Result<(), String> {
        value
            .trim()
            .parse::<f64>()
            .map(|_| ())
            .map_err(|_| self.message.clone())
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Requires a parseable integer.
#[derive(Debug, Clone)]
pub struct Integer {
    message: String,
}

impl Integer {
    /// Creates the validator.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Validator for Integer {
    fn validate(&self, value: &str) -> Result<(), String> {
        value
            .trim()
            .parse::<i64>()
            .map(|_| ())
            .map_err(|_| self.message.clone())
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Requires an ISO `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone)]
pub struct DateFormat {
    message: String,
}

impl DateFormat {
    /// Creates the validator.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Validator for DateFormat {
    fn validate(&self, value: &str) -> Result<(), String> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map(|_| ())
            .map_err(|_| self.message.clone())
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Bounds a numeric value from below and/or above.
#[derive(Debug, Clone)]
pub struct Range {
    min: Option<f64>,
    max: Option<f64>,
    message: String,
}

impl Range {
    /// Creates the validator with optional bounds.
    pub fn new(min: Option<f64>, max: Option<f64>, message: impl Into<String>) -> Self {
        Self {
            min,
            max,
            message: message.into(),
        }
    }
}

impl Validator for Range {
    fn validate(&self, value: &str) -> Result<(), String> {
        let number: f64 = value
            .trim()
            .parse()
            .map_err(|_| self.message.clone())?;

        if self.min.is_some_and(|min| number < min) {
            return Err(self.message.clone());
        }
        if self.max.is_some_and(|max| number > max) {
            return Err(self.message.clone());
        }
        Ok(())
    }

    fn message(&self) -> &str {
        &self.message
    }
}

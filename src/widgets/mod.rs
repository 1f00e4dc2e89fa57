//! HTML input widgets.
//!
//! A widget knows how to materialize one kind of input from a field
//! name, an optional current value, and extra HTML attributes. Markup
//! uses Bootstrap 3 classes, matching the form chrome produced by the
//! renderer.

mod bootstrap;

pub use bootstrap::{Checkbox, FileInput, RadioGroup, Select, TextInput, Textarea};

use std::collections::HashMap;

/// Extra HTML attributes applied to a widget.
#[derive(Debug, Clone, Default)]
pub struct WidgetAttrs {
    attrs: HashMap<String, String>,
}

impl WidgetAttrs {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Returns an attribute value.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Returns whether no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Builder variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Renders the attributes (excluding `skip` keys) as a leading-space
    /// prefixed HTML fragment, or an empty string when nothing applies.
    pub fn to_html_except(&self, skip: &[&str]) -> String {
        self.attrs
            .iter()
            .filter(|(key, _)| !skip.contains(&key.as_str()))
            .map(|(key, value)| format!(r#" {key}="{}""#, html_escape(value)))
            .collect()
    }

    /// Renders every attribute as an HTML fragment.
    pub fn to_html(&self) -> String {
        self.to_html_except(&[])
    }
}

/// A renderable form input.
pub trait Widget: Send + Sync {
    /// Renders the widget as HTML.
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String;

    /// Returns the HTML input type.
    fn input_type(&self) -> &str {
        "text"
    }
}

/// A hidden input.
#[derive(Debug, Clone, Default)]
pub struct HiddenInput;

impl Widget for HiddenInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        format!(
            r#"<input type="hidden" name="{}"{}{}>"#,
            html_escape(name),
            value_attr,
            attrs.to_html()
        )
    }

    fn input_type(&self) -> &str {
        "hidden"
    }
}

/// A submit button.
#[derive(Debug, Clone)]
pub struct SubmitButton {
    /// Button caption.
    pub caption: String,
}

impl SubmitButton {
    /// Creates a button with the given caption.
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
        }
    }
}

impl Widget for SubmitButton {
    fn render(&self, name: &str, _value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let class = attrs
            .get("class")
            .cloned()
            .unwrap_or_else(|| "btn btn-primary".to_string());
        format!(
            r#"<button type="submit" class="{}" name="{}"{}>{}</button>"#,
            html_escape(&class),
            html_escape(name),
            attrs.to_html_except(&["class"]),
            html_escape(&self.caption)
        )
    }

    fn input_type(&self) -> &str {
        "submit"
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

//! A single form field: an input bound to a model attribute, or a
//! button. Both live in the same form collection so adding, removing
//! and rendering share one code path.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::Div;

use crate::data::FormData;
use crate::model::{FormModel, ModelError};
use crate::widgets::{html_escape, Widget, WidgetAttrs};

/// Whether a field collects input or triggers submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Collects a value and applies it to the model.
    Input,
    /// Renders in the form footer and applies nothing.
    Button,
}

/// One entry in a form's field collection.
pub struct Field {
    /// Field name, unique within a form.
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// Registry type tag (`"text"`, `"file"`, `"submit"`, ...).
    pub type_name: String,
    /// Input or button.
    pub kind: FieldKind,
    /// Validation rule string, e.g. `"required|max:80"`.
    pub rule: Option<String>,
    /// Model attribute the value is applied to; defaults to `name`.
    pub attribute: String,
    /// Current value (submitted, from the model, or initial).
    pub value: Option<String>,
    /// Validation messages for the last submission.
    pub messages: Vec<String>,
    /// Extra HTML attributes for the widget.
    pub attrs: WidgetAttrs,
    /// The widget that materializes the input.
    pub widget: Box<dyn Widget>,
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("kind", &self.kind)
            .field("rule", &self.rule)
            .field("value", &self.value)
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}

impl Field {
    /// Creates an input field.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        type_name: impl Into<String>,
        widget: impl Widget + 'static,
    ) -> Self {
        let name = name.into();
        Self {
            attribute: name.clone(),
            name,
            label: label.into(),
            type_name: type_name.into(),
            kind: FieldKind::Input,
            rule: None,
            value: None,
            messages: Vec::new(),
            attrs: WidgetAttrs::new(),
            widget: Box::new(widget),
        }
    }

    /// Creates a button field.
    pub fn button(
        name: impl Into<String>,
        label: impl Into<String>,
        type_name: impl Into<String>,
        widget: impl Widget + 'static,
    ) -> Self {
        Self {
            kind: FieldKind::Button,
            ..Self::new(name, label, type_name, widget)
        }
    }

    /// Sets the validation rule string.
    pub fn rule(&mut self, rule: impl Into<String>) -> &mut Self {
        let rule = rule.into();
        self.rule = if rule.is_empty() { None } else { Some(rule) };
        self
    }

    /// Sets the model attribute the value is applied to.
    pub fn attribute(&mut self, attribute: impl Into<String>) -> &mut Self {
        self.attribute = attribute.into();
        self
    }

    /// Sets the initial value.
    pub fn value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    /// Sets an extra widget attribute.
    pub fn attr(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attrs.set(key, value);
        self
    }

    /// Whether this field forces multipart encoding.
    pub fn is_file(&self) -> bool {
        matches!(self.type_name.as_str(), "file" | "image")
    }

    /// Whether the rule string contains a presence check.
    pub fn is_required(&self) -> bool {
        self.rule
            .as_deref()
            .is_some_and(|rule| rule.split('|').any(|token| token.trim() == "required"))
    }

    /// Pulls the submitted value for this field into the model.
    ///
    /// Buttons and uploads apply nothing (upload handling belongs to the
    /// HTTP layer). Absent checkboxes apply `"false"`, since browsers
    /// omit unchecked boxes from the submission.
    pub fn apply_value(
        &self,
        data: &FormData,
        model: &mut dyn FormModel,
    ) -> Result<(), ModelError> {
        if self.kind == FieldKind::Button || self.is_file() {
            return Ok(());
        }
        if self.type_name == "checkbox" {
            let value = data.get(&self.name).unwrap_or("false");
            return model.set_attribute(&self.attribute, value);
        }
        match data.get(&self.name) {
            Some(value) => model.set_attribute(&self.attribute, value),
            None => Ok(()),
        }
    }

    /// Renders the widget alone.
    pub fn widget_html(&self) -> String {
        self.widget.render(&self.name, self.value.as_deref(), &self.attrs)
    }

    /// Renders the full field block: label, input and messages in a
    /// Bootstrap 3 form group. Hidden fields and buttons render as bare
    /// widgets; `read_only` swaps the input for static text.
    pub fn block(&self, read_only: bool) -> String {
        if self.kind == FieldKind::Button || self.type_name == "hidden" {
            return self.widget_html();
        }

        let wrapper_class = if self.messages.is_empty() {
            "form-group".to_string()
        } else {
            "form-group has-error".to_string()
        };

        let id = self.name.clone();
        let label_text = if self.is_required() {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        };
        let label_el = html! {
            label.for_(#id).class("control-label") { #label_text }
        };

        let control = if read_only {
            let text = self.value.clone().unwrap_or_default();
            format!(
                r#"<p class="form-control-static">{}</p>"#,
                html_escape(&text)
            )
        } else {
            self.widget_html()
        };

        html! { div.class(#wrapper_class) }
            .raw(label_el.render())
            .raw(&control)
            .children(&self.messages, |message, div: Element<Div>| {
                div.class("help-block").text(message)
            })
            .render()
    }
}

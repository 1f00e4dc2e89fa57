//! Bootstrap 3 form controls.

use super::{html_escape, Widget, WidgetAttrs};

fn control_class(attrs: &WidgetAttrs) -> String {
    match attrs.get("class") {
        Some(extra) => format!("form-control {extra}"),
        None => "form-control".to_string(),
    }
}

/// A single-line `<input>` of a configurable type.
#[derive(Debug, Clone)]
pub struct TextInput {
    input_type: String,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
        }
    }
}

impl TextInput {
    /// Creates a plain text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a password input.
    pub fn password() -> Self {
        Self {
            input_type: "password".to_string(),
        }
    }

    /// Creates an email input.
    pub fn email() -> Self {
        Self {
            input_type: "email".to_string(),
        }
    }

    /// Creates a number input.
    pub fn number() -> Self {
        Self {
            input_type: "number".to_string(),
        }
    }

    /// Creates a date input.
    pub fn date() -> Self {
        Self {
            input_type: "date".to_string(),
        }
    }
}

impl Widget for TextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        format!(
            r#"<input type="{}" class="{}" id="{}" name="{}"{}{}>"#,
            self.input_type,
            control_class(attrs),
            html_escape(name),
            html_escape(name),
            value_attr,
            attrs.to_html_except(&["class"])
        )
    }

    fn input_type(&self) -> &str {
        &self.input_type
    }
}

/// A file upload input. Never renders a value; browsers ignore it and
/// echoing a path would leak it.
#[derive(Debug, Clone, Default)]
pub struct FileInput {
    accept: Option<String>,
}

impl FileInput {
    /// Creates a file input accepting anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a file input restricted to images.
    pub fn image() -> Self {
        Self {
            accept: Some("image/*".to_string()),
        }
    }
}

impl Widget for FileInput {
    fn render(&self, name: &str, _value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let accept_attr = self
            .accept
            .as_ref()
            .map(|a| format!(r#" accept="{}""#, html_escape(a)))
            .unwrap_or_default();
        format!(
            r#"<input type="file" id="{}" name="{}"{}{}>"#,
            html_escape(name),
            html_escape(name),
            accept_attr,
            attrs.to_html()
        )
    }

    fn input_type(&self) -> &str {
        "file"
    }
}

/// A multi-line `<textarea>`.
#[derive(Debug, Clone)]
pub struct Textarea {
    /// Visible rows.
    pub rows: usize,
}

impl Default for Textarea {
    fn default() -> Self {
        Self { rows: 5 }
    }
}

impl Textarea {
    /// Creates a textarea with the given number of rows.
    pub fn new(rows: usize) -> Self {
        Self { rows }
    }
}

impl Widget for Textarea {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        format!(
            r#"<textarea class="{}" id="{}" name="{}" rows="{}"{}>{}</textarea>"#,
            control_class(attrs),
            html_escape(name),
            html_escape(name),
            self.rows,
            attrs.to_html_except(&["class"]),
            value.map(html_escape).unwrap_or_default()
        )
    }

    fn input_type(&self) -> &str {
        "textarea"
    }
}

/// A `<select>` dropdown.
#[derive(Debug, Clone, Default)]
pub struct Select {
    /// Options as (value, caption) pairs.
    pub choices: Vec<(String, String)>,
    /// Whether to lead with an empty option.
    pub include_blank: bool,
}

impl Select {
    /// Creates a select over the given choices, with a leading blank
    /// option.
    pub fn new<V: Into<String>, C: Into<String>>(choices: Vec<(V, C)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(v, c)| (v.into(), c.into()))
                .collect(),
            include_blank: true,
        }
    }

    /// Drops the leading blank option.
    #[must_use]
    pub fn no_blank(mut self) -> Self {
        self.include_blank = false;
        self
    }
}

impl Widget for Select {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let mut options = String::new();
        if self.include_blank {
            options.push_str(r#"<option value=""></option>"#);
        }
        for (choice, caption) in &self.choices {
            let selected = if value == Some(choice.as_str()) {
                " selected"
            } else {
                ""
            };
            options.push_str(&format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                html_escape(choice),
                html_escape(caption)
            ));
        }
        format!(
            r#"<select class="{}" id="{}" name="{}"{}>{}</select>"#,
            control_class(attrs),
            html_escape(name),
            html_escape(name),
            attrs.to_html_except(&["class"]),
            options
        )
    }

    fn input_type(&self) -> &str {
        "select"
    }
}

/// A radio button group.
#[derive(Debug, Clone, Default)]
pub struct RadioGroup {
    /// Options as (value, caption) pairs.
    pub choices: Vec<(String, String)>,
}

impl RadioGroup {
    /// Creates a radio group over the given choices.
    pub fn new<V: Into<String>, C: Into<String>>(choices: Vec<(V, C)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(v, c)| (v.into(), c.into()))
                .collect(),
        }
    }
}

impl Widget for RadioGroup {
    fn render(&self, name: &str, value: Option<&str>, _attrs: &WidgetAttrs) -> String {
        let mut html = String::new();
        for (index, (choice, caption)) in self.choices.iter().enumerate() {
            let checked = if value == Some(choice.as_str()) {
                " checked"
            } else {
                ""
            };
            html.push_str(&format!(
                "<div class=\"radio\"><label><input type=\"radio\" id=\"{name}_{index}\" \
                 name=\"{name}\" value=\"{}\"{checked}> {}</label></div>",
                html_escape(choice),
                html_escape(caption),
                name = html_escape(name),
            ));
        }
        html
    }

    fn input_type(&self) -> &str {
        "radio"
    }
}

/// A single checkbox.
#[derive(Debug, Clone, Default)]
pub struct Checkbox {
    /// Caption rendered next to the box.
    pub caption: Option<String>,
}

impl Checkbox {
    /// Creates a bare checkbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the caption.
    #[must_use]
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl Widget for Checkbox {
    fn render(&self, name: &str, value: Option<&str>, _attrs: &WidgetAttrs) -> String {
        let checked = if value.is_some_and(|v| v == "1" || v == "true" || v == "on") {
            " checked"
        } else {
            ""
        };
        let caption = self
            .caption
            .as_ref()
            .map(|c| format!(" {}", html_escape(c)))
            .unwrap_or_default();
        format!(
            "<div class=\"checkbox\"><label><input type=\"checkbox\" id=\"{name}\" \
             name=\"{name}\" value=\"true\"{checked}>{caption}</label></div>",
            name = html_escape(name),
        )
    }

    fn input_type(&self) -> &str {
        "checkbox"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_types() {
        let html = TextInput::new().render("title", Some("Hi"), &WidgetAttrs::new());
        assert!(html.contains(r#"type="text""#));
        assert!(html.contains(r#"class="form-control""#));
        assert!(html.contains(r#"value="Hi""#));

        let html = TextInput::password().render("pw", None, &WidgetAttrs::new());
        assert!(html.contains(r#"type="password""#));
        assert!(!html.contains("value="));

        let html = TextInput::date().render("published", None, &WidgetAttrs::new());
        assert!(html.contains(r#"type="date""#));
    }

    #[test]
    fn text_input_escapes_value() {
        let html = TextInput::new().render("title", Some(r#""><script>"#), &WidgetAttrs::new());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn file_input_never_echoes_a_value() {
        let html = FileInput::new().render("upload", Some("/tmp/secret"), &WidgetAttrs::new());
        assert!(html.contains(r#"type="file""#));
        assert!(!html.contains("secret"));

        let html = FileInput::image().render("photo", None, &WidgetAttrs::new());
        assert!(html.contains(r#"accept="image/*""#));
    }

    #[test]
    fn textarea_embeds_content() {
        let html = Textarea::new(8).render("body", Some("Hello"), &WidgetAttrs::new());
        assert!(html.contains(r#"rows="8""#));
        assert!(html.contains(">Hello</textarea>"));
    }

    #[test]
    fn select_marks_current_choice() {
        let select = Select::new(vec![("draft", "Draft"), ("live", "Live")]);
        let html = select.render("status", Some("live"), &WidgetAttrs::new());
        assert!(html.contains(r#"<option value=""></option>"#));
        assert!(html.contains(r#"value="live" selected"#));
        assert!(!html.contains(r#"value="draft" selected"#));

        let html = select.no_blank().render("status", None, &WidgetAttrs::new());
        assert!(!html.contains(r#"<option value=""></option>"#));
    }

    #[test]
    fn radio_group_checks_current_choice() {
        let group = RadioGroup::new(vec![("y", "Yes"), ("n", "No")]);
        let html = group.render("confirm", Some("n"), &WidgetAttrs::new());
        assert!(html.contains(r#"value="n" checked"#));
        assert!(html.contains(r#"id="confirm_0""#));
    }

    #[test]
    fn checkbox_checked_values() {
        let widget = Checkbox::new().caption("Published");
        assert!(widget
            .render("published", Some("true"), &WidgetAttrs::new())
            .contains("checked"));
        assert!(!widget
            .render("published", Some("false"), &WidgetAttrs::new())
            .contains(" checked"));
        assert!(widget
            .render("published", None, &WidgetAttrs::new())
            .contains("Published"));
    }
}

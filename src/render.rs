//! Form output assembly.
//!
//! Rendering produces the complete HTML plus the named sections callers
//! use to lay forms out manually: the header (open tag and error
//! alert), the body (field blocks) and the footer (buttons, submission
//! marker and close tag).

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Li, Ul};

use crate::field::FieldKind;
use crate::form::{DataForm, FormMode, Orientation};
use crate::widgets::{html_escape, HiddenInput, Widget, WidgetAttrs};

/// Rendered form output with its named sections.
#[derive(Debug, Clone)]
pub struct RenderedForm {
    /// The complete form HTML.
    pub output: String,
    /// Open tag and error alert.
    pub header: String,
    /// Field blocks in insertion order.
    pub body: String,
    /// Buttons, submission marker and close tag.
    pub footer: String,
}

pub(crate) fn render(form: &DataForm) -> RenderedForm {
    let read_only = form.mode == FormMode::Show;

    let mut header = open_markup(form);
    let messages = collected_messages(form);
    if !messages.is_empty() {
        header.push_str(&error_alert(&messages));
    }

    let body: String = form
        .fields
        .iter()
        .filter(|field| field.kind == FieldKind::Input)
        .map(|field| field.block(read_only))
        .collect();

    let mut footer: String = form
        .fields
        .iter()
        .filter(|field| field.kind == FieldKind::Button)
        .map(|field| field.block(read_only))
        .collect();
    footer.push_str(&close_markup(form));

    let output = format!("{header}{body}{footer}");
    RenderedForm {
        output,
        header,
        body,
        footer,
    }
}

fn open_markup(form: &DataForm) -> String {
    if form.mode == FormMode::Show {
        return r#"<div class="form">"#.to_string();
    }

    let mut class = match form.orientation {
        Orientation::Horizontal => "form-horizontal".to_string(),
        Orientation::Inline => "form-inline".to_string(),
    };
    if let Some(extra) = form.attrs.get("class") {
        class.push(' ');
        class.push_str(extra);
    }

    let enctype = if form.is_multipart() {
        r#" enctype="multipart/form-data""#
    } else {
        ""
    };

    format!(
        r#"<form action="{}" method="{}" class="{}" role="form"{}{}>"#,
        html_escape(&form.action),
        form.method.as_str(),
        html_escape(&class),
        enctype,
        form.attrs.to_html_except(&["class"])
    )
}

fn close_markup(form: &DataForm) -> String {
    if form.mode == FormMode::Show {
        return "</div>".to_string();
    }
    let marker = HiddenInput.render(form.marker(), Some("1"), &WidgetAttrs::new());
    format!("{marker}</form>")
}

/// Caller-appended error text first, then validation messages in field
/// order, so output is deterministic.
fn collected_messages(form: &DataForm) -> Vec<String> {
    let mut messages = Vec::new();
    if !form.error.is_empty() {
        messages.push(form.error.clone());
    }
    for field in &form.fields {
        if let Some(field_messages) = form.errors.get(&field.name) {
            messages.extend(field_messages.iter().cloned());
        }
    }
    messages
}

fn error_alert(messages: &[String]) -> String {
    html! { div.class("alert alert-danger") }
        .attr("role", "alert")
        .child::<Ul, _>(|ul| {
            ul.class("list-unstyled")
                .children(messages.iter(), |message, li: Element<Li>| li.text(message))
        })
        .render()
}

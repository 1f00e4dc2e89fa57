//! Constructors for the built-in field types.
//!
//! Each constructor takes `(name, label)` so it can be registered in a
//! [`FieldRegistry`](crate::registry::FieldRegistry); choice-backed
//! fields also have richer variants taking their options up front.

use crate::field::Field;
use crate::widgets::{
    Checkbox, FileInput, HiddenInput, RadioGroup, Select, SubmitButton, TextInput, Textarea,
};

/// A plain text input.
pub fn text(name: &str, label: &str) -> Field {
    Field::new(name, label, "text", TextInput::new())
}

/// A hidden input.
pub fn hidden(name: &str, label: &str) -> Field {
    Field::new(name, label, "hidden", HiddenInput)
}

/// A password input.
pub fn password(name: &str, label: &str) -> Field {
    Field::new(name, label, "password", TextInput::password())
}

/// An email input.
pub fn email(name: &str, label: &str) -> Field {
    Field::new(name, label, "email", TextInput::email())
}

/// A number input.
pub fn number(name: &str, label: &str) -> Field {
    Field::new(name, label, "number", TextInput::number())
}

/// A date input.
pub fn date(name: &str, label: &str) -> Field {
    Field::new(name, label, "date", TextInput::date())
}

/// A file upload input.
pub fn file(name: &str, label: &str) -> Field {
    Field::new(name, label, "file", FileInput::new())
}

/// An image upload input.
pub fn image(name: &str, label: &str) -> Field {
    Field::new(name, label, "image", FileInput::image())
}

/// A multi-line textarea.
pub fn textarea(name: &str, label: &str) -> Field {
    Field::new(name, label, "textarea", Textarea::default())
}

/// A select without options; see [`select_with`].
pub fn select(name: &str, label: &str) -> Field {
    Field::new(name, label, "select", Select::default())
}

/// A select over the given (value, caption) choices.
pub fn select_with(name: &str, label: &str, choices: Vec<(String, String)>) -> Field {
    Field::new(name, label, "select", Select::new(choices))
}

/// A radio group without options; see [`radiogroup_with`].
pub fn radiogroup(name: &str, label: &str) -> Field {
    Field::new(name, label, "radiogroup", RadioGroup::default())
}

/// A radio group over the given (value, caption) choices.
pub fn radiogroup_with(name: &str, label: &str, choices: Vec<(String, String)>) -> Field {
    Field::new(name, label, "radiogroup", RadioGroup::new(choices))
}

/// A checkbox captioned with the label.
pub fn checkbox(name: &str, label: &str) -> Field {
    Field::new(name, label, "checkbox", Checkbox::new().caption(label))
}

/// A submit button captioned with the label.
pub fn submit(name: &str, label: &str) -> Field {
    Field::button(name, label, "submit", SubmitButton::new(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;
    use crate::widgets::Widget;

    #[test]
    fn constructors_tag_their_type() {
        assert_eq!(text("a", "A").type_name, "text");
        assert_eq!(password("a", "A").widget.input_type(), "password");
        assert_eq!(date("a", "A").widget.input_type(), "date");
        assert!(file("a", "A").is_file());
        assert!(image("a", "A").is_file());
        assert!(!textarea("a", "A").is_file());
    }

    #[test]
    fn submit_is_a_button() {
        let field = submit("submit", "Save");
        assert_eq!(field.kind, FieldKind::Button);
        assert_eq!(field.type_name, "submit");
    }

    #[test]
    fn select_with_choices_renders_them() {
        let field = select_with(
            "status",
            "Status",
            vec![("draft".to_string(), "Draft".to_string())],
        );
        assert!(field.widget_html().contains("Draft"));
    }
}

//! Rule-string compilation.
//!
//! Fields declare their validation as a compact rule string in the
//! `required|min:3|max:80` style. The compiler turns one of those into
//! a [`RuleSet`] of boxed [`Validator`]s, with the field label baked
//! into every message.
//!
//! `min`, `max` and `between` bound the value numerically when the
//! chain also contains `numeric` or `integer`, and bound the length
//! otherwise.

use crate::error::FormError;
use crate::validation::{
    DateFormat, Email, Integer, MaxLength, MinLength, Numeric, Pattern, Range, Required, Url,
    Validator,
};

/// A compiled chain of validators for one field.
pub struct RuleSet {
    validators: Vec<Box<dyn Validator>>,
}

impl RuleSet {
    /// Returns whether the chain contains no validators.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Runs every applicable validator over the submitted value and
    /// returns the collected failure messages.
    ///
    /// An absent or blank value only triggers presence checks; the
    /// remaining validators are skipped so optional fields accept empty
    /// submissions.
    pub fn check(&self, value: Option<&str>) -> Vec<String> {
        let raw = value.unwrap_or("");
        let blank = raw.trim().is_empty();

        let mut messages = Vec::new();
        for validator in &self.validators {
            if blank && !validator.applies_to_empty() {
                continue;
            }
            if let Err(message) = validator.validate(raw) {
                messages.push(message);
            }
        }
        messages
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Compiles a rule string for a field with the given label.
///
/// A `regex:` token consumes the rest of the string, so patterns may
/// contain `|` alternation; it must be the last token in the chain.
pub fn compile(rule: &str, label: &str) -> Result<RuleSet, FormError> {
    let tokens = tokenize(rule);

    // Decides whether min/max/between bound values or lengths.
    let numeric_chain = tokens
        .iter()
        .any(|token| *token == "numeric" || *token == "integer");

    let mut validators: Vec<Box<dyn Validator>> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let (name, param) = match token.split_once(':') {
            Some((name, param)) => (name, Some(param)),
            None => (token, None),
        };

        match name {
            "required" => validators.push(Box::new(Required::new(format!(
                "The {label} field is required."
            )))),
            "email" => validators.push(Box::new(Email::new(format!(
                "The {label} field must be a valid email address."
            )))),
            "url" => validators.push(Box::new(Url::new(format!(
                "The {label} field must be a valid URL."
            )))),
            "numeric" => validators.push(Box::new(Numeric::new(format!(
                "The {label} field must be a number."
            )))),
            "integer" => validators.push(Box::new(Integer::new(format!(
                "The {label} field must be an integer."
            )))),
            "date" => validators.push(Box::new(DateFormat::new(format!(
                "The {label} field must be a valid date."
            )))),
            "min" => {
                let bound = parse_param(name, param)?;
                if numeric_chain {
                    validators.push(Box::new(Range::new(
                        Some(bound),
                        None,
                        format!("The {label} field must be at least {bound}."),
                    )));
                } else {
                    validators.push(Box::new(MinLength::new(
                        to_length(name, bound)?,
                        format!("The {label} field must be at least {bound} characters."),
                    )));
                }
            }
            "max" => {
                let bound = parse_param(name, param)?;
                if numeric_chain {
                    validators.push(Box::new(Range::new(
                        None,
                        Some(bound),
                        format!("The {label} field may not be greater than {bound}."),
                    )));
                } else {
                    validators.push(Box::new(MaxLength::new(
                        to_length(name, bound)?,
                        format!("The {label} field may not be greater than {bound} characters."),
                    )));
                }
            }
            "between" => {
                let raw = param.ok_or_else(|| FormError::BadRuleParameter {
                    rule: name.to_string(),
                    detail: "expected `between:min,max`".to_string(),
                })?;
                let (low, high) = raw.split_once(',').ok_or_else(|| {
                    FormError::BadRuleParameter {
                        rule: name.to_string(),
                        detail: "expected `between:min,max`".to_string(),
                    }
                })?;
                let low = parse_param(name, Some(low))?;
                let high = parse_param(name, Some(high))?;
                let message = format!("The {label} field must be between {low} and {high}.");
                if numeric_chain {
                    validators.push(Box::new(Range::new(Some(low), Some(high), message)));
                } else {
                    validators.push(Box::new(MinLength::new(
                        to_length(name, low)?,
                        message.clone(),
                    )));
                    validators.push(Box::new(MaxLength::new(to_length(name, high)?, message)));
                }
            }
            "regex" => {
                let pattern = param.ok_or_else(|| FormError::BadRuleParameter {
                    rule: name.to_string(),
                    detail: "expected `regex:pattern`".to_string(),
                })?;
                validators.push(Box::new(Pattern::new(
                    pattern,
                    format!("The {label} field format is invalid."),
                )?));
            }
            _ => return Err(FormError::UnknownRule(token.to_string())),
        }
    }

    Ok(RuleSet { validators })
}

fn tokenize(rule: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut remainder = rule;
    loop {
        let trimmed = remainder.trim_start();
        if trimmed.starts_with("regex:") {
            tokens.push(trimmed.trim_end());
            break;
        }
        match remainder.split_once('|') {
            Some((head, tail)) => {
                let head = head.trim();
                if !head.is_empty() {
                    tokens.push(head);
                }
                remainder = tail;
            }
            None => {
                let last = remainder.trim();
                if !last.is_empty() {
                    tokens.push(last);
                }
                break;
            }
        }
    }
    tokens
}

fn parse_param(rule: &str, param: Option<&str>) -> Result<f64, FormError> {
    let raw = param.ok_or_else(|| FormError::BadRuleParameter {
        rule: rule.to_string(),
        detail: "missing parameter".to_string(),
    })?;
    raw.trim()
        .parse()
        .map_err(|_| FormError::BadRuleParameter {
            rule: rule.to_string(),
            detail: format!("`{raw}` is not a number"),
        })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_length(rule: &str, bound: f64) -> Result<usize, FormError> {
    if bound < 0.0 || bound.fract() != 0.0 {
        return Err(FormError::BadRuleParameter {
            rule: rule.to_string(),
            detail: format!("`{bound}` is not a valid length"),
        });
    }
    Ok(bound as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_chain_rejects_blank() {
        let rules = compile("required|max:10", "Title").unwrap();
        let messages = rules.check(None);
        assert_eq!(messages, vec!["The Title field is required.".to_string()]);
    }

    #[test]
    fn optional_rules_skip_blank_values() {
        let rules = compile("email", "Email").unwrap();
        assert!(rules.check(None).is_empty());
        assert!(rules.check(Some("")).is_empty());
        assert_eq!(rules.check(Some("nope")).len(), 1);
    }

    #[test]
    fn min_max_are_lengths_by_default() {
        let rules = compile("min:3|max:5", "Code").unwrap();
        assert!(rules.check(Some("abcd")).is_empty());
        assert_eq!(
            rules.check(Some("ab")),
            vec!["The Code field must be at least 3 characters.".to_string()]
        );
        assert_eq!(rules.check(Some("abcdef")).len(), 1);
    }

    #[test]
    fn numeric_chain_bounds_values() {
        let rules = compile("numeric|min:18|max:99", "Age").unwrap();
        assert!(rules.check(Some("42")).is_empty());
        assert_eq!(
            rules.check(Some("7")),
            vec!["The Age field must be at least 18.".to_string()]
        );
        assert_eq!(rules.check(Some("120")).len(), 1);
    }

    #[test]
    fn between_length_and_numeric() {
        let lengths = compile("between:2,4", "Tag").unwrap();
        assert!(lengths.check(Some("abc")).is_empty());
        assert_eq!(lengths.check(Some("a")).len(), 1);

        let values = compile("integer|between:1,5", "Rank").unwrap();
        assert!(values.check(Some("3")).is_empty());
        assert_eq!(values.check(Some("9")).len(), 1);
    }

    #[test]
    fn date_and_regex_rules() {
        let rules = compile("date", "Published").unwrap();
        assert!(rules.check(Some("2024-06-01")).is_empty());
        assert_eq!(rules.check(Some("01/06/2024")).len(), 1);

        let rules = compile(r"regex:^\d+$", "Code").unwrap();
        assert!(rules.check(Some("123")).is_empty());
        assert_eq!(
            rules.check(Some("12a")),
            vec!["The Code field format is invalid.".to_string()]
        );
    }

    #[test]
    fn regex_rule_keeps_its_alternation() {
        let rules = compile("required|regex:^(draft|live)$", "State").unwrap();
        assert!(rules.check(Some("draft")).is_empty());
        assert!(rules.check(Some("live")).is_empty());
        assert_eq!(
            rules.check(Some("archived")),
            vec!["The State field format is invalid.".to_string()]
        );
    }

    #[test]
    fn unknown_rule_is_a_configuration_error() {
        let err = compile("required|sparkly", "Name").unwrap_err();
        assert!(matches!(err, FormError::UnknownRule(token) if token == "sparkly"));
    }

    #[test]
    fn malformed_parameters_are_rejected() {
        assert!(matches!(
            compile("min:abc", "Name").unwrap_err(),
            FormError::BadRuleParameter { .. }
        ));
        assert!(matches!(
            compile("between:1", "Name").unwrap_err(),
            FormError::BadRuleParameter { .. }
        ));
        assert!(matches!(
            compile("regex:(", "Name").unwrap_err(),
            FormError::BadPattern(_)
        ));
    }
}

//! The form orchestrator.
//!
//! [`DataForm`] owns an ordered, uniquely-named collection of fields,
//! optionally bound to a model. One request cycle runs field
//! registration, validation, value application, persistence and
//! rendering; submission is triggered explicitly by handing the
//! submitted [`FormData`] to [`build`](DataForm::build) or
//! [`process`](DataForm::process).

use tracing::{debug, warn};

use crate::data::FormData;
use crate::error::{FormError, RenderError, ValidationErrors};
use crate::field::{Field, FieldKind};
use crate::fields;
use crate::model::{FormModel, ModelError};
use crate::registry::FieldRegistry;
use crate::render::{self, RenderedForm};
use crate::rules;

/// HTTP method the form submits with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Submits via query string; the marker field is `search`.
    Get,
    /// Submits via request body; the marker field is `save`.
    #[default]
    Post,
}

impl Method {
    /// Returns the method name for the `method` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Outcome of the current submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessStatus {
    /// Nothing was submitted yet.
    #[default]
    Idle,
    /// Validation, value application and persistence all passed.
    Success,
    /// Some step failed or an error was appended.
    Error,
}

impl ProcessStatus {
    /// Whether the cycle completed successfully.
    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    /// Whether the cycle failed.
    pub fn is_error(self) -> bool {
        self == Self::Error
    }
}

/// Whether the form is live or rendered read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// A live `<form>` accepting input.
    #[default]
    Edit,
    /// A read-only rendering inside a plain wrapper.
    Show,
}

/// Field layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Stacked labels and inputs.
    #[default]
    Horizontal,
    /// Inline layout.
    Inline,
}

type SavedCallback = Box<dyn FnOnce(&mut DataForm)>;

/// A model-bound form: fields, validation, persistence and rendering.
pub struct DataForm {
    pub(crate) fields: Vec<Field>,
    pub(crate) errors: ValidationErrors,
    pub(crate) error: String,
    pub(crate) action: String,
    pub(crate) method: Method,
    pub(crate) mode: FormMode,
    pub(crate) orientation: Orientation,
    pub(crate) attrs: crate::widgets::WidgetAttrs,
    model: Option<Box<dyn FormModel>>,
    registry: FieldRegistry,
    status: ProcessStatus,
    output: Option<RenderedForm>,
    redirect: Option<String>,
    on_saved: Option<SavedCallback>,
}

impl std::fmt::Debug for DataForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataForm")
            .field("fields", &self.fields)
            .field("status", &self.status)
            .field("method", &self.method)
            .field("action", &self.action)
            .field("multipart", &self.is_multipart())
            .field("bound", &self.model.is_some())
            .finish_non_exhaustive()
    }
}

impl DataForm {
    /// Creates an unbound form. Unbound forms validate and run the full
    /// cycle but skip model persistence entirely.
    pub fn create() -> Self {
        Self {
            fields: Vec::new(),
            errors: ValidationErrors::new(),
            error: String::new(),
            action: String::new(),
            method: Method::default(),
            mode: FormMode::default(),
            orientation: Orientation::default(),
            attrs: crate::widgets::WidgetAttrs::new(),
            model: None,
            registry: FieldRegistry::with_builtins(),
            status: ProcessStatus::Idle,
            output: None,
            redirect: None,
            on_saved: None,
        }
    }

    /// Creates a form bound to a model. Field values default to the
    /// model's attributes and accepted submissions are persisted
    /// through it.
    pub fn source(model: impl FormModel + 'static) -> Self {
        let mut form = Self::create();
        form.model = Some(Box::new(model));
        form
    }

    // ---- configuration -------------------------------------------------

    /// Sets the submit URL.
    pub fn action(&mut self, url: impl Into<String>) -> &mut Self {
        self.action = url.into();
        self
    }

    /// Sets the HTTP method.
    pub fn method(&mut self, method: Method) -> &mut Self {
        self.method = method;
        self
    }

    /// Switches to the inline layout.
    pub fn inline(&mut self) -> &mut Self {
        self.orientation = Orientation::Inline;
        self
    }

    /// Renders the form read-only.
    pub fn show(&mut self) -> &mut Self {
        self.mode = FormMode::Show;
        self
    }

    /// Sets a form-level HTML attribute; `class` is appended to the
    /// layout class.
    pub fn attr(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attrs.set(key, value);
        self
    }

    /// Returns the field-type registry for registering custom types.
    pub fn registry_mut(&mut self) -> &mut FieldRegistry {
        &mut self.registry
    }

    // ---- field collection ----------------------------------------------

    /// Adds a field resolved through the type registry.
    pub fn add_field(
        &mut self,
        name: &str,
        label: &str,
        type_name: &str,
    ) -> Result<&mut Field, FormError> {
        let field = self.registry.create(type_name, name, label)?;
        Ok(self.add(field))
    }

    /// Adds a prebuilt field, replacing any existing field of the same
    /// name so names stay unique.
    pub fn add(&mut self, field: Field) -> &mut Field {
        if let Some(position) = self.fields.iter().position(|f| f.name == field.name) {
            self.fields[position] = field;
            &mut self.fields[position]
        } else {
            self.fields.push(field);
            let last = self.fields.len() - 1;
            &mut self.fields[last]
        }
    }

    /// Removes a field by name; a no-op when absent.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.fields.retain(|field| field.name != name);
        self
    }

    /// Removes every field of a type, buttons included; a no-op when
    /// none match.
    pub fn remove_type(&mut self, type_name: &str) -> &mut Self {
        self.fields.retain(|field| field.type_name != type_name);
        self
    }

    /// Returns a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns a field by name for further configuration.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.name == name)
    }

    /// Returns the fields in insertion order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn add_with_rule(
        &mut self,
        field: Field,
        rule: &str,
    ) -> &mut Field {
        let field_ref = self.add(field);
        field_ref.rule(rule);
        field_ref
    }

    /// Adds a text field.
    pub fn text(&mut self, name: &str, label: &str, rule: &str) -> &mut Field {
        self.add_with_rule(fields::text(name, label), rule)
    }

    /// Adds a hidden field.
    pub fn hidden(&mut self, name: &str, label: &str, rule: &str) -> &mut Field {
        self.add_with_rule(fields::hidden(name, label), rule)
    }

    /// Adds a password field.
    pub fn password(&mut self, name: &str, label: &str, rule: &str) -> &mut Field {
        self.add_with_rule(fields::password(name, label), rule)
    }

    /// Adds an email field.
    pub fn email(&mut self, name: &str, label: &str, rule: &str) -> &mut Field {
        self.add_with_rule(fields::email(name, label), rule)
    }

    /// Adds a number field.
    pub fn number(&mut self, name: &str, label: &str, rule: &str) -> &mut Field {
        self.add_with_rule(fields::number(name, label), rule)
    }

    /// Adds a date field.
    pub fn date(&mut self, name: &str, label: &str, rule: &str) -> &mut Field {
        self.add_with_rule(fields::date(name, label), rule)
    }

    /// Adds a file field and switches the form to multipart encoding.
    pub fn file(&mut self, name: &str, label: &str, rule: &str) -> &mut Field {
        self.add_with_rule(fields::file(name, label), rule)
    }

    /// Adds an image field and switches the form to multipart encoding.
    pub fn image(&mut self, name: &str, label: &str, rule: &str) -> &mut Field {
        self.add_with_rule(fields::image(name, label), rule)
    }

    /// Adds a textarea field.
    pub fn textarea(&mut self, name: &str, label: &str, rule: &str) -> &mut Field {
        self.add_with_rule(fields::textarea(name, label), rule)
    }

    /// Adds a select field over the given (value, caption) choices.
    pub fn select(
        &mut self,
        name: &str,
        label: &str,
        rule: &str,
        choices: Vec<(String, String)>,
    ) -> &mut Field {
        self.add_with_rule(fields::select_with(name, label, choices), rule)
    }

    /// Adds a radio group over the given (value, caption) choices.
    pub fn radiogroup(
        &mut self,
        name: &str,
        label: &str,
        rule: &str,
        choices: Vec<(String, String)>,
    ) -> &mut Field {
        self.add_with_rule(fields::radiogroup_with(name, label, choices), rule)
    }

    /// Adds a checkbox field.
    pub fn checkbox(&mut self, name: &str, label: &str, rule: &str) -> &mut Field {
        self.add_with_rule(fields::checkbox(name, label), rule)
    }

    /// Adds a submit button.
    pub fn submit(&mut self, caption: &str) -> &mut Self {
        self.add(fields::submit("submit", caption));
        self
    }

    // ---- submission cycle ----------------------------------------------

    /// Appends caller-visible error text and forces the status to
    /// [`ProcessStatus::Error`]. Meant for on-saved callbacks that
    /// reject an otherwise valid submission.
    pub fn error(&mut self, message: impl Into<String>) -> &mut Self {
        self.status = ProcessStatus::Error;
        self.error.push_str(&message.into());
        self
    }

    /// Validates the submitted data against every rule-bearing field.
    ///
    /// False immediately when error text was appended; trivially true
    /// when no field carries a rule. Rule compilation failures are
    /// configuration errors and surface as `Err`.
    pub fn is_valid(&mut self, data: &FormData) -> Result<bool, FormError> {
        if !self.error.is_empty() {
            return Ok(false);
        }

        let mut errors = ValidationErrors::new();
        for field in &self.fields {
            let Some(rule) = field.rule.as_deref() else {
                continue;
            };
            let rule_set = rules::compile(rule, &field.label)?;
            for message in rule_set.check(data.get(&field.name)) {
                errors.add(&field.name, message);
            }
        }

        let valid = errors.is_empty();
        if !valid {
            debug!(failed_fields = errors.len(), "form validation failed");
        }
        self.errors = errors;
        Ok(valid)
    }

    /// Applies submitted values to the bound model, field by field in
    /// insertion order, stopping at the first failure.
    ///
    /// Fail-fast: values applied before the failing field stay applied.
    /// Unbound forms apply nothing.
    pub fn apply_values(&mut self, data: &FormData) -> Result<(), ModelError> {
        let Some(model) = self.model.as_deref_mut() else {
            return Ok(());
        };
        for field in &self.fields {
            field.apply_value(data, model)?;
        }
        Ok(())
    }

    /// Runs the save pipeline: validation, value application, model
    /// persistence. Returns whether the whole chain passed; any failure
    /// sets the status to [`ProcessStatus::Error`].
    pub fn save(&mut self, data: &FormData) -> Result<bool, FormError> {
        if self.is_valid(data)? {
            match self.apply_values(data) {
                Ok(()) => match self.persist() {
                    Ok(()) => {
                        self.status = ProcessStatus::Success;
                        debug!("form saved");
                        return Ok(true);
                    }
                    Err(err) => {
                        warn!(error = %err, "model persistence failed");
                        self.error.push_str(&err.to_string());
                    }
                },
                Err(err) => {
                    warn!(error = %err, "value application failed");
                    self.error.push_str(&err.to_string());
                }
            }
        }
        self.status = ProcessStatus::Error;
        Ok(false)
    }

    fn persist(&mut self) -> Result<(), ModelError> {
        match self.model.as_deref_mut() {
            Some(model) => model.persist(),
            None => Ok(()),
        }
    }

    /// Runs the save pipeline if the data carries this form's
    /// submission marker (`save` for POST, `search` for GET); leaves
    /// the form idle otherwise.
    pub fn process(&mut self, data: &FormData) -> Result<(), FormError> {
        if !data.contains(self.marker()) {
            debug!("no submission marker, skipping save");
            return Ok(());
        }
        let saved = self.save(data)?;
        debug!(saved, status = ?self.status, "form processed");
        Ok(())
    }

    pub(crate) fn marker(&self) -> &'static str {
        match self.method {
            Method::Post => "save",
            Method::Get => "search",
        }
    }

    // ---- output --------------------------------------------------------

    /// Runs the full build cycle and memoizes the output; re-entrant
    /// calls after the first are no-ops until
    /// [`reset_output`](Self::reset_output).
    ///
    /// Order: process the submission, run the on-saved callback (which
    /// may redirect or append an error; an appended error re-runs the
    /// save pipeline exactly once), strip submit buttons on success,
    /// refresh field state, render.
    ///
    /// The submission is only processed while the status is still
    /// [`ProcessStatus::Idle`], so a rebuild after
    /// [`reset_output`](Self::reset_output) re-renders without
    /// persisting the model again.
    pub fn build(&mut self, data: &FormData) -> Result<(), FormError> {
        if self.output.is_some() {
            return Ok(());
        }

        if self.status == ProcessStatus::Idle {
            self.process(data)?;

            if self.status.is_success() {
                if let Some(callback) = self.on_saved.take() {
                    callback(self);
                    if self.status.is_error() {
                        debug!("on-saved callback appended an error, reprocessing once");
                        self.save(data)?;
                    }
                }
            }
        }

        if self.status.is_success() {
            self.remove_type("submit");
        }

        self.refresh_fields(data);
        self.output = Some(render::render(self));
        Ok(())
    }

    /// Shares form state into every field ahead of rendering: the
    /// field's validation messages, plus its value from the submission
    /// or, failing that, the bound model.
    fn refresh_fields(&mut self, data: &FormData) {
        let model = self.model.as_deref();
        for field in &mut self.fields {
            if field.kind == FieldKind::Button {
                continue;
            }
            field.messages = self
                .errors
                .get(&field.name)
                .cloned()
                .unwrap_or_default();
            if let Some(value) = data.get(&field.name) {
                field.value = Some(value.to_string());
            } else if let Some(model) = model {
                if let Some(value) = model.attribute(&field.attribute) {
                    field.value = Some(value);
                }
            }
        }
    }

    /// Builds if necessary and returns the rendered HTML.
    pub fn rendered(&mut self, data: &FormData) -> Result<&str, FormError> {
        self.build(data)?;
        self.output
            .as_ref()
            .map(|rendered| rendered.output.as_str())
            .ok_or_else(|| RenderError::NotBuilt.into())
    }

    /// Renders one field's label+input+messages block for custom
    /// layouts.
    pub fn render_field(&self, name: &str) -> Result<String, FormError> {
        self.field(name)
            .map(|field| field.block(self.mode == FormMode::Show))
            .ok_or_else(|| RenderError::FieldNotFound(name.to_string()).into())
    }

    /// Returns the header section (open tag and error alert) once
    /// built.
    pub fn header(&self) -> Option<&str> {
        self.output.as_ref().map(|r| r.header.as_str())
    }

    /// Returns the body section (field blocks) once built.
    pub fn body(&self) -> Option<&str> {
        self.output.as_ref().map(|r| r.body.as_str())
    }

    /// Returns the footer section (buttons and close tag) once built.
    pub fn footer(&self) -> Option<&str> {
        self.output.as_ref().map(|r| r.footer.as_str())
    }

    /// Discards the memoized output so the next build re-renders.
    pub fn reset_output(&mut self) -> &mut Self {
        self.output = None;
        self
    }

    // ---- status, redirect, model ---------------------------------------

    /// Returns the submission status.
    pub fn status(&self) -> ProcessStatus {
        self.status
    }

    /// Returns the per-field validation messages.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns the aggregated caller-appended error text.
    pub fn error_text(&self) -> &str {
        &self.error
    }

    /// Whether the form is multipart. Computed from the current field
    /// collection so removing the last upload field drops the enctype.
    pub fn is_multipart(&self) -> bool {
        self.fields.iter().any(Field::is_file)
    }

    /// Registers the callback invoked once after a successful save; it
    /// may append an error or set a redirect instead of rendering.
    pub fn on_saved(&mut self, callback: impl FnOnce(&mut Self) + 'static) -> &mut Self {
        self.on_saved = Some(Box::new(callback));
        self
    }

    /// Alias for [`on_saved`](Self::on_saved).
    pub fn on_passed(&mut self, callback: impl FnOnce(&mut Self) + 'static) -> &mut Self {
        self.on_saved(callback)
    }

    /// Requests a redirect instead of rendered output.
    pub fn redirect_to(&mut self, url: impl Into<String>) -> &mut Self {
        self.redirect = Some(url.into());
        self
    }

    /// Whether a redirect was requested.
    pub fn has_redirect(&self) -> bool {
        self.redirect.is_some()
    }

    /// Returns the redirect target, if one was requested.
    pub fn redirect(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    /// Returns the bound model.
    pub fn model(&self) -> Option<&dyn FormModel> {
        self.model.as_deref()
    }

    /// Consumes the form and returns the bound model.
    pub fn into_model(self) -> Option<Box<dyn FormModel>> {
        self.model
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;
    use crate::model::MapModel;

    struct CountingModel {
        attrs: HashMap<String, String>,
        persist_calls: Rc<Cell<usize>>,
        fail_persist: bool,
    }

    impl CountingModel {
        fn new(persist_calls: Rc<Cell<usize>>) -> Self {
            Self {
                attrs: HashMap::new(),
                persist_calls,
                fail_persist: false,
            }
        }
    }

    impl FormModel for CountingModel {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs.get(name).cloned()
        }

        fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ModelError> {
            self.attrs.insert(name.to_string(), value.to_string());
            Ok(())
        }

        fn persist(&mut self) -> Result<(), ModelError> {
            self.persist_calls.set(self.persist_calls.get() + 1);
            if self.fail_persist {
                Err(ModelError::Persistence("disk full".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn zero_rule_fields_are_trivially_valid() {
        let mut form = DataForm::create();
        form.text("title", "Title", "");
        form.textarea("body", "Body", "");
        assert!(form.is_valid(&FormData::new()).unwrap());
    }

    #[test]
    fn empty_required_field_reports_the_label() {
        let mut form = DataForm::create();
        form.text("name", "Full Name", "required");

        assert!(!form.is_valid(&FormData::new()).unwrap());
        let messages = form.errors().get("name").unwrap();
        assert_eq!(messages, &vec!["The Full Name field is required.".to_string()]);
    }

    #[test]
    fn failing_rule_blocks_persistence() {
        let calls = Rc::new(Cell::new(0));
        let mut form = DataForm::source(CountingModel::new(Rc::clone(&calls)));
        form.text("name", "Name", "required");

        let data = FormData::from_pairs([("save", "1"), ("name", "")]);
        assert!(!form.save(&data).unwrap());
        assert!(form.status().is_error());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn valid_submission_persists_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let mut form = DataForm::source(CountingModel::new(Rc::clone(&calls)));
        form.text("name", "Name", "required");
        form.submit("Save");

        let data = FormData::from_pairs([("save", "1"), ("name", "Ada")]);
        form.build(&data).unwrap();
        assert!(form.status().is_success());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn persistence_failure_sets_error_status() {
        let calls = Rc::new(Cell::new(0));
        let mut model = CountingModel::new(Rc::clone(&calls));
        model.fail_persist = true;
        let mut form = DataForm::source(model);
        form.text("name", "Name", "required");

        let data = FormData::from_pairs([("save", "1"), ("name", "Ada")]);
        assert!(!form.save(&data).unwrap());
        assert!(form.status().is_error());
        assert!(form.error_text().contains("disk full"));
    }

    #[test]
    fn unbound_form_save_skips_persistence() {
        let mut form = DataForm::create();
        form.text("q", "Query", "");
        let data = FormData::from_pairs([("save", "1"), ("q", "rust")]);
        assert!(form.save(&data).unwrap());
        assert!(form.status().is_success());
    }

    #[test]
    fn unsubmitted_build_stays_idle() {
        let mut form = DataForm::create();
        form.text("name", "Name", "required");
        form.build(&FormData::new()).unwrap();
        assert_eq!(form.status(), ProcessStatus::Idle);
    }

    #[test]
    fn accepted_values_reach_the_model() {
        let mut form = DataForm::source(MapModel::new());
        form.text("title", "Title", "required");
        form.checkbox("published", "Published", "");

        let data = FormData::from_pairs([("save", "1"), ("title", "Hello")]);
        assert!(form.save(&data).unwrap());

        let model = form.model().unwrap();
        assert_eq!(model.attribute("title"), Some("Hello".to_string()));
        // Unchecked boxes are omitted from submissions and apply false.
        assert_eq!(model.attribute("published"), Some("false".to_string()));
    }

    #[test]
    fn output_is_memoized_until_reset() {
        let mut form = DataForm::create();
        form.text("title", "Title", "");
        let data = FormData::new();

        let first = form.rendered(&data).unwrap().to_string();
        form.remove("title");
        let second = form.rendered(&data).unwrap().to_string();
        assert_eq!(first, second);

        form.reset_output();
        let third = form.rendered(&data).unwrap().to_string();
        assert_ne!(first, third);
    }

    #[test]
    fn remove_type_drops_buttons_and_is_a_noop_when_absent() {
        let mut form = DataForm::create();
        form.text("title", "Title", "");
        form.submit("Save");
        assert_eq!(form.fields().len(), 2);

        form.remove_type("submit");
        assert_eq!(form.fields().len(), 1);

        form.remove_type("date");
        form.remove("missing");
        assert_eq!(form.fields().len(), 1);
    }

    #[test]
    fn successful_save_strips_submit_buttons_from_output() {
        let mut form = DataForm::source(MapModel::new());
        form.text("name", "Name", "required");
        form.submit("Save");

        let data = FormData::from_pairs([("save", "1"), ("name", "Ada")]);
        form.build(&data).unwrap();
        let output = form.rendered(&data).unwrap();
        assert!(!output.contains("<button"));
    }

    #[test]
    fn rebuild_after_reset_rerenders_without_resaving() {
        let calls = Rc::new(Cell::new(0));
        let mut form = DataForm::source(CountingModel::new(Rc::clone(&calls)));
        form.text("name", "Name", "required");
        form.submit("Save");

        let data = FormData::from_pairs([("save", "1"), ("name", "Ada")]);
        form.build(&data).unwrap();
        assert_eq!(calls.get(), 1);

        form.reset_output();
        form.build(&data).unwrap();
        assert!(form.status().is_success());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn file_field_sets_multipart() {
        let mut form = DataForm::create();
        form.text("title", "Title", "");
        assert!(!form.is_multipart());

        form.file("attachment", "Attachment", "");
        assert!(form.is_multipart());

        form.build(&FormData::new()).unwrap();
        assert!(form
            .header()
            .unwrap()
            .contains(r#"enctype="multipart/form-data""#));
    }

    #[test]
    fn removing_the_last_upload_field_drops_multipart() {
        let mut form = DataForm::create();
        form.text("title", "Title", "");
        form.file("attachment", "Attachment", "");
        assert!(form.is_multipart());

        form.remove("attachment");
        assert!(!form.is_multipart());

        form.build(&FormData::new()).unwrap();
        assert!(!form.header().unwrap().contains("enctype"));
    }

    #[test]
    fn same_name_replaces_instead_of_duplicating() {
        let mut form = DataForm::create();
        form.text("title", "Title", "");
        form.textarea("title", "Title", "");
        assert_eq!(form.fields().len(), 1);
        assert_eq!(form.field("title").unwrap().type_name, "textarea");
    }

    #[test]
    fn unknown_field_type_is_rejected() {
        let mut form = DataForm::create();
        let err = form.add_field("x", "X", "carousel").unwrap_err();
        assert!(matches!(err, FormError::UnknownFieldType(_)));
    }

    #[test]
    fn unknown_rule_surfaces_as_configuration_error() {
        let mut form = DataForm::create();
        form.text("name", "Name", "required|sparkly");
        let err = form.is_valid(&FormData::new()).unwrap_err();
        assert!(matches!(err, FormError::UnknownRule(_)));
    }

    #[test]
    fn callback_error_reruns_the_cycle_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let mut form = DataForm::source(CountingModel::new(Rc::clone(&calls)));
        form.text("name", "Name", "required");
        form.submit("Save");
        form.on_saved(|form| {
            form.error("name already taken");
        });

        let data = FormData::from_pairs([("save", "1"), ("name", "Ada")]);
        form.build(&data).unwrap();

        assert!(form.status().is_error());
        // First pass persisted, the bounded re-run short-circuited on
        // the appended error.
        assert_eq!(calls.get(), 1);
        assert!(form.rendered(&data).unwrap().contains("name already taken"));
    }

    #[test]
    fn callback_can_redirect_instead_of_rendering() {
        let mut form = DataForm::source(MapModel::new());
        form.text("name", "Name", "required");
        form.on_saved(|form| {
            form.redirect_to("/articles/1");
        });

        let data = FormData::from_pairs([("save", "1"), ("name", "Ada")]);
        form.build(&data).unwrap();

        assert!(form.status().is_success());
        assert!(form.has_redirect());
        assert_eq!(form.redirect(), Some("/articles/1"));
    }

    #[test]
    fn callback_is_skipped_without_a_successful_save() {
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let mut form = DataForm::create();
        form.text("name", "Name", "required");
        form.on_saved(move |_| flag.set(true));

        let data = FormData::from_pairs([("save", "1"), ("name", "")]);
        form.build(&data).unwrap();
        assert!(!ran.get());
        assert!(form.status().is_error());
    }

    #[test]
    fn render_field_returns_a_single_block() {
        let mut form = DataForm::create();
        form.text("title", "Title", "required");

        let block = form.render_field("title").unwrap();
        assert!(block.contains("form-group"));
        assert!(block.contains(r#"name="title""#));

        let err = form.render_field("missing").unwrap_err();
        assert!(matches!(
            err,
            FormError::Render(RenderError::FieldNotFound(_))
        ));
    }

    #[test]
    fn model_attributes_prefill_field_values() {
        let model = MapModel::from_pairs([("title", "Existing")]);
        let mut form = DataForm::source(model);
        form.text("title", "Title", "");

        form.build(&FormData::new()).unwrap();
        assert!(form
            .rendered(&FormData::new())
            .unwrap()
            .contains(r#"value="Existing""#));
    }

    #[test]
    fn submitted_values_win_over_model_values() {
        let model = MapModel::from_pairs([("title", "Old")]);
        let mut form = DataForm::source(model);
        form.text("title", "Title", "required");

        let data = FormData::from_pairs([("save", "1"), ("title", "New")]);
        form.build(&data).unwrap();
        assert!(form.rendered(&data).unwrap().contains(r#"value="New""#));
    }
}

//! # dataform
//!
//! A model-bound form builder: assemble typed input fields, validate
//! submitted input against compact rule strings, persist accepted
//! values into a model, and render Bootstrap-style HTML.
//!
//! This crate provides:
//! - A form orchestrator ([`DataForm`]) running the whole submission
//!   cycle: validation, value application, persistence, rendering
//! - A field-type registry with text, password, email, number, date,
//!   file, textarea, select, radio, checkbox and submit fields
//! - A rule-string compiler (`required|min:3|max:80` style) over
//!   composable validators
//! - A [`FormModel`] trait as the persistence seam
//!
//! ## Quick Start
//!
//! ```rust
//! use dataform::{DataForm, FormData};
//!
//! let mut form = DataForm::create();
//! form.action("/articles");
//! form.text("title", "Title", "required|max:80");
//! form.textarea("body", "Body", "");
//! form.submit("Save");
//!
//! let html = form.rendered(&FormData::new())?;
//! assert!(html.contains(r#"name="title""#));
//! # Ok::<(), dataform::FormError>(())
//! ```
//!
//! ## Binding a model
//!
//! A form created with [`DataForm::source`] reads its initial values
//! from the model and writes accepted submissions back into it before
//! persisting:
//!
//! ```rust
//! use dataform::{DataForm, FormData, MapModel};
//!
//! let mut form = DataForm::source(MapModel::new());
//! form.text("name", "Name", "required");
//! form.submit("Save");
//!
//! // A browser submit carries the hidden `save` marker.
//! let data = FormData::from_pairs([("save", "1"), ("name", "Ada Lovelace")]);
//! form.build(&data)?;
//!
//! assert!(form.status().is_success());
//! let model = form.model().unwrap();
//! assert_eq!(model.attribute("name"), Some("Ada Lovelace".to_string()));
//! # Ok::<(), dataform::FormError>(())
//! ```
//!
//! ## Reacting to a save
//!
//! An on-saved callback runs once after a successful save. It can
//! request a redirect instead of rendered output, or append an error to
//! reject the submission after all:
//!
//! ```rust
//! use dataform::{DataForm, FormData, MapModel};
//!
//! let mut form = DataForm::source(MapModel::new());
//! form.text("name", "Name", "required");
//! form.on_saved(|form| {
//!     form.redirect_to("/articles");
//! });
//!
//! let data = FormData::from_pairs([("save", "1"), ("name", "Ada")]);
//! form.build(&data)?;
//!
//! if form.has_redirect() {
//!     // hand form.redirect() to the HTTP layer
//! }
//! # Ok::<(), dataform::FormError>(())
//! ```

mod data;
mod error;
mod field;
pub mod fields;
mod form;
mod model;
mod registry;
mod render;
pub mod rules;
pub mod validation;
pub mod widgets;

pub use data::FormData;
pub use error::{FormError, RenderError, Result, ValidationErrors};
pub use field::{Field, FieldKind};
pub use form::{DataForm, FormMode, Method, Orientation, ProcessStatus};
pub use model::{FormModel, MapModel, ModelError};
pub use registry::{FieldConstructor, FieldRegistry};
pub use render::RenderedForm;

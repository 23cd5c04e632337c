//! Form definition and validation for the proposal submission form
//!
//! This crate provides the data side of the form:
//! - Field identifiers, widgets, and typed value containers
//! - Reusable validators for email, phone, and file content types
//! - Concrete fields with per-field error messages
//! - The assembled six-field proposal form

pub mod field;
pub mod fields;
pub mod form;
pub mod validators;
pub mod values;

pub use field::{FieldError, FieldId, FieldResult, FormField, Widget};
pub use fields::{CharField, ChoiceField, EmailField, FileField, PhoneField};
pub use form::ProposalForm;
pub use validators::{
	ContentTypeValidator, DigitsValidator, EmailValidator, ExactLengthValidator,
};
pub use values::{FieldValue, FormValues, UploadedFile};

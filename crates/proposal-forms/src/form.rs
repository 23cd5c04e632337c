//! The proposal form definition

use crate::field::{FieldId, FormField, Widget};
use crate::fields::{CharField, ChoiceField, EmailField, FileField, PhoneField};
use crate::validators::ContentTypeValidator;
use crate::values::FormValues;
use std::collections::HashMap;

/// The single-page proposal submission form
///
/// Bundles the six fields with their labels, placeholders, and error
/// messages, and validates values against them. The form itself is
/// stateless: current values live in [`FormValues`] and are passed in
/// for validation.
pub struct ProposalForm {
	fields: Vec<Box<dyn FormField>>,
}

impl ProposalForm {
	/// Create the proposal form with its six fields
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::field::FieldId;
	/// use proposal_forms::form::ProposalForm;
	///
	/// let form = ProposalForm::new();
	/// assert_eq!(form.fields().len(), 6);
	/// assert!(form.field(FieldId::Email).is_some());
	/// ```
	pub fn new() -> Self {
		let preference_choices = (1..=4)
			.map(|n| {
				let option = format!("Option {n}");
				(option.clone(), option)
			})
			.collect();

		let fields: Vec<Box<dyn FormField>> = vec![
			Box::new(
				CharField::new(FieldId::Name)
					.required()
					.with_label("Name")
					.with_placeholder("Enter your name")
					.with_required_message("Name is required."),
			),
			Box::new(
				EmailField::new(FieldId::Email)
					.with_label("Email")
					.with_placeholder("Enter your email")
					.with_message("Please enter a valid email address."),
			),
			Box::new(
				PhoneField::new(FieldId::Phone)
					.with_label("Phone Number")
					.with_placeholder("Enter your phone number")
					.with_digits_message("Phone number must contain only digits.")
					.with_length_message("Phone number must be exactly 10 digits."),
			),
			Box::new(
				CharField::new(FieldId::GithubTasks)
					.with_label("GitHub Link of Tasks")
					.with_placeholder("Enter GitHub link of Tasks")
					.with_widget(Widget::UrlInput),
			),
			Box::new(
				ChoiceField::new(FieldId::Preference1)
					.with_label("Select Your Preference")
					.with_empty_label("Select a preference")
					.with_choices(preference_choices)
					.with_required_message("Please select a preference."),
			),
			Box::new(
				FileField::new(FieldId::Pdf1)
					.with_label("Upload PDF")
					.with_accept(".pdf")
					.with_content_type(
						ContentTypeValidator::new("application/pdf")
							.with_message("Only PDF files are allowed."),
					),
			),
		];

		Self { fields }
	}

	/// All fields in rendering order
	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}

	/// Look up one field by its identifier
	pub fn field(&self, id: FieldId) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|field| field.id() == id)
			.map(|field| field.as_ref())
	}

	/// Validate a single field against the current values.
	///
	/// Returns the error message for that field, or `None` when the value
	/// is valid.
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::field::FieldId;
	/// use proposal_forms::form::ProposalForm;
	/// use proposal_forms::values::FormValues;
	///
	/// let form = ProposalForm::new();
	/// let values = FormValues::default();
	///
	/// assert_eq!(
	/// 	form.validate_field(FieldId::Name, &values),
	/// 	Some("Name is required.".to_string()),
	/// );
	/// assert_eq!(form.validate_field(FieldId::GithubTasks, &values), None);
	/// ```
	pub fn validate_field(&self, id: FieldId, values: &FormValues) -> Option<String> {
		let field = self.field(id)?;
		field.clean(values.get(id)).err().map(|error| error.to_string())
	}

	/// Validate every field, collecting the messages of the failing ones.
	///
	/// Fields whose value is valid do not appear in the result, so an
	/// empty map means the whole form is valid.
	pub fn validate_all(&self, values: &FormValues) -> HashMap<FieldId, String> {
		self.fields
			.iter()
			.filter_map(|field| {
				let id = field.id();
				self.validate_field(id, values).map(|message| (id, message))
			})
			.collect()
	}
}

impl Default for ProposalForm {
	fn default() -> Self {
		Self::new()
	}
}

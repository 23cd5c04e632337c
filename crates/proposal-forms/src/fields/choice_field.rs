//! Choice field rendered as a select dropdown

use crate::field::{FieldError, FieldId, FieldResult, FormField, Widget};
use crate::values::FieldValue;

/// Choice field validating membership in a fixed set
///
/// The value must be one of the configured choice values. An empty value
/// is reported as missing rather than invalid, so the empty option of the
/// dropdown gets the required message.
#[derive(Debug, Clone)]
pub struct ChoiceField {
	pub id: FieldId,
	pub label: Option<String>,
	pub widget: Widget,
	/// `(value, label)` pairs offered by the dropdown
	pub choices: Vec<(String, String)>,
	/// Label of the empty option shown before a selection is made
	pub empty_label: Option<String>,
	pub required_message: String,
	pub invalid_choice_message: String,
}

impl ChoiceField {
	/// Create a new ChoiceField with no choices
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::field::FieldId;
	/// use proposal_forms::fields::ChoiceField;
	///
	/// let field = ChoiceField::new(FieldId::Preference1);
	/// assert!(field.choices.is_empty());
	/// ```
	pub fn new(id: FieldId) -> Self {
		Self {
			id,
			label: None,
			widget: Widget::Select,
			choices: Vec::new(),
			empty_label: None,
			required_message: "This field is required.".to_string(),
			invalid_choice_message: "Select a valid choice.".to_string(),
		}
	}
	/// Set the label for the field
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
	/// Set the `(value, label)` pairs offered by the dropdown
	pub fn with_choices(mut self, choices: Vec<(String, String)>) -> Self {
		self.choices = choices;
		self
	}
	/// Set the label of the empty option
	pub fn with_empty_label(mut self, label: impl Into<String>) -> Self {
		self.empty_label = Some(label.into());
		self
	}
	/// Set the message reported when no choice is selected
	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = message.into();
		self
	}
	/// Set the message reported when the value is not a listed choice
	pub fn with_invalid_choice_message(mut self, message: impl Into<String>) -> Self {
		self.invalid_choice_message = message.into();
		self
	}
}

impl FormField for ChoiceField {
	fn id(&self) -> FieldId {
		self.id
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		true
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn choices(&self) -> &[(String, String)] {
		&self.choices
	}

	fn empty_label(&self) -> Option<&str> {
		self.empty_label.as_deref()
	}

	fn clean(&self, value: FieldValue<'_>) -> FieldResult<()> {
		let text = value
			.as_text()
			.ok_or_else(|| FieldError::Invalid("Expected a text value".to_string()))?;

		if text.is_empty() {
			return Err(FieldError::Required(self.required_message.clone()));
		}

		if self.choices.iter().any(|(choice, _)| choice == text) {
			Ok(())
		} else {
			Err(FieldError::Validation(self.invalid_choice_message.clone()))
		}
	}
}

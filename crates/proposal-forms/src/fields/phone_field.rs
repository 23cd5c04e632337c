//! Phone field with digit and length checks

use crate::field::{FieldError, FieldId, FieldResult, FormField, Widget};
use crate::validators::{DigitsValidator, ExactLengthValidator};
use crate::values::FieldValue;

/// Phone field
///
/// Runs two checks in order: the value must contain only digits, and it
/// must have an exact number of them. The digit check wins when both
/// fail, so `"12a"` reports a character problem, not a length problem.
/// The field is always required; an empty value fails the length check.
#[derive(Debug, Clone)]
pub struct PhoneField {
	pub id: FieldId,
	pub label: Option<String>,
	pub placeholder: Option<String>,
	pub widget: Widget,
	pub digits: DigitsValidator,
	pub length: ExactLengthValidator,
}

impl PhoneField {
	/// Create a new PhoneField requiring ten digits
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::field::{FieldId, FormField};
	/// use proposal_forms::fields::PhoneField;
	/// use proposal_forms::values::FieldValue;
	///
	/// let field = PhoneField::new(FieldId::Phone);
	/// assert!(field.clean(FieldValue::Text("1234567890")).is_ok());
	/// assert!(field.clean(FieldValue::Text("12345")).is_err());
	/// ```
	pub fn new(id: FieldId) -> Self {
		Self {
			id,
			label: None,
			placeholder: None,
			widget: Widget::TelInput,
			digits: DigitsValidator::new(),
			length: ExactLengthValidator::new(10),
		}
	}
	/// Set the label for the field
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
	/// Set the placeholder shown inside the widget
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}
	/// Set the required number of digits
	pub fn with_length(mut self, length: usize) -> Self {
		self.length = ExactLengthValidator::new(length);
		self
	}
	/// Set the message reported when the value contains a non-digit
	pub fn with_digits_message(mut self, message: impl Into<String>) -> Self {
		self.digits = self.digits.with_message(message);
		self
	}
	/// Set the message reported when the digit count is wrong
	pub fn with_length_message(mut self, message: impl Into<String>) -> Self {
		self.length = self.length.with_message(message);
		self
	}
}

impl FormField for PhoneField {
	fn id(&self) -> FieldId {
		self.id
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn placeholder(&self) -> Option<&str> {
		self.placeholder.as_deref()
	}

	fn required(&self) -> bool {
		true
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn clean(&self, value: FieldValue<'_>) -> FieldResult<()> {
		let text = value
			.as_text()
			.ok_or_else(|| FieldError::Invalid("Expected a text value".to_string()))?;
		self.digits.validate(text)?;
		self.length.validate(text)
	}
}

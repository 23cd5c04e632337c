//! Email field backed by the email validator

use crate::field::{FieldError, FieldId, FieldResult, FormField, Widget};
use crate::validators::EmailValidator;
use crate::values::FieldValue;

/// Email field
///
/// The whole value check is delegated to [`EmailValidator`], so an empty
/// value fails the same way a malformed one does. The field is always
/// required.
#[derive(Debug, Clone)]
pub struct EmailField {
	pub id: FieldId,
	pub label: Option<String>,
	pub placeholder: Option<String>,
	pub widget: Widget,
	pub validator: EmailValidator,
}

impl EmailField {
	/// Create a new EmailField for the given field
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::field::{FieldId, FormField};
	/// use proposal_forms::fields::EmailField;
	/// use proposal_forms::values::FieldValue;
	///
	/// let field = EmailField::new(FieldId::Email);
	/// assert!(field.clean(FieldValue::Text("user@example.com")).is_ok());
	/// assert!(field.clean(FieldValue::Text("user@example")).is_err());
	/// ```
	pub fn new(id: FieldId) -> Self {
		Self {
			id,
			label: None,
			placeholder: None,
			widget: Widget::EmailInput,
			validator: EmailValidator::new(),
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
	/// Set the message reported when the value is not a valid address
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.validator = self.validator.with_message(message);
		self
	}
}

impl FormField for EmailField {
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
		self.validator.validate(text)
	}
}

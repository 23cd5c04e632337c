//! Character field for free-form text input

use crate::field::{FieldError, FieldId, FieldResult, FormField, Widget};
use crate::values::FieldValue;

/// Character field with an optional required check
///
/// A required character field rejects values that are empty or contain
/// only whitespace. Optional character fields accept anything.
#[derive(Debug, Clone)]
pub struct CharField {
	pub id: FieldId,
	pub label: Option<String>,
	pub placeholder: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub required_message: String,
}

impl CharField {
	/// Create a new CharField for the given field
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::field::FieldId;
	/// use proposal_forms::fields::CharField;
	///
	/// let field = CharField::new(FieldId::Name);
	/// assert_eq!(field.id, FieldId::Name);
	/// assert!(!field.required);
	/// ```
	pub fn new(id: FieldId) -> Self {
		Self {
			id,
			label: None,
			placeholder: None,
			required: false,
			widget: Widget::TextInput,
			required_message: "This field is required.".to_string(),
		}
	}
	/// Set the field as required
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::field::FieldId;
	/// use proposal_forms::fields::CharField;
	///
	/// let field = CharField::new(FieldId::Name).required();
	/// assert!(field.required);
	/// ```
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}
	/// Set the label for the field
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::field::FieldId;
	/// use proposal_forms::fields::CharField;
	///
	/// let field = CharField::new(FieldId::Name).with_label("Name");
	/// assert_eq!(field.label.as_deref(), Some("Name"));
	/// ```
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
	/// Set the placeholder shown inside the widget
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}
	/// Set the widget used to render the field
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::field::{FieldId, Widget};
	/// use proposal_forms::fields::CharField;
	///
	/// let field = CharField::new(FieldId::GithubTasks).with_widget(Widget::UrlInput);
	/// assert_eq!(field.widget, Widget::UrlInput);
	/// ```
	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}
	/// Set the message reported when a required value is missing
	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = message.into();
		self
	}
}

impl FormField for CharField {
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
		self.required
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn clean(&self, value: FieldValue<'_>) -> FieldResult<()> {
		let text = value
			.as_text()
			.ok_or_else(|| FieldError::Invalid("Expected a text value".to_string()))?;

		if self.required && text.trim().is_empty() {
			return Err(FieldError::Required(self.required_message.clone()));
		}

		Ok(())
	}
}

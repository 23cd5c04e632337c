//! File field for upload metadata

use crate::field::{FieldError, FieldId, FieldResult, FormField, Widget};
use crate::validators::ContentTypeValidator;
use crate::values::FieldValue;

/// FileField checking the declared content type of a selected file
///
/// The field is optional: no selection is always valid. When a file is
/// selected and a content type validator is configured, the file's
/// declared MIME type must match.
#[derive(Debug, Clone)]
pub struct FileField {
	pub id: FieldId,
	pub label: Option<String>,
	pub widget: Widget,
	/// Extension filter passed to the file picker, such as `.pdf`
	pub accept: Option<String>,
	pub content_type: Option<ContentTypeValidator>,
}

impl FileField {
	/// Create a new FileField
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::field::{FieldId, FormField};
	/// use proposal_forms::fields::FileField;
	/// use proposal_forms::values::FieldValue;
	///
	/// let field = FileField::new(FieldId::Pdf1);
	/// assert!(field.clean(FieldValue::File(None)).is_ok());
	/// ```
	pub fn new(id: FieldId) -> Self {
		Self {
			id,
			label: None,
			widget: Widget::FileInput,
			accept: None,
			content_type: None,
		}
	}
	/// Set the label for the field
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
	/// Set the extension filter passed to the file picker
	pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
		self.accept = Some(accept.into());
		self
	}
	/// Set the validator applied to the declared content type
	pub fn with_content_type(mut self, validator: ContentTypeValidator) -> Self {
		self.content_type = Some(validator);
		self
	}
}

impl FormField for FileField {
	fn id(&self) -> FieldId {
		self.id
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		false
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn accept(&self) -> Option<&str> {
		self.accept.as_deref()
	}

	fn clean(&self, value: FieldValue<'_>) -> FieldResult<()> {
		let FieldValue::File(file) = value else {
			return Err(FieldError::Invalid("Expected a file value".to_string()));
		};

		if let Some(file) = file
			&& let Some(validator) = &self.content_type
		{
			validator.validate(&file.content_type)?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::values::UploadedFile;
	use rstest::rstest;

	fn field() -> FileField {
		FileField::new(FieldId::Pdf1).with_content_type(
			ContentTypeValidator::new("application/pdf").with_message("Only PDF files are allowed."),
		)
	}

	#[rstest]
	fn test_file_field_accepts_no_selection() {
		// Arrange
		let field = field();

		// Act
		let result = field.clean(FieldValue::File(None));

		// Assert
		assert!(result.is_ok());
	}

	#[rstest]
	fn test_file_field_accepts_matching_content_type() {
		// Arrange
		let field = field();
		let file = UploadedFile::new("proposal.pdf", "application/pdf", 2048);

		// Act
		let result = field.clean(FieldValue::File(Some(&file)));

		// Assert
		assert!(result.is_ok());
	}

	#[rstest]
	#[case("image/png")]
	#[case("text/plain")]
	#[case("")]
	fn test_file_field_rejects_other_content_types(#[case] content_type: &str) {
		// Arrange
		let field = field();
		let file = UploadedFile::new("tricky.pdf", content_type, 2048);

		// Act
		let result = field.clean(FieldValue::File(Some(&file)));

		// Assert
		match result {
			Err(FieldError::Validation(msg)) => assert_eq!(msg, "Only PDF files are allowed."),
			_ => panic!("Expected Validation error for '{content_type}'"),
		}
	}

	#[rstest]
	fn test_file_field_without_validator_accepts_any_file() {
		// Arrange
		let field = FileField::new(FieldId::Pdf1);
		let file = UploadedFile::new("notes.txt", "text/plain", 10);

		// Act
		let result = field.clean(FieldValue::File(Some(&file)));

		// Assert
		assert!(result.is_ok());
	}

	#[rstest]
	fn test_file_field_rejects_text_value() {
		// Arrange
		let field = field();

		// Act
		let result = field.clean(FieldValue::Text("proposal.pdf"));

		// Assert
		assert!(matches!(result, Err(FieldError::Invalid(_))));
	}
}

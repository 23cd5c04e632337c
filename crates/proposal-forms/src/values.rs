//! Typed containers for the form's current values.

use crate::field::FieldId;
use serde::{Deserialize, Serialize};

/// Metadata of a file selected through the file input.
///
/// Only the declared name, content type, and size travel with the form
/// state. File contents are never read or stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
	/// File name as reported by the file picker
	pub name: String,
	/// Declared MIME content type
	#[serde(rename = "type")]
	pub content_type: String,
	/// Size in bytes
	pub size: u64,
}

impl UploadedFile {
	/// # Examples
	///
	/// ```
	/// use proposal_forms::values::UploadedFile;
	///
	/// let file = UploadedFile::new("proposal.pdf", "application/pdf", 24_576);
	/// assert_eq!(file.name, "proposal.pdf");
	/// assert_eq!(file.content_type, "application/pdf");
	/// ```
	pub fn new(name: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
		Self {
			name: name.into(),
			content_type: content_type.into(),
			size,
		}
	}
}

/// Current value of every form field.
///
/// The initial state is all text fields empty and no file selected.
/// Serialized field names follow the wire names of [`FieldId`].
///
/// # Examples
///
/// ```
/// use proposal_forms::values::FormValues;
///
/// let values = FormValues::default();
/// assert!(values.name.is_empty());
/// assert!(values.pdf1.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub github_tasks: String,
	pub preference1: String,
	pub pdf1: Option<UploadedFile>,
}

/// Borrowed view of a single field's value.
///
/// Text fields yield `Text`, the file field yields `File`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
	Text(&'a str),
	File(Option<&'a UploadedFile>),
}

impl<'a> FieldValue<'a> {
	/// The text content, or `None` for the file field.
	pub fn as_text(&self) -> Option<&'a str> {
		match self {
			FieldValue::Text(text) => Some(text),
			FieldValue::File(_) => None,
		}
	}
}

impl FormValues {
	/// Borrow the value of one field.
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::field::FieldId;
	/// use proposal_forms::values::{FieldValue, FormValues};
	///
	/// let mut values = FormValues::default();
	/// values.email = "user@example.com".to_string();
	///
	/// assert_eq!(values.get(FieldId::Email), FieldValue::Text("user@example.com"));
	/// assert_eq!(values.get(FieldId::Pdf1), FieldValue::File(None));
	/// ```
	pub fn get(&self, id: FieldId) -> FieldValue<'_> {
		match id {
			FieldId::Name => FieldValue::Text(&self.name),
			FieldId::Email => FieldValue::Text(&self.email),
			FieldId::Phone => FieldValue::Text(&self.phone),
			FieldId::GithubTasks => FieldValue::Text(&self.github_tasks),
			FieldId::Preference1 => FieldValue::Text(&self.preference1),
			FieldId::Pdf1 => FieldValue::File(self.pdf1.as_ref()),
		}
	}

	/// The text content of one field, or `None` for the file field.
	pub fn text(&self, id: FieldId) -> Option<&str> {
		self.get(id).as_text()
	}

	/// Overwrite the value of a text field.
	///
	/// Returns `false` without storing anything when `id` names the file
	/// field, which only accepts file selections.
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::field::FieldId;
	/// use proposal_forms::values::FormValues;
	///
	/// let mut values = FormValues::default();
	/// assert!(values.set_text(FieldId::Name, "Ada"));
	/// assert!(!values.set_text(FieldId::Pdf1, "not a file"));
	/// assert_eq!(values.name, "Ada");
	/// ```
	pub fn set_text(&mut self, id: FieldId, value: impl Into<String>) -> bool {
		let slot = match id {
			FieldId::Name => &mut self.name,
			FieldId::Email => &mut self.email,
			FieldId::Phone => &mut self.phone,
			FieldId::GithubTasks => &mut self.github_tasks,
			FieldId::Preference1 => &mut self.preference1,
			FieldId::Pdf1 => return false,
		};
		*slot = value.into();
		true
	}

	/// Replace the selected file. `None` clears the selection.
	pub fn set_file(&mut self, file: Option<UploadedFile>) {
		self.pdf1 = file;
	}

	/// Restore every field to its initial state.
	pub fn reset(&mut self) {
		*self = Self::default();
	}
}

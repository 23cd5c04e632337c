//! Field identifiers, widget kinds, the validation error type, and the
//! trait every concrete field implements.

use crate::values::FieldValue;
use serde::{Deserialize, Serialize};

/// Identifier for each field of the proposal form.
///
/// The set of fields is closed: the form always carries exactly these six.
/// Variant order is the rendering order of the form.
///
/// # Examples
///
/// ```
/// use proposal_forms::field::FieldId;
///
/// assert_eq!(FieldId::GithubTasks.as_str(), "githubTasks");
/// assert_eq!(FieldId::from_name("pdf1"), Some(FieldId::Pdf1));
/// assert_eq!(FieldId::ALL.len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
	Name,
	Email,
	Phone,
	GithubTasks,
	Preference1,
	Pdf1,
}

impl FieldId {
	/// All form fields in rendering order.
	pub const ALL: [FieldId; 6] = [
		FieldId::Name,
		FieldId::Email,
		FieldId::Phone,
		FieldId::GithubTasks,
		FieldId::Preference1,
		FieldId::Pdf1,
	];

	/// The wire name of the field, as used in markup and serialized data.
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::field::FieldId;
	///
	/// assert_eq!(FieldId::Name.as_str(), "name");
	/// assert_eq!(FieldId::Preference1.as_str(), "preference1");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			FieldId::Name => "name",
			FieldId::Email => "email",
			FieldId::Phone => "phone",
			FieldId::GithubTasks => "githubTasks",
			FieldId::Preference1 => "preference1",
			FieldId::Pdf1 => "pdf1",
		}
	}

	/// Look up a field by its wire name.
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::field::FieldId;
	///
	/// assert_eq!(FieldId::from_name("email"), Some(FieldId::Email));
	/// assert_eq!(FieldId::from_name("unknown"), None);
	/// ```
	pub fn from_name(name: &str) -> Option<Self> {
		FieldId::ALL.iter().copied().find(|id| id.as_str() == name)
	}
}

impl std::fmt::Display for FieldId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Widget kind used to render a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
	/// Plain text input
	TextInput,
	/// Email input
	EmailInput,
	/// Telephone input
	TelInput,
	/// URL input
	UrlInput,
	/// Select dropdown
	Select,
	/// File input
	FileInput,
}

/// Validation error for a single field.
///
/// The payload of each variant is the human-readable message shown next to
/// the field. `Display` yields the message unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	/// A required value is missing or blank
	#[error("{0}")]
	Required(String),
	/// A present value fails a validation rule
	#[error("{0}")]
	Validation(String),
	/// The value has the wrong shape for the field (text where a file is
	/// expected, or the reverse)
	#[error("{0}")]
	Invalid(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Common interface for the form's fields.
///
/// A field carries its identity and presentation attributes, and knows how
/// to check one value. `clean` is pure: it borrows the value, touches no
/// other state, and reports at most one error.
pub trait FormField: Send + Sync {
	/// The field's identifier
	fn id(&self) -> FieldId;

	/// Label shown next to the widget
	fn label(&self) -> Option<&str>;

	/// Placeholder text inside the widget, where the widget has one
	fn placeholder(&self) -> Option<&str> {
		None
	}

	/// Whether an empty value fails validation
	fn required(&self) -> bool;

	/// Widget used to render the field
	fn widget(&self) -> &Widget;

	/// `(value, label)` pairs for select widgets
	fn choices(&self) -> &[(String, String)] {
		&[]
	}

	/// Label of the empty option in select widgets
	fn empty_label(&self) -> Option<&str> {
		None
	}

	/// Accepted file extensions for file widgets
	fn accept(&self) -> Option<&str> {
		None
	}

	/// Validates one value against this field's rules.
	fn clean(&self, value: FieldValue<'_>) -> FieldResult<()>;
}

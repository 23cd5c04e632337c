//! User interaction events

use proposal_forms::{FieldId, UploadedFile};
use serde::{Deserialize, Serialize};

/// An interaction with the form.
///
/// Every state change goes through one of these events; there is no other
/// way to mutate a [`FormStore`](crate::store::FormStore). The serialized
/// form tags each event with a `type` discriminant.
///
/// # Examples
///
/// ```
/// use proposal_forms::FieldId;
/// use proposal_pages::events::FormEvent;
///
/// let event = FormEvent::FieldChanged {
/// 	field: FieldId::Name,
/// 	value: "Ada".to_string(),
/// };
/// let json = serde_json::to_string(&event).unwrap();
/// assert!(json.contains("\"type\":\"field_changed\""));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
	/// A text, select, or URL widget received new content
	FieldChanged { field: FieldId, value: String },
	/// The file picker selected a file, or cleared the selection
	FileChanged {
		field: FieldId,
		file: Option<UploadedFile>,
	},
	/// A widget lost focus
	FieldBlurred { field: FieldId },
	/// The submit button was pressed
	SubmitRequested,
}

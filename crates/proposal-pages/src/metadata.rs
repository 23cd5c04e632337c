//! Serializable snapshots of the form state
//!
//! This module provides plain-data structures that capture everything a
//! client needs to render the form, without the trait objects held by
//! [`FormStore`]. A snapshot round-trips through JSON, so state can be
//! sent over the wire or stored and restored later.

use crate::store::FormStore;
use proposal_forms::{FieldId, FormValues, Widget};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serializable metadata for a single field
///
/// ## Fields
///
/// - `name`: Wire name (used as form data key)
/// - `label`: Human-readable label
/// - `required`: Whether the field is required
/// - `widget`: Widget type for rendering
/// - `placeholder`: Placeholder shown inside the widget
/// - `choices`: `(value, label)` pairs for select widgets
/// - `empty_label`: Label of the empty option in select widgets
/// - `accept`: Accepted file extensions for file widgets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMetadata {
	/// Wire name
	pub name: String,

	/// Human-readable label (optional)
	pub label: Option<String>,

	/// Whether the field is required
	pub required: bool,

	/// Widget type for rendering
	pub widget: Widget,

	/// Placeholder text (optional)
	pub placeholder: Option<String>,

	/// Choices for select widgets
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub choices: Vec<(String, String)>,

	/// Label of the empty option (optional)
	pub empty_label: Option<String>,

	/// Accepted file extensions (optional)
	pub accept: Option<String>,
}

/// Serializable snapshot of the whole form state
///
/// ## Fields
///
/// - `fields`: Metadata of each field, in rendering order
/// - `values`: Current field values
/// - `errors`: Error messages of invalid fields, keyed by wire name
/// - `touched`: Wire names of touched fields, in rendering order
/// - `submitted`: Whether the last submission succeeded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSnapshot {
	/// Field metadata list
	pub fields: Vec<FieldMetadata>,

	/// Current values
	pub values: FormValues,

	/// Validation errors (wire name -> message)
	pub errors: HashMap<String, String>,

	/// Touched fields, in rendering order
	pub touched: Vec<String>,

	/// Whether the last submission succeeded
	pub submitted: bool,
}

impl FormSnapshot {
	/// Serialize the snapshot to a JSON string.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}

	/// Restore a snapshot from a JSON string.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}
}

/// Extension trait for extracting a snapshot from the store
pub trait FormStoreExt {
	/// Capture the current state as plain serializable data.
	///
	/// # Examples
	///
	/// ```
	/// use proposal_pages::metadata::FormStoreExt;
	/// use proposal_pages::store::FormStore;
	///
	/// let store = FormStore::new();
	/// let snapshot = store.to_snapshot();
	/// assert_eq!(snapshot.fields.len(), 6);
	/// assert!(!snapshot.submitted);
	/// ```
	fn to_snapshot(&self) -> FormSnapshot;
}

impl FormStoreExt for FormStore {
	fn to_snapshot(&self) -> FormSnapshot {
		let fields = self
			.form()
			.fields()
			.iter()
			.map(|field| FieldMetadata {
				name: field.id().as_str().to_string(),
				label: field.label().map(String::from),
				required: field.required(),
				widget: *field.widget(),
				placeholder: field.placeholder().map(String::from),
				choices: field.choices().to_vec(),
				empty_label: field.empty_label().map(String::from),
				accept: field.accept().map(String::from),
			})
			.collect();

		let errors = self
			.errors()
			.iter()
			.map(|(field, message)| (field.as_str().to_string(), message.clone()))
			.collect();

		// Iterate in declaration order so the output is deterministic.
		let touched = FieldId::ALL
			.iter()
			.filter(|field| self.is_touched(**field))
			.map(|field| field.as_str().to_string())
			.collect();

		FormSnapshot {
			fields,
			values: self.values().clone(),
			errors,
			touched,
			submitted: self.submitted(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::events::FormEvent;
	use rstest::rstest;

	#[rstest]
	fn test_snapshot_of_fresh_store() {
		// Arrange
		let store = FormStore::new();

		// Act
		let snapshot = store.to_snapshot();

		// Assert
		assert_eq!(snapshot.fields.len(), 6);
		assert!(snapshot.errors.is_empty());
		assert!(snapshot.touched.is_empty());
		assert!(!snapshot.submitted);
		assert_eq!(snapshot.fields[0].name, "name");
		assert_eq!(snapshot.fields[5].widget, Widget::FileInput);
	}

	#[rstest]
	fn test_snapshot_errors_use_wire_names() {
		// Arrange
		let mut store = FormStore::new();
		store.apply(FormEvent::SubmitRequested);

		// Act
		let snapshot = store.to_snapshot();

		// Assert
		assert_eq!(
			snapshot.errors.get("githubTasks"),
			None,
			"optional field must not error"
		);
		assert_eq!(snapshot.errors.get("name").map(String::as_str), Some("Name is required."));
		assert_eq!(
			snapshot.touched,
			vec!["name", "email", "phone", "githubTasks", "preference1", "pdf1"]
		);
	}

	#[rstest]
	fn test_snapshot_round_trips_through_json() {
		// Arrange
		let mut store = FormStore::new();
		store.apply(FormEvent::FieldChanged {
			field: FieldId::Name,
			value: "Ada".to_string(),
		});
		store.apply(FormEvent::SubmitRequested);
		let snapshot = store.to_snapshot();

		// Act
		let json = snapshot.to_json().expect("Failed to serialize");
		let back = FormSnapshot::from_json(&json).expect("Failed to deserialize");

		// Assert
		assert_eq!(back.values, snapshot.values);
		assert_eq!(back.errors, snapshot.errors);
		assert_eq!(back.touched, snapshot.touched);
		assert_eq!(back.submitted, snapshot.submitted);
		assert_eq!(back.fields.len(), snapshot.fields.len());
	}

	#[rstest]
	fn test_field_metadata_serialization_shape() {
		// Arrange
		let store = FormStore::new();
		let snapshot = store.to_snapshot();

		// Act
		let json = serde_json::to_value(&snapshot).expect("Failed to serialize");

		// Assert
		assert_eq!(json["fields"][0]["widget"], "text_input");
		assert_eq!(json["fields"][4]["choices"][0][0], "Option 1");
		assert_eq!(json["fields"][5]["accept"], ".pdf");
		// Text fields carry no choices key at all
		assert!(json["fields"][0].get("choices").is_none());
	}
}

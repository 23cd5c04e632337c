//! Form state and event handling

use crate::bound::BoundField;
use crate::events::FormEvent;
use proposal_forms::{FieldId, FormValues, ProposalForm, UploadedFile};
use std::collections::{HashMap, HashSet};

/// Holds the live state of the proposal form and applies events to it.
///
/// The store owns four pieces of state: the current values, the error
/// message per invalid field, the set of touched fields, and whether the
/// last submission succeeded. All of them change only through
/// [`apply`](FormStore::apply).
///
/// A field's error is recomputed when that field changes or blurs, and
/// every field is recomputed on submit. Errors of untouched fields are
/// tracked but not shown; presentation reads them through
/// [`BoundField::visible_error`].
pub struct FormStore {
	form: ProposalForm,
	values: FormValues,
	errors: HashMap<FieldId, String>,
	touched: HashSet<FieldId>,
	submitted: bool,
}

impl FormStore {
	/// Create a store with empty values and no errors.
	///
	/// # Examples
	///
	/// ```
	/// use proposal_pages::store::FormStore;
	///
	/// let store = FormStore::new();
	/// assert!(store.errors().is_empty());
	/// assert!(!store.submitted());
	/// ```
	pub fn new() -> Self {
		Self {
			form: ProposalForm::new(),
			values: FormValues::default(),
			errors: HashMap::new(),
			touched: HashSet::new(),
			submitted: false,
		}
	}

	/// Apply one interaction event.
	///
	/// Edits clear the submitted flag, blurs mark the field as touched,
	/// and a submit request validates the whole form. Events that do not
	/// fit their target field (text for the file field, a file for a text
	/// field) are logged and dropped without touching any state.
	pub fn apply(&mut self, event: FormEvent) {
		match event {
			FormEvent::FieldChanged { field, value } => {
				if !self.values.set_text(field, value) {
					tracing::warn!(field = %field, "ignoring text change for file field");
					return;
				}
				self.submitted = false;
				self.refresh_field(field);
			}
			FormEvent::FileChanged { field, file } => {
				if field != FieldId::Pdf1 {
					tracing::warn!(field = %field, "ignoring file change for text field");
					return;
				}
				self.values.set_file(file);
				self.submitted = false;
				self.refresh_field(field);
			}
			FormEvent::FieldBlurred { field } => {
				self.touched.insert(field);
				self.refresh_field(field);
			}
			FormEvent::SubmitRequested => self.submit(),
		}
	}

	/// Recompute the error of one field from the current values.
	fn refresh_field(&mut self, field: FieldId) {
		match self.form.validate_field(field, &self.values) {
			Some(message) => {
				self.errors.insert(field, message);
			}
			None => {
				self.errors.remove(&field);
			}
		}
	}

	/// Validate everything and either accept or reject the submission.
	///
	/// On success the submitted values are logged, the form returns to its
	/// initial state, and the submitted flag is set. On failure the error
	/// set is replaced with the fresh one, every field becomes touched so
	/// all problems are visible, and the submitted flag keeps its value.
	fn submit(&mut self) {
		let errors = self.form.validate_all(&self.values);

		if errors.is_empty() {
			tracing::info!(
				name = %self.values.name,
				email = %self.values.email,
				phone = %self.values.phone,
				github_tasks = %self.values.github_tasks,
				preference = %self.values.preference1,
				pdf = self.values.pdf1.as_ref().map(|file| file.name.as_str()),
				"proposal submitted"
			);
			self.values.reset();
			self.errors.clear();
			self.touched.clear();
			self.submitted = true;
		} else {
			tracing::debug!(invalid_fields = errors.len(), "proposal submission rejected");
			self.touched.extend(FieldId::ALL);
			self.errors = errors;
		}
	}

	/// The current field values
	pub fn values(&self) -> &FormValues {
		&self.values
	}

	/// Error messages of the currently invalid fields
	pub fn errors(&self) -> &HashMap<FieldId, String> {
		&self.errors
	}

	/// The error message of one field, if it is currently invalid
	pub fn error(&self, field: FieldId) -> Option<&str> {
		self.errors.get(&field).map(String::as_str)
	}

	/// Whether the field has been blurred or gone through a failed submit
	pub fn is_touched(&self, field: FieldId) -> bool {
		self.touched.contains(&field)
	}

	/// Whether the last submission succeeded and no edit happened since
	pub fn submitted(&self) -> bool {
		self.submitted
	}

	/// The underlying form definition
	pub fn form(&self) -> &ProposalForm {
		&self.form
	}

	/// The currently selected file, if any
	pub fn file(&self) -> Option<&UploadedFile> {
		self.values.pdf1.as_ref()
	}

	/// Bind one field to the current state for presentation.
	pub fn bound(&self, field: FieldId) -> Option<BoundField<'_>> {
		self.form.field(field).map(|definition| {
			BoundField::new(
				definition,
				&self.values,
				self.error(field),
				self.is_touched(field),
			)
		})
	}

	/// Bind every field in rendering order.
	pub fn bound_fields(&self) -> Vec<BoundField<'_>> {
		self.form
			.fields()
			.iter()
			.map(|definition| {
				let field = definition.id();
				BoundField::new(
					definition.as_ref(),
					&self.values,
					self.error(field),
					self.is_touched(field),
				)
			})
			.collect()
	}
}

impl Default for FormStore {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_text_change_for_file_field_is_dropped() {
		// Arrange
		let mut store = FormStore::new();

		// Act
		store.apply(FormEvent::FieldChanged {
			field: FieldId::Pdf1,
			value: "proposal.pdf".to_string(),
		});

		// Assert
		assert!(store.values().pdf1.is_none());
		assert!(store.errors().is_empty());
	}

	#[rstest]
	#[case(FieldId::Name)]
	#[case(FieldId::Preference1)]
	fn test_file_change_for_text_field_is_dropped(#[case] field: FieldId) {
		// Arrange
		let mut store = FormStore::new();

		// Act
		store.apply(FormEvent::FileChanged {
			field,
			file: Some(UploadedFile::new("a.pdf", "application/pdf", 1)),
		});

		// Assert
		assert_eq!(store.values(), &FormValues::default());
	}

	#[rstest]
	fn test_change_revalidates_only_that_field() {
		// Arrange
		let mut store = FormStore::new();

		// Act
		store.apply(FormEvent::FieldChanged {
			field: FieldId::Email,
			value: "nope".to_string(),
		});

		// Assert
		assert_eq!(store.error(FieldId::Email), Some("Please enter a valid email address."));
		assert_eq!(store.error(FieldId::Name), None);
	}

	#[rstest]
	fn test_change_clears_a_fixed_error() {
		// Arrange
		let mut store = FormStore::new();
		store.apply(FormEvent::FieldChanged {
			field: FieldId::Email,
			value: "nope".to_string(),
		});

		// Act
		store.apply(FormEvent::FieldChanged {
			field: FieldId::Email,
			value: "ada@example.com".to_string(),
		});

		// Assert
		assert_eq!(store.error(FieldId::Email), None);
	}

	#[rstest]
	fn test_blur_marks_touched_without_clearing_submitted() {
		// Arrange
		let mut store = FormStore::new();

		// Act
		store.apply(FormEvent::FieldBlurred { field: FieldId::Phone });

		// Assert
		assert!(store.is_touched(FieldId::Phone));
		assert!(!store.is_touched(FieldId::Name));
	}

	#[rstest]
	fn test_bound_fields_follow_rendering_order() {
		// Arrange
		let store = FormStore::new();

		// Act
		let order: Vec<FieldId> = store.bound_fields().iter().map(|bound| bound.id()).collect();

		// Assert
		assert_eq!(order, FieldId::ALL);
	}
}

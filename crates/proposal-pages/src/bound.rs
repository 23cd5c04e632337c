//! Fields bound to the current form state

use proposal_forms::{FieldId, FieldValue, FormField, FormValues, UploadedFile, Widget};

/// One field together with its current value, error, and touched flag.
///
/// A `BoundField` is a read-only view built for rendering: it pairs the
/// field definition with the state the widget needs, and decides whether
/// the field's error is visible yet.
pub struct BoundField<'a> {
	field: &'a dyn FormField,
	value: Option<&'a str>,
	file: Option<&'a UploadedFile>,
	error: Option<&'a str>,
	touched: bool,
}

impl<'a> BoundField<'a> {
	/// Bind a field definition to the given state.
	pub fn new(
		field: &'a dyn FormField,
		values: &'a FormValues,
		error: Option<&'a str>,
		touched: bool,
	) -> Self {
		let (value, file) = match values.get(field.id()) {
			FieldValue::Text(text) => (Some(text), None),
			FieldValue::File(file) => (None, file),
		};
		Self {
			field,
			value,
			file,
			error,
			touched,
		}
	}

	/// The field's identifier
	pub fn id(&self) -> FieldId {
		self.field.id()
	}

	/// The HTML name attribute
	pub fn html_name(&self) -> &'static str {
		self.field.id().as_str()
	}

	/// The HTML id attribute
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::FieldId;
	/// use proposal_pages::store::FormStore;
	///
	/// let store = FormStore::new();
	/// let bound = store.bound(FieldId::Pdf1).unwrap();
	/// assert_eq!(bound.id_for_label(), "id_pdf1");
	/// ```
	pub fn id_for_label(&self) -> String {
		format!("id_{}", self.html_name())
	}

	/// The field label
	pub fn label(&self) -> Option<&str> {
		self.field.label()
	}

	/// The placeholder shown inside the widget
	pub fn placeholder(&self) -> Option<&str> {
		self.field.placeholder()
	}

	/// The widget used to render the field
	pub fn widget(&self) -> &Widget {
		self.field.widget()
	}

	/// Whether the field must be filled for the form to submit
	pub fn is_required(&self) -> bool {
		self.field.required()
	}

	/// `(value, label)` pairs for select widgets
	pub fn choices(&self) -> &[(String, String)] {
		self.field.choices()
	}

	/// Label of the empty option in select widgets
	pub fn empty_label(&self) -> Option<&str> {
		self.field.empty_label()
	}

	/// Accepted file extensions for file widgets
	pub fn accept(&self) -> Option<&str> {
		self.field.accept()
	}

	/// The current text value, or `None` for the file field
	pub fn value(&self) -> Option<&str> {
		self.value
	}

	/// The currently selected file, if this is the file field
	pub fn file(&self) -> Option<&UploadedFile> {
		self.file
	}

	/// The field's current error, visible or not
	pub fn error(&self) -> Option<&str> {
		self.error
	}

	/// Whether the field has been interacted with
	pub fn is_touched(&self) -> bool {
		self.touched
	}

	/// The error to show next to the widget.
	///
	/// Errors surface only after the user has interacted with the field,
	/// so a half-typed value is not flagged while the rest of the form is
	/// still untouched.
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::FieldId;
	/// use proposal_pages::events::FormEvent;
	/// use proposal_pages::store::FormStore;
	///
	/// let mut store = FormStore::new();
	/// store.apply(FormEvent::FieldChanged {
	/// 	field: FieldId::Email,
	/// 	value: "nope".to_string(),
	/// });
	///
	/// // Invalid, but not touched yet
	/// let bound = store.bound(FieldId::Email).unwrap();
	/// assert!(bound.error().is_some());
	/// assert_eq!(bound.visible_error(), None);
	///
	/// store.apply(FormEvent::FieldBlurred { field: FieldId::Email });
	/// let bound = store.bound(FieldId::Email).unwrap();
	/// assert_eq!(bound.visible_error(), Some("Please enter a valid email address."));
	/// ```
	pub fn visible_error(&self) -> Option<&str> {
		if self.touched { self.error } else { None }
	}

	/// Whether an error is currently shown for this field
	pub fn has_visible_error(&self) -> bool {
		self.visible_error().is_some()
	}
}

//! Form lifecycle tests
//!
//! Drives the store through full user journeys: filling fields, blurring,
//! failing and retrying submissions, and editing after success.

use proposal_forms::{FieldId, FormValues, UploadedFile};
use proposal_pages::{FormEvent, FormStore, FormStoreExt};
use rstest::rstest;

fn change(field: FieldId, value: &str) -> FormEvent {
	FormEvent::FieldChanged {
		field,
		value: value.to_string(),
	}
}

fn blur(field: FieldId) -> FormEvent {
	FormEvent::FieldBlurred { field }
}

fn fill_valid(store: &mut FormStore) {
	store.apply(change(FieldId::Name, "Ada Lovelace"));
	store.apply(change(FieldId::Email, "ada@example.com"));
	store.apply(change(FieldId::Phone, "1234567890"));
	store.apply(change(FieldId::GithubTasks, "https://github.com/ada/tasks"));
	store.apply(change(FieldId::Preference1, "Option 2"));
}

#[rstest]
fn test_successful_submission_resets_the_form() {
	let mut store = FormStore::new();
	fill_valid(&mut store);
	store.apply(FormEvent::FileChanged {
		field: FieldId::Pdf1,
		file: Some(UploadedFile::new("proposal.pdf", "application/pdf", 4096)),
	});

	store.apply(FormEvent::SubmitRequested);

	assert!(store.submitted());
	assert_eq!(store.values(), &FormValues::default());
	assert!(store.errors().is_empty());
	for field in FieldId::ALL {
		assert!(!store.is_touched(field), "{field} must be untouched after reset");
	}
}

#[rstest]
fn test_failed_submission_keeps_values_and_shows_all_errors() {
	let mut store = FormStore::new();
	fill_valid(&mut store);
	store.apply(change(FieldId::Name, ""));
	store.apply(change(FieldId::Phone, "123"));

	store.apply(FormEvent::SubmitRequested);

	assert!(!store.submitted());
	assert_eq!(store.values().email, "ada@example.com");
	assert_eq!(store.error(FieldId::Name), Some("Name is required."));
	assert_eq!(store.error(FieldId::Phone), Some("Phone number must be exactly 10 digits."));
	assert_eq!(store.error(FieldId::Email), None);
	for field in FieldId::ALL {
		assert!(store.is_touched(field), "{field} must be touched after a failed submit");
	}
}

#[rstest]
fn test_submission_with_only_name_missing() {
	let mut store = FormStore::new();
	fill_valid(&mut store);
	store.apply(change(FieldId::Name, ""));

	store.apply(FormEvent::SubmitRequested);

	assert!(!store.submitted());
	assert_eq!(store.errors().len(), 1);
	assert_eq!(store.error(FieldId::Name), Some("Name is required."));
	assert_eq!(store.values().email, "ada@example.com");
	assert_eq!(store.values().phone, "1234567890");
	assert_eq!(store.values().preference1, "Option 2");
}

#[rstest]
fn test_failed_submission_replaces_stale_errors() {
	let mut store = FormStore::new();
	store.apply(FormEvent::SubmitRequested);
	assert_eq!(store.errors().len(), 4);

	fill_valid(&mut store);
	store.apply(change(FieldId::Email, "still-bad"));
	store.apply(FormEvent::SubmitRequested);

	assert_eq!(store.errors().len(), 1);
	assert_eq!(store.error(FieldId::Email), Some("Please enter a valid email address."));
}

#[rstest]
fn test_error_visibility_is_gated_on_touched() {
	let mut store = FormStore::new();
	store.apply(change(FieldId::Email, "nope"));

	let bound = store.bound(FieldId::Email).expect("email field");
	assert!(bound.error().is_some());
	assert!(!bound.has_visible_error());

	store.apply(blur(FieldId::Email));

	let bound = store.bound(FieldId::Email).expect("email field");
	assert_eq!(bound.visible_error(), Some("Please enter a valid email address."));
}

#[rstest]
fn test_blur_validates_without_editing() {
	let mut store = FormStore::new();

	store.apply(blur(FieldId::Name));

	assert!(store.is_touched(FieldId::Name));
	assert_eq!(store.error(FieldId::Name), Some("Name is required."));
}

#[rstest]
fn test_fixing_a_field_clears_its_error_immediately() {
	let mut store = FormStore::new();
	store.apply(FormEvent::SubmitRequested);
	assert_eq!(store.error(FieldId::Preference1), Some("Please select a preference."));

	store.apply(change(FieldId::Preference1, "Option 4"));

	assert_eq!(store.error(FieldId::Preference1), None);
}

#[rstest]
fn test_edit_after_success_returns_to_editing() {
	let mut store = FormStore::new();
	fill_valid(&mut store);
	store.apply(FormEvent::SubmitRequested);
	assert!(store.submitted());

	store.apply(change(FieldId::Name, "A"));

	assert!(!store.submitted());
	assert_eq!(store.values().name, "A");
}

#[rstest]
fn test_file_change_after_success_returns_to_editing() {
	let mut store = FormStore::new();
	fill_valid(&mut store);
	store.apply(FormEvent::SubmitRequested);
	assert!(store.submitted());

	store.apply(FormEvent::FileChanged {
		field: FieldId::Pdf1,
		file: Some(UploadedFile::new("v2.pdf", "application/pdf", 1)),
	});

	assert!(!store.submitted());
}

#[rstest]
fn test_blur_after_success_keeps_submitted() {
	let mut store = FormStore::new();
	fill_valid(&mut store);
	store.apply(FormEvent::SubmitRequested);

	store.apply(blur(FieldId::Name));

	assert!(store.submitted());
}

#[rstest]
fn test_retry_after_failed_submission_succeeds() {
	let mut store = FormStore::new();
	store.apply(FormEvent::SubmitRequested);
	assert!(!store.submitted());

	fill_valid(&mut store);
	store.apply(FormEvent::SubmitRequested);

	assert!(store.submitted());
	assert!(store.errors().is_empty());
}

#[rstest]
fn test_invalid_pdf_blocks_submission() {
	let mut store = FormStore::new();
	fill_valid(&mut store);
	store.apply(FormEvent::FileChanged {
		field: FieldId::Pdf1,
		file: Some(UploadedFile::new("resume.docx", "application/msword", 100)),
	});

	store.apply(FormEvent::SubmitRequested);

	assert!(!store.submitted());
	assert_eq!(store.error(FieldId::Pdf1), Some("Only PDF files are allowed."));
}

#[rstest]
fn test_clearing_the_file_clears_its_error() {
	let mut store = FormStore::new();
	store.apply(FormEvent::FileChanged {
		field: FieldId::Pdf1,
		file: Some(UploadedFile::new("image.png", "image/png", 100)),
	});
	assert_eq!(store.error(FieldId::Pdf1), Some("Only PDF files are allowed."));

	store.apply(FormEvent::FileChanged {
		field: FieldId::Pdf1,
		file: None,
	});

	assert_eq!(store.error(FieldId::Pdf1), None);
}

#[rstest]
fn test_snapshot_follows_the_lifecycle() {
	let mut store = FormStore::new();
	store.apply(change(FieldId::Name, "Ada"));
	store.apply(blur(FieldId::Name));

	let snapshot = store.to_snapshot();
	assert_eq!(snapshot.values.name, "Ada");
	assert_eq!(snapshot.touched, vec!["name"]);
	assert!(snapshot.errors.is_empty());

	fill_valid(&mut store);
	store.apply(FormEvent::SubmitRequested);

	let snapshot = store.to_snapshot();
	assert!(snapshot.submitted);
	assert!(snapshot.touched.is_empty());
	assert_eq!(snapshot.values, FormValues::default());
}

#[rstest]
fn test_events_round_trip_as_json() {
	let events = vec![
		change(FieldId::Name, "Ada"),
		FormEvent::FileChanged {
			field: FieldId::Pdf1,
			file: Some(UploadedFile::new("proposal.pdf", "application/pdf", 1)),
		},
		blur(FieldId::Name),
		FormEvent::SubmitRequested,
	];

	for event in events {
		let json = serde_json::to_string(&event).expect("Failed to serialize");
		let back: FormEvent = serde_json::from_str(&json).expect("Failed to deserialize");
		assert_eq!(back, event);
	}
}

#[rstest]
fn test_replayed_events_rebuild_the_same_state() {
	let events = vec![
		change(FieldId::Name, "Ada"),
		change(FieldId::Email, "bad"),
		blur(FieldId::Email),
		FormEvent::SubmitRequested,
		change(FieldId::Phone, "12"),
	];

	let mut first = FormStore::new();
	let mut second = FormStore::new();
	for event in &events {
		first.apply(event.clone());
		second.apply(event.clone());
	}

	assert_eq!(first.values(), second.values());
	assert_eq!(first.errors(), second.errors());
	assert_eq!(first.submitted(), second.submitted());
}

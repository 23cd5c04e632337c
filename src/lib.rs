//! # Proposal Form
//!
//! A single-page proposal submission form: six fields with per-field
//! validation and exact user-facing messages, typed interaction events,
//! a state store with touched-gated error visibility, and HTML rendering
//! of the whole page.
//!
//! ## Feature Flags
//!
//! - `forms` - Field definitions, validators, and the assembled form
//! - `pages` - Events, state store, rendering, and snapshots (implies `forms`)
//! - `full` (default) - Everything
//!
//! ## Example
//!
//! ```
//! use proposal_form::forms::FieldId;
//! use proposal_form::pages::{FormEvent, FormStore};
//!
//! let mut store = FormStore::new();
//! store.apply(FormEvent::FieldChanged {
//! 	field: FieldId::Name,
//! 	value: "Ada Lovelace".to_string(),
//! });
//!
//! assert_eq!(store.values().name, "Ada Lovelace");
//! assert!(!store.submitted());
//! ```

#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "pages")]
pub mod pages;

//! Page layer for the proposal submission form
//!
//! This crate drives the form defined in `proposal-forms`:
//! - Typed interaction events and the store that applies them
//! - Touched-gated error visibility for presentation
//! - HTML rendering of the whole page
//! - Serializable snapshots of the form state

pub mod bound;
pub mod events;
pub mod metadata;
pub mod render;
pub mod store;

pub use bound::BoundField;
pub use events::FormEvent;
pub use metadata::{FieldMetadata, FormSnapshot, FormStoreExt};
pub use render::{html_escape, render_page};
pub use store::FormStore;

//! Form state, events, and rendering
//!
//! This module provides access to proposal-pages: the typed interaction
//! events, the store that applies them, bound fields for presentation,
//! HTML rendering of the page, and serializable state snapshots.

// Re-export all proposal-pages functionality
pub use proposal_pages::*;

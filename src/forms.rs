//! Form definition and validation
//!
//! This module provides access to proposal-forms: field identifiers and
//! widgets, typed value containers, the reusable validators, and the
//! assembled six-field proposal form.

// Re-export all proposal-forms functionality
pub use proposal_forms::*;

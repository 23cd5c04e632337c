//! Value validators for proposal form fields
//!
//! This module provides the reusable checks behind the email, phone, and
//! file fields. Each validator holds an optional custom message and
//! reports failures through the field validation pipeline.

use crate::field::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

// Email pattern: one or more non-whitespace characters, an `@`, more
// non-whitespace, then a dot and a non-whitespace tail.
//
// Intentionally permissive; the goal is catching obvious typos, not
// enforcing the full RFC grammar.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\S+@\S+\.\S+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// ASCII digits only, empty string included.
//
// Emptiness is handled separately by length checks so that a blank value
// reports a length problem rather than a character problem.
static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[0-9]*$").expect("DIGITS_REGEX: invalid regex pattern")
});

/// Validates that a string value looks like an email address.
///
/// The check requires a local part, an `@`, and a domain containing at
/// least one dot, with no whitespace anywhere.
///
/// # Examples
///
/// ```
/// use proposal_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("user@example.com").is_ok());
/// assert!(validator.validate("user@example").is_err());
/// assert!(validator.validate("not-an-email").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailValidator {
	/// Creates a new `EmailValidator` with the default error message.
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::validators::EmailValidator;
	///
	/// let validator = EmailValidator::new();
	/// assert!(validator.validate("user@example.com").is_ok());
	/// ```
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::validators::EmailValidator;
	///
	/// let validator = EmailValidator::new().with_message("Please enter a valid email address.");
	/// assert!(validator.validate("bad").is_err());
	/// ```
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates the given string slice as an email address.
	///
	/// Returns `Ok(())` when the value matches, or a
	/// [`FieldError::Validation`] containing an error message when it
	/// does not.
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::validators::EmailValidator;
	///
	/// let validator = EmailValidator::new();
	/// assert!(validator.validate("first.last@sub.example.org").is_ok());
	/// assert!(validator.validate("user @example.com").is_err());
	/// ```
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or("Enter a valid email address");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates that a string value contains only ASCII digits.
///
/// The empty string passes; combine with [`ExactLengthValidator`] when a
/// specific length is also required.
///
/// # Examples
///
/// ```
/// use proposal_forms::validators::DigitsValidator;
///
/// let validator = DigitsValidator::new();
/// assert!(validator.validate("0123456789").is_ok());
/// assert!(validator.validate("").is_ok());
/// assert!(validator.validate("12a4").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DigitsValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl DigitsValidator {
	/// Creates a new `DigitsValidator` with the default error message.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates that the given string slice is all digits.
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::validators::DigitsValidator;
	///
	/// let validator = DigitsValidator::new();
	/// assert!(validator.validate("42").is_ok());
	/// assert!(validator.validate("+42").is_err());
	/// ```
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if DIGITS_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Enter a value containing only digits");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for DigitsValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates that a string value has an exact number of characters.
///
/// Length is counted in characters, not bytes, so multi-byte input is
/// measured the way a user would count it.
///
/// # Examples
///
/// ```
/// use proposal_forms::validators::ExactLengthValidator;
///
/// let validator = ExactLengthValidator::new(10);
/// assert!(validator.validate("1234567890").is_ok());
/// assert!(validator.validate("12345").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ExactLengthValidator {
	/// Required number of characters
	length: usize,
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl ExactLengthValidator {
	/// Creates a new `ExactLengthValidator` requiring `length` characters.
	pub fn new(length: usize) -> Self {
		Self {
			length,
			message: None,
		}
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates that the given string slice has the required length.
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::validators::ExactLengthValidator;
	///
	/// let validator = ExactLengthValidator::new(4);
	/// assert!(validator.validate("abcd").is_ok());
	/// assert!(validator.validate("").is_err());
	/// ```
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		let count = value.chars().count();
		if count == self.length {
			Ok(())
		} else {
			let msg = match &self.message {
				Some(message) => message.clone(),
				None => format!(
					"Ensure this value has exactly {} characters (it has {})",
					self.length, count
				),
			};
			Err(FieldError::Validation(msg))
		}
	}
}

/// Validates that a file's declared content type matches an expected one.
///
/// The comparison is an exact, case-sensitive string match against the
/// MIME type reported by the file picker.
///
/// # Examples
///
/// ```
/// use proposal_forms::validators::ContentTypeValidator;
///
/// let validator = ContentTypeValidator::new("application/pdf");
/// assert!(validator.validate("application/pdf").is_ok());
/// assert!(validator.validate("image/png").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ContentTypeValidator {
	/// Accepted MIME type
	expected: String,
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl ContentTypeValidator {
	/// Creates a new `ContentTypeValidator` accepting only `expected`.
	pub fn new(expected: impl Into<String>) -> Self {
		Self {
			expected: expected.into(),
			message: None,
		}
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// The MIME type this validator accepts.
	pub fn expected(&self) -> &str {
		&self.expected
	}

	/// Validates the given declared content type.
	///
	/// # Examples
	///
	/// ```
	/// use proposal_forms::validators::ContentTypeValidator;
	///
	/// let validator = ContentTypeValidator::new("application/pdf")
	/// 	.with_message("Only PDF files are allowed.");
	/// assert!(validator.validate("text/plain").is_err());
	/// ```
	pub fn validate(&self, content_type: &str) -> FieldResult<()> {
		if content_type == self.expected {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or("Unsupported file type");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

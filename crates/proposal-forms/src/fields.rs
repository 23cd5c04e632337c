// Text fields
pub mod char_field;
pub mod email_field;
pub mod phone_field;

// Choice and upload fields
pub mod choice_field;
pub mod file_field;

// Re-exports for text fields
pub use char_field::CharField;
pub use email_field::EmailField;
pub use phone_field::PhoneField;

// Re-exports for choice and upload fields
pub use choice_field::ChoiceField;
pub use file_field::FileField;

//! Domain value objects and field validators.
//!
//! Names, phone numbers and birthdays are validated once at construction
//! and are immutable afterwards, so the rest of the crate never sees an
//! invalid field.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;

/// Validate a contact name.
pub fn validate_name(raw: &str) -> Result<Name, ValidationError> {
    Name::new(raw)
}

/// Validate a phone number (exactly 10 decimal digits).
pub fn validate_phone(raw: &str) -> Result<PhoneNumber, ValidationError> {
    PhoneNumber::new(raw)
}

/// Validate a `DD.MM.YYYY` birthday.
pub fn validate_birthday(raw: &str) -> Result<Birthday, ValidationError> {
    Birthday::parse(raw)
}

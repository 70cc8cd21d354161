//! A single contact: name, phone numbers and an optional birthday.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact in the directory.
///
/// The name is fixed at creation. Phones keep insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactRecord {
    name: Name,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove every phone equal to `value`, returning how many were removed.
    ///
    /// Removing a number the contact does not have is not an error.
    pub fn remove_phone(&mut self, value: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|phone| phone.as_str() != value);
        before - self.phones.len()
    }

    /// Replace `old_value` with `new_raw`.
    ///
    /// The old number is removed before the new one is validated, so on a
    /// validation error the record is left without either number.
    pub fn edit_phone(&mut self, old_value: &str, new_raw: &str) -> Result<(), ValidationError> {
        self.remove_phone(old_value);
        let phone = PhoneNumber::new(new_raw)?;
        self.add_phone(phone);
        Ok(())
    }

    /// Set or overwrite the birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Days from `today` until the next birthday, `0` when it is today.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_next_birthday(&self, today: NaiveDate) -> Option<u32> {
        let next = self.birthday?.next_occurrence(today)?;
        u32::try_from((next - today).num_days()).ok()
    }

    /// Phones joined with `", "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Phones: [{}], Birthday: ", self.name, self.phones_display())?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "N/A"),
        }
    }
}

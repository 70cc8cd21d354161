//! Contact records and the directory that owns them.

pub mod directory;
pub mod record;

pub use directory::{Directory, DuplicateNameError, Upsert};
pub use record::ContactRecord;

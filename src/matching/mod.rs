//! Fuzzy matching utilities for contact names.

pub mod name_matcher;

pub use name_matcher::{NameMatcher, Suggestion};

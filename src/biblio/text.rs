//! Shared validation and normalization helpers.
//!
//! These rules are consumed by more than one command module, so they live
//! here rather than beside any single command:
//!
//! - email validity (registration and lookup)
//! - publication-year validity (catalog insertion)
//! - accent folding (user-name matching for lookup and deletion)

use crate::error::{BiblioError, Result};
use chrono::{Datelike, Utc};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strip diacritics by decomposing to NFD and dropping combining marks,
/// so "García" folds to "Garcia".
pub fn fold_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Canonical form used when matching user names: trimmed, accent-folded,
/// lowercased.
pub fn lookup_key(s: &str) -> String {
    fold_accents(s.trim()).to_lowercase()
}

/// An email is valid iff it has exactly one `@`, a local part of at least
/// 8 characters, and a `.` somewhere in the domain part.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => local.chars().count() >= 8 && domain.contains('.'),
        _ => false,
    }
}

/// A publication year must have exactly four digits and must not lie in
/// the future.
pub fn validate_year(year: i32) -> Result<()> {
    if !(1000..=9999).contains(&year) {
        return Err(BiblioError::Validation(format!(
            "Invalid year {year}: enter a four digit number"
        )));
    }
    let current = Utc::now().year();
    if year > current {
        return Err(BiblioError::Validation(format!(
            "Invalid year {year}: must not be later than {current}"
        )));
    }
    Ok(())
}

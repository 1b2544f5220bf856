use crate::commands::CmdResult;
use crate::error::{BiblioError, Result};
use crate::store::Catalog;
use std::str::FromStr;

/// The closed set of keys the catalog can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Year,
}

impl FromStr for SortKey {
    type Err = BiblioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SortKey::Title),
            "year" => Ok(SortKey::Year),
            other => Err(BiblioError::Validation(format!(
                "Unknown sort key \"{other}\": expected title or year"
            ))),
        }
    }
}

/// Returns a sorted copy; catalog order is preserved.
pub fn run(catalog: &Catalog, key: SortKey) -> Result<CmdResult> {
    let mut listed = catalog.books().to_vec();
    match key {
        SortKey::Title => listed.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Year => listed.sort_by_key(|b| b.year),
    }
    Ok(CmdResult::default().with_listed_books(listed))
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::Catalog;
use serde::Serialize;

/// Snapshot of the catalog for the report view.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub total: usize,
    pub lent: usize,
    pub oldest: Option<Book>,
    pub newest: Option<Book>,
    /// Genre and book count, sorted by count descending; ties keep the
    /// order genres first appear in the catalog. Books without a genre
    /// are grouped under "Uncategorized".
    pub genre_counts: Vec<(String, usize)>,
}

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if catalog.is_empty() {
        result.add_message(CmdMessage::info("The catalog is empty, nothing to report"));
        result.report = Some(CatalogReport {
            total: 0,
            lent: 0,
            oldest: None,
            newest: None,
            genre_counts: Vec::new(),
        });
        return Ok(result);
    }

    let books = catalog.books();
    let lent = books.iter().filter(|b| !b.available).count();

    let mut genre_counts: Vec<(String, usize)> = Vec::new();
    for book in books {
        let genre = if book.genre.trim().is_empty() {
            "Uncategorized"
        } else {
            book.genre.as_str()
        };
        match genre_counts.iter_mut().find(|(g, _)| g == genre) {
            Some((_, count)) => *count += 1,
            None => genre_counts.push((genre.to_string(), 1)),
        }
    }
    genre_counts.sort_by(|a, b| b.1.cmp(&a.1));

    result.report = Some(CatalogReport {
        total: books.len(),
        lent,
        oldest: extreme_by_year(books, |candidate, best| candidate < best),
        newest: extreme_by_year(books, |candidate, best| candidate > best),
        genre_counts,
    });
    Ok(result)
}

// First book with the extreme year; ties resolve to the earlier entry.
fn extreme_by_year(books: &[Book], better: impl Fn(i32, i32) -> bool) -> Option<Book> {
    let mut best: Option<&Book> = None;
    for book in books {
        match best {
            Some(b) if !better(book.year, b.year) => {}
            _ => best = Some(book),
        }
    }
    best.cloned()
}

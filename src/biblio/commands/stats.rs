use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Book;
use crate::store::Catalog;
use serde::Serialize;

/// Publication-year statistics over the whole catalog.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryStats {
    pub total: usize,
    /// Mean publication year, rounded to the nearest integer; 0 when the
    /// catalog is empty.
    pub average_year: i32,
    pub oldest: Option<Book>,
    pub newest: Option<Book>,
    /// Years between the newest and the oldest book.
    pub year_gap: i32,
    /// Year and book count, sorted by count descending; ties keep
    /// first-appearance order.
    pub year_counts: Vec<(i32, usize)>,
}

impl LibraryStats {
    fn empty() -> Self {
        Self {
            total: 0,
            average_year: 0,
            oldest: None,
            newest: None,
            year_gap: 0,
            year_counts: Vec::new(),
        }
    }
}

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if catalog.is_empty() {
        result.stats = Some(LibraryStats::empty());
        return Ok(result);
    }

    let books = catalog.books();
    let sum: i64 = books.iter().map(|b| i64::from(b.year)).sum();
    let average_year = (sum as f64 / books.len() as f64).round() as i32;

    let mut year_counts: Vec<(i32, usize)> = Vec::new();
    for book in books {
        match year_counts.iter_mut().find(|(y, _)| *y == book.year) {
            Some((_, count)) => *count += 1,
            None => year_counts.push((book.year, 1)),
        }
    }
    year_counts.sort_by(|a, b| b.1.cmp(&a.1));

    let oldest = books.iter().min_by_key(|b| b.year).cloned();
    let newest = books
        .iter()
        .fold(None::<&Book>, |best, b| match best {
            Some(current) if b.year <= current.year => Some(current),
            _ => Some(b),
        })
        .cloned();
    let year_gap = match (&oldest, &newest) {
        (Some(o), Some(n)) => n.year - o.year,
        _ => 0,
    };

    result.stats = Some(LibraryStats {
        total: books.len(),
        average_year,
        oldest,
        newest,
        year_gap,
        year_counts,
    });
    Ok(result)
}

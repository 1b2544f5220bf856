use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiblioError, Result};
use crate::store::Catalog;
use std::str::FromStr;

/// The closed set of fields a catalog search may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Genre,
}

impl FromStr for SearchField {
    type Err = BiblioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "genre" => Ok(SearchField::Genre),
            other => Err(BiblioError::Validation(format!(
                "Unknown search field \"{other}\": expected title, author or genre"
            ))),
        }
    }
}

/// Case-insensitive substring match over one field; the catalog is not
/// touched.
pub fn run(catalog: &Catalog, field: SearchField, term: &str) -> Result<CmdResult> {
    let needle = term.to_lowercase();
    let listed: Vec<_> = catalog
        .books()
        .iter()
        .filter(|b| {
            let haystack = match field {
                SearchField::Title => &b.title,
                SearchField::Author => &b.author,
                SearchField::Genre => &b.genre,
            };
            haystack.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    let mut result = CmdResult::default().with_listed_books(listed);
    if result.listed_books.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No books found matching \"{term}\""
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::LibraryFixture;

    fn sample() -> Catalog {
        LibraryFixture::new()
            .with_book("Cien años de soledad", "Gabriel García Márquez", 1967, "Magic realism")
            .with_book("El Hobbit", "J.R.R. Tolkien", 1937, "Fantasy")
            .with_book("1984", "George Orwell", 1949, "Dystopia")
            .catalog
    }

    #[test]
    fn finds_books_by_title() {
        let result = run(&sample(), SearchField::Title, "1984").unwrap();

        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].author, "George Orwell");
    }

    #[test]
    fn matching_is_case_insensitive_and_partial() {
        let result = run(&sample(), SearchField::Author, "tolkien").unwrap();

        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].title, "El Hobbit");
    }

    #[test]
    fn an_unmatched_term_yields_an_empty_listing_and_a_notice() {
        let result = run(&sample(), SearchField::Author, "Unknown Author").unwrap();

        assert!(result.listed_books.is_empty());
        assert!(!result.messages.is_empty());
    }

    #[test]
    fn rejects_an_unknown_field_name() {
        let err = "color".parse::<SearchField>().unwrap_err();
        assert!(matches!(err, BiblioError::Validation(_)));
    }

    #[test]
    fn parses_field_names_case_insensitively() {
        assert_eq!("Genre".parse::<SearchField>().unwrap(), SearchField::Genre);
    }
}

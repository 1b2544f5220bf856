use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiblioError, Result};
use crate::model::Book;
use crate::store::Catalog;
use crate::text;

pub fn run(
    catalog: &mut Catalog,
    title: &str,
    author: &str,
    year: i32,
    genre: &str,
) -> Result<CmdResult> {
    text::validate_year(year)?;
    if catalog.has_duplicate(title, author, year) {
        return Err(BiblioError::Validation(format!(
            "\"{title}\" by {author} ({year}) is already in the catalog"
        )));
    }

    let book = Book::new(catalog.next_id(), title, author, year, genre);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added \"{}\" (id {})",
        book.title, book.id
    )));
    result.affected_books.push(book.clone());
    catalog.insert(book);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::LibraryFixture;
    use chrono::{Datelike, Utc};

    fn sample() -> Catalog {
        LibraryFixture::new()
            .with_book("Cien años de soledad", "Gabriel García Márquez", 1967, "")
            .with_book("El Hobbit", "J.R.R. Tolkien", 1937, "Fantasy")
            .with_book("1984", "George Orwell", 1949, "Dystopia")
            .catalog
    }

    #[test]
    fn adds_a_new_book_with_the_next_sequential_id() {
        let mut catalog = sample();

        let result = run(&mut catalog, "Ficciones", "Jorge Luis Borges", 1944, "Short stories")
            .unwrap();

        assert_eq!(result.affected_books[0].id, 4);
        assert_eq!(catalog.len(), 4);
        let added = catalog.get(4).unwrap();
        assert_eq!(added.title, "Ficciones");
        assert!(added.available);
    }

    #[test]
    fn rejects_an_exact_duplicate() {
        let mut catalog = sample();

        let err = run(&mut catalog, "1984", "George Orwell", 1949, "Dystopia").unwrap_err();

        assert!(matches!(err, BiblioError::Validation(_)));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn same_title_with_a_different_year_is_not_a_duplicate() {
        let mut catalog = sample();

        run(&mut catalog, "1984", "George Orwell", 1950, "Dystopia").unwrap();

        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn rejects_a_year_that_is_not_four_digits() {
        let mut catalog = sample();

        let err = run(&mut catalog, "Short Book", "Author", 123, "").unwrap_err();

        assert!(matches!(err, BiblioError::Validation(_)));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn rejects_a_future_year() {
        let mut catalog = sample();
        let next_year = Utc::now().year() + 1;

        let err = run(&mut catalog, "Time Travel", "Author", next_year, "Sci-fi").unwrap_err();

        assert!(matches!(err, BiblioError::Validation(_)));
        assert_eq!(catalog.len(), 3);
    }
}

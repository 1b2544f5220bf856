use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Catalog, Membership};

/// Produce normalized copies of every record: book titles uppercased,
/// author whitespace trimmed, user emails lowercased. The stores are not
/// touched; the caller decides what to do with the copies.
pub fn run(catalog: &Catalog, membership: &Membership) -> Result<CmdResult> {
    let listed_books = catalog
        .books()
        .iter()
        .map(|b| {
            let mut book = b.clone();
            book.title = book.title.trim().to_uppercase();
            book.author = book.author.trim().to_string();
            book
        })
        .collect();

    let listed_users = membership
        .users()
        .iter()
        .map(|u| {
            let mut user = u.clone();
            user.email = user.email.trim().to_lowercase();
            user
        })
        .collect();

    let mut result = CmdResult::default()
        .with_listed_books(listed_books)
        .with_listed_users(listed_users);
    result.add_message(CmdMessage::info(
        "Normalized view only, records are unchanged",
    ));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::LibraryFixture;

    fn sample() -> LibraryFixture {
        LibraryFixture::new()
            .with_book(" el señor de los anillos ", "  J.R.R. Tolkien  ", 1954, "Fantasy")
            .with_book("1984", "George Orwell", 1949, "Dystopia")
            .with_user("Ana García", "  ANA.GARCIA@EXAMPLE.COM")
            .with_user("Beto Pérez", "beto.perez@example.com")
    }

    #[test]
    fn uppercases_titles_and_trims_authors() {
        let fx = sample();

        let result = run(&fx.catalog, &fx.membership).unwrap();

        assert_eq!(result.listed_books[0].title, "EL SEÑOR DE LOS ANILLOS");
        assert_eq!(result.listed_books[0].author, "J.R.R. Tolkien");
        assert_eq!(result.listed_books[1].title, "1984");
    }

    #[test]
    fn lowercases_emails() {
        let fx = sample();

        let result = run(&fx.catalog, &fx.membership).unwrap();

        assert_eq!(result.listed_users[0].email, "ana.garcia@example.com");
        assert_eq!(result.listed_users[1].email, "beto.perez@example.com");
    }

    #[test]
    fn leaves_the_stores_untouched() {
        let fx = sample();

        run(&fx.catalog, &fx.membership).unwrap();

        assert_eq!(fx.catalog.books()[0].title, " el señor de los anillos ");
        assert_eq!(fx.membership.users()[0].email, "  ANA.GARCIA@EXAMPLE.COM");
    }

    #[test]
    fn empty_stores_normalize_to_empty_listings() {
        let result = run(&Catalog::new(), &Membership::new()).unwrap();

        assert!(result.listed_books.is_empty());
        assert!(result.listed_users.is_empty());
    }
}

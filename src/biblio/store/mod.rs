//! # Store Layer
//!
//! Two in-memory stores, each the exclusive owner of one record type:
//!
//! - [`Catalog`]: every [`Book`](crate::model::Book) in the library
//! - [`Membership`]: every registered [`User`](crate::model::User)
//!
//! The stores are deliberately dumb: insertion-ordered collections with id
//! allocation and lookup. All validation and every cross-store rule lives
//! in the command layer, and `commands::lending` is the only code that
//! mutates both stores in one operation.
//!
//! Stores are plain values injected into [`LibraryApi`](crate::api::LibraryApi),
//! never module-level state, so every test can run against an isolated pair.

pub mod catalog;
pub mod membership;

pub use catalog::Catalog;
pub use membership::Membership;

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Book, BookId, User, UserId};

    /// A catalog/membership pair that tests can build up fluently.
    #[derive(Default)]
    pub struct LibraryFixture {
        pub catalog: Catalog,
        pub membership: Membership,
    }

    impl LibraryFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_book(mut self, title: &str, author: &str, year: i32, genre: &str) -> Self {
            let book = Book::new(self.catalog.next_id(), title, author, year, genre);
            self.catalog.insert(book);
            self
        }

        pub fn with_user(mut self, name: &str, email: &str) -> Self {
            let user = User::new(self.membership.next_id(), name, email);
            self.membership.insert(user);
            self
        }

        /// Record an existing loan directly, bypassing the lending engine.
        /// Panics if either id is unknown, since that would be a broken
        /// fixture rather than a scenario under test.
        pub fn with_loan(mut self, book_id: BookId, user_id: UserId) -> Self {
            self.catalog.get_mut(book_id).unwrap().available = false;
            self.membership
                .get_mut(user_id)
                .unwrap()
                .held_books
                .push(book_id);
            self
        }

        /// The three-book, two-user library most lending tests start from:
        /// "Duna" is already out with Ana, everything else is on the shelf.
        pub fn lending_scenario() -> Self {
            Self::new()
                .with_book("El Aleph", "Jorge Luis Borges", 1949, "Short stories")
                .with_book("1984", "George Orwell", 1949, "Dystopia")
                .with_book("Duna", "Frank Herbert", 1965, "Science fiction")
                .with_user("Ana García", "ana.garcia@example.com")
                .with_user("Beto Pérez", "beto.perez@example.com")
                .with_loan(3, 1)
        }
    }

    /// Assert the cross-store invariant: a book is unavailable exactly when
    /// exactly one user holds its id.
    pub fn assert_consistent(catalog: &Catalog, membership: &Membership) {
        for book in catalog.books() {
            let holders = membership
                .users()
                .iter()
                .filter(|u| u.held_books.contains(&book.id))
                .count();
            if book.available {
                assert_eq!(
                    holders, 0,
                    "book {} is available but held by {} user(s)",
                    book.id, holders
                );
            } else {
                assert_eq!(
                    holders, 1,
                    "book {} is unavailable but held by {} user(s)",
                    book.id, holders
                );
            }
        }
    }
}

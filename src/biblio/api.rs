//! # API Facade
//!
//! The single entry point for all biblio operations, regardless of the UI
//! driving them. The facade owns the two stores and dispatches to the
//! command layer; it holds no business logic of its own.
//!
//! Stores are injected through [`LibraryApi::new`], so tests (and any
//! embedding application) run against isolated fixtures rather than
//! ambient state.

use crate::commands;
use crate::error::Result;
use crate::model::{BookId, UserId};
use crate::store::{Catalog, Membership};

pub struct LibraryApi {
    catalog: Catalog,
    membership: Membership,
}

impl LibraryApi {
    pub fn new(catalog: Catalog, membership: Membership) -> Self {
        Self {
            catalog,
            membership,
        }
    }

    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        year: i32,
        genre: &str,
    ) -> Result<commands::CmdResult> {
        commands::add_book::run(&mut self.catalog, title, author, year, genre)
    }

    pub fn delete_book(&mut self, id: BookId) -> Result<commands::CmdResult> {
        commands::delete_book::run(&mut self.catalog, id)
    }

    pub fn search_books(&self, field: SearchField, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.catalog, field, term)
    }

    pub fn sort_books(&self, key: SortKey) -> Result<commands::CmdResult> {
        commands::sort::run(&self.catalog, key)
    }

    pub fn register_user(&mut self, name: &str, email: &str) -> Result<commands::CmdResult> {
        commands::register_user::run(&mut self.membership, name, email)
    }

    pub fn list_users(&self) -> Result<commands::CmdResult> {
        commands::users::list(&self.membership)
    }

    pub fn find_user(&self, email: &str) -> Result<commands::CmdResult> {
        commands::users::find(&self.membership, email)
    }

    pub fn delete_user(&mut self, name: &str, email: &str) -> Result<commands::CmdResult> {
        commands::delete_user::run(&self.catalog, &mut self.membership, name, email)
    }

    pub fn lend(&mut self, book_id: BookId, user_id: UserId) -> Result<commands::CmdResult> {
        commands::lending::lend(&mut self.catalog, &mut self.membership, book_id, user_id)
    }

    pub fn return_book(&mut self, book_id: BookId, user_id: UserId) -> Result<commands::CmdResult> {
        commands::lending::run_return(&mut self.catalog, &mut self.membership, book_id, user_id)
    }

    pub fn available_books(&self) -> Result<commands::CmdResult> {
        commands::lending::available(&self.catalog)
    }

    pub fn report(&self) -> Result<commands::CmdResult> {
        commands::report::run(&self.catalog)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.catalog)
    }

    pub fn long_titles(&self) -> Result<commands::CmdResult> {
        commands::long_titles::run(&self.catalog)
    }

    pub fn normalize(&self) -> Result<commands::CmdResult> {
        commands::normalize::run(&self.catalog, &self.membership)
    }

    /// Read-only view of the catalog, for rendering.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only view of the membership, for rendering.
    pub fn membership(&self) -> &Membership {
        &self.membership
    }
}

pub use commands::search::SearchField;
pub use commands::sort::SortKey;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BiblioError;
    use crate::store::fixtures::{assert_consistent, LibraryFixture};

    fn api() -> LibraryApi {
        let fx = LibraryFixture::lending_scenario();
        LibraryApi::new(fx.catalog, fx.membership)
    }

    #[test]
    fn lend_and_return_round_trip_through_the_facade() {
        let mut api = api();

        // Catalog with "El Aleph" available; Beto holds nothing.
        api.lend(1, 2).unwrap();
        assert!(!api.catalog().get(1).unwrap().available);
        assert_eq!(api.membership().get(2).unwrap().held_books, vec![1]);

        api.return_book(1, 2).unwrap();
        assert!(api.catalog().get(1).unwrap().available);
        assert!(api.membership().get(2).unwrap().held_books.is_empty());

        assert_consistent(api.catalog(), api.membership());
    }

    #[test]
    fn failed_operations_leave_both_stores_consistent() {
        let mut api = api();

        assert!(api.lend(3, 2).is_err());
        assert!(api.return_book(1, 2).is_err());
        assert!(api.delete_user("Ana García", "ana.garcia@example.com").is_err());
        assert!(api.delete_book(3).is_err());

        assert_eq!(api.catalog().len(), 3);
        assert_eq!(api.membership().len(), 2);
        assert_consistent(api.catalog(), api.membership());
    }

    #[test]
    fn a_full_member_lifecycle() {
        let mut api = api();

        api.register_user("David Mora", "david.mora@example.com").unwrap();
        let id = api.membership().find_by_email("david.mora@example.com").unwrap().id;
        assert_eq!(id, 3);

        api.lend(2, id).unwrap();
        let err = api.delete_user("David Mora", "david.mora@example.com").unwrap_err();
        assert!(matches!(err, BiblioError::InvalidState(_)));
        assert!(err.to_string().contains("1984"));

        api.return_book(2, id).unwrap();
        api.delete_user("David Mora", "david.mora@example.com").unwrap();
        assert_eq!(api.membership().len(), 2);
        assert_consistent(api.catalog(), api.membership());
    }

    #[test]
    fn queries_never_observe_or_cause_inconsistency() {
        let mut api = api();
        api.lend(1, 2).unwrap();

        api.search_books(SearchField::Title, "aleph").unwrap();
        api.sort_books(SortKey::Year).unwrap();
        api.report().unwrap();
        api.stats().unwrap();
        api.normalize().unwrap();

        let available = api.available_books().unwrap();
        assert_eq!(available.listed_books.len(), 1);
        assert_eq!(available.listed_books[0].title, "1984");
        assert_consistent(api.catalog(), api.membership());
    }
}

use crate::model::{Book, BookId};

/// Insertion-ordered collection of every book in the library.
///
/// The catalog hands out sequential ids and answers lookups; whether a
/// mutation is *allowed* (duplicates, lent books) is the command layer's
/// business.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id to assign: one past the highest existing id, 1 when empty.
    pub fn next_id(&self) -> BookId {
        self.books.iter().map(|b| b.id).max().unwrap_or(0) + 1
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    /// Duplicate rule for insertion: an identical title+author+year triple.
    pub fn has_duplicate(&self, title: &str, author: &str, year: i32) -> bool {
        self.books
            .iter()
            .any(|b| b.title == title && b.author == author && b.year == year)
    }

    pub fn insert(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn remove(&mut self, id: BookId) -> Option<Book> {
        let pos = self.books.iter().position(|b| b.id == id)?;
        Some(self.books.remove(pos))
    }

    pub fn title_of(&self, id: BookId) -> Option<&str> {
        self.get(id).map(|b| b.title.as_str())
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

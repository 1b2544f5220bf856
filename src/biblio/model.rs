use serde::{Deserialize, Serialize};

pub type BookId = u32;
pub type UserId = u32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub available: bool,
}

impl Book {
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            available: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    // Ids of books currently on loan to this user, in lend order.
    // An id with no matching catalog record is tolerated and flagged
    // at display time rather than cleaned up retroactively.
    pub held_books: Vec<BookId>,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            held_books: Vec::new(),
        }
    }
}

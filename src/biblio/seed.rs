//! Demo data the binary starts from unless `--empty` is given.
//!
//! The seeded loan keeps the pair of stores consistent from the first
//! command: "Duna" is out with Ana, so her held-book list references it
//! and its availability flag is off.

use crate::model::{Book, User};
use crate::store::{Catalog, Membership};

pub fn demo_library() -> (Catalog, Membership) {
    let mut catalog = Catalog::new();
    for (title, author, year, genre) in [
        ("El Aleph", "Jorge Luis Borges", 1949, "Short stories"),
        ("Cien años de soledad", "Gabriel García Márquez", 1967, "Magic realism"),
        ("1984", "George Orwell", 1949, "Dystopia"),
        ("Duna", "Frank Herbert", 1965, "Science fiction"),
        ("El Hobbit", "J.R.R. Tolkien", 1937, "Fantasy"),
    ] {
        let book = Book::new(catalog.next_id(), title, author, year, genre);
        catalog.insert(book);
    }

    let mut membership = Membership::new();
    for (name, email) in [
        ("Ana García", "ana.garcia@example.com"),
        ("Beto Pérez", "beto.perez@example.com"),
    ] {
        let user = User::new(membership.next_id(), name, email);
        membership.insert(user);
    }

    // Duna starts out on loan to Ana.
    if let (Some(book), Some(user)) = (catalog.get_mut(4), membership.get_mut(1)) {
        book.available = false;
        user.held_books.push(4);
    }

    (catalog, membership)
}

//! The lending engine: the only code that mutates the catalog and the
//! membership in the same logical operation.
//!
//! Both `lend` and `run_return` validate every precondition before the
//! first write, so a failed operation leaves both stores exactly as they
//! were and a successful one is atomic from the caller's point of view.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiblioError, Result};
use crate::model::{BookId, UserId};
use crate::store::{Catalog, Membership};

/// Lend `book_id` to `user_id`: the book must exist, the user must exist,
/// and the book must be on the shelf.
pub fn lend(
    catalog: &mut Catalog,
    membership: &mut Membership,
    book_id: BookId,
    user_id: UserId,
) -> Result<CmdResult> {
    let book = catalog
        .get_mut(book_id)
        .ok_or(BiblioError::BookNotFound(book_id))?;
    let user = membership
        .get_mut(user_id)
        .ok_or(BiblioError::UserNotFound(user_id))?;
    if !book.available {
        return Err(BiblioError::InvalidState(format!(
            "\"{}\" is already lent out",
            book.title
        )));
    }

    book.available = false;
    user.held_books.push(book_id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "\"{}\" lent to {}",
        book.title, user.name
    )));
    result.affected_books.push(book.clone());
    result.affected_users.push(user.clone());
    Ok(result)
}

/// Return `book_id` from `user_id`. The holder check goes through the
/// user's held-book list, not the availability flag, so returning a book
/// through a user who does not hold it is rejected.
pub fn run_return(
    catalog: &mut Catalog,
    membership: &mut Membership,
    book_id: BookId,
    user_id: UserId,
) -> Result<CmdResult> {
    let book = catalog
        .get_mut(book_id)
        .ok_or(BiblioError::BookNotFound(book_id))?;
    let user = membership
        .get_mut(user_id)
        .ok_or(BiblioError::UserNotFound(user_id))?;
    let pos = user
        .held_books
        .iter()
        .position(|&held| held == book_id)
        .ok_or_else(|| {
            BiblioError::InvalidState(format!("\"{}\" is not on loan to {}", book.title, user.name))
        })?;

    user.held_books.remove(pos);
    book.available = true;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "\"{}\" returned by {}",
        book.title, user.name
    )));
    result.affected_books.push(book.clone());
    result.affected_users.push(user.clone());
    Ok(result)
}

/// The books a lend could currently target, in catalog order.
pub fn available(catalog: &Catalog) -> Result<CmdResult> {
    let listed: Vec<_> = catalog
        .books()
        .iter()
        .filter(|b| b.available)
        .cloned()
        .collect();

    let mut result = CmdResult::default().with_listed_books(listed);
    if result.listed_books.is_empty() {
        result.add_message(CmdMessage::info("No books are currently available"));
    }
    Ok(result)
}

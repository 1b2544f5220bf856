use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiblioError, Result};
use crate::model::BookId;
use crate::store::Catalog;

pub fn run(catalog: &mut Catalog, id: BookId) -> Result<CmdResult> {
    let book = catalog.get(id).ok_or(BiblioError::BookNotFound(id))?;
    if !book.available {
        return Err(BiblioError::InvalidState(format!(
            "\"{}\" is currently lent out and cannot be deleted",
            book.title
        )));
    }

    // The availability check above guarantees the record is still here.
    let removed = catalog
        .remove(id)
        .ok_or(BiblioError::BookNotFound(id))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted \"{}\" (id {})",
        removed.title, removed.id
    )));
    result.affected_books.push(removed);
    Ok(result)
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiblioError, Result};
use crate::model::User;
use crate::store::{Catalog, Membership};

/// List every registered user.
pub fn list(membership: &Membership) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_users(membership.users().to_vec());
    if result.listed_users.is_empty() {
        result.add_message(CmdMessage::info("No users registered"));
    }
    Ok(result)
}

/// Look a user up by email, case-insensitively.
pub fn find(membership: &Membership, email: &str) -> Result<CmdResult> {
    let user = membership
        .find_by_email(email)
        .ok_or_else(|| BiblioError::NoSuchMember(email.to_string()))?;
    Ok(CmdResult::default().with_listed_users(vec![user.clone()]))
}

/// One-line summary of a user's held books, with each id resolved against
/// the catalog. Dangling ids are reported inline instead of aborting the
/// listing.
pub fn held_summary(user: &User, catalog: &Catalog) -> String {
    if user.held_books.is_empty() {
        return "None".to_string();
    }
    user.held_books
        .iter()
        .map(|&id| match catalog.title_of(id) {
            Some(title) => format!("{id}: {title}"),
            None => format!("book id {id} not found"),
        })
        .collect::<Vec<_>>()
        .join(" - ")
}

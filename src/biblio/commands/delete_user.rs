use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiblioError, Result};
use crate::store::{Catalog, Membership};
use crate::text;

/// Delete a user identified by name and email. The name comparison folds
/// case and accents; the email comparison folds case only. A user still
/// holding books cannot be deleted, and the error lists the held titles
/// (resolving each id via the catalog, with dangling ids reported inline).
pub fn run(
    catalog: &Catalog,
    membership: &mut Membership,
    name: &str,
    email: &str,
) -> Result<CmdResult> {
    let wanted_name = text::lookup_key(name);
    let wanted_email = email.trim().to_lowercase();
    let user = membership
        .users()
        .iter()
        .find(|u| {
            text::lookup_key(&u.name) == wanted_name && u.email.to_lowercase() == wanted_email
        })
        .ok_or_else(|| BiblioError::NoSuchMember(format!("{name} <{email}>")))?;

    if !user.held_books.is_empty() {
        let titles = user
            .held_books
            .iter()
            .map(|&id| match catalog.title_of(id) {
                Some(title) => title.to_string(),
                None => format!("book id {id} not found"),
            })
            .collect::<Vec<_>>()
            .join(", ");
        return Err(BiblioError::InvalidState(format!(
            "Cannot delete user \"{}\": books still on loan: \"{titles}\"",
            user.name
        )));
    }

    let id = user.id;
    // The lookup above guarantees the record is still here.
    let removed = membership
        .remove(id)
        .ok_or(BiblioError::UserNotFound(id))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted user {} <{}>",
        removed.name, removed.email
    )));
    result.affected_users.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::LibraryFixture;

    fn scenario() -> LibraryFixture {
        // Carla holds "1984" and "El Aleph" on top of the base scenario.
        LibraryFixture::lending_scenario()
            .with_user("Carla López", "carla.lopez@example.com")
            .with_loan(2, 3)
            .with_loan(1, 3)
    }

    #[test]
    fn deletes_a_user_with_no_held_books() {
        let mut fx = scenario();

        run(&fx.catalog, &mut fx.membership, "Beto Pérez", "beto.perez@example.com").unwrap();

        assert_eq!(fx.membership.len(), 2);
        assert!(fx.membership.find_by_email("beto.perez@example.com").is_none());
    }

    #[test]
    fn matches_the_name_without_accents() {
        let mut fx = LibraryFixture::new().with_user("Beto Pérez", "beto.perez@example.com");

        run(&fx.catalog, &mut fx.membership, "beto perez", "beto.perez@example.com").unwrap();

        assert!(fx.membership.is_empty());
    }

    #[test]
    fn refuses_to_delete_a_user_with_held_books_and_lists_their_titles() {
        let mut fx = scenario();

        let err = run(&fx.catalog, &mut fx.membership, "Carla López", "carla.lopez@example.com")
            .unwrap_err();

        assert!(matches!(err, BiblioError::InvalidState(_)));
        assert!(err.to_string().contains("1984, El Aleph"));
        assert_eq!(fx.membership.len(), 3);
    }

    #[test]
    fn a_dangling_held_id_is_reported_rather_than_fatal() {
        let mut fx = LibraryFixture::new().with_user("Carla López", "carla.lopez@example.com");
        fx.membership.get_mut(1).unwrap().held_books.push(99);

        let err = run(&fx.catalog, &mut fx.membership, "Carla López", "carla.lopez@example.com")
            .unwrap_err();

        assert!(err.to_string().contains("book id 99 not found"));
    }

    #[test]
    fn reports_an_unknown_user() {
        let mut fx = scenario();

        let err = run(&fx.catalog, &mut fx.membership, "Nobody Here", "nobody.here@example.com")
            .unwrap_err();

        assert!(matches!(err, BiblioError::NoSuchMember(_)));
        assert_eq!(fx.membership.len(), 3);
    }
}

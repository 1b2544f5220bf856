use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiblioError, Result};
use crate::model::User;
use crate::store::Membership;
use crate::text;

pub fn run(membership: &mut Membership, name: &str, email: &str) -> Result<CmdResult> {
    if name.trim().is_empty() {
        return Err(BiblioError::Validation("Name cannot be empty".into()));
    }
    if !text::is_valid_email(email) {
        return Err(BiblioError::Validation(format!(
            "Invalid email \"{email}\": expected at least 8 characters before a single '@' and a '.' in the domain"
        )));
    }

    let user = User::new(membership.next_id(), name.trim(), email.trim());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Registered {} (id {})",
        user.name, user.id
    )));
    result.affected_users.push(user.clone());
    membership.insert(user);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::LibraryFixture;

    #[test]
    fn registers_a_user_with_the_next_sequential_id() {
        let mut fx = LibraryFixture::lending_scenario();

        let result = run(&mut fx.membership, "David Mora", "david.mora@example.com").unwrap();

        assert_eq!(result.affected_users[0].id, 3);
        assert_eq!(fx.membership.len(), 3);
        let added = fx.membership.find_by_email("david.mora@example.com").unwrap();
        assert!(added.held_books.is_empty());
    }

    #[test]
    fn first_user_in_an_empty_membership_gets_id_one() {
        let mut membership = Membership::new();

        let result = run(&mut membership, "David Mora", "david.mora@example.com").unwrap();

        assert_eq!(result.affected_users[0].id, 1);
    }

    #[test]
    fn rejects_an_empty_name() {
        let mut membership = Membership::new();

        let err = run(&mut membership, "", "test.user@example.com").unwrap_err();

        assert!(matches!(err, BiblioError::Validation(_)));
        assert!(membership.is_empty());
    }

    #[test]
    fn rejects_a_whitespace_only_name() {
        let mut membership = Membership::new();

        let err = run(&mut membership, "   ", "test.user@example.com").unwrap_err();

        assert!(matches!(err, BiblioError::Validation(_)));
        assert!(membership.is_empty());
    }

    #[test]
    fn rejects_an_invalid_email() {
        let mut membership = Membership::new();

        let err = run(&mut membership, "David Mora", "usr@dom.com").unwrap_err();

        assert!(matches!(err, BiblioError::Validation(_)));
        assert!(membership.is_empty());
    }
}

use crate::model::{User, UserId};
use crate::text;

/// Insertion-ordered collection of every registered user.
#[derive(Debug, Default, Clone)]
pub struct Membership {
    users: Vec<User>,
}

impl Membership {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id to assign: one past the highest existing id, 1 when empty.
    pub fn next_id(&self) -> UserId {
        self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn get_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    /// Email lookup is case-insensitive and ignores surrounding whitespace.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        let wanted = email.trim().to_lowercase();
        self.users
            .iter()
            .find(|u| u.email.to_lowercase() == wanted)
    }

    /// Name lookup folds case and accents, so "ana garcia" finds
    /// "Ana García".
    pub fn find_by_name(&self, name: &str) -> Option<&User> {
        let wanted = text::lookup_key(name);
        self.users
            .iter()
            .find(|u| text::lookup_key(&u.name) == wanted)
    }

    pub fn insert(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn remove(&mut self, id: UserId) -> Option<User> {
        let pos = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(pos))
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

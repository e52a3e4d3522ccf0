//! Fixed, in-process user directory.

use miniblog_core::domain::BlogUser;
use miniblog_core::ports::UserDirectory;

/// Immutable list of credentials, checked by exact comparison.
///
/// Passwords are stored and compared in plain text.
pub struct FixedUserDirectory {
    users: Vec<BlogUser>,
}

impl FixedUserDirectory {
    pub fn new(users: Vec<BlogUser>) -> Self {
        Self { users }
    }

    /// The reference seed: `serhii`/`1234` and `maria`/`qwerty`.
    pub fn seeded() -> Self {
        Self::new(vec![
            BlogUser::new("serhii", "1234"),
            BlogUser::new("maria", "qwerty"),
        ])
    }

    /// Parse `name:password` pairs separated by commas.
    ///
    /// Blank items and items without a `:` are skipped. Returns `None` when
    /// nothing usable remains.
    pub fn parse(list: &str) -> Option<Self> {
        let users: Vec<BlogUser> = list
            .split(',')
            .map(str::trim)
            .filter_map(|item| item.split_once(':'))
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, password)| BlogUser::new(name, password))
            .collect();

        if users.is_empty() {
            None
        } else {
            Some(Self::new(users))
        }
    }

    /// Users from `MINIBLOG_USERS`, falling back to the reference seed.
    pub fn from_env() -> Self {
        match std::env::var("MINIBLOG_USERS") {
            Ok(list) => Self::parse(&list).unwrap_or_else(|| {
                tracing::warn!("MINIBLOG_USERS has no usable entries. Using default users.");
                Self::seeded()
            }),
            Err(_) => Self::seeded(),
        }
    }
}

impl Default for FixedUserDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

impl UserDirectory for FixedUserDirectory {
    fn authenticate(&self, username: &str, password: &str) -> Option<BlogUser> {
        let user = self
            .users
            .iter()
            .find(|u| u.matches(username, password))
            .cloned();

        if user.is_none() {
            tracing::debug!(user = %username, "Authentication failed");
        }
        user
    }

    fn get_all(&self) -> Vec<BlogUser> {
        self.users.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_valid_user() {
        let users = FixedUserDirectory::seeded();

        let user = users.authenticate("serhii", "1234").unwrap();
        assert_eq!(user.username, "serhii");

        let user = users.authenticate("maria", "qwerty").unwrap();
        assert_eq!(user.username, "maria");
    }

    #[test]
    fn test_authenticate_is_case_sensitive() {
        let users = FixedUserDirectory::seeded();

        assert!(users.authenticate("Serhii", "1234").is_none());
        assert!(users.authenticate("maria", "QWERTY").is_none());
    }

    #[test]
    fn test_authenticate_rejects_wrong_or_empty_password() {
        let users = FixedUserDirectory::seeded();

        assert!(users.authenticate("serhii", "").is_none());
        assert!(users.authenticate("serhii", "qwerty").is_none());
        assert!(users.authenticate("", "").is_none());
        assert!(users.authenticate("nobody", "1234").is_none());
    }

    #[test]
    fn test_get_all_returns_seed() {
        let names: Vec<String> = FixedUserDirectory::seeded()
            .get_all()
            .into_iter()
            .map(|u| u.username)
            .collect();

        assert_eq!(names, vec!["serhii", "maria"]);
    }

    #[test]
    fn test_parse_user_list() {
        let users = FixedUserDirectory::parse("alice:pw1, bob:pw2,broken,:nameless").unwrap();

        assert_eq!(users.get_all().len(), 2);
        assert!(users.authenticate("bob", "pw2").is_some());
        assert!(FixedUserDirectory::parse(" , ").is_none());
    }
}

//! Bearer tokens per role

use std::collections::HashMap;
use std::fmt;

/// Account role the scenario registers and authenticates as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Instructor,
    Student,
}

impl Role {
    /// All roles, in the order the scenario walks them
    pub const ALL: [Role; 3] = [Role::Admin, Role::Instructor, Role::Student];

    /// Name the backend expects in the `role` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Instructor => "instructor",
            Role::Student => "student",
        }
    }

    /// Display name used for the registered account
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin User",
            Role::Instructor => "Instructor User",
            Role::Student => "Student User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokens obtained during the run
///
/// A role has no entry until an auth response succeeded and carried a token.
#[derive(Debug, Default)]
pub struct Credentials {
    tokens: HashMap<Role, String>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for `role`, if one was obtained
    pub fn get(&self, role: Role) -> Option<&str> {
        self.tokens.get(&role).map(String::as_str)
    }

    /// Record the token from a successful auth response, replacing any earlier one
    pub fn set(&mut self, role: Role, token: impl Into<String>) {
        self.tokens.insert(role, token.into());
    }

    /// Number of roles holding a token
    pub fn count(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_until_set() {
        let mut creds = Credentials::new();
        assert_eq!(creds.get(Role::Student), None);
        assert_eq!(creds.count(), 0);

        creds.set(Role::Student, "reg-token");
        creds.set(Role::Student, "login-token");
        assert_eq!(creds.get(Role::Student), Some("login-token"));
        assert_eq!(creds.count(), 1);
    }
}

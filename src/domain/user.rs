//! User account records.

use std::fmt;

/// Access role stored with each account.
///
/// The store keeps the textual tokens the main application expects.
/// `Attendant` is the fallback for any unrecognized selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    Physician,
    #[default]
    Attendant,
}

impl Role {
    /// Map a menu selection to a role.
    ///
    /// Only the exact strings "1" and "2" select the privileged roles;
    /// everything else, blank input included, falls back to `Attendant`.
    #[must_use]
    pub fn from_selection(input: &str) -> Self {
        match input {
            "1" => Role::Admin,
            "2" => Role::Physician,
            _ => Role::Attendant,
        }
    }

    /// The token stored in the `role` column.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "adm",
            Role::Physician => "medico",
            Role::Attendant => "atendente",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user account before insertion.
///
/// The password is plaintext here; it is hashed on the way into the store
/// and never persisted as given.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl NewUser {
    /// Create an account record for insertion.
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }
}

//! User entity representing a site account.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque user identifier assigned by the site's user store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    /// Placeholder ID that matches no stored user (used as "exclude nobody")
    pub const NONE: UserId = UserId(0);

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId(id)
    }
}

/// Site roles, from most to least trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrator,
    Editor,
    Author,
    /// Low-trust role; accounts flagged as suspicious are moved here
    Contributor,
    /// Default role for customers who signed up on the site
    Subscriber,
}

impl Role {
    /// Stored role name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Editor => "editor",
            Role::Author => "author",
            Role::Contributor => "contributor",
            Role::Subscriber => "subscriber",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "administrator" => Ok(Role::Administrator),
            "editor" => Ok(Role::Editor),
            "author" => Ok(Role::Author),
            "contributor" => Ok(Role::Contributor),
            "subscriber" => Ok(Role::Subscriber),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// User entity as read from the user store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: UserId,

    /// Login name
    pub login: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub nickname: String,

    /// Roles held by the account
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl User {
    /// Creates a new User with a login and no roles
    pub fn new(id: u64, login: impl Into<String>) -> Self {
        let login = login.into();
        Self {
            id: UserId(id),
            nickname: login.clone(),
            login,
            first_name: String::new(),
            last_name: String::new(),
            roles: Vec::new(),
        }
    }

    /// Sets first and last name
    pub fn with_names(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Adds a role
    pub fn with_role(mut self, role: Role) -> Self {
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
        self
    }

    /// Checks if the user holds a role
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

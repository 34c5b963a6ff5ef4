use serde::{Deserialize, Serialize};
use std::fmt;

/// Portal role of a signed-in user.
///
/// - `Client`: a student who books lessons and follows their own progress.
/// - `Employee`: an instructor or office worker, sees schedule and students.
/// - `Admin`: school management, sees staff and reports.
///
/// The set is closed. Unknown role strings are rejected rather than mapped
/// to a fallback role, so a typo in config can never widen access.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Role {
    Client,
    Employee,
    Admin,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[Role::Client, Role::Employee, Role::Admin];

impl Role {
    /// Lowercase key used in config files and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }

    /// Parse a role key. Case-insensitive; unknown values yield `None`.
    pub fn parse_role(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "client" => Some(Role::Client),
            "employee" => Some(Role::Employee),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Client => "Client",
            Role::Employee => "Employee",
            Role::Admin => "Administrator",
        }
    }

    /// Path prefix shared by every view of this role's portal.
    pub fn portal_prefix(&self) -> &'static str {
        match self {
            Role::Client => "/client-portal",
            Role::Employee => "/employee-portal",
            Role::Admin => "/admin-portal",
        }
    }

    /// Landing view of this role's portal. Every role follows the same
    /// `/{role}-portal/dashboard` shape.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Client => "/client-portal/dashboard",
            Role::Employee => "/employee-portal/dashboard",
            Role::Admin => "/admin-portal/dashboard",
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Role::parse_role(&value).ok_or_else(|| format!("unknown role `{value}`"))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

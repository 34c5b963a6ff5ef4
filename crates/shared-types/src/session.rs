use crate::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated identity of the current user.
///
/// Created by an [`Authenticator`](crate::Authenticator) on a successful
/// sign-in or sign-up and dropped on sign-out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    /// Contact number given at sign-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(email: impl Into<String>, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            display_name: display_name.into(),
            role,
            phone: None,
            signed_in_at: Utc::now(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Up to two uppercase initials for the avatar badge.
    pub fn initials(&self) -> String {
        let initials: String = self
            .display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect();
        if initials.is_empty() {
            self.email.chars().take(1).collect::<String>().to_uppercase()
        } else {
            initials.to_uppercase()
        }
    }
}

/// Display name derived from the local part of an email address,
/// e.g. `jane.doe@example.com` becomes `Jane Doe`.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

use crate::{Role, Session};
use serde::{Deserialize, Serialize};

/// Path of the sign-in view.
pub const SIGN_IN_PATH: &str = "/auth";

/// Access requirement declared by a view.
///
/// `allowed_roles == None` means any authenticated role may proceed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AccessRequirement {
    pub requires_auth: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_roles: Option<Vec<Role>>,
}

impl AccessRequirement {
    /// Open to everyone, signed in or not.
    pub fn public() -> Self {
        Self::default()
    }

    /// Any signed-in user.
    pub fn authenticated() -> Self {
        Self {
            requires_auth: true,
            allowed_roles: None,
        }
    }

    /// Signed-in users whose role is one of `roles`.
    pub fn roles(roles: &[Role]) -> Self {
        Self {
            requires_auth: true,
            allowed_roles: Some(roles.to_vec()),
        }
    }

    pub fn only(role: Role) -> Self {
        Self::roles(&[role])
    }

    /// Whether `role` passes the role restriction (if any).
    pub fn permits(&self, role: Role) -> bool {
        self.allowed_roles
            .as_ref()
            .map(|allowed| allowed.contains(&role))
            .unwrap_or(true)
    }
}

/// Outcome of evaluating a navigation attempt against the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session state is still initializing.
    Loading,
    /// No session; send the user to sign in, then back to `return_to`.
    RedirectToSignIn { return_to: String },
    /// Signed in, but the role may not see this view.
    RedirectToHome { role: Role },
    Render,
}

impl AccessDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, AccessDecision::Render)
    }
}

/// Decide what to show for a navigation to `requested`.
///
/// Checks run in a fixed order: loading first, then presence of a session,
/// then role membership. The function is pure; callers re-run it whenever
/// the session or the target changes.
pub fn decide(
    loading: bool,
    session: Option<&Session>,
    requirement: &AccessRequirement,
    requested: &str,
) -> AccessDecision {
    if loading {
        return AccessDecision::Loading;
    }

    let session = match session {
        Some(session) => session,
        None if requirement.requires_auth => {
            return AccessDecision::RedirectToSignIn {
                return_to: requested.to_string(),
            };
        }
        None => return AccessDecision::Render,
    };

    if !requirement.permits(session.role) {
        return AccessDecision::RedirectToHome { role: session.role };
    }

    AccessDecision::Render
}

/// Accept a post-sign-in return location only when it is a local path.
///
/// Rejects absolute URLs, protocol-relative `//host` paths and the sign-in
/// view itself.
pub fn safe_return_path(candidate: Option<&str>) -> Option<String> {
    let path = candidate?.trim();
    if !path.starts_with('/') || path.starts_with("//") || path.contains('\\') {
        return None;
    }
    let bare = path.split(['?', '#']).next().unwrap_or_default();
    if bare == SIGN_IN_PATH || bare == format!("{SIGN_IN_PATH}/") {
        return None;
    }
    Some(path.to_string())
}

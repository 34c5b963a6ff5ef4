use dioxus::prelude::*;
use shared_types::{AppError, Authenticator, Role, Session, SignInRequest, SignUpRequest};
use std::rc::Rc;

/// Process-wide authentication state.
///
/// Provided once at the app root. Components only read it; the methods
/// below are the only writers of the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
    /// True until session restoration has finished.
    pub loading: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    /// Already-initialized state holding `session`.
    pub fn ready(session: Option<Session>) -> Self {
        Self {
            session: Signal::new(session),
            loading: Signal::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().as_ref().map(|s| s.role)
    }

    /// Mark session restoration as done. There is no persisted session to
    /// restore, so the user starts signed out.
    pub fn finish_loading(&mut self) {
        if *self.loading.peek() {
            tracing::debug!("session restore finished");
            self.loading.set(false);
        }
    }

    pub fn sign_in(
        &mut self,
        authenticator: &dyn Authenticator,
        request: &SignInRequest,
    ) -> Result<Role, AppError> {
        let session = authenticator.sign_in(request).inspect_err(|e| {
            tracing::warn!(kind = %e.kind, "sign-in rejected");
        })?;
        Ok(self.establish(session))
    }

    pub fn sign_up(
        &mut self,
        authenticator: &dyn Authenticator,
        request: &SignUpRequest,
    ) -> Result<Role, AppError> {
        let session = authenticator.sign_up(request).inspect_err(|e| {
            tracing::warn!(kind = %e.kind, "sign-up rejected");
        })?;
        Ok(self.establish(session))
    }

    pub fn sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(role = %session.role, session = %session.id, "signed out");
        }
    }

    fn establish(&mut self, session: Session) -> Role {
        let role = session.role;
        tracing::info!(role = %role, session = %session.id, "signed in");
        self.session.set(Some(session));
        self.loading.set(false);
        role
    }
}

/// The authenticator behind sign-in and sign-up, injected through context.
#[derive(Clone)]
pub struct AuthService(Rc<dyn Authenticator>);

impl AuthService {
    pub fn new(authenticator: impl Authenticator + 'static) -> Self {
        Self(Rc::new(authenticator))
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.0.as_ref()
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

pub fn use_auth_service() -> AuthService {
    use_context::<AuthService>()
}

use crate::{
    display_name_from_email, AppError, DemoAccount, Role, Session, SignInRequest, SignUpRequest,
};
use validator::Validate;

/// Source of sessions. The app holds one behind its auth context; tests can
/// substitute their own.
pub trait Authenticator {
    fn sign_in(&self, request: &SignInRequest) -> Result<Session, AppError>;
    fn sign_up(&self, request: &SignUpRequest) -> Result<Session, AppError>;
}

/// Placeholder authenticator with no backing store.
///
/// Configured demo accounts sign in with their own password and role. Any
/// other well-formed credentials produce a client session. Sign-up always
/// yields a client, and refuses emails held by a demo account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoAuthenticator {
    accounts: Vec<DemoAccount>,
}

impl DemoAuthenticator {
    pub fn new(accounts: Vec<DemoAccount>) -> Self {
        Self { accounts }
    }

    fn find(&self, email: &str) -> Option<&DemoAccount> {
        let email = email.trim();
        self.accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
    }
}

impl Authenticator for DemoAuthenticator {
    fn sign_in(&self, request: &SignInRequest) -> Result<Session, AppError> {
        request.validate()?;
        let email = request.email.trim();

        match self.find(email) {
            Some(account) if account.password == request.password => {
                let name = if account.display_name.is_empty() {
                    display_name_from_email(&account.email)
                } else {
                    account.display_name.clone()
                };
                Ok(Session::new(account.email.clone(), name, account.role))
            }
            Some(_) => Err(AppError::unauthorized("Invalid email or password")),
            None => Ok(Session::new(
                email,
                display_name_from_email(email),
                Role::Client,
            )),
        }
    }

    fn sign_up(&self, request: &SignUpRequest) -> Result<Session, AppError> {
        request.validate()?;
        let email = request.email.trim();
        if self.find(email).is_some() {
            return Err(AppError::conflict("An account with this email already exists"));
        }
        Ok(Session::new(email, request.display_name.trim(), Role::Client)
            .with_phone(request.phone.trim()))
    }
}

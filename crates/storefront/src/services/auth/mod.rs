//! Authentication service.
//!
//! A stand-in for a real credential service. There is no account database:
//! after an artificial delay, any non-blank email/password pair signs in
//! except the sentinel password [`REJECTED_PASSWORD`]. The signed-in user
//! is held in memory and never persisted.
//!
//! Every outcome, success or failure, is also reported through the
//! [`NotificationStore`].

mod error;

pub use error::AuthError;

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument, warn};

use crate::models::{AuthUser, Route};
use crate::stores::NotificationStore;

/// Minimum password length accepted by signup.
///
/// Counted in `char`s (Unicode scalar values), not UTF-16 units or bytes:
/// `"😀😀😀"` is three characters and too short.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// The one password login always rejects.
pub const REJECTED_PASSWORD: &str = "wrongpassword";

/// Result of a successful login or signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    /// The newly signed-in user.
    pub user: AuthUser,
    /// Where the presentation layer should navigate next, if anywhere.
    pub redirect: Option<Route>,
}

#[derive(Debug, Default)]
struct Session {
    user: Option<AuthUser>,
    last_error: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum Flow {
    Login,
    Signup,
}

impl Flow {
    const fn success_message(self) -> &'static str {
        match self {
            Self::Login => "Successfully logged in! 🎉",
            Self::Signup => "Welcome to the squad! 🎉",
        }
    }

    fn failure_message(self, error: &AuthError) -> &'static str {
        match (self, error) {
            (Self::Login, AuthError::MissingFields) => "Oof! Fill out all fields bestie! 🙄",
            (Self::Signup, AuthError::MissingFields) => {
                "Fill in the blanks! Don't leave us hanging! 😫"
            }
            (_, AuthError::InvalidCredentials) => {
                "Bro... Wrong password. Wanna try again or cry? 😢"
            }
            (_, AuthError::WeakPassword { .. }) => {
                "Weak password energy! Make it 6+ characters! 💪"
            }
        }
    }
}

const LOGOUT_MESSAGE: &str = "Successfully logged out! Come back soon! 👋";

/// Simulated authentication service.
#[derive(Debug)]
pub struct AuthService {
    notifications: NotificationStore,
    delay: Duration,
    session: Mutex<Session>,
}

impl AuthService {
    /// Create a signed-out service that answers after `delay`.
    #[must_use]
    pub fn new(notifications: NotificationStore, delay: Duration) -> Self {
        Self {
            notifications,
            delay,
            session: Mutex::new(Session::default()),
        }
    }

    // =========================================================================
    // Flows
    // =========================================================================

    /// Sign in with email and password.
    ///
    /// `current` is the page the form was submitted from; logging in from
    /// the profile page redirects home.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if either field is blank.
    /// Returns `AuthError::InvalidCredentials` for [`REJECTED_PASSWORD`].
    #[instrument(skip(self, password))]
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        current: &Route,
    ) -> Result<AuthOutcome, AuthError> {
        let password = SecretString::from(password.to_owned());
        tokio::time::sleep(self.delay).await;

        let result = check_login(email, &password).map(|()| AuthUser::from_email(email, None));
        self.settle(Flow::Login, result, current)
    }

    /// Create an account and sign in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if either field is blank.
    /// Returns `AuthError::WeakPassword` if the password is shorter than
    /// [`MIN_PASSWORD_LENGTH`].
    #[instrument(skip(self, password))]
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
        current: &Route,
    ) -> Result<AuthOutcome, AuthError> {
        let password = SecretString::from(password.to_owned());
        tokio::time::sleep(self.delay).await;

        let result = check_signup(email, &password).map(|()| AuthUser::from_email(email, name));
        self.settle(Flow::Signup, result, current)
    }

    /// Sign out. Always succeeds and redirects home.
    pub fn logout(&self) -> Route {
        let previous = self.session().user.take();
        if let Some(user) = previous {
            info!(user_id = %user.id, "Signed out");
        }
        self.notifications.success(LOGOUT_MESSAGE);
        Route::Home
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<AuthUser> {
        self.session().user.clone()
    }

    /// Whether someone is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session().user.is_some()
    }

    /// Message from the most recent failed attempt, cleared by a success.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.session().last_error.clone()
    }

    /// Forget the last error, e.g. when the auth form is reopened.
    pub fn clear_error(&self) {
        self.session().last_error = None;
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn settle(
        &self,
        flow: Flow,
        result: Result<AuthUser, AuthError>,
        current: &Route,
    ) -> Result<AuthOutcome, AuthError> {
        match result {
            Ok(user) => {
                info!(user_id = %user.id, ?flow, "Signed in");
                {
                    let mut session = self.session();
                    session.user = Some(user.clone());
                    session.last_error = None;
                }
                self.notifications.success(flow.success_message());
                Ok(AuthOutcome {
                    user,
                    redirect: (*current == Route::Profile).then_some(Route::Home),
                })
            }
            Err(error) => {
                let message = flow.failure_message(&error);
                warn!(%error, ?flow, "Authentication failed");
                self.session().last_error = Some(message.to_owned());
                self.notifications.error(message);
                Err(error)
            }
        }
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn check_login(email: &str, password: &SecretString) -> Result<(), AuthError> {
    let password = password.expose_secret();
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(AuthError::MissingFields);
    }
    if password == REJECTED_PASSWORD {
        return Err(AuthError::InvalidCredentials);
    }
    Ok(())
}

fn check_signup(email: &str, password: &SecretString) -> Result<(), AuthError> {
    let password = password.expose_secret();
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(AuthError::MissingFields);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

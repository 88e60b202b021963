// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo sign-in against a fixed identity set.
//!
//! There is no credential storage: every known identity shares one secret.
//! The active user is held in an explicit [`Session`] value that callers
//! pass to whatever needs it.

use std::collections::HashMap;

use evision_domain::{DomainError, Role, User};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::CoreError;

/// The shared secret of the demo identity set.
pub const DEMO_PASSWORD: &str = "password";

/// A fixed mapping of email to user, all sharing one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentitySet {
    users: HashMap<String, User>,
    password: String,
}

impl IdentitySet {
    /// Creates an empty identity set that accepts `password`.
    #[must_use]
    pub fn new(password: &str) -> Self {
        Self {
            users: HashMap::new(),
            password: password.to_string(),
        }
    }

    /// Adds a user, keyed by their email.
    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.email.clone(), user);
        self
    }

    /// Looks up a user by email.
    #[must_use]
    pub fn get(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    /// Number of known identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if no identities are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn verify(&self, email: &str, password: &str) -> Option<&User> {
        self.users
            .get(email)
            .filter(|_| password == self.password)
    }
}

/// An authenticated session for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
}

impl Session {
    /// Creates a session for `user` without checking credentials.
    ///
    /// Used by tests and by callers that restore a session they already trust.
    #[must_use]
    pub const fn new(user: User) -> Self {
        Self { user }
    }

    /// The signed-in user.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// The signed-in user's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.user.role
    }
}

/// Sign-up validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignUpError {
    /// A required field was left blank.
    #[error("Please fill out all fields ({field} is empty)")]
    MissingField { field: &'static str },

    /// Password and confirmation do not match.
    #[error("Passwords do not match")]
    ConfirmationMismatch,
}

/// A registration form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

/// Holds the identity set and the currently active session, if any.
#[derive(Debug, Clone)]
pub struct SessionManager {
    identities: IdentitySet,
    active: Option<Session>,
}

impl SessionManager {
    /// Creates a manager with no active session.
    #[must_use]
    pub const fn new(identities: IdentitySet) -> Self {
        Self {
            identities,
            active: None,
        }
    }

    /// Signs in a known identity.
    ///
    /// On success the returned session also becomes the active one. A
    /// failed attempt leaves any existing session in place.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCredentials` if the email is unknown or
    /// the password does not match the shared secret.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, CoreError> {
        let Some(user) = self.identities.verify(email, password) else {
            warn!(email = %email, "Login rejected");
            return Err(CoreError::DomainViolation(DomainError::InvalidCredentials));
        };

        let session: Session = Session::new(user.clone());
        info!(user_id = user.id, role = %user.role, "Login succeeded");
        self.active = Some(session.clone());
        Ok(session)
    }

    /// Clears the active session. Calling it with no session is a no-op.
    pub fn logout(&mut self) {
        if let Some(session) = self.active.take() {
            info!(user_id = session.user.id, "Logged out");
        }
    }

    /// The active session, if signed in.
    #[must_use]
    pub const fn active(&self) -> Option<&Session> {
        self.active.as_ref()
    }

    /// Validates a registration form.
    ///
    /// This is a validation pass only: on success the new identity is NOT
    /// added to the identity set and cannot sign in. The demo has no user
    /// store to write to.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any of name, email, password or confirmation is empty
    /// - Password and confirmation differ
    pub fn sign_up(&self, request: &SignUpRequest) -> Result<(), SignUpError> {
        let fields: [(&'static str, &str); 4] = [
            ("full_name", request.full_name.as_str()),
            ("email", request.email.as_str()),
            ("password", request.password.as_str()),
            ("confirm_password", request.confirm_password.as_str()),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(SignUpError::MissingField { field: *field });
        }

        if request.password != request.confirm_password {
            return Err(SignUpError::ConfirmationMismatch);
        }

        debug!(
            email = %request.email,
            role = %request.role,
            known = self.identities.get(&request.email).is_some(),
            "Sign up accepted (not persisted)"
        );
        Ok(())
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use evision_domain::DomainError;

/// Errors that can occur while running a workflow step.
///
/// All variants are recoverable. A failed step leaves workflow state as it
/// was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// An external data provider failed to deliver.
    ProviderFailure {
        /// The provider that failed.
        provider: String,
        /// A description of the failure.
        message: String,
    },
    /// Confirm was requested with no slot selected.
    NoSelection,
    /// The signed-in role may not perform the action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::ProviderFailure { provider, message } => {
                write!(f, "Provider '{provider}' failed: {message}")
            }
            Self::NoSelection => write!(f, "No slot is selected"),
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Appointment status tracking and transition logic.
//!
//! Status moves forward only: a mechanic accepts a pending request and
//! later marks it completed. Nothing moves backward and no state is skipped.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle states of a mechanic appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    /// Requested, awaiting the mechanic.
    Pending,
    /// Accepted by the mechanic.
    Confirmed,
    /// Work finished.
    Completed,
}

impl AppointmentStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
        }
    }

    /// Returns true if no further transition is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → Confirmed
    /// - Confirmed → Completed
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Confirmed) | (Self::Confirmed, Self::Completed)
        )
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` if the transition skips a
    /// state, moves backward, or targets the current state.
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        if self.can_transition_to(target) {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
            })
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Confirmed" => Ok(Self::Confirmed),
            "Completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidAppointmentStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
    ];

    #[test]
    fn test_status_parse() {
        for status in ALL {
            match status.as_str().parse::<AppointmentStatus>() {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {status}: {e}"),
            }
        }
        assert!("pending".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!AppointmentStatus::Pending.is_terminal());
        assert!(!AppointmentStatus::Confirmed.is_terminal());
        assert!(AppointmentStatus::Completed.is_terminal());
    }

    #[test]
    fn test_only_forward_single_steps_are_permitted() {
        for from in ALL {
            for to in ALL {
                let expected: bool = matches!(
                    (from, to),
                    (AppointmentStatus::Pending, AppointmentStatus::Confirmed)
                        | (AppointmentStatus::Confirmed, AppointmentStatus::Completed)
                );
                assert_eq!(
                    from.validate_transition(to).is_ok(),
                    expected,
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn test_skipping_confirmed_is_rejected() {
        let result = AppointmentStatus::Pending.validate_transition(AppointmentStatus::Completed);
        assert_eq!(
            result,
            Err(DomainError::InvalidTransition {
                from: String::from("Pending"),
                to: String::from("Completed"),
            })
        );
    }
}

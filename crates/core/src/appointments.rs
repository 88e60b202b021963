// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mechanic appointment workflow.
//!
//! Appointments arrive from seed data; only their status changes here,
//! and only forward along `Pending → Confirmed → Completed`.

use evision_domain::{Appointment, AppointmentStatus, DomainError};
use tracing::{info, warn};

use crate::error::CoreError;

/// Appointments with status `Pending`, in their original order.
#[must_use]
pub fn list_pending(appointments: &[Appointment]) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|appointment| appointment.status == AppointmentStatus::Pending)
        .cloned()
        .collect()
}

/// Owns the appointment list and applies status transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentWorkflow {
    appointments: Vec<Appointment>,
}

impl AppointmentWorkflow {
    /// Creates a workflow over an existing appointment list.
    #[must_use]
    pub const fn new(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    /// All appointments in their original order.
    #[must_use]
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Looks up an appointment by id.
    #[must_use]
    pub fn get(&self, appointment_id: u32) -> Option<&Appointment> {
        self.appointments
            .iter()
            .find(|appointment| appointment.id == appointment_id)
    }

    /// Moves an appointment to `target`.
    ///
    /// # Returns
    ///
    /// The updated appointment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No appointment has this id (`AppointmentNotFound`)
    /// - The transition is not `Pending → Confirmed` or
    ///   `Confirmed → Completed` (`InvalidTransition`); the stored status
    ///   is unchanged
    pub fn advance(
        &mut self,
        appointment_id: u32,
        target: AppointmentStatus,
    ) -> Result<Appointment, CoreError> {
        let appointment: &mut Appointment = self
            .appointments
            .iter_mut()
            .find(|appointment| appointment.id == appointment_id)
            .ok_or(DomainError::AppointmentNotFound(appointment_id))?;

        if let Err(err) = appointment.status.validate_transition(target) {
            warn!(appointment_id, error = %err, "Appointment transition rejected");
            return Err(CoreError::DomainViolation(err));
        }

        info!(
            appointment_id,
            from = %appointment.status,
            to = %target,
            "Appointment advanced"
        );
        appointment.status = target;
        Ok(appointment.clone())
    }

    /// Mechanic accepts a pending request.
    ///
    /// # Errors
    ///
    /// See [`Self::advance`].
    pub fn accept(&mut self, appointment_id: u32) -> Result<Appointment, CoreError> {
        self.advance(appointment_id, AppointmentStatus::Confirmed)
    }

    /// Mechanic marks a confirmed appointment done.
    ///
    /// # Errors
    ///
    /// See [`Self::advance`].
    pub fn complete(&mut self, appointment_id: u32) -> Result<Appointment, CoreError> {
        self.advance(appointment_id, AppointmentStatus::Completed)
    }

    /// Appointments still awaiting the mechanic.
    #[must_use]
    pub fn pending(&self) -> Vec<Appointment> {
        list_pending(&self.appointments)
    }

    /// Appointments requested by `user_id`, in original order.
    #[must_use]
    pub fn appointments_for_user(&self, user_id: u32) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|appointment| appointment.user.id == user_id)
            .collect()
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot booking state machine.
//!
//! One workflow per booking attempt:
//! - Idle → `SlotSelected` on selecting a bookable slot
//! - `SlotSelected` → Confirmed on confirm, which books the slot
//! - any phase → Idle on close
//!
//! Selection never mutates stations. Confirmation is the only step that
//! writes to the catalog, and closing never reverts it.

use evision_domain::{DomainError, Slot, Station};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::StationCatalog;
use crate::error::CoreError;

/// Phase of a booking attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum BookingPhase {
    #[default]
    Idle,
    SlotSelected,
    Confirmed,
}

/// The station and slot the user picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSelection {
    pub station_id: u32,
    pub time: String,
}

/// A single-actor booking attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingWorkflow {
    phase: BookingPhase,
    selection: Option<BookingSelection>,
}

impl BookingWorkflow {
    /// Creates an idle workflow.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: BookingPhase::Idle,
            selection: None,
        }
    }

    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> BookingPhase {
        self.phase
    }

    /// The current selection, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<&BookingSelection> {
        self.selection.as_ref()
    }

    /// Selects a slot for booking.
    ///
    /// Selecting from any phase starts a fresh attempt. A rejected
    /// selection leaves phase and selection exactly as they were.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The station is not in the catalog
    /// - The station has no slot with this time label
    /// - The slot is already booked (`InvalidSlotSelection`)
    pub fn select(
        &mut self,
        catalog: &StationCatalog,
        station_id: u32,
        time: &str,
    ) -> Result<BookingPhase, CoreError> {
        let station: &Station = catalog
            .station(station_id)
            .ok_or(DomainError::StationNotFound(station_id))?;
        let slot: &Slot = station.slot(time).ok_or_else(|| DomainError::SlotNotFound {
            station_id,
            time: time.to_string(),
        })?;

        if !slot.status.is_bookable() {
            warn!(station_id, slot = %time, "Rejected selection of booked slot");
            return Err(CoreError::DomainViolation(
                DomainError::InvalidSlotSelection {
                    station_id,
                    time: time.to_string(),
                },
            ));
        }

        debug!(station_id, slot = %time, status = slot.status.as_str(), "Slot selected");
        self.selection = Some(BookingSelection {
            station_id,
            time: time.to_string(),
        });
        self.phase = BookingPhase::SlotSelected;
        Ok(self.phase)
    }

    /// Confirms the selected slot, marking it booked in the catalog.
    ///
    /// Confirming again without a new selection changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Nothing is selected (`NoSelection`)
    /// - The station vanished from the catalog
    /// - The slot was booked after it was selected (`SlotAlreadyBooked`);
    ///   the workflow stays in `SlotSelected`
    pub fn confirm(&mut self, catalog: &mut StationCatalog) -> Result<BookingPhase, CoreError> {
        match self.phase {
            BookingPhase::Confirmed => return Ok(self.phase),
            BookingPhase::Idle => return Err(CoreError::NoSelection),
            BookingPhase::SlotSelected => {}
        }

        let Some(selection) = self.selection.as_ref() else {
            return Err(CoreError::NoSelection);
        };

        let station: &mut Station = catalog
            .station_mut(selection.station_id)
            .ok_or(DomainError::StationNotFound(selection.station_id))?;
        station.book_slot(&selection.time)?;

        info!(
            station_id = selection.station_id,
            slot = %selection.time,
            availability = station.availability(),
            "Booking confirmed"
        );
        self.phase = BookingPhase::Confirmed;
        Ok(self.phase)
    }

    /// Closes the attempt and returns to Idle.
    ///
    /// A confirmed booking stays booked.
    pub fn close(&mut self) {
        if self.phase != BookingPhase::Idle {
            debug!(phase = ?self.phase, "Booking closed");
        }
        self.phase = BookingPhase::Idle;
        self.selection = None;
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Station operator booking console.
//!
//! Read-only aggregation over the operator's booking list and the station
//! slot schedules.

use crate::types::Station;
use serde::{Deserialize, Serialize};

/// Status of a booking as shown to the station operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorBookingStatus {
    Confirmed,
    Upcoming,
    Completed,
}

/// A single row of the operator's booking table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorBooking {
    pub id: u32,
    /// Customer display name.
    pub user: String,
    /// Charge point label (e.g. "CP-01").
    pub station: String,
    pub time: String,
    pub status: OperatorBookingStatus,
}

impl OperatorBooking {
    /// Creates a new `OperatorBooking`.
    #[must_use]
    pub fn new(
        id: u32,
        user: &str,
        station: &str,
        time: &str,
        status: OperatorBookingStatus,
    ) -> Self {
        Self {
            id,
            user: user.to_string(),
            station: station.to_string(),
            time: time.to_string(),
            status,
        }
    }
}

/// The operator dashboard: daily summary figures and the booking table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorConsole {
    /// Bookings taken today across all charge points.
    pub total_bookings: u32,
    /// Preformatted revenue label (e.g. "₹37,500").
    pub daily_revenue: String,
    pub bookings: Vec<OperatorBooking>,
}

impl OperatorConsole {
    /// Creates a new `OperatorConsole`.
    #[must_use]
    pub fn new(total_bookings: u32, daily_revenue: &str, bookings: Vec<OperatorBooking>) -> Self {
        Self {
            total_bookings,
            daily_revenue: daily_revenue.to_string(),
            bookings,
        }
    }

    /// Bookings with the given status, in table order.
    #[must_use]
    pub fn bookings_with_status(&self, status: OperatorBookingStatus) -> Vec<&OperatorBooking> {
        self.bookings
            .iter()
            .filter(|booking| booking.status == status)
            .collect()
    }

    /// Percentage of booked slots across `stations`, rounded half up.
    ///
    /// Returns 0 when the stations carry no slots.
    #[must_use]
    pub fn occupancy_percent(stations: &[Station]) -> usize {
        let total: usize = stations.iter().map(|station| station.slots().len()).sum();
        if total == 0 {
            return 0;
        }
        let booked: usize = stations.iter().map(Station::booked_count).sum();
        (booked * 100 + total / 2) / total
    }
}

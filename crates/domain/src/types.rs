// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::appointment_status::AppointmentStatus;
use crate::error::DomainError;
use crate::validation::validate_slot_times_unique;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;

/// The role a signed-in user acts under.
///
/// Roles are a closed set; every dashboard decision matches on them
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Vehicle owner: telemetry, charging, community posts.
    EvUser,
    /// Mechanic: appointments and community replies.
    Mechanic,
    /// Charging station operator: booking console.
    StationOperator,
}

impl Role {
    /// Returns the wire representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EvUser => "ev_user",
            Self::Mechanic => "mechanic",
            Self::StationOperator => "station_operator",
        }
    }

    /// Returns a human-readable label (e.g. "station operator").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EvUser => "ev user",
            Self::Mechanic => "mechanic",
            Self::StationOperator => "station operator",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ev_user" => Ok(Self::EvUser),
            "mechanic" => Ok(Self::Mechanic),
            "station_operator" => Ok(Self::StationOperator),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A known identity.
///
/// Users are issued by the session manager and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub role: Role,
    /// Avatar image reference.
    pub avatar: String,
    pub email: String,
}

impl User {
    /// Creates a new `User`.
    ///
    /// # Arguments
    ///
    /// * `id` - The user identifier
    /// * `name` - The display name
    /// * `role` - The role the user acts under
    /// * `avatar` - Avatar image reference
    /// * `email` - The login email
    #[must_use]
    pub fn new(id: u32, name: &str, role: Role, avatar: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            role,
            avatar: avatar.to_string(),
            email: email.to_string(),
        }
    }

    /// Returns the first word of the display name, used in greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new `Coordinate`.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Booking status of a single charging slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    /// Free and bookable.
    Available,
    /// Reserved. Terminal within this system.
    Booked,
    /// Bookable, but flagged as a high-demand period.
    Peak,
}

impl SlotStatus {
    /// Returns the wire representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Peak => "peak",
        }
    }

    /// Returns true if a slot with this status may be selected and booked.
    #[must_use]
    pub const fn is_bookable(&self) -> bool {
        matches!(self, Self::Available | Self::Peak)
    }
}

impl FromStr for SlotStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "booked" => Ok(Self::Booked),
            "peak" => Ok(Self::Peak),
            _ => Err(DomainError::InvalidSlotStatus(s.to_string())),
        }
    }
}

/// A bookable time slot at a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Time label, unique within its station (e.g. "14:30").
    pub time: String,
    pub status: SlotStatus,
}

impl Slot {
    /// Creates a new `Slot`.
    #[must_use]
    pub fn new(time: &str, status: SlotStatus) -> Self {
        Self {
            time: time.to_string(),
            status,
        }
    }
}

/// A charging station and its ordered slot schedule.
///
/// The slot list is private so that time labels stay unique and a booked
/// slot can never be reopened. `availability` is always derived from the
/// slots rather than stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
    /// Number of physical charge points advertised by the station.
    pub total_slots: u32,
    /// Station-level high-demand flag.
    pub is_peak: bool,
    /// Hourly demand percentages, used by demand charts.
    pub demand: Vec<u8>,
    slots: Vec<Slot>,
}

impl Station {
    /// Creates a new `Station`.
    ///
    /// # Arguments
    ///
    /// * `id` - The station identifier
    /// * `name` - The display name
    /// * `address` - The street address
    /// * `coordinate` - The station location
    /// * `total_slots` - Advertised charge point count
    /// * `slots` - The ordered slot schedule
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateSlotTime` if two slots share a time label.
    pub fn new(
        id: u32,
        name: &str,
        address: &str,
        coordinate: Coordinate,
        total_slots: u32,
        slots: Vec<Slot>,
    ) -> Result<Self, DomainError> {
        validate_slot_times_unique(id, &slots)?;
        Ok(Self {
            id,
            name: name.to_string(),
            address: address.to_string(),
            coordinate,
            total_slots,
            is_peak: false,
            demand: Vec::new(),
            slots,
        })
    }

    /// Sets the station-level peak flag and hourly demand profile.
    #[must_use]
    pub fn with_demand(mut self, is_peak: bool, demand: Vec<u8>) -> Self {
        self.is_peak = is_peak;
        self.demand = demand;
        self
    }

    /// Returns the slot schedule in order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Looks up a slot by its time label.
    #[must_use]
    pub fn slot(&self, time: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.time == time)
    }

    /// Number of slots whose status is exactly `available`.
    ///
    /// Peak slots remain bookable but are not counted here.
    #[must_use]
    pub fn availability(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.status == SlotStatus::Available)
            .count()
    }

    /// Slots that may be selected, in schedule order.
    #[must_use]
    pub fn bookable_slots(&self) -> Vec<&Slot> {
        self.slots
            .iter()
            .filter(|slot| slot.status.is_bookable())
            .collect()
    }

    /// Number of slots whose status is `booked`.
    #[must_use]
    pub fn booked_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.status == SlotStatus::Booked)
            .count()
    }

    /// Highest hourly demand figure, if a demand profile is present.
    #[must_use]
    pub fn peak_demand(&self) -> Option<u8> {
        self.demand.iter().copied().max()
    }

    /// Marks a bookable slot as booked.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No slot carries the given time label
    /// - The slot is already booked
    pub fn book_slot(&mut self, time: &str) -> Result<(), DomainError> {
        let station_id: u32 = self.id;
        let slot: &mut Slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.time == time)
            .ok_or_else(|| DomainError::SlotNotFound {
                station_id,
                time: time.to_string(),
            })?;

        if !slot.status.is_bookable() {
            return Err(DomainError::SlotAlreadyBooked {
                station_id,
                time: time.to_string(),
            });
        }

        slot.status = SlotStatus::Booked;
        Ok(())
    }
}

// Serialized by hand so snapshots carry the derived availability count.
impl Serialize for Station {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Station", 9)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("address", &self.address)?;
        state.serialize_field("coordinate", &self.coordinate)?;
        state.serialize_field("total_slots", &self.total_slots)?;
        state.serialize_field("availability", &self.availability())?;
        state.serialize_field("is_peak", &self.is_peak)?;
        state.serialize_field("demand", &self.demand)?;
        state.serialize_field("slots", &self.slots)?;
        state.end()
    }
}

/// Identifier of a community post or reply.
///
/// Ids are strictly increasing in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// Creates a new `PostId`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

/// An immutable snapshot of a community post and its direct replies.
///
/// Replies in a snapshot never carry replies of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: PostId,
    pub author: User,
    pub content: String,
    /// Display label such as "2 hours ago" or "Just now".
    pub timestamp: String,
    pub replies: Vec<CommunityPost>,
}

impl CommunityPost {
    /// Creates a post with no replies.
    #[must_use]
    pub fn new(id: PostId, author: User, content: &str, timestamp: &str) -> Self {
        Self {
            id,
            author,
            content: content.to_string(),
            timestamp: timestamp.to_string(),
            replies: Vec::new(),
        }
    }

    /// Attaches replies to this post.
    #[must_use]
    pub fn with_replies(mut self, replies: Vec<Self>) -> Self {
        self.replies = replies;
        self
    }
}

/// A mechanic appointment request.
///
/// Only `status` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    /// The requesting user.
    pub user: User,
    /// The assigned mechanic.
    pub mechanic: User,
    /// Requested time label (e.g. "Tomorrow, 2:00 PM").
    pub time: String,
    pub issue: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Creates a new `Appointment`.
    ///
    /// # Arguments
    ///
    /// * `id` - The appointment identifier
    /// * `user` - The requesting user
    /// * `mechanic` - The assigned mechanic
    /// * `time` - Requested time label
    /// * `issue` - Issue description
    /// * `status` - Initial status
    #[must_use]
    pub fn new(
        id: u32,
        user: User,
        mechanic: User,
        time: &str,
        issue: &str,
        status: AppointmentStatus,
    ) -> Self {
        Self {
            id,
            user,
            mechanic,
            time: time.to_string(),
            issue: issue.to_string(),
            status,
        }
    }
}

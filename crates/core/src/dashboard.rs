// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role-based dashboard selection and capability checks.
//!
//! Capabilities gate what a role's dashboard offers. The workflows do not
//! check roles themselves; callers authorize first, then invoke them.

use evision_domain::Role;
use serde::Serialize;

use crate::error::CoreError;
use crate::session::Session;

/// Actions a dashboard may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Capability {
    /// Start a new community post.
    AddPost,
    /// Reply to a community post.
    AddReply,
    /// Accept or complete an appointment.
    AdvanceAppointment,
    /// Select and confirm a charging slot.
    BookSlot,
    /// See the operator booking table.
    ViewOperatorConsole,
}

impl Capability {
    /// Returns the action name used in authorization errors.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AddPost => "add_post",
            Self::AddReply => "add_reply",
            Self::AdvanceAppointment => "advance_appointment",
            Self::BookSlot => "book_slot",
            Self::ViewOperatorConsole => "view_operator_console",
        }
    }

    /// The only role granted this capability.
    #[must_use]
    pub const fn required_role(&self) -> Role {
        match self {
            Self::AddPost | Self::BookSlot => Role::EvUser,
            Self::AddReply | Self::AdvanceAppointment => Role::Mechanic,
            Self::ViewOperatorConsole => Role::StationOperator,
        }
    }
}

/// Authorization service for role-gated actions.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Returns true if `role` holds `capability`.
    #[must_use]
    pub fn is_allowed(role: Role, capability: Capability) -> bool {
        capability.required_role() == role
    }

    /// Checks that the session's role holds `capability`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Unauthorized` naming the action and required role.
    pub fn authorize(session: &Session, capability: Capability) -> Result<(), CoreError> {
        if Self::is_allowed(session.role(), capability) {
            Ok(())
        } else {
            Err(CoreError::Unauthorized {
                action: capability.as_str().to_string(),
                required_role: capability.required_role().as_str().to_string(),
            })
        }
    }
}

/// Sidebar tabs of the vehicle owner dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DashboardTab {
    Dashboard,
    Charging,
    Insights,
    Community,
}

/// The dashboard variant for a signed-in role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Dashboard {
    /// Telemetry, charging, insights and community tabs.
    EvUser { tabs: Vec<DashboardTab> },
    /// Pending appointments and the community reply queue.
    Mechanic,
    /// Occupancy summary and booking table.
    StationOperator,
}

impl Dashboard {
    /// Picks the dashboard for the session's role.
    #[must_use]
    pub fn for_session(session: &Session) -> Self {
        match session.role() {
            Role::EvUser => Self::EvUser {
                tabs: vec![
                    DashboardTab::Dashboard,
                    DashboardTab::Charging,
                    DashboardTab::Insights,
                    DashboardTab::Community,
                ],
            },
            Role::Mechanic => Self::Mechanic,
            Role::StationOperator => Self::StationOperator,
        }
    }

    /// Capabilities the dashboard exposes.
    #[must_use]
    pub const fn capabilities(&self) -> &'static [Capability] {
        match self {
            Self::EvUser { .. } => &[Capability::AddPost, Capability::BookSlot],
            Self::Mechanic => &[Capability::AddReply, Capability::AdvanceAppointment],
            Self::StationOperator => &[Capability::ViewOperatorConsole],
        }
    }
}

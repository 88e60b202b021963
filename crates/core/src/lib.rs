// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Workflows of the EVision companion.
//!
//! Every workflow owns its state explicitly and takes the signed-in
//! [`Session`] or the shared [`StationCatalog`] as an argument. Nothing
//! here is global.

mod appointments;
mod booking;
mod catalog;
mod dashboard;
mod error;
pub mod seed;
mod session;
mod thread;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use appointments::{AppointmentWorkflow, list_pending};
pub use booking::{BookingPhase, BookingSelection, BookingWorkflow};
pub use catalog::{
    DEFAULT_LOCATE_TIMEOUT, LocationProvider, LocationState, StationCatalog, StationProvider,
    locate_with_timeout,
};
pub use dashboard::{AuthorizationService, Capability, Dashboard, DashboardTab};
pub use error::CoreError;
pub use session::{
    DEMO_PASSWORD, IdentitySet, Session, SessionManager, SignUpError, SignUpRequest,
};
pub use thread::{CommunityThread, JUST_NOW, unix_millis};

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Built-in demo dataset and the providers that serve it.
//!
//! The dataset covers three demo accounts (one per role), ten stations in
//! Bengaluru, a seeded community thread, mechanic appointments, vehicle
//! telemetry and the operator booking table.

use std::future::Future;
use std::time::Duration;

use evision_domain::{
    Appointment, AppointmentStatus, CommunityPost, Coordinate, DomainError, EvStatus,
    MaintenanceAlert, OperatorBooking, OperatorBookingStatus, OperatorConsole, PostId, Role,
    Severity, Slot, SlotStatus, Station, User,
};
use tracing::debug;

use crate::catalog::{LocationProvider, StationProvider};
use crate::error::CoreError;
use crate::session::{DEMO_PASSWORD, IdentitySet};

/// Simulated network latency of the station fetch.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(500);

/// Email of the seeded vehicle owner.
pub const EV_USER_EMAIL: &str = "aryan@demo.com";
/// Email of the seeded mechanic.
pub const MECHANIC_EMAIL: &str = "brijesh@demo.com";
/// Email of the seeded station operator.
pub const OPERATOR_EMAIL: &str = "charu@demo.com";

const SLOT_TIMES: [&str; 6] = ["14:00", "14:30", "15:00", "16:00", "16:30", "17:00"];

/// The three demo accounts.
#[must_use]
pub fn users() -> Vec<User> {
    vec![
        User::new(
            1,
            "Aryan Sharma",
            Role::EvUser,
            "https://i.pravatar.cc/150?u=aryan",
            EV_USER_EMAIL,
        ),
        User::new(
            2,
            "Brijesh Kumar",
            Role::Mechanic,
            "https://i.pravatar.cc/150?u=brijesh",
            MECHANIC_EMAIL,
        ),
        User::new(
            3,
            "Charu Deshpande",
            Role::StationOperator,
            "https://i.pravatar.cc/150?u=charu",
            OPERATOR_EMAIL,
        ),
    ]
}

/// Looks up a demo account by email.
#[must_use]
pub fn user(email: &str) -> Option<User> {
    users().into_iter().find(|user| user.email == email)
}

/// The demo identity set, sharing one password.
#[must_use]
pub fn identities() -> IdentitySet {
    users()
        .into_iter()
        .fold(IdentitySet::new(DEMO_PASSWORD), IdentitySet::with_user)
}

struct StationSeed {
    id: u32,
    name: &'static str,
    address: &'static str,
    latitude: f64,
    longitude: f64,
    total_slots: u32,
    is_peak: bool,
    demand: [u8; 7],
    slots: [SlotStatus; 6],
}

const STATIONS: [StationSeed; 10] = {
    use SlotStatus::{Available as A, Booked as B, Peak as P};
    [
        StationSeed {
            id: 1,
            name: "Ather Grid Koramangala",
            address: "123, 5th Block, Koramangala",
            latitude: 12.9352,
            longitude: 77.6245,
            total_slots: 5,
            is_peak: false,
            demand: [20, 30, 60, 80, 70, 90, 50],
            slots: [B, A, P, A, B, A],
        },
        StationSeed {
            id: 2,
            name: "Tata Power Indiranagar",
            address: "456, 100 Ft Rd, Indiranagar",
            latitude: 12.9784,
            longitude: 77.6408,
            total_slots: 4,
            is_peak: true,
            demand: [40, 50, 70, 95, 90, 100, 80],
            slots: [A, P, B, B, P, A],
        },
        StationSeed {
            id: 3,
            name: "Zeon Charging MG Road",
            address: "789, MG Road, Bengaluru",
            latitude: 12.9745,
            longitude: 77.6070,
            total_slots: 5,
            is_peak: false,
            demand: [10, 20, 40, 50, 60, 70, 40],
            slots: [A, A, A, A, A, A],
        },
        StationSeed {
            id: 4,
            name: "SparkCharge Hub Whitefield",
            address: "101, ITPL Main Rd, Whitefield",
            latitude: 12.9698,
            longitude: 77.7499,
            total_slots: 6,
            is_peak: false,
            demand: [30, 40, 50, 85, 80, 95, 60],
            slots: [B, A, P, A, B, A],
        },
        StationSeed {
            id: 5,
            name: "VoltPoint Central Jayanagar",
            address: "202, 4th Block, Jayanagar",
            latitude: 12.9226,
            longitude: 77.5829,
            total_slots: 4,
            is_peak: true,
            demand: [50, 60, 75, 90, 88, 92, 70],
            slots: [B, B, B, B, B, B],
        },
        StationSeed {
            id: 6,
            name: "EcoCharge Plaza HSR Layout",
            address: "303, 27th Main Rd, HSR Layout",
            latitude: 12.9121,
            longitude: 77.6446,
            total_slots: 8,
            is_peak: false,
            demand: [15, 25, 45, 60, 55, 75, 45],
            slots: [A, A, P, A, A, A],
        },
        StationSeed {
            id: 7,
            name: "PowerUp Point Malleswaram",
            address: "404, Sampige Rd, Malleswaram",
            latitude: 12.9983,
            longitude: 77.5701,
            total_slots: 4,
            is_peak: false,
            demand: [25, 35, 55, 70, 65, 80, 50],
            slots: [B, A, P, B, P, A],
        },
        StationSeed {
            id: 8,
            name: "ChargeGrid Electronic City",
            address: "505, Hosur Rd, Electronic City",
            latitude: 12.8452,
            longitude: 77.6602,
            total_slots: 10,
            is_peak: false,
            demand: [35, 45, 60, 80, 75, 90, 65],
            slots: [A, A, A, A, A, A],
        },
        StationSeed {
            id: 9,
            name: "GreenPlug Yeshwanthpur",
            address: "606, Tumkur Rd, Yeshwanthpur",
            latitude: 13.0239,
            longitude: 77.5529,
            total_slots: 5,
            is_peak: true,
            demand: [45, 55, 70, 85, 80, 88, 60],
            slots: [B, A, P, P, A, B],
        },
        StationSeed {
            id: 10,
            name: "RapidEV Banashankari",
            address: "707, Outer Ring Rd, Banashankari",
            latitude: 12.9254,
            longitude: 77.5467,
            total_slots: 4,
            is_peak: false,
            demand: [20, 30, 50, 65, 60, 70, 40],
            slots: [A, B, A, A, P, B],
        },
    ]
};

/// The ten demo stations in catalog order.
///
/// # Errors
///
/// Returns `DomainError::DuplicateSlotTime` if a station's schedule repeats
/// a time label.
pub fn stations() -> Result<Vec<Station>, DomainError> {
    STATIONS
        .iter()
        .map(|seed| {
            let slots: Vec<Slot> = SLOT_TIMES
                .iter()
                .zip(seed.slots)
                .map(|(time, status)| Slot::new(time, status))
                .collect();
            Station::new(
                seed.id,
                seed.name,
                seed.address,
                Coordinate::new(seed.latitude, seed.longitude),
                seed.total_slots,
                slots,
            )
            .map(|station| station.with_demand(seed.is_peak, seed.demand.to_vec()))
        })
        .collect()
}

fn seeded_user(email: &str) -> Result<User, CoreError> {
    user(email).ok_or(CoreError::DomainViolation(DomainError::InvalidCredentials))
}

/// The seeded community thread: one question with one mechanic reply.
///
/// # Errors
///
/// Returns an error only if a demo account is missing from [`users`].
pub fn community_posts() -> Result<Vec<CommunityPost>, CoreError> {
    let aryan: User = seeded_user(EV_USER_EMAIL)?;
    let brijesh: User = seeded_user(MECHANIC_EMAIL)?;

    let reply: CommunityPost = CommunityPost::new(
        PostId::new(2),
        brijesh,
        "Hi Aryan. That could be a number of things, but it's often related to the inverter \
         or motor bearings. It's best to get it checked out. I have an opening tomorrow \
         afternoon if you'd like to book an appointment.",
        "1 hour ago",
    );
    let post: CommunityPost = CommunityPost::new(
        PostId::new(1),
        aryan,
        "Hey everyone, I've noticed a slight whining noise when accelerating hard. Has anyone \
         experienced this? My car is a 2022 Nexon EV.",
        "2 hours ago",
    )
    .with_replies(vec![reply]);

    Ok(vec![post])
}

/// The seeded mechanic appointments.
///
/// # Errors
///
/// Returns an error only if a demo account is missing from [`users`].
pub fn appointments() -> Result<Vec<Appointment>, CoreError> {
    let aryan: User = seeded_user(EV_USER_EMAIL)?;
    let brijesh: User = seeded_user(MECHANIC_EMAIL)?;
    let diya: User = User::new(
        4,
        "Diya Singh",
        Role::EvUser,
        "https://i.pravatar.cc/150?u=diya",
        "diya@demo.com",
    );

    Ok(vec![
        Appointment::new(
            1,
            aryan,
            brijesh.clone(),
            "Tomorrow, 2:00 PM",
            "Whining noise on acceleration",
            AppointmentStatus::Pending,
        ),
        Appointment::new(
            2,
            diya,
            brijesh,
            "Yesterday, 4:00 PM",
            "Brake fluid check",
            AppointmentStatus::Completed,
        ),
    ])
}

/// Telemetry of the demo vehicle at the given state of charge.
///
/// # Errors
///
/// Returns `DomainError::InvalidBatteryPercentage` if `battery_percentage`
/// is above 100.
pub fn ev_status(battery_percentage: u8) -> Result<EvStatus, DomainError> {
    Ok(EvStatus::new(battery_percentage, 88, 92, 45, 1.15)?.with_alerts(vec![
        MaintenanceAlert::new(
            1,
            "Battery temperature is higher than optimal. This may impact long-term health.",
            Severity::Medium,
        ),
        MaintenanceAlert::new(
            2,
            "Energy consumption is 15% above average. Check driving style in Insights.",
            Severity::Low,
        ),
    ]))
}

/// The operator's daily summary and booking table.
#[must_use]
pub fn operator_console() -> OperatorConsole {
    OperatorConsole::new(
        28,
        "₹37,500",
        vec![
            OperatorBooking::new(1, "Rohan Verma", "CP-01", "14:30", OperatorBookingStatus::Confirmed),
            OperatorBooking::new(2, "Priya Sharma", "CP-03", "15:00", OperatorBookingStatus::Upcoming),
            OperatorBooking::new(3, "Sameer Khan", "CP-02", "11:15", OperatorBookingStatus::Completed),
            OperatorBooking::new(4, "Anjali Mehta", "CP-01", "16:00", OperatorBookingStatus::Upcoming),
            OperatorBooking::new(5, "Vikram Singh", "CP-04", "10:30", OperatorBookingStatus::Completed),
        ],
    )
}

/// Serves the demo stations after a simulated delay.
#[derive(Debug, Clone, Copy)]
pub struct SeedStationProvider {
    delay: Duration,
}

impl Default for SeedStationProvider {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_DELAY)
    }
}

impl SeedStationProvider {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl StationProvider for SeedStationProvider {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Station>, CoreError>> + Send {
        let delay: Duration = self.delay;
        async move {
            debug!(delay = ?delay, "Fetching seeded stations");
            tokio::time::sleep(delay).await;
            Ok(stations()?)
        }
    }
}

/// Always answers with the same coordinate.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinate);

impl LocationProvider for FixedLocation {
    fn request(&self) -> impl Future<Output = Result<Coordinate, DomainError>> + Send {
        std::future::ready(Ok(self.0))
    }
}

/// The user refused the location permission.
#[derive(Debug, Clone, Copy)]
pub struct DeniedLocation;

impl LocationProvider for DeniedLocation {
    fn request(&self) -> impl Future<Output = Result<Coordinate, DomainError>> + Send {
        std::future::ready(Err(DomainError::LocationUnavailable {
            reason: "denied".to_string(),
        }))
    }
}

/// The device has no location support.
#[derive(Debug, Clone, Copy)]
pub struct UnsupportedLocation;

impl LocationProvider for UnsupportedLocation {
    fn request(&self) -> impl Future<Output = Result<Coordinate, DomainError>> + Send {
        std::future::ready(Err(DomainError::LocationUnavailable {
            reason: "unsupported".to_string(),
        }))
    }
}

/// A provider that never answers.
#[derive(Debug, Clone, Copy)]
pub struct SilentLocation;

impl LocationProvider for SilentLocation {
    fn request(&self) -> impl Future<Output = Result<Coordinate, DomainError>> + Send {
        std::future::pending()
    }
}

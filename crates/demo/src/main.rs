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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use std::future::Future;
use std::time::Duration;

use clap::Parser;
use evision::seed::{
    self, DeniedLocation, FixedLocation, SeedStationProvider, SilentLocation, UnsupportedLocation,
};
use evision::{
    AppointmentWorkflow, AuthorizationService, BookingPhase, BookingWorkflow, Capability,
    CommunityThread, CoreError, Dashboard, LocationProvider, LocationState, Session,
    SessionManager, StationCatalog, unix_millis,
};
use evision_domain::{
    Appointment, ChargeBand, CommunityPost, Coordinate, DomainError, EvStatus,
    LOW_CHARGE_THRESHOLD, OperatorBooking, OperatorBookingStatus, OperatorConsole, RankedStation,
    Role, Station, User,
};
use serde::Serialize;
use tracing::{info, warn};

/// `EVision` demo - walks a signed-in role through its dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Email of the demo identity to sign in as.
    #[arg(short, long, default_value = seed::EV_USER_EMAIL)]
    email: String,

    /// Shared demo password.
    #[arg(short, long, default_value = evision::DEMO_PASSWORD)]
    password: String,

    /// Latitude reported by the location provider.
    #[arg(long, requires = "longitude", allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// Longitude reported by the location provider.
    #[arg(long, requires = "latitude", allow_negative_numbers = true)]
    longitude: Option<f64>,

    /// The user denies the location permission.
    #[arg(long, conflicts_with_all = ["latitude", "silent_location"])]
    deny_location: bool,

    /// The location prompt is never answered.
    #[arg(long, conflicts_with = "latitude")]
    silent_location: bool,

    /// How long to wait for a location, in milliseconds.
    #[arg(long, default_value_t = 3000)]
    locate_timeout_ms: u64,

    /// Simulated latency of the station fetch, in milliseconds.
    #[arg(long, default_value_t = 500)]
    fetch_delay_ms: u64,

    /// Vehicle state of charge, in percent.
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u8).range(0..=100))]
    battery: u8,

    /// Community post to publish as a vehicle owner.
    #[arg(long)]
    post: Option<String>,

    /// Print the walkthrough as JSON instead of text.
    #[arg(long)]
    json: bool,
}

/// The location provider picked on the command line.
#[derive(Debug, Clone, Copy)]
enum DemoLocation {
    Fixed(FixedLocation),
    Denied,
    Unsupported,
    Silent,
}

impl DemoLocation {
    const fn from_args(args: &Args) -> Self {
        if args.deny_location {
            return Self::Denied;
        }
        if args.silent_location {
            return Self::Silent;
        }
        match (args.latitude, args.longitude) {
            (Some(latitude), Some(longitude)) => {
                Self::Fixed(FixedLocation(Coordinate::new(latitude, longitude)))
            }
            _ => Self::Unsupported,
        }
    }
}

impl LocationProvider for DemoLocation {
    fn request(&self) -> impl Future<Output = Result<Coordinate, DomainError>> + Send {
        let provider: Self = *self;
        async move {
            match provider {
                Self::Fixed(fixed) => fixed.request().await,
                Self::Denied => DeniedLocation.request().await,
                Self::Unsupported => UnsupportedLocation.request().await,
                Self::Silent => SilentLocation.request().await,
            }
        }
    }
}

/// Walkthrough settings, independent of the command line.
#[derive(Debug, Clone)]
struct DemoConfig {
    location: DemoLocation,
    locate_timeout: Duration,
    fetch_delay: Duration,
    battery: u8,
    post: Option<String>,
}

impl From<&Args> for DemoConfig {
    fn from(args: &Args) -> Self {
        Self {
            location: DemoLocation::from_args(args),
            locate_timeout: Duration::from_millis(args.locate_timeout_ms),
            fetch_delay: Duration::from_millis(args.fetch_delay_ms),
            battery: args.battery,
            post: args.post.clone(),
        }
    }
}

/// Result of booking the first open slot.
#[derive(Debug, Clone, Serialize)]
struct BookingOutcome {
    station_id: u32,
    station_name: String,
    time: String,
    phase: BookingPhase,
    availability_before: usize,
    availability_after: usize,
}

#[derive(Debug, Serialize)]
struct EvUserReport {
    status: EvStatus,
    charge_band: ChargeBand,
    location: String,
    unranked: Vec<RankedStation>,
    ranked: Vec<RankedStation>,
    recommendation: Option<RankedStation>,
    booking: Option<BookingOutcome>,
    thread: Vec<CommunityPost>,
}

#[derive(Debug, Serialize)]
struct MechanicReport {
    pending: Vec<Appointment>,
    accepted: Option<Appointment>,
    appointments: Vec<Appointment>,
    thread: Vec<CommunityPost>,
}

#[derive(Debug, Serialize)]
struct OperatorReport {
    console: OperatorConsole,
    occupancy_percent: usize,
    upcoming: Vec<OperatorBooking>,
    stations: Vec<Station>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
enum Walkthrough {
    EvUser(EvUserReport),
    Mechanic(MechanicReport),
    StationOperator(OperatorReport),
}

#[derive(Debug, Serialize)]
struct Report {
    user: User,
    dashboard: Dashboard,
    walkthrough: Walkthrough,
}

fn describe_location(state: &LocationState) -> String {
    match state {
        LocationState::Pending => String::from("pending"),
        LocationState::Resolved(coordinate) => {
            format!("{:.4}, {:.4}", coordinate.latitude, coordinate.longitude)
        }
        LocationState::Rejected(err) => err.to_string(),
        LocationState::TimedOut => String::from("timed out"),
    }
}

async fn load_catalog(config: &DemoConfig) -> Result<StationCatalog, CoreError> {
    let mut catalog: StationCatalog = StationCatalog::new();
    catalog
        .load(&SeedStationProvider::new(config.fetch_delay))
        .await?;
    Ok(catalog)
}

/// Books the first open slot at the recommended station, or at the nearest
/// station with anything open.
fn book_first_open_slot(
    session: &Session,
    catalog: &mut StationCatalog,
    recommendation: Option<&RankedStation>,
) -> Result<Option<BookingOutcome>, CoreError> {
    AuthorizationService::authorize(session, Capability::BookSlot)?;

    let ranked: Vec<RankedStation> = catalog.ranked();
    let target: Option<(u32, String)> = recommendation
        .into_iter()
        .chain(ranked.iter())
        .find_map(|candidate| {
            candidate
                .station
                .bookable_slots()
                .first()
                .map(|slot| (candidate.station.id, slot.time.clone()))
        });
    let Some((station_id, time)) = target else {
        warn!("No open slot at any station");
        return Ok(None);
    };

    let availability_before: usize = catalog
        .station(station_id)
        .map_or(0, Station::availability);
    let mut workflow: BookingWorkflow = BookingWorkflow::new();
    workflow.select(catalog, station_id, &time)?;
    let phase: BookingPhase = workflow.confirm(catalog)?;
    workflow.close();

    let station: &Station = catalog
        .station(station_id)
        .ok_or(DomainError::StationNotFound(station_id))?;
    Ok(Some(BookingOutcome {
        station_id,
        station_name: station.name.clone(),
        time,
        phase,
        availability_before,
        availability_after: station.availability(),
    }))
}

async fn ev_user_walkthrough(
    session: &Session,
    config: &DemoConfig,
) -> Result<EvUserReport, CoreError> {
    let status: EvStatus = seed::ev_status(config.battery)?;
    let mut catalog: StationCatalog = load_catalog(config).await?;
    let unranked: Vec<RankedStation> = catalog.ranked();

    let location: String =
        describe_location(catalog.locate(&config.location, config.locate_timeout).await);
    let ranked: Vec<RankedStation> = catalog.ranked();
    let recommendation: Option<RankedStation> =
        catalog.recommend(status.battery_percentage(), LOW_CHARGE_THRESHOLD);
    if let Some(nearest) = &recommendation {
        info!(
            station_id = nearest.station.id,
            distance_km = nearest.distance.km(),
            "Low battery, recommending nearest station"
        );
    }

    let booking: Option<BookingOutcome> =
        book_first_open_slot(session, &mut catalog, recommendation.as_ref())?;

    let mut thread: CommunityThread =
        CommunityThread::seeded(seed::community_posts()?, unix_millis);
    if let Some(content) = &config.post {
        AuthorizationService::authorize(session, Capability::AddPost)?;
        thread.add_post(Some(session.user()), content)?;
    }

    Ok(EvUserReport {
        charge_band: status.charge_band(),
        status,
        location,
        unranked,
        ranked,
        recommendation,
        booking,
        thread: thread.snapshot(),
    })
}

fn mechanic_walkthrough(session: &Session) -> Result<MechanicReport, CoreError> {
    let mut appointments: AppointmentWorkflow = AppointmentWorkflow::new(seed::appointments()?);
    let pending: Vec<Appointment> = appointments.pending();

    AuthorizationService::authorize(session, Capability::AdvanceAppointment)?;
    let accepted: Option<Appointment> = match pending.first() {
        Some(appointment) => Some(appointments.accept(appointment.id)?),
        None => None,
    };

    AuthorizationService::authorize(session, Capability::AddReply)?;
    let mut thread: CommunityThread =
        CommunityThread::seeded(seed::community_posts()?, unix_millis);
    if let (Some(question), Some(appointment)) = (thread.snapshot().first(), &accepted) {
        let reply: String = format!(
            "Booked you in for {}. Bring the car by and we'll take a look.",
            appointment.time
        );
        thread.add_reply(question.id, Some(session.user()), &reply)?;
    }

    Ok(MechanicReport {
        pending,
        accepted,
        appointments: appointments.appointments().to_vec(),
        thread: thread.snapshot(),
    })
}

async fn operator_walkthrough(
    session: &Session,
    config: &DemoConfig,
) -> Result<OperatorReport, CoreError> {
    AuthorizationService::authorize(session, Capability::ViewOperatorConsole)?;
    let catalog: StationCatalog = load_catalog(config).await?;
    let console: OperatorConsole = seed::operator_console();

    Ok(OperatorReport {
        occupancy_percent: OperatorConsole::occupancy_percent(catalog.stations()),
        upcoming: console
            .bookings_with_status(OperatorBookingStatus::Upcoming)
            .into_iter()
            .cloned()
            .collect(),
        console,
        stations: catalog.stations().to_vec(),
    })
}

async fn run(session: &Session, config: &DemoConfig) -> Result<Report, CoreError> {
    let dashboard: Dashboard = Dashboard::for_session(session);
    info!(user_id = session.user().id, dashboard = ?dashboard, "Opening dashboard");

    let walkthrough: Walkthrough = match session.role() {
        Role::EvUser => Walkthrough::EvUser(ev_user_walkthrough(session, config).await?),
        Role::Mechanic => Walkthrough::Mechanic(mechanic_walkthrough(session)?),
        Role::StationOperator => {
            Walkthrough::StationOperator(operator_walkthrough(session, config).await?)
        }
    };

    Ok(Report {
        user: session.user().clone(),
        dashboard,
        walkthrough,
    })
}

fn print_ranked(ranked: &[RankedStation]) {
    for entry in ranked {
        let distance: String = entry
            .distance
            .km()
            .map_or_else(|| String::from("?"), |km| format!("{km:.1} km"));
        println!(
            "  {:>2}. {:<30} {:>9}  {}/{} open",
            entry.station.id,
            entry.station.name,
            distance,
            entry.station.availability(),
            entry.station.total_slots
        );
    }
}

fn print_thread(thread: &[CommunityPost]) {
    for post in thread {
        println!("  [{}] {}: {}", post.timestamp, post.author.name, post.content);
        for reply in &post.replies {
            println!(
                "      [{}] {}: {}",
                reply.timestamp, reply.author.name, reply.content
            );
        }
    }
}

fn greeting(user: &User) -> String {
    format!(
        "Welcome back, {}. Signed in as {} ({})",
        user.first_name(),
        user.name,
        user.role.label()
    )
}

fn appointment_line(appointment: &Appointment) -> String {
    let marker: &str = if appointment.status.is_terminal() {
        "closed"
    } else {
        "open"
    };
    format!(
        "#{} {} - {} ({}) [{}, {marker}]",
        appointment.id,
        appointment.user.name,
        appointment.issue,
        appointment.time,
        appointment.status
    )
}

fn print_report(report: &Report) {
    println!("{}", greeting(&report.user));

    match &report.walkthrough {
        Walkthrough::EvUser(ev) => {
            println!(
                "Battery {}% ({:?}), range {} km",
                ev.status.battery_percentage(),
                ev.charge_band,
                ev.status.estimated_range_km
            );
            for alert in &ev.status.maintenance_alerts {
                println!("  ! {}", alert.alert);
            }
            println!("Location: {}", ev.location);
            print_ranked(&ev.ranked);
            if let Some(nearest) = &ev.recommendation {
                println!(
                    "Battery is low. The closest station is {}.",
                    nearest.station.name
                );
            }
            if let Some(booking) = &ev.booking {
                println!(
                    "Booked {} at {} ({} -> {} open)",
                    booking.time,
                    booking.station_name,
                    booking.availability_before,
                    booking.availability_after
                );
            }
            println!("Community:");
            print_thread(&ev.thread);
        }
        Walkthrough::Mechanic(mechanic) => {
            println!("Pending appointments: {}", mechanic.pending.len());
            for appointment in &mechanic.appointments {
                println!("  {}", appointment_line(appointment));
            }
            println!("Community:");
            print_thread(&mechanic.thread);
        }
        Walkthrough::StationOperator(operator) => {
            println!(
                "Occupancy {}%, {} bookings today, revenue {}",
                operator.occupancy_percent,
                operator.console.total_bookings,
                operator.console.daily_revenue
            );
            for booking in &operator.console.bookings {
                println!(
                    "  {:<14} {} {} {:?}",
                    booking.user, booking.station, booking.time, booking.status
                );
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting EVision demo");

    let config: DemoConfig = DemoConfig::from(&args);
    let mut sessions: SessionManager = SessionManager::new(seed::identities());
    let session: Session = sessions.login(&args.email, &args.password)?;

    let report: Report = run(&session, &config).await?;
    sessions.logout();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use evision_domain::{DomainError, SlotStatus};

use super::helpers::{create_seeded_catalog, create_small_catalog};
use crate::{BookingPhase, BookingWorkflow, CoreError};

#[test]
fn test_new_workflow_is_idle() {
    let workflow = BookingWorkflow::new();

    assert_eq!(workflow.phase(), BookingPhase::Idle);
    assert!(workflow.selection().is_none());
}

#[test]
fn test_select_then_confirm_books_slot() {
    let mut catalog = create_small_catalog();
    let mut workflow = BookingWorkflow::new();
    let before = catalog.station(1).unwrap().availability();

    assert_eq!(
        workflow.select(&catalog, 1, "14:30").unwrap(),
        BookingPhase::SlotSelected
    );
    // Selection alone does not touch the station.
    assert_eq!(catalog.station(1).unwrap().availability(), before);

    assert_eq!(
        workflow.confirm(&mut catalog).unwrap(),
        BookingPhase::Confirmed
    );

    let station = catalog.station(1).unwrap();
    assert_eq!(station.slot("14:30").unwrap().status, SlotStatus::Booked);
    assert_eq!(station.availability(), before - 1);
}

#[test]
fn test_repeated_confirm_is_idempotent() {
    let mut catalog = create_small_catalog();
    let mut workflow = BookingWorkflow::new();
    workflow.select(&catalog, 1, "14:30").unwrap();
    workflow.confirm(&mut catalog).unwrap();
    let booked_once = catalog.stations().to_vec();

    assert_eq!(
        workflow.confirm(&mut catalog).unwrap(),
        BookingPhase::Confirmed
    );
    assert_eq!(catalog.stations(), booked_once.as_slice());
}

#[test]
fn test_peak_slot_is_selectable() {
    let mut catalog = create_small_catalog();
    let mut workflow = BookingWorkflow::new();

    workflow.select(&catalog, 1, "15:00").unwrap();
    workflow.confirm(&mut catalog).unwrap();

    assert_eq!(
        catalog.station(1).unwrap().slot("15:00").unwrap().status,
        SlotStatus::Booked
    );
}

#[test]
fn test_selecting_booked_slot_is_rejected_without_transition() {
    let catalog = create_small_catalog();
    let mut workflow = BookingWorkflow::new();

    let result = workflow.select(&catalog, 1, "14:00");

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidSlotSelection {
            station_id: 1,
            time: String::from("14:00"),
        })
    );
    assert_eq!(workflow.phase(), BookingPhase::Idle);
}

#[test]
fn test_rejected_selection_keeps_previous_selection() {
    let catalog = create_small_catalog();
    let mut workflow = BookingWorkflow::new();
    workflow.select(&catalog, 1, "14:30").unwrap();

    assert!(workflow.select(&catalog, 1, "14:00").is_err());

    assert_eq!(workflow.phase(), BookingPhase::SlotSelected);
    assert_eq!(workflow.selection().unwrap().time, "14:30");
}

#[test]
fn test_select_unknown_station_or_slot() {
    let catalog = create_small_catalog();
    let mut workflow = BookingWorkflow::new();

    assert_eq!(
        workflow.select(&catalog, 99, "14:30").unwrap_err(),
        CoreError::DomainViolation(DomainError::StationNotFound(99))
    );
    assert!(matches!(
        workflow.select(&catalog, 1, "09:00").unwrap_err(),
        CoreError::DomainViolation(DomainError::SlotNotFound { .. })
    ));
    assert_eq!(workflow.phase(), BookingPhase::Idle);
}

#[test]
fn test_confirm_without_selection_fails() {
    let mut catalog = create_small_catalog();
    let mut workflow = BookingWorkflow::new();

    assert_eq!(
        workflow.confirm(&mut catalog).unwrap_err(),
        CoreError::NoSelection
    );
}

#[test]
fn test_confirm_detects_slot_booked_after_selection() {
    let mut catalog = create_small_catalog();
    let mut first = BookingWorkflow::new();
    let mut second = BookingWorkflow::new();
    first.select(&catalog, 1, "14:30").unwrap();
    second.select(&catalog, 1, "14:30").unwrap();
    first.confirm(&mut catalog).unwrap();

    let result = second.confirm(&mut catalog);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::SlotAlreadyBooked { .. }))
    ));
    assert_eq!(second.phase(), BookingPhase::SlotSelected);
}

#[test]
fn test_close_returns_to_idle_without_reverting_booking() {
    let mut catalog = create_small_catalog();
    let mut workflow = BookingWorkflow::new();
    workflow.select(&catalog, 1, "14:30").unwrap();
    workflow.confirm(&mut catalog).unwrap();

    workflow.close();

    assert_eq!(workflow.phase(), BookingPhase::Idle);
    assert!(workflow.selection().is_none());
    assert_eq!(
        catalog.station(1).unwrap().slot("14:30").unwrap().status,
        SlotStatus::Booked
    );
}

#[test]
fn test_close_from_slot_selected_leaves_station_untouched() {
    let catalog = create_seeded_catalog();
    let before = catalog.stations().to_vec();
    let mut workflow = BookingWorkflow::new();
    workflow.select(&catalog, 3, "16:00").unwrap();

    workflow.close();

    assert_eq!(workflow.phase(), BookingPhase::Idle);
    assert_eq!(catalog.stations(), before.as_slice());
}

#[test]
fn test_fully_booked_station_offers_nothing_to_select() {
    let catalog = create_seeded_catalog();
    let station = catalog.station(5).unwrap();
    let mut workflow = BookingWorkflow::new();

    assert_eq!(station.availability(), 0);
    for slot in station.slots() {
        assert!(workflow.select(&catalog, 5, &slot.time).is_err());
    }
    assert_eq!(workflow.phase(), BookingPhase::Idle);
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use evision_domain::{DomainError, Role};

use crate::seed::{self, EV_USER_EMAIL, MECHANIC_EMAIL, OPERATOR_EMAIL};
use crate::{CoreError, DEMO_PASSWORD, SessionManager, SignUpError, SignUpRequest};

fn create_manager() -> SessionManager {
    SessionManager::new(seed::identities())
}

fn create_sign_up_request() -> SignUpRequest {
    SignUpRequest {
        full_name: String::from("Diya Singh"),
        email: String::from("diya@demo.com"),
        password: String::from("hunter22"),
        confirm_password: String::from("hunter22"),
        role: Role::EvUser,
    }
}

#[test]
fn test_login_with_known_identity_returns_session_with_role() {
    let mut manager = create_manager();

    let session = manager.login(MECHANIC_EMAIL, DEMO_PASSWORD).unwrap();

    assert_eq!(session.role(), Role::Mechanic);
    assert_eq!(session.user().name, "Brijesh Kumar");
    assert_eq!(manager.active(), Some(&session));
}

#[test]
fn test_each_demo_identity_maps_to_its_role() {
    let mut manager = create_manager();

    for (email, role) in [
        (EV_USER_EMAIL, Role::EvUser),
        (MECHANIC_EMAIL, Role::Mechanic),
        (OPERATOR_EMAIL, Role::StationOperator),
    ] {
        assert_eq!(manager.login(email, DEMO_PASSWORD).unwrap().role(), role);
    }
}

#[test]
fn test_login_rejects_wrong_password() {
    let mut manager = create_manager();

    let result = manager.login(EV_USER_EMAIL, "letmein");

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidCredentials)
    );
    assert!(manager.active().is_none());
}

#[test]
fn test_login_rejects_unknown_email() {
    let mut manager = create_manager();

    let result = manager.login("nobody@demo.com", DEMO_PASSWORD);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidCredentials))
    ));
}

#[test]
fn test_failed_login_keeps_existing_session() {
    let mut manager = create_manager();
    let session = manager.login(EV_USER_EMAIL, DEMO_PASSWORD).unwrap();

    let _ = manager.login(OPERATOR_EMAIL, "wrong");

    assert_eq!(manager.active(), Some(&session));
}

#[test]
fn test_logout_is_idempotent() {
    let mut manager = create_manager();
    manager.login(EV_USER_EMAIL, DEMO_PASSWORD).unwrap();

    manager.logout();
    assert!(manager.active().is_none());

    manager.logout();
    assert!(manager.active().is_none());
}

#[test]
fn test_sign_up_accepts_complete_form_without_adding_identity() {
    let mut manager = create_manager();
    let request = create_sign_up_request();

    assert_eq!(manager.sign_up(&request), Ok(()));

    // The new identity still cannot sign in.
    assert!(manager.login(&request.email, &request.password).is_err());
    assert!(manager.login(&request.email, DEMO_PASSWORD).is_err());
}

#[test]
fn test_sign_up_rejects_empty_field() {
    let manager = create_manager();
    let mut request = create_sign_up_request();
    request.email = String::new();

    assert_eq!(
        manager.sign_up(&request),
        Err(SignUpError::MissingField { field: "email" })
    );
}

#[test]
fn test_sign_up_rejects_confirmation_mismatch() {
    let manager = create_manager();
    let mut request = create_sign_up_request();
    request.confirm_password = String::from("hunter23");

    assert_eq!(
        manager.sign_up(&request),
        Err(SignUpError::ConfirmationMismatch)
    );
}

#[test]
fn test_sign_up_error_messages() {
    let missing = SignUpError::MissingField { field: "full_name" };
    assert_eq!(
        missing.to_string(),
        "Please fill out all fields (full_name is empty)"
    );
    assert_eq!(
        SignUpError::ConfirmationMismatch.to_string(),
        "Passwords do not match"
    );
}

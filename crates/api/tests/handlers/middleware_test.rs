use argon2::PasswordVerifier;
use axum::http::StatusCode;
use courtside_api::middleware::{auth, error_handling::map_error};
use courtside_core::{CredentialCheck, errors::CourtError};
use rstest::rstest;

#[rstest]
#[case(CourtError::NotFound("No court_9 in the before slot".to_string()), StatusCode::NOT_FOUND)]
#[case(CourtError::Validation("Unknown slot".to_string()), StatusCode::BAD_REQUEST)]
#[case(CourtError::EmptyName, StatusCode::BAD_REQUEST)]
#[case(CourtError::AlreadyCheckedIn("Hana".to_string()), StatusCode::CONFLICT)]
#[case(CourtError::Authentication("Invalid password".to_string()), StatusCode::UNAUTHORIZED)]
#[case(CourtError::Authorization("Admin access required".to_string()), StatusCode::FORBIDDEN)]
#[case(CourtError::Store(eyre::eyre!("connection refused")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: CourtError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[test]
fn test_error_handling_internal() {
    let error = CourtError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_hash_password() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    assert_ne!(hashed, password);
    assert!(hashed.starts_with("$argon2"));

    let argon2 = argon2::Argon2::default();
    let parsed_hash = argon2::PasswordHash::new(&hashed).unwrap();
    assert!(argon2.verify_password(password.as_bytes(), &parsed_hash).is_ok());
    assert!(
        argon2
            .verify_password("wrong_password".as_bytes(), &parsed_hash)
            .is_err()
    );
}

#[test]
fn test_argon2_credential_verifies() {
    let credential = crate::test_utils::credential();

    assert!(credential.verify(crate::test_utils::ADMIN_PASSWORD));
    assert!(!credential.verify("Shuttlecock"));
    assert!(!credential.verify(""));
}

#[test]
fn test_argon2_credential_rejects_plain_text() {
    assert!(auth::Argon2Credential::new("not-a-hash").is_err());
}

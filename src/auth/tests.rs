//! Tests for the auth module

use super::*;
use crate::config::Credentials;
use crate::error::Error;

fn full_credentials() -> Credentials {
    Credentials {
        api_key: Some("key-1".to_string()),
        email: Some("ops@example.com".to_string()),
        password: Some("hunter2".to_string()),
        dev_key: Some("dev-9".to_string()),
        bearer_token: Some("tok-7".to_string()),
    }
}

#[test]
fn test_full_credentials_yield_all_schemes_in_priority_order() {
    let candidates = build_auth_candidates(&full_credentials()).unwrap();

    let names: Vec<&str> = candidates.iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "bearer",
            "apikey-header",
            "apikey+email+devkey",
            "apikey+email+password"
        ]
    );
}

#[test]
fn test_bearer_only() {
    let creds = Credentials {
        bearer_token: Some("tok".to_string()),
        ..Credentials::default()
    };
    let candidates = build_auth_candidates(&creds).unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "bearer");
    assert_eq!(
        candidates[0].headers,
        vec![("Authorization".to_string(), "Bearer tok".to_string())]
    );
}

#[test]
fn test_api_key_only_references_no_other_credential() {
    let creds = Credentials {
        api_key: Some("key-1".to_string()),
        ..Credentials::default()
    };
    let candidates = build_auth_candidates(&creds).unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "apikey-header");
    for (name, value) in &candidates[0].headers {
        assert!(!name.eq_ignore_ascii_case("email"));
        assert!(!name.eq_ignore_ascii_case("password"));
        assert!(!name.eq_ignore_ascii_case("devkey"));
        assert!(!name.eq_ignore_ascii_case("authorization"));
        assert_eq!(value, "key-1");
    }
}

#[test]
fn test_api_key_header_bundle_spellings() {
    let creds = Credentials {
        api_key: Some("key-1".to_string()),
        ..Credentials::default()
    };
    let candidates = build_auth_candidates(&creds).unwrap();
    let names: Vec<&str> = candidates[0]
        .headers
        .iter()
        .map(|(n, _)| n.as_str())
        .collect();

    assert!(names.contains(&"apiKey"));
    assert!(names.contains(&"x-api-key"));
}

#[test]
fn test_key_email_without_secret_yields_only_header_bundle() {
    let creds = Credentials {
        api_key: Some("key-1".to_string()),
        email: Some("ops@example.com".to_string()),
        ..Credentials::default()
    };
    let candidates = build_auth_candidates(&creds).unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "apikey-header");
}

#[test]
fn test_dev_key_ordered_before_password() {
    let creds = Credentials {
        api_key: Some("key-1".to_string()),
        email: Some("ops@example.com".to_string()),
        password: Some("hunter2".to_string()),
        dev_key: Some("dev-9".to_string()),
        bearer_token: None,
    };
    let candidates = build_auth_candidates(&creds).unwrap();
    let names: Vec<&str> = candidates.iter().map(|c| c.name).collect();

    assert_eq!(
        names,
        vec![
            "apikey-header",
            "apikey+email+devkey",
            "apikey+email+password"
        ]
    );
}

#[test]
fn test_empty_credentials_fail_with_config_error() {
    let err = build_auth_candidates(&Credentials::default()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_candidates_rebuilt_identically() {
    // Candidate construction is a pure function of the credential view
    let creds = full_credentials();
    let a = build_auth_candidates(&creds).unwrap();
    let b = build_auth_candidates(&creds).unwrap();
    assert_eq!(a, b);
}

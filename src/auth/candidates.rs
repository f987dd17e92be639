//! Auth candidate construction
//!
//! Candidates are generated only from credentials actually present and are
//! ordered by how often each scheme is the correct one in practice:
//! bearer token, then API-key header, then key+email+devkey, then
//! key+email+password. Rebuilt fresh for every logical operation; they are
//! cheap pure functions of the credential view.

use crate::config::Credentials;
use crate::error::{Error, Result};

/// One named authentication header-set to attempt during probing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCandidate {
    /// Stable scheme name, used in logs and probe diagnostics
    pub name: &'static str,
    /// Headers this scheme sends
    pub headers: Vec<(String, String)>,
}

impl AuthCandidate {
    fn new(name: &'static str, headers: Vec<(String, String)>) -> Self {
        Self { name, headers }
    }
}

/// Build the ordered auth candidate list for the given credentials.
///
/// Fails with a configuration error when no scheme has its required fields;
/// that is fatal and never retried, since probing without any authentication
/// hypothesis is pointless.
pub fn build_auth_candidates(credentials: &Credentials) -> Result<Vec<AuthCandidate>> {
    let mut candidates = Vec::new();

    if let Some(token) = &credentials.bearer_token {
        candidates.push(AuthCandidate::new(
            "bearer",
            vec![("Authorization".to_string(), format!("Bearer {token}"))],
        ));
    }

    if let Some(key) = &credentials.api_key {
        // Header names are cheap to send simultaneously, so the common
        // spellings go out as one candidate bundle.
        candidates.push(AuthCandidate::new(
            "apikey-header",
            vec![
                ("apiKey".to_string(), key.clone()),
                ("ApiKey".to_string(), key.clone()),
                ("x-api-key".to_string(), key.clone()),
            ],
        ));

        if let Some(email) = &credentials.email {
            if let Some(dev_key) = &credentials.dev_key {
                candidates.push(AuthCandidate::new(
                    "apikey+email+devkey",
                    vec![
                        ("apiKey".to_string(), key.clone()),
                        ("email".to_string(), email.clone()),
                        ("DevKey".to_string(), dev_key.clone()),
                    ],
                ));
            }

            if let Some(password) = &credentials.password {
                candidates.push(AuthCandidate::new(
                    "apikey+email+password",
                    vec![
                        ("apiKey".to_string(), key.clone()),
                        ("email".to_string(), email.clone()),
                        ("password".to_string(), password.clone()),
                    ],
                ));
            }
        }
    }

    if candidates.is_empty() {
        return Err(Error::config(
            "no usable credentials: set a bearer token, or an API key \
             (optionally with email and password or developer key)",
        ));
    }

    Ok(candidates)
}

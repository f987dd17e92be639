//! Probe executor

use crate::auth::AuthCandidate;
use crate::decode::{decode_body, extract_list, DecodedBody};
use crate::endpoint::EndpointCandidate;
use crate::error::{Error, Result};
use crate::http::{Transport, TransportRequest, TransportResponse};
use crate::types::JsonValue;
use std::time::Duration;
use tracing::{debug, warn};

/// Cap on response bodies carried inside diagnostics
const DIAGNOSTIC_BODY_LIMIT: usize = 300;

/// Drives the endpoint × auth cross product for one logical operation.
///
/// Candidate lists are built fresh by the caller for every operation; the
/// executor owns only the loop, the per-call timeout, and the success
/// policy. Individual candidate failures are recovered here and never
/// propagate; only total exhaustion does.
pub struct ProbeExecutor<'a> {
    transport: &'a dyn Transport,
    timeout: Duration,
}

impl<'a> ProbeExecutor<'a> {
    pub fn new(transport: &'a dyn Transport, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    /// Probe a search operation until one combination yields an acceptable
    /// record list.
    ///
    /// A non-empty list is always accepted. An empty list is accepted only
    /// when `allow_empty` is set (the caller's query was blank, so "list
    /// everything" may legitimately return zero rows); otherwise an empty
    /// list means this combination is probably wrong and probing continues.
    pub async fn probe_search(
        &self,
        endpoints: &[EndpointCandidate],
        auths: &[AuthCandidate],
        allow_empty: bool,
    ) -> Result<Vec<JsonValue>> {
        self.run(endpoints, auths, |response| {
            judge_search(response, allow_empty)
        })
        .await
    }

    /// Probe a get-by-id operation until one combination yields a JSON
    /// record. Resolves to `Null` when the winning combination answered
    /// 2xx with an explicitly absent record, so callers can distinguish
    /// not-found from exhaustion.
    pub async fn probe_get(
        &self,
        endpoints: &[EndpointCandidate],
        auths: &[AuthCandidate],
    ) -> Result<JsonValue> {
        self.run(endpoints, auths, judge_get).await
    }

    async fn run<T>(
        &self,
        endpoints: &[EndpointCandidate],
        auths: &[AuthCandidate],
        judge: impl Fn(&TransportResponse) -> Result<T>,
    ) -> Result<T> {
        let mut attempts = 0u32;
        let mut last_error: Option<Error> = None;

        for endpoint in endpoints {
            for auth in auths {
                attempts += 1;

                match self.attempt(endpoint, auth).await {
                    Ok(response) => match judge(&response) {
                        Ok(value) => {
                            debug!(
                                endpoint = endpoint.name,
                                auth = auth.name,
                                attempts,
                                "probe accepted"
                            );
                            return Ok(value);
                        }
                        Err(e) => {
                            debug!(
                                endpoint = endpoint.name,
                                auth = auth.name,
                                error = %e,
                                "combination rejected"
                            );
                            last_error = Some(e);
                        }
                    },
                    Err(e) if e.is_candidate_failure() => {
                        debug!(
                            endpoint = endpoint.name,
                            auth = auth.name,
                            error = %e,
                            "combination failed"
                        );
                        last_error = Some(e);
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        let detail = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no candidates to try".to_string());
        warn!(attempts, detail = %detail, "probe exhausted");
        Err(Error::Exhausted { attempts, detail })
    }

    /// Issue exactly one request for one combination.
    async fn attempt(
        &self,
        endpoint: &EndpointCandidate,
        auth: &AuthCandidate,
    ) -> Result<TransportResponse> {
        let response = self
            .transport
            .send(TransportRequest {
                method: endpoint.method.clone(),
                path: endpoint.path.clone(),
                headers: auth.headers.clone(),
                body: endpoint.body.clone(),
                timeout: self.timeout,
            })
            .await?;

        if !response.is_success() {
            return Err(Error::upstream(
                response.status,
                truncate(&response.body),
            ));
        }

        Ok(response)
    }
}

/// Search acceptance: the body decodes as JSON and carries a result list
/// that is non-empty, or empty when an empty result is allowed.
fn judge_search(response: &TransportResponse, allow_empty: bool) -> Result<Vec<JsonValue>> {
    match decode_body(&response.body) {
        DecodedBody::Json(value) => {
            let records = extract_list(&value);
            if records.is_empty() && !allow_empty {
                return Err(Error::decode("empty result list for a non-blank query"));
            }
            Ok(records)
        }
        DecodedBody::Text(text) => Err(Error::decode(format!(
            "non-JSON response body: {}",
            truncate(&text)
        ))),
    }
}

/// Get acceptance: the body decodes as a JSON object, or as an explicit
/// null meaning the record does not exist.
fn judge_get(response: &TransportResponse) -> Result<JsonValue> {
    match decode_body(&response.body) {
        DecodedBody::Json(value) if value.is_object() || value.is_null() => Ok(value),
        DecodedBody::Json(other) => Err(Error::decode(format!(
            "expected a JSON object, got {}",
            truncate(&other.to_string())
        ))),
        DecodedBody::Text(text) => Err(Error::decode(format!(
            "non-JSON response body: {}",
            truncate(&text)
        ))),
    }
}

fn truncate(body: &str) -> String {
    if body.len() <= DIAGNOSTIC_BODY_LIMIT {
        return body.to_string();
    }
    let mut end = DIAGNOSTIC_BODY_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

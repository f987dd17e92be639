//! Cross-product probing
//!
//! The probe loop forms the cross product of endpoint candidates and auth
//! candidates, endpoint-major: all auth variants are tried for the
//! most-likely endpoint before moving to the next endpoint. A wrong
//! endpoint fails fast with 404 regardless of auth, while a correct
//! endpoint with wrong auth needs the per-endpoint auth sweep, so this
//! order wastes the fewest calls.
//!
//! The loop is deliberately sequential. Only one shape should be trusted
//! per operation, earlier failures inform nothing about later candidates,
//! and racing candidates would multiply load on an upstream that is already
//! failing requests.

mod executor;

pub use executor::ProbeExecutor;

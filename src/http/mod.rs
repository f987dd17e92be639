//! HTTP transport module
//!
//! A deliberately thin layer over reqwest: the probe loop issues exactly one
//! request per candidate combination, with a bounded per-call timeout and no
//! retries, backoff, or pooling beyond what reqwest manages implicitly.
//! Retrying is the probe loop's job (it moves on to the next candidate);
//! retrying here would multiply load on an upstream that is already failing.
//!
//! The `Transport` trait is the seam that lets tests drive the probe loop
//! with a scripted fake instead of a network.

mod transport;

pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

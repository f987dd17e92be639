//! Response decoder module
//!
//! # Overview
//!
//! Upstream responses arrive as JSON in one of a small set of envelope
//! shapes, or as plain text when a tenant's error pages are not JSON at all.
//! `decode_body` parses JSON first and falls back to the raw text verbatim,
//! so error bodies can still be logged and reported. `extract_list` matches
//! the known envelope shapes exhaustively; an unrecognized shape yields an
//! empty list rather than an error, which the probe success policy then
//! treats as a failed combination for non-blank queries.

mod envelope;

pub use envelope::{classify_envelope, decode_body, extract_list, DecodedBody, Envelope};

#[cfg(test)]
mod tests;

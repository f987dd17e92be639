//! Authentication candidate generation
//!
//! Different tenants of the upstream accept different authentication
//! conventions: a bearer token, an explicit API-key header under several
//! common spellings, or the key+email pair combined with either a developer
//! key or a password. This module turns the credential material that is
//! actually present into an ordered list of header-set candidates for the
//! probe loop to try.

mod candidates;

pub use candidates::{build_auth_candidates, AuthCandidate};

#[cfg(test)]
mod tests;

//! Endpoint candidate generation
//!
//! For each logical operation this module enumerates the concrete
//! path + payload-shape conventions observed across tenants, in a fixed
//! priority order with the empirically most-likely-correct convention first.
//! Search operations pair two generic path conventions (record-type-code
//! `/list` and entity-name `/entityref`, plus the `/Entity/Search` variant)
//! with several filter encodings; get operations differ only in path.
//!
//! The order is deterministic and stable across calls, so probing is
//! reproducible for a fixed configuration and query.

mod candidates;
mod types;

pub use candidates::{
    get_candidates, item_vendor_candidates, search_candidates, search_fields,
};
pub use types::{EndpointCandidate, SearchField};

#[cfg(test)]
mod tests;

//! Merge/dedup of fanned-out search results
//!
//! A single logical search fans out into multiple field-specific queries
//! because the upstream does not reliably support OR-across-fields in one
//! filter. The lists come back concurrently and are combined here:
//! concatenated in caller-supplied order, with later duplicates removed by
//! id and the first occurrence kept. Input order is part of the contract,
//! not an implementation detail; it is what ranks primary-field matches
//! above secondary ones.

use crate::normalize::{CanonicalCustomer, CanonicalItem, CanonicalSalesOrder};
use std::collections::HashSet;

/// Records that carry the stable identity used for deduplication
pub trait Keyed {
    /// The record's id
    fn id(&self) -> i64;
}

impl Keyed for CanonicalCustomer {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Keyed for CanonicalItem {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Keyed for CanonicalSalesOrder {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Concatenate the lists in supplied order and drop later records whose id
/// was already seen. Two records with the same id from different probes are
/// the same entity; first seen wins.
pub fn merge_by_id<T: Keyed>(lists: Vec<Vec<T>>) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for list in lists {
        for record in list {
            if seen.insert(record.id()) {
                out.push(record);
            }
        }
    }

    out
}

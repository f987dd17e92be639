//! Common types used throughout the OrderTime gateway
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Entity Kind
// ============================================================================

/// The entity kinds the gateway understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Customer,
    Item,
    SalesOrder,
}

impl EntityKind {
    /// Entity name used by name-based routes (`/entityref`, `/Entity/Search`)
    pub fn entity_name(self) -> &'static str {
        match self {
            EntityKind::Customer => "Customer",
            EntityKind::Item => "PartItem",
            EntityKind::SalesOrder => "SalesOrder",
        }
    }

    /// Record-type code used by the `/list` route
    pub fn list_type_code(self) -> u32 {
        match self {
            EntityKind::Customer => 120,
            EntityKind::Item => 115,
            EntityKind::SalesOrder => 7,
        }
    }

    /// Human-readable label used in errors and logs
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Customer => "customer",
            EntityKind::Item => "item",
            EntityKind::SalesOrder => "sales order",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Pagination parameters for search operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    /// 1-based page number
    pub page: u32,
    /// Records per page
    pub page_size: u32,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 25,
        }
    }
}

impl PageSpec {
    /// Build a page spec from take/skip style parameters, clamping take to
    /// 1..=500 and skip to a non-negative page boundary.
    pub fn from_take_skip(take: u32, skip: u32) -> Self {
        let page_size = take.clamp(1, 500);
        let page = skip / page_size + 1;
        Self { page, page_size }
    }

    /// Skip count equivalent for take/skip style routes. Saturates rather
    /// than overflowing for absurd page numbers.
    pub fn skip(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_names() {
        assert_eq!(EntityKind::Customer.entity_name(), "Customer");
        assert_eq!(EntityKind::Item.entity_name(), "PartItem");
        assert_eq!(EntityKind::SalesOrder.entity_name(), "SalesOrder");
    }

    #[test]
    fn test_list_type_codes() {
        assert_eq!(EntityKind::SalesOrder.list_type_code(), 7);
        assert_eq!(EntityKind::Item.list_type_code(), 115);
    }

    #[test]
    fn test_page_spec_default() {
        let spec = PageSpec::default();
        assert_eq!(spec.page, 1);
        assert_eq!(spec.page_size, 25);
    }

    #[test]
    fn test_page_spec_from_take_skip_clamps() {
        let spec = PageSpec::from_take_skip(1000, 0);
        assert_eq!(spec.page_size, 500);
        assert_eq!(spec.page, 1);

        let spec = PageSpec::from_take_skip(0, 0);
        assert_eq!(spec.page_size, 1);
    }

    #[test]
    fn test_page_spec_skip_round_trip() {
        let spec = PageSpec::from_take_skip(25, 50);
        assert_eq!(spec.page, 3);
        assert_eq!(spec.skip(), 50);
    }

    #[test]
    fn test_page_spec_skip_saturates_on_huge_page() {
        let spec = PageSpec {
            page: u32::MAX,
            page_size: 500,
        };
        assert_eq!(spec.skip(), u32::MAX);

        let spec = PageSpec {
            page: u32::MAX,
            page_size: 1,
        };
        assert_eq!(spec.skip(), u32::MAX - 1);
    }
}

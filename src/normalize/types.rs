//! Canonical record types
//!
//! These are the stable shapes returned to callers, independent of which
//! upstream convention produced them. String fields default to `""`,
//! booleans to `false`, numbers to `0`.

use serde::{Deserialize, Serialize};

// ============================================================================
// Customer
// ============================================================================

/// Billing address block of a canonical customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingAddress {
    pub contact: String,
    pub phone: String,
    pub email: String,
    pub street: String,
    pub suite: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Ship-to address block of a canonical customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub company: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
    pub street: String,
    pub suite: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub is_residential: bool,
}

/// Payment profile of a canonical customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentProfile {
    pub method: String,
    pub terms: String,
    pub tax_exempt: bool,
    pub has_agreement: bool,
}

/// Default shipping options of a canonical customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingOptions {
    pub pay_method: String,
    pub speed: String,
    pub short_ship_policy: String,
}

/// Carrier representative contact
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarrierRep {
    pub name: String,
    pub email: String,
}

/// Sales representative assignment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesRep {
    pub primary: String,
    pub secondary: String,
}

/// Canonical customer record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalCustomer {
    pub id: i64,
    pub company: String,
    pub billing: BillingAddress,
    pub shipping: ShippingAddress,
    pub payment: PaymentProfile,
    pub shipping_options: ShippingOptions,
    pub carrier_rep: CarrierRep,
    pub sales_rep: SalesRep,
}

// ============================================================================
// Item
// ============================================================================

/// Canonical item record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalItem {
    pub id: i64,
    pub sku: String,
    pub description: String,
    pub manufacturer_part_number: String,
    pub vendor_name: String,
    pub is_active: bool,
    pub is_stocked: bool,
    pub unit_of_measure: String,
    pub price: f64,
    pub standard_cost: f64,
}

// ============================================================================
// Sales Order
// ============================================================================

/// Canonical sales order record (search results; get is passthrough)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalSalesOrder {
    pub id: i64,
    pub doc_number: String,
    pub customer_name: String,
    pub status: String,
    pub date: String,
    pub total: f64,
}

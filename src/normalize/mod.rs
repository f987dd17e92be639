//! Canonical records and field normalizers
//!
//! One pure, total function per entity kind translates whatever shape the
//! upstream returned into the canonical record the rest of the system
//! depends on. Every canonical field tries a fixed priority list of raw
//! field-name aliases and falls back to `""` / `false` / `0`, so callers
//! never see a missing field. Canonical records are immutable value objects
//! constructed once per response.

mod customer;
mod fields;
mod item;
mod sales_order;
mod types;

pub use customer::normalize_customer;
pub use item::normalize_item;
pub(crate) use item::vendor_name_from;
pub use sales_order::normalize_sales_order;
pub use types::{
    BillingAddress, CanonicalCustomer, CanonicalItem, CanonicalSalesOrder, CarrierRep,
    PaymentProfile, SalesRep, ShippingAddress, ShippingOptions,
};

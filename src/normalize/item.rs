//! Item normalizer

use super::fields::{bool_at, f64_at, id_at, str_at};
use super::types::CanonicalItem;
use crate::types::JsonValue;

/// Normalize a raw upstream item record.
pub fn normalize_item(raw: &JsonValue) -> CanonicalItem {
    CanonicalItem {
        id: id_at(raw),
        sku: str_at(raw, &["Number", "SKU", "ItemCode", "Name"]),
        description: str_at(raw, &["Description", "GeneralDescription"]),
        manufacturer_part_number: str_at(raw, &["ManufacturerPartNo", "MfgPartNo", "Model"]),
        vendor_name: str_at(raw, &["VendorRef.Name", "Vendor.Name", "VendorName"]),
        is_active: bool_at(raw, &["IsActive", "Active"]),
        is_stocked: bool_at(raw, &["IsStocked", "Stocked"]),
        unit_of_measure: str_at(raw, &["SalesUOM", "UOM", "UnitOfMeasure"]),
        price: f64_at(raw, &["SalesPrice", "Price"]),
        standard_cost: f64_at(raw, &["StdCost", "StandardCost", "Cost"]),
    }
}

/// Pull a vendor name out of a raw item-vendor record.
///
/// Used by the vendor lookup that enriches `get_item`; the vendor reference
/// appears nested under either `Vendor` or `VendorRef`.
pub(crate) fn vendor_name_from(raw: &JsonValue) -> String {
    str_at(raw, &["Vendor.Name", "VendorRef.Name", "VendorName", "Name"])
}

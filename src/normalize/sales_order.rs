//! Sales order normalizer

use super::fields::{f64_at, id_at, str_at};
use super::types::CanonicalSalesOrder;
use crate::types::JsonValue;

/// Normalize a raw upstream sales order record (search results only; the
/// get-by-id route passes the raw record through verbatim).
pub fn normalize_sales_order(raw: &JsonValue) -> CanonicalSalesOrder {
    CanonicalSalesOrder {
        id: id_at(raw),
        doc_number: str_at(raw, &["DocNumber", "Number", "DocNo"]),
        customer_name: str_at(raw, &["CustomerRef.Name", "Customer", "CustomerName"]),
        status: str_at(raw, &["Status", "DocStatus"]),
        date: str_at(raw, &["TxnDate", "Date"]),
        total: f64_at(raw, &["Total", "TotalAmount"]),
    }
}

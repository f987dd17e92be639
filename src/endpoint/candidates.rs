//! Endpoint candidate construction
//!
//! The filter encodings here mirror the conventions seen in the wild:
//! the `/list` route takes a record-type code with either
//! `PropertyName`/`FilterValueArray`/`NumberOfRecords` (numeric operator
//! codes, value as single-element array) or
//! `FieldName`/`FilterValue`/`PageSize` (named operator, scalar value);
//! `/Entity/Search` takes a per-field `Contains` filter object; `/entityref`
//! takes a free-text `searchText` that cannot be scoped to a field.

use super::types::{EndpointCandidate, SearchField};
use crate::types::{EntityKind, JsonValue, PageSpec};
use serde_json::json;

/// Operator code for "contains" on the code-style `/list` route
const OPERATOR_CONTAINS: u32 = 12;

/// The natural text fields to fan out over for a given entity, primary first.
pub fn search_fields(entity: EntityKind) -> Vec<SearchField> {
    match entity {
        EntityKind::Customer => vec![
            SearchField {
                property: "Name",
                primary: true,
            },
            SearchField {
                property: "Company",
                primary: false,
            },
        ],
        EntityKind::Item => vec![
            SearchField {
                property: "Name",
                primary: true,
            },
            SearchField {
                property: "Number",
                primary: false,
            },
        ],
        EntityKind::SalesOrder => vec![
            SearchField {
                property: "DocNumber",
                primary: true,
            },
            SearchField {
                property: "CustomerRef.Name",
                primary: false,
            },
        ],
    }
}

/// Build the ordered endpoint candidates for a field-scoped search.
///
/// A blank query means "list everything": filter clauses are omitted but the
/// same path and pagination shapes are kept.
pub fn search_candidates(
    entity: EntityKind,
    field: &SearchField,
    query: &str,
    page: PageSpec,
) -> Vec<EndpointCandidate> {
    let query = query.trim();
    let mut out = Vec::with_capacity(4);

    out.push(EndpointCandidate::post(
        "list/property-array",
        "/list",
        json!({
            "Type": entity.list_type_code(),
            "Filters": property_array_filters(field, query),
            "NumberOfRecords": page.page_size,
            "PageNumber": page.page,
        }),
    ));

    out.push(EndpointCandidate::post(
        "list/field-scalar",
        "/list",
        json!({
            "Type": entity.list_type_code(),
            "Filters": field_scalar_filters(field, query),
            "PageSize": page.page_size,
            "PageNumber": page.page,
        }),
    ));

    out.push(EndpointCandidate::post(
        "entity-search",
        "/Entity/Search",
        json!({
            "EntityName": entity.entity_name(),
            "Filter": contains_filter(field, query),
            "Page": page.page,
            "PageSize": page.page_size,
        }),
    ));

    // /entityref matches on the entity's display name only; probing it for a
    // secondary field would duplicate the primary field's query.
    if field.primary {
        out.push(EndpointCandidate::post(
            "entityref",
            "/entityref",
            json!({
                "entityName": entity.entity_name(),
                "searchText": query,
                "take": page.page_size,
                "skip": page.skip(),
            }),
        ));
    }

    out
}

fn property_array_filters(field: &SearchField, query: &str) -> JsonValue {
    if query.is_empty() {
        return json!([]);
    }
    json!([{
        "PropertyName": field.property,
        "FieldType": 1,
        "Operator": OPERATOR_CONTAINS,
        "FilterValueArray": [query],
    }])
}

fn field_scalar_filters(field: &SearchField, query: &str) -> JsonValue {
    if query.is_empty() {
        return json!([]);
    }
    json!([{
        "FieldName": field.property,
        "FieldType": 1,
        "Operator": "Contains",
        "FilterValue": query,
    }])
}

fn contains_filter(field: &SearchField, query: &str) -> JsonValue {
    if query.is_empty() {
        return json!({});
    }
    json!({ field.property: { "Contains": query } })
}

/// Build the ordered endpoint candidates for a get-by-id.
///
/// Get candidates differ only in path casing and per-entity route spelling,
/// never in payload shape; the id travels in the query string everywhere.
pub fn get_candidates(entity: EntityKind, id: i64) -> Vec<EndpointCandidate> {
    let paths: &[&str] = match entity {
        EntityKind::Customer => &["/customer", "/Customer"],
        EntityKind::Item => &["/partitem", "/PartItem", "/item"],
        EntityKind::SalesOrder => &["/salesorder", "/SalesOrder"],
    };

    paths
        .iter()
        .map(|p| EndpointCandidate::get("get-by-id", format!("{p}?id={id}")))
        .collect()
}

/// Build the ordered endpoint candidates for an item's vendor records.
pub fn item_vendor_candidates(item_id: i64) -> Vec<EndpointCandidate> {
    ["/itemvendor", "/ItemVendor"]
        .iter()
        .map(|p| EndpointCandidate::get("item-vendors", format!("{p}?itemId={item_id}")))
        .collect()
}

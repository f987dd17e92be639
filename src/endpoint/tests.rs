//! Tests for the endpoint module

use super::*;
use crate::types::{EntityKind, PageSpec};
use pretty_assertions::assert_eq;
use serde_json::json;

fn primary_field(entity: EntityKind) -> SearchField {
    search_fields(entity)[0]
}

#[test]
fn test_search_fields_primary_first() {
    for entity in [EntityKind::Customer, EntityKind::Item, EntityKind::SalesOrder] {
        let fields = search_fields(entity);
        assert!(fields.len() >= 2);
        assert!(fields[0].primary);
        assert!(fields[1..].iter().all(|f| !f.primary));
    }
}

#[test]
fn test_search_candidate_order_is_deterministic() {
    let field = primary_field(EntityKind::Customer);
    let a = search_candidates(EntityKind::Customer, &field, "acme", PageSpec::default());
    let b = search_candidates(EntityKind::Customer, &field, "acme", PageSpec::default());

    let names: Vec<&str> = a.iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "list/property-array",
            "list/field-scalar",
            "entity-search",
            "entityref"
        ]
    );
    assert_eq!(names, b.iter().map(|c| c.name).collect::<Vec<_>>());
}

#[test]
fn test_list_property_array_shape() {
    let field = primary_field(EntityKind::Item);
    let candidates = search_candidates(EntityKind::Item, &field, "widget", PageSpec::default());

    assert_eq!(candidates[0].path, "/list");
    assert_eq!(
        candidates[0].body,
        Some(json!({
            "Type": 115,
            "Filters": [{
                "PropertyName": "Name",
                "FieldType": 1,
                "Operator": 12,
                "FilterValueArray": ["widget"],
            }],
            "NumberOfRecords": 25,
            "PageNumber": 1,
        }))
    );
}

#[test]
fn test_list_field_scalar_shape() {
    let field = primary_field(EntityKind::SalesOrder);
    let candidates = search_candidates(EntityKind::SalesOrder, &field, "SO-100", PageSpec::default());

    let body = candidates[1].body.as_ref().unwrap();
    assert_eq!(body["Type"], 7);
    assert_eq!(body["Filters"][0]["FieldName"], "DocNumber");
    assert_eq!(body["Filters"][0]["FilterValue"], "SO-100");
    assert_eq!(body["Filters"][0]["Operator"], "Contains");
    assert_eq!(body["PageSize"], 25);
}

#[test]
fn test_entity_search_shape() {
    let field = SearchField {
        property: "Company",
        primary: false,
    };
    let candidates = search_candidates(EntityKind::Customer, &field, "acme", PageSpec::default());

    let body = candidates[2].body.as_ref().unwrap();
    assert_eq!(candidates[2].path, "/Entity/Search");
    assert_eq!(body["EntityName"], "Customer");
    assert_eq!(body["Filter"]["Company"]["Contains"], "acme");
}

#[test]
fn test_entityref_only_for_primary_field() {
    let fields = search_fields(EntityKind::Customer);
    let primary = search_candidates(EntityKind::Customer, &fields[0], "q", PageSpec::default());
    let secondary = search_candidates(EntityKind::Customer, &fields[1], "q", PageSpec::default());

    assert!(primary.iter().any(|c| c.name == "entityref"));
    assert!(secondary.iter().all(|c| c.name != "entityref"));
}

#[test]
fn test_entityref_uses_take_skip() {
    let field = primary_field(EntityKind::Item);
    let page = PageSpec::from_take_skip(100, 200);
    let candidates = search_candidates(EntityKind::Item, &field, "q", page);

    let body = candidates[3].body.as_ref().unwrap();
    assert_eq!(body["entityName"], "PartItem");
    assert_eq!(body["take"], 100);
    assert_eq!(body["skip"], 200);
}

#[test]
fn test_blank_query_omits_filters() {
    let field = primary_field(EntityKind::Customer);
    let candidates = search_candidates(EntityKind::Customer, &field, "   ", PageSpec::default());

    assert_eq!(candidates[0].body.as_ref().unwrap()["Filters"], json!([]));
    assert_eq!(candidates[1].body.as_ref().unwrap()["Filters"], json!([]));
    assert_eq!(candidates[2].body.as_ref().unwrap()["Filter"], json!({}));
    assert_eq!(candidates[3].body.as_ref().unwrap()["searchText"], "");
}

#[test]
fn test_get_candidates_differ_only_in_path() {
    let candidates = get_candidates(EntityKind::Item, 42);
    let paths: Vec<&str> = candidates.iter().map(|c| c.path.as_str()).collect();

    assert_eq!(paths, vec!["/partitem?id=42", "/PartItem?id=42", "/item?id=42"]);
    assert!(candidates.iter().all(|c| c.body.is_none()));
    assert!(candidates.iter().all(|c| c.method == reqwest::Method::GET));
}

#[test]
fn test_get_candidates_customer_and_sales_order() {
    let customer: Vec<String> = get_candidates(EntityKind::Customer, 7)
        .into_iter()
        .map(|c| c.path)
        .collect();
    assert_eq!(customer, vec!["/customer?id=7", "/Customer?id=7"]);

    let so: Vec<String> = get_candidates(EntityKind::SalesOrder, 9)
        .into_iter()
        .map(|c| c.path)
        .collect();
    assert_eq!(so, vec!["/salesorder?id=9", "/SalesOrder?id=9"]);
}

#[test]
fn test_item_vendor_candidates() {
    let candidates = item_vendor_candidates(5);
    assert_eq!(candidates[0].path, "/itemvendor?itemId=5");
    assert_eq!(candidates[1].path, "/ItemVendor?itemId=5");
}

use super::*;
use crate::fixtures::{ORDERS, SUPPLIERS};

fn supplier_names(list: &[&Supplier]) -> Vec<&'static str> {
    list.iter().map(|s| s.name).collect()
}

fn order_ids(list: &[&Order]) -> Vec<&'static str> {
    list.iter().map(|o| o.id).collect()
}

// =============================================================
// Suppliers
// =============================================================

#[test]
fn all_category_returns_full_directory_in_order() {
    let visible = filter_suppliers(SUPPLIERS, SupplierCategory::All, "");
    assert_eq!(visible.len(), SUPPLIERS.len());
    for (shown, source) in visible.iter().zip(SUPPLIERS) {
        assert_eq!(shown.id, source.id);
    }
}

#[test]
fn each_category_matches_its_specialty_keyword() {
    assert_eq!(
        supplier_names(&filter_suppliers(SUPPLIERS, SupplierCategory::Food, "")),
        ["GreenPack Solutions"]
    );
    assert_eq!(
        supplier_names(&filter_suppliers(SUPPLIERS, SupplierCategory::Shipping, "")),
        ["EcoBox Manufacturing"]
    );
    assert_eq!(
        supplier_names(&filter_suppliers(SUPPLIERS, SupplierCategory::Protective, "")),
        ["Sustainable Wrap Co"]
    );
    assert_eq!(
        supplier_names(&filter_suppliers(SUPPLIERS, SupplierCategory::Custom, "")),
        ["BioDegradable Innovations"]
    );
}

#[test]
fn category_filter_is_exactly_the_specialty_substring_subset() {
    for category in SupplierCategory::ALL {
        let visible = filter_suppliers(SUPPLIERS, category, "");
        let expected: Vec<&Supplier> = SUPPLIERS
            .iter()
            .filter(|s| match category.keyword() {
                None => true,
                Some(k) => s.specialties.iter().any(|sp| sp.to_lowercase().contains(k)),
            })
            .collect();
        assert_eq!(visible, expected, "{}", category.id());
    }
}

#[test]
fn location_narrows_case_insensitively() {
    let visible = filter_suppliers(SUPPLIERS, SupplierCategory::All, "  ca ");
    assert_eq!(supplier_names(&visible), ["GreenPack Solutions", "Sustainable Wrap Co"]);

    let visible = filter_suppliers(SUPPLIERS, SupplierCategory::All, "SEATTLE");
    assert_eq!(supplier_names(&visible), ["BioDegradable Innovations"]);
}

#[test]
fn location_and_category_combine() {
    let visible = filter_suppliers(SUPPLIERS, SupplierCategory::Food, "Portland");
    assert!(visible.is_empty());
}

#[test]
fn blank_location_is_a_no_op() {
    assert_eq!(filter_suppliers(SUPPLIERS, SupplierCategory::All, "   ").len(), SUPPLIERS.len());
}

#[test]
fn category_parses_from_button_id() {
    assert_eq!("food".parse::<SupplierCategory>(), Ok(SupplierCategory::Food));
    assert_eq!("all".parse::<SupplierCategory>(), Ok(SupplierCategory::All));
    assert_eq!(
        "bags".parse::<SupplierCategory>(),
        Err(ParseError::UnknownCategory("bags".to_owned()))
    );
}

// =============================================================
// Orders
// =============================================================

#[test]
fn all_status_returns_every_order() {
    assert_eq!(
        order_ids(&filter_orders(ORDERS, StatusFilter::All, "")),
        ["ORD-001", "ORD-002", "ORD-003", "ORD-004"]
    );
}

#[test]
fn status_filter_is_exactly_the_equal_status_subset() {
    for status in OrderStatus::ALL {
        let visible = filter_orders(ORDERS, StatusFilter::Only(status), "");
        let expected: Vec<&Order> = ORDERS.iter().filter(|o| o.status == status).collect();
        assert_eq!(visible, expected, "{}", status.id());
        assert!(visible.iter().all(|o| o.status == status));
    }
}

#[test]
fn in_progress_filter_uses_hyphenated_id() {
    let filter: StatusFilter = "in-progress".parse().unwrap();
    assert_eq!(filter, StatusFilter::Only(OrderStatus::InProgress));
    assert_eq!(order_ids(&filter_orders(ORDERS, filter, "")), ["ORD-003"]);
}

#[test]
fn unknown_status_is_a_parse_error() {
    assert_eq!(
        "shipped".parse::<StatusFilter>(),
        Err(ParseError::UnknownStatus("shipped".to_owned()))
    );
}

#[test]
fn query_matches_id_supplier_or_product() {
    assert_eq!(order_ids(&filter_orders(ORDERS, StatusFilter::All, "ord-002")), ["ORD-002"]);
    assert_eq!(order_ids(&filter_orders(ORDERS, StatusFilter::All, "greenpack")), ["ORD-001"]);
    assert_eq!(
        order_ids(&filter_orders(ORDERS, StatusFilter::All, "wrap")),
        ["ORD-003", "ORD-004"]
    );
}

#[test]
fn query_and_status_combine() {
    let visible = filter_orders(ORDERS, StatusFilter::Only(OrderStatus::Rejected), "wrap");
    assert_eq!(order_ids(&visible), ["ORD-004"]);
    let visible = filter_orders(ORDERS, StatusFilter::Only(OrderStatus::Pending), "wrap");
    assert!(visible.is_empty());
}

#[test]
fn filtering_leaves_the_source_untouched() {
    let before = ORDERS.to_vec();
    let _ = filter_orders(ORDERS, StatusFilter::Only(OrderStatus::Pending), "eco");
    assert_eq!(ORDERS, before.as_slice());
}

#[test]
fn select_options_follow_menu_order() {
    let ids: Vec<&str> = StatusFilter::OPTIONS.iter().map(|f| f.id()).collect();
    assert_eq!(ids, ["all", "pending", "in-progress", "completed", "rejected"]);
}

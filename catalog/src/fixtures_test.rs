use std::collections::HashSet;

use super::*;

#[test]
fn quick_actions_cover_every_page_except_dashboard() {
    let targets: HashSet<PageId> = QUICK_ACTIONS.iter().map(|a| a.target).collect();
    assert_eq!(targets.len(), QUICK_ACTIONS.len());
    assert!(!targets.contains(&PageId::Dashboard));
    for page in PageId::ALL.into_iter().filter(|p| *p != PageId::Dashboard) {
        assert!(targets.contains(&page), "no quick action for {page}");
    }
}

#[test]
fn series_are_six_months_each() {
    assert_eq!(HISTORICAL_DEMAND.len(), 6);
    assert_eq!(DEMAND_FORECAST.len(), 6);
    assert_eq!(CARBON_EMISSIONS.len(), 6);
    assert_eq!(HISTORICAL_DEMAND[0].month, "Jan");
    assert_eq!(DEMAND_FORECAST[0].month, "Jul");
}

#[test]
fn carbon_saved_is_traditional_minus_biodegradable() {
    for point in CARBON_EMISSIONS {
        assert_eq!(point.traditional - point.biodegradable, point.saved, "{}", point.month);
    }
}

#[test]
fn waste_breakdown_sums_to_one_hundred_percent() {
    let total: u32 = WASTE_BREAKDOWN.iter().map(|w| u32::from(w.percent)).sum();
    assert_eq!(total, 100);
}

#[test]
fn supplier_ids_are_unique() {
    let ids: HashSet<u32> = SUPPLIERS.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), SUPPLIERS.len());
}

#[test]
fn every_order_supplier_is_in_the_directory() {
    for order in ORDERS {
        assert!(
            SUPPLIERS.iter().any(|s| s.name == order.supplier),
            "{} references unknown supplier {}",
            order.id,
            order.supplier
        );
    }
}

#[test]
fn only_rejected_orders_carry_a_reason_and_no_delivery() {
    for order in ORDERS {
        let rejected = order.status == OrderStatus::Rejected;
        assert_eq!(order.rejection_reason.is_some(), rejected, "{}", order.id);
        assert_eq!(order.delivery_date.is_none(), rejected, "{}", order.id);
    }
}

#[test]
fn each_status_appears_once_in_sample_orders() {
    for status in OrderStatus::ALL {
        assert_eq!(ORDERS.iter().filter(|o| o.status == status).count(), 1, "{}", status.id());
    }
}

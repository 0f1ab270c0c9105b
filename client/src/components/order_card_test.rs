use catalog::fixtures::ORDERS;

use super::*;

fn order_with(status: OrderStatus) -> &'static Order {
    ORDERS.iter().find(|o| o.status == status).unwrap()
}

#[test]
fn rejected_orders_show_placeholder_delivery() {
    assert_eq!(delivery_text(order_with(OrderStatus::Rejected)), NO_DATE);
    assert_ne!(delivery_text(order_with(OrderStatus::Completed)), NO_DATE);
}

#[test]
fn contact_line_resolves_directory_supplier() {
    let order = ORDERS.iter().find(|o| contact_line(o).is_some()).unwrap();
    let line = contact_line(order).unwrap();
    assert!(line.contains('@'));
}

use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push("A", "first");
    let b = state.push("B", "second");
    assert!(b > a);
}

#[test]
fn push_keeps_only_the_newest_toast() {
    let mut state = ToastState::default();
    state.push("A", "first");
    let b = state.push(ORDER_SENT_TITLE, ORDER_SENT_DESCRIPTION);
    assert_eq!(state.items.len(), TOAST_LIMIT);
    assert_eq!(state.items[0].id, b);
    assert_eq!(state.items[0].title, "Order Request Sent");
}

#[test]
fn dismiss_removes_matching_toast() {
    let mut state = ToastState::default();
    let id = state.push("A", "first");
    assert!(state.dismiss(id));
    assert!(state.items.is_empty());
    assert!(!state.dismiss(id));
}

#[test]
fn dismiss_for_evicted_toast_leaves_current_one() {
    let mut state = ToastState::default();
    let old = state.push("A", "first");
    let new = state.push("B", "second");
    assert!(!state.dismiss(old));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, new);
}

#[test]
fn quote_description_names_supplier() {
    assert!(quote_sent_description("EcoBox Manufacturing").starts_with("EcoBox Manufacturing "));
}

#[test]
fn toasts_close_after_five_seconds() {
    assert_eq!(TOAST_DURATION_MS, 5_000);
}

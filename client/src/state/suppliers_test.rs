use super::*;

#[test]
fn default_filter_shows_every_supplier() {
    let state = SupplierFilterState::default();
    assert_eq!(state.category, SupplierCategory::All);
    assert_eq!(state.visible().len(), SUPPLIERS.len());
}

#[test]
fn selecting_category_narrows_to_matching_specialties() {
    let mut state = SupplierFilterState::default();
    state.select_category(SupplierCategory::Shipping);
    let names: Vec<&str> = state.visible().iter().map(|s| s.name).collect();
    assert_eq!(names, ["EcoBox Manufacturing"]);

    state.select_category(SupplierCategory::All);
    assert_eq!(state.visible().len(), SUPPLIERS.len());
}

#[test]
fn location_text_narrows_results() {
    let mut state = SupplierFilterState::default();
    state.set_location("oakland".to_owned());
    let names: Vec<&str> = state.visible().iter().map(|s| s.name).collect();
    assert_eq!(names, ["Sustainable Wrap Co"]);
}

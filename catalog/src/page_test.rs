use super::*;

#[test]
fn default_page_is_dashboard() {
    assert_eq!(PageId::default(), PageId::Dashboard);
}

#[test]
fn ids_parse_back_to_their_page() {
    for page in PageId::ALL {
        assert_eq!(page.id().parse::<PageId>(), Ok(page));
        assert_eq!(page.to_string(), page.id());
    }
}

#[test]
fn unknown_id_is_a_parse_error() {
    assert_eq!("settings".parse::<PageId>(), Err(ParseError::UnknownPage("settings".to_owned())));
    assert_eq!("Dashboard".parse::<PageId>(), Err(ParseError::UnknownPage("Dashboard".to_owned())));
}

#[test]
fn unknown_id_falls_back_to_dashboard() {
    assert_eq!(PageId::from_id_or_default("nowhere"), PageId::Dashboard);
    assert_eq!(PageId::from_id_or_default(""), PageId::Dashboard);
    assert_eq!(PageId::from_id_or_default("orders"), PageId::Orders);
}

#[test]
fn headings_are_unique_across_pages() {
    for (i, a) in PageId::ALL.iter().enumerate() {
        for (j, b) in PageId::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.heading(), b.heading());
                assert_ne!(a.id(), b.id());
            }
        }
    }
}

#[test]
fn nav_labels_match_navigation_bar() {
    let labels: Vec<&str> = PageId::ALL.iter().map(|p| p.label()).collect();
    assert_eq!(labels, ["Dashboard", "AI Forecasting", "Suppliers", "Impact", "Orders"]);
}

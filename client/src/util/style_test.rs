use super::*;

#[test]
fn tone_class_appends_modifier() {
    assert_eq!(tone_class("badge", Tone::Danger), "badge badge--danger");
    assert_eq!(tone_class("stat-card__icon", Tone::PrimaryLight), "stat-card__icon stat-card__icon--primary-light");
}

#[test]
fn tone_color_references_palette_variable() {
    assert_eq!(tone_color(Tone::Success), "var(--eco-success)");
}

#[test]
fn percent_width_clamps() {
    assert_eq!(percent_width(95), "width: 95%");
    assert_eq!(percent_width(250), "width: 100%");
}

#[test]
fn toggle_button_class_marks_active() {
    assert_eq!(toggle_button_class("nav__link", true), "nav__link nav__link--active");
    assert_eq!(toggle_button_class("nav__link", false), "nav__link");
}

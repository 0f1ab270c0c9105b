//! Inline SVG icons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fixture records name icons through `catalog::Icon`; this module owns the
//! stroke paths. Every icon is drawn on a 24x24 grid with `currentColor` so
//! the surrounding text color tints it.

#[cfg(test)]
#[path = "glyph_test.rs"]
mod glyph_test;

use catalog::Icon;
use leptos::prelude::*;

/// Stroke paths for `icon` on a 24x24 grid.
pub fn icon_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        Icon::Award => &["M12 2a6 6 0 1 0 0 12a6 6 0 1 0 0-12z", "M8.2 13.9 7 22l5-3 5 3-1.2-8.1"],
        Icon::Brain => &[
            "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
            "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
            "M12 5v13",
        ],
        Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
        Icon::Clock => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "M12 6v6l4 2"],
        Icon::Droplets => &[
            "M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z",
            "M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97",
        ],
        Icon::Filter => &["M22 3H2l8 9.46V19l4 2v-8.54L22 3z"],
        Icon::Leaf => &[
            "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
            "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
        ],
        Icon::Mail => &["M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "m22 6-10 7L2 6"],
        Icon::MapPin => &["M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z", "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6z"],
        Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        Icon::Package => &[
            "m7.5 4.27 9 5.15",
            "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z",
            "m3.3 7 8.7 5 8.7-5",
            "M12 22V12",
        ],
        Icon::Plus => &["M5 12h14", "M12 5v14"],
        Icon::Recycle => &[
            "M7 19H4.815a1.83 1.83 0 0 1-1.57-.881 1.785 1.785 0 0 1-.004-1.784L7.196 9.5",
            "M11 19h8.203a1.83 1.83 0 0 0 1.556-.89 1.784 1.784 0 0 0 0-1.775l-1.226-2.12",
            "m14 16-3 3 3 3",
            "M8.293 13.596 7.196 9.5 3.1 10.598",
            "m9.344 5.811 1.093-1.892A1.83 1.83 0 0 1 11.985 3a1.784 1.784 0 0 1 1.546.888l3.943 6.843",
            "m13.378 9.633 4.096 1.098 1.097-4.096",
        ],
        Icon::Search => &["M11 3a8 8 0 1 0 0 16a8 8 0 1 0 0-16z", "m21 21-4.3-4.3"],
        Icon::Star => &["M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"],
        Icon::TreePine => &[
            "m17 14 3 3.3a1 1 0 0 1-.7 1.7H4.7a1 1 0 0 1-.7-1.7L7 14h-.3a1 1 0 0 1-.7-1.7L9 9h-.2A1 1 0 0 1 8 7.3L12 3l4 4.3a1 1 0 0 1-.8 1.7H15l3 3.3a1 1 0 0 1-.7 1.7H17Z",
            "M12 22v-3",
        ],
        Icon::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
        Icon::Upload => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "m17 8-5-5-5 5", "M12 3v12"],
        Icon::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        Icon::XCircle => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "m15 9-6 6", "m9 9 6 6"],
    }
}

/// Decorative icon. Hidden from assistive technology; pair it with text.
#[component]
pub fn Glyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    let class = if class.is_empty() { "glyph".to_owned() } else { format!("glyph {class}") };
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_paths(icon).iter().map(|d| view! { <path d=*d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

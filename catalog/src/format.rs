//! Display formatting for fixture numbers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `5000` -> `"5,000"`.
#[must_use]
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `2450` -> `"$2,450"`.
#[must_use]
pub fn format_currency(dollars: u32) -> String {
    format!("${}", format_thousands(dollars))
}

/// `8415` -> `"$8.4k"`. Values under a thousand render in full. Tenths of a
/// thousand round half-up, so `1950` is `"$2k"` and `999_960` is `"$1,000k"`.
#[must_use]
pub fn format_compact_currency(dollars: u32) -> String {
    if dollars < 1_000 {
        return format_currency(dollars);
    }
    let tenths = dollars.saturating_add(50) / 100;
    let whole = format_thousands(tenths / 10);
    match tenths % 10 {
        0 => format!("${whole}k"),
        frac => format!("${whole}.{frac}k"),
    }
}

#[must_use]
pub fn format_percent(value: u8) -> String {
    format!("{value}%")
}

/// `5000, "units"` -> `"5,000 units"`.
#[must_use]
pub fn format_quantity(quantity: u32, unit: &str) -> String {
    format!("{} {unit}", format_thousands(quantity))
}

#[must_use]
pub fn format_distance(miles: u32) -> String {
    format!("{miles} miles")
}

#[must_use]
pub fn format_rating(rating: f32) -> String {
    format!("{rating:.1}")
}

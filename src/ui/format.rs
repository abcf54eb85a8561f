//! Display formatting for computed figures. Rounding happens here only.

pub const NOT_AVAILABLE: &str = "N/A";

/// Whole dollars with thousands separators, e.g. `$18,000` or `-$6,000`.
pub fn currency(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let sign = if value < 0.0 && rounded != "0" { "-" } else { "" };
    format!("{sign}${}", group_thousands(&rounded))
}

pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn ratio(value: f64) -> String {
    format!("{value:.2}")
}

pub fn or_na(value: Option<f64>, format: fn(f64) -> String) -> String {
    value.map(format).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Compact axis label: `$58k`, `$1.2M`.
pub fn compact_currency(value: f64) -> String {
    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if magnitude >= 1_000_000.0 {
        format!("{sign}${:.1}M", magnitude / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{sign}${:.0}k", magnitude / 1_000.0)
    } else {
        format!("{sign}${magnitude:.0}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

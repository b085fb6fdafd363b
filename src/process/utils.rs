use once_cell::sync::Lazy;
use regex::Regex;

/// Thousands separators, currency signs, percent signs and stray whitespace.
static NUMERIC_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,$€£¥₹%]").expect("numeric noise pattern"));

/// 1) Trim whitespace + strip one layer of matching outer quotes if present.
pub fn clean_str(raw: &str) -> String {
    let trimmed = raw.trim();
    let quoted = trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')));
    if quoted {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

/// 2) Coerce a formatted cell (`"$1,234.50"`, `"12%"`) into a finite number.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let stripped = NUMERIC_NOISE.replace_all(raw.trim(), "");
    if stripped.is_empty() {
        return None;
    }
    stripped.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn is_numeric(raw: &str) -> bool {
    coerce_number(raw).is_some()
}

/// Render a number with thousands separators and at most two decimals.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

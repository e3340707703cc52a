//! Value Formatting
//!
//! Pure helpers that turn raw figures into the strings shown on the
//! dashboard. Missing values render as an em-dash.

/// Placeholder shown for missing values
pub const MISSING: &str = "—";

const TRILLION: f64 = 1e12;
const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;

/// Format a USD amount, scaling to T/B/M above one million
///
/// Scaled values keep two decimals; smaller values are rounded to whole
/// dollars with thousands separators. The sign follows the `$`.
pub fn format_money(value: Option<f64>) -> String {
    let Some(x) = value else {
        return MISSING.to_string();
    };

    let abs = x.abs();
    if abs >= TRILLION {
        format!("${:.2}T", x / TRILLION)
    } else if abs >= BILLION {
        format!("${:.2}B", x / BILLION)
    } else if abs >= MILLION {
        format!("${:.2}M", x / MILLION)
    } else {
        format!("${}", group_digits(&format!("{:.0}", x)))
    }
}

/// Format a percentage with one decimal, e.g. `3.5%`
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(x) => format!("{:.1}%", x),
        None => MISSING.to_string(),
    }
}

/// Thousands-grouped integer, e.g. `214,300,000`
pub fn format_count(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Feasibility score out of 100, e.g. `72 / 100`
pub fn format_score(value: Option<f64>) -> String {
    match value {
        Some(x) => format!("{:.0} / 100", x),
        None => MISSING.to_string(),
    }
}

/// Insert `,` every three digits of an integer string, keeping a leading `-`
fn group_digits(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_units() {
        assert_eq!(format_money(None), "—");
        assert_eq!(format_money(Some(999.0)), "$999");
        assert_eq!(format_money(Some(1_500_000.0)), "$1.50M");
        assert_eq!(format_money(Some(2_300_000_000.0)), "$2.30B");
        assert_eq!(format_money(Some(4_100_000_000_000.0)), "$4.10T");
        assert_eq!(format_money(Some(1.92e12)), "$1.92T");
    }

    #[test]
    fn test_format_money_grouping() {
        assert_eq!(format_money(Some(0.0)), "$0");
        assert_eq!(format_money(Some(8917.0)), "$8,917");
        assert_eq!(format_money(Some(1234.4)), "$1,234");
        assert_eq!(format_money(Some(999_999.0)), "$999,999");
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(Some(-1.2e9)), "$-1.20B");
        assert_eq!(format_money(Some(-500.0)), "$-500");
        assert_eq!(format_money(Some(-12_345.0)), "$-12,345");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(None), "—");
        assert_eq!(format_percent(Some(3.456)), "3.5%");
        assert_eq!(format_percent(Some(0.0)), "0.0%");
        assert_eq!(format_percent(Some(-1.26)), "-1.3%");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(214_300_000), "214,300,000");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(None), "—");
        assert_eq!(format_score(Some(72.4)), "72 / 100");
    }
}

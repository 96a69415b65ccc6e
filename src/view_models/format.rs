/// Placeholder for values the payload did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Renders a ratio in [0, 1] as a percentage with one decimal.
///
/// The value is rounded to tenths of a percent first, so 0.1534 becomes
/// "15.3%". Non-finite input renders as the placeholder.
pub fn percent(ratio: f64) -> String {
    if !ratio.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let tenths = (ratio * 1000.0).round() / 10.0;
    format!("{tenths:.1}%")
}

/// Dollar amount with two decimals, e.g. "$50000.00".
pub fn money(value: f64) -> String {
    format!("${value:.2}")
}

pub fn fixed2(value: f64) -> String {
    format!("{value:.2}")
}

/// Thousands-grouped number with up to three decimals, e.g. "100,000" or
/// "1,234.5".
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }

    if value < 0.0 && out != "0" {
        format!("-{out}")
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounds_to_tenths() {
        assert_eq!(percent(0.1534), "15.3%");
        assert_eq!(percent(0.12), "12.0%");
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(percent(1.0), "100.0%");
    }

    #[test]
    fn test_percent_non_finite() {
        assert_eq!(percent(f64::NAN), "N/A");
        assert_eq!(percent(f64::INFINITY), "N/A");
    }

    #[test]
    fn test_money() {
        assert_eq!(money(50000.0), "$50000.00");
        assert_eq!(money(12.345), "$12.35");
    }

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(100000.0), "100,000");
        assert_eq!(grouped(999.0), "999");
        assert_eq!(grouped(1000.0), "1,000");
        assert_eq!(grouped(1234567.5), "1,234,567.5");
        assert_eq!(grouped(0.0), "0");
        assert_eq!(grouped(-52500.0), "-52,500");
        assert_eq!(grouped(18000.0), "18,000");
    }
}

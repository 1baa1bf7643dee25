//! Display helpers for amounts in the result view.

/// Groups the integer part with commas and keeps at most `max_fraction`
/// decimals, trimming trailing zeros: `1449.0 -> "1,449"`, `33.0578 -> "33.058"`.
pub fn grouped(value: f64, max_fraction: usize) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && fixed.chars().any(|ch| ch.is_ascii_digit() && ch != '0');
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Amount in 10k-yen units, e.g. `"1,449 万円"`.
pub fn man_yen(value: f64) -> String {
    format!("{} 万円", grouped(value, 3))
}

pub fn factor(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_trims_decimals() {
        assert_eq!(grouped(1449.0, 3), "1,449");
        assert_eq!(grouped(1234567.891, 3), "1,234,567.891");
        assert_eq!(grouped(33.0578, 3), "33.058");
        assert_eq!(grouped(999.0, 0), "999");
        assert_eq!(grouped(-1200.5, 1), "-1,200.5");
        assert_eq!(grouped(-0.0001, 2), "0");
        assert_eq!(grouped(f64::NAN, 2), "-");
    }

    #[test]
    fn unit_suffixes() {
        assert_eq!(man_yen(1260.0), "1,260 万円");
        assert_eq!(factor(1.05), "1.05");
        assert_eq!(factor(1.2), "1.20");
    }
}

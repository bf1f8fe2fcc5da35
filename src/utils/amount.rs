//! Amount formatting helpers.

/// Currency display with thousands separators, e.g. `¥1,234.50`.
pub fn format_amount(amount: f64) -> String {
    format!("¥{}", group_thousands(amount, 2))
}

/// Same as [`format_amount`] without the currency symbol.
pub fn format_amount_plain(amount: f64) -> String {
    group_thousands(amount, 2)
}

/// Compact display for tight layouts: `1.2k`, `3.4M`, otherwise whole units.
pub fn format_amount_compact(amount: f64) -> String {
    let value = amount.abs();
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

/// `value` as a percentage of `total`, one decimal place.
pub fn format_percent(value: f64, total: f64) -> String {
    if total == 0.0 {
        return "0%".to_owned();
    }
    format!("{:.1}%", value / total * 100.0)
}

fn group_thousands(amount: f64, decimals: usize) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.decimals$}", amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    for (index, digit) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_formatting_groups_thousands() {
        assert_eq!(format_amount(0.0), "¥0.00");
        assert_eq!(format_amount(12.3), "¥12.30");
        assert_eq!(format_amount(1234.5), "¥1,234.50");
        assert_eq!(format_amount(9876543.21), "¥9,876,543.21");
        assert_eq!(format_amount_plain(-1234.5), "-1,234.50");
    }

    #[test]
    fn compact_formatting_scales_units() {
        assert_eq!(format_amount_compact(950.0), "950");
        assert_eq!(format_amount_compact(1200.0), "1.2k");
        assert_eq!(format_amount_compact(-1200.0), "1.2k");
        assert_eq!(format_amount_compact(3_400_000.0), "3.4M");
    }

    #[test]
    fn percent_handles_zero_total() {
        assert_eq!(format_percent(25.0, 100.0), "25.0%");
        assert_eq!(format_percent(1.0, 3.0), "33.3%");
        assert_eq!(format_percent(5.0, 0.0), "0%");
    }
}

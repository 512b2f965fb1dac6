//! Display formatting for price data

/// Shortest round-trip digits, in the notation a price display expects
///
/// Whole values keep a trailing ".0" and magnitudes below 1e-4 or from 1e16
/// up switch to exponent form with a signed two-digit exponent ("1.234e-05").
pub fn float_repr(value: f64) -> String {
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m.to_owned(), e)))
    else {
        // inf and NaN have no exponent
        return value.to_string().to_lowercase();
    };

    if (-4..16).contains(&exponent) {
        let fixed = value.to_string();
        if fixed.contains('.') { fixed } else { format!("{}.0", fixed) }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// Two decimals with comma thousands separators ("1,280,000,000,000.00")
pub fn grouped_2dp(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Percentage with two decimals ("-1.23%")
pub fn percent_2dp(value: f64) -> String {
    format!("{:.2}%", value)
}

//! Number formatting for table cells and summary cards

/// Groups the integer part in threes with a space and keeps `decimals`
/// fraction digits (at most 3).
///
/// ```
/// # use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let decimals = decimals.min(3) as usize;
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    // "-0.00" reads oddly in a totals row
    let sign = if grouped.chars().all(|c| c == '0' || c == ' ')
        && fraction.map(|f| f.chars().all(|c| c == '0')).unwrap_or(true)
    {
        ""
    } else {
        sign
    };

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Две цифры после точки, пробел между тысячами: `1 234 567.89`
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

pub fn format_money_opt(value: Option<f64>) -> String {
    value.map(format_money).unwrap_or_else(|| "—".to_string())
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
        assert_eq!(format_money(-0.001), "0.00");
        assert_eq!(format_money(999.0), "999.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
        assert_eq!(format_number_with_decimals(1234.567, 9), "1 234.567");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1 234 567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1 234");
        assert_eq!(format_number_int(-123456.0), "-123 456");
    }

    #[test]
    fn test_format_money_opt() {
        assert_eq!(format_money_opt(None), "—");
        assert_eq!(format_money_opt(Some(12.5)), "12.50");
    }
}

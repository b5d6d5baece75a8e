//! Number formatting for the label
//!
//! Brazilian convention: decimal comma, fixed precision, and a bare "0" for zero.

/// Extra digits printed before rounding by hand; enough to resolve exact ties
/// for any value a label can hold.
const GUARD_DIGITS: usize = 25;

/// Placeholder printed for an unset portion size or count
pub const EMPTY_QUANTITY: &str = "000";

/// Fixed-point rendering with `.` separator, rounding half away from zero on
/// the exact binary value (so 0.25 -> "0.3" and 12.34 -> "12.3").
///
/// `format!("{:.1}")` rounds ties to even, which would print "0.2".
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let negative = value < 0.0;
    let exact = format!("{:.*}", decimals + GUARD_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();
    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|d| *d >= b'5');

    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let int_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|b| *b as char));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|b| *b as char));
    }
    out
}

/// Label number: "0" for zero, otherwise `decimals` digits with a comma
pub fn format_number(value: f64, decimals: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    to_fixed(value, decimals).replacen('.', ",", 1)
}

/// [`format_number`] with the label's default single decimal
pub fn format_number_default(value: f64) -> String {
    format_number(value, 1)
}

/// %VD column text
pub fn format_percent_dv(percent: i64) -> String {
    percent.to_string()
}

/// Portion size or count as typed, with a comma; "000" when unset
pub fn format_quantity(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return EMPTY_QUANTITY.to_string();
    }
    value.to_string().replacen('.', ",", 1)
}

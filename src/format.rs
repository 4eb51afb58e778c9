/// Number of significant digits used when converting a double to a string.
pub const PRECISION: i32 = 14;

/// Converts a double to a string using the default conversion of the reference renderer.
///
/// The value is rounded to `PRECISION` significant digits and trailing zeros are dropped, so
/// `5.0` renders as `5` and `0.36000000000000004` renders as `0.36`. Very large and very small
/// magnitudes switch to scientific notation with an upper case `E` and a signed, unpadded
/// exponent, e.g. `1.0E+20` and `-6.6852313902466E-6`.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-INF".to_string() } else { "INF".to_string() };
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };

    if value == 0.0 {
        return format!("{}0", sign);
    }
    let (digits, exponent) = significant_digits(value.abs());
    // position of the decimal point relative to the first digit, 0.d1d2d3... x 10^decpt
    let decpt = exponent + 1;
    let body = if decpt < -3 || decpt > PRECISION {
        scientific(&digits, exponent)
    } else if decpt <= 0 {
        format!("0.{}{}", "0".repeat((-decpt) as usize), digits)
    } else {
        positional(&digits, decpt as usize)
    };
    format!("{}{}", sign, body)
}

/// Returns the significant digits of a positive, finite, non-zero value rounded to `PRECISION`
/// digits with trailing zeros removed, and the base 10 exponent of the first digit.
fn significant_digits(value: f64) -> (String, i32) {
    // the exact rounding is delegated to the standard library's exponent formatting,
    // which produces "d.ddddddddddddde<exp>"
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    // finite values always have an 'e' followed by an integer exponent
    let idx = match sci.find('e') {
        Some(idx) => idx,
        None => panic!("No exponent in the formatted value {}", sci),
    };
    let (mantissa, exponent) = sci.split_at(idx);
    let exponent = match exponent[1..].parse::<i32>() {
        Ok(exponent) => exponent,
        Err(err) => panic!("Invalid exponent in the formatted value {}: {}", sci, err),
    };
    let mut digits = mantissa.replace('.', "");

    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }
    (digits, exponent)
}

fn scientific(digits: &str, exponent: i32) -> String {
    let (first, rest) = digits.split_at(1);
    let rest = if rest.is_empty() { "0" } else { rest };
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    format!("{}.{}E{}{}", first, rest, exp_sign, exponent.abs())
}

fn positional(digits: &str, decpt: usize) -> String {
    if digits.len() <= decpt {
        format!("{}{}", digits, "0".repeat(decpt - digits.len()))
    } else {
        format!("{}.{}", &digits[..decpt], &digits[decpt..])
    }
}

//--------------------------------------------------------------------------------------------------

//! US-locale currency formatting.

/// Fractional digits needed to print any `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Format a finite value as US dollars: `$1,234.50`, `-$0.75`.
///
/// Rounds to cents, half away from zero, on the exact binary value: `0.125`
/// becomes `$0.13` while `1.115` (stored just below) becomes `$1.11`.
/// Negative values (including negative zero) carry a leading minus sign
/// before the dollar sign.
#[must_use]
pub fn format_usd(value: f64) -> String {
    let (whole, cents) = round_cents(value.abs());
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(&whole))
}

/// Split a non-negative value into whole dollars and two cent digits.
fn round_cents(value: f64) -> (String, String) {
    let exact = format!("{value:.prec$}", prec = EXACT_FRACTION_DIGITS);
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let fraction = fraction.as_bytes();
    let digit = |i: usize| fraction.get(i).copied().unwrap_or(b'0');

    let mut digits: Vec<u8> = whole.bytes().chain([digit(0), digit(1)]).collect();
    if digit(2) >= b'5' {
        increment_decimal(&mut digits);
    }
    let cents = digits.split_off(digits.len() - 2);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&cents).into_owned(),
    )
}

/// Add one to an ASCII decimal digit string, growing it on carry-out.
fn increment_decimal(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Insert a comma between every group of three digits.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

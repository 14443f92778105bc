// Enough fractional digits to print any finite f64 exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Fixed-point rendering of `value` with `digits` decimals. Rounding works on
/// the exact decimal expansion and sends ties away from zero, so `0.125`
/// becomes `"0.13"` while `1.005` (stored as `1.00499...`) becomes `"1.00"`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    if fraction.as_bytes().get(digits).is_some_and(|digit| *digit >= b'5') {
        carry(&mut kept);
    }

    let split = kept.len() - digits;
    let mut rendered = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        rendered.push('-');
    }
    rendered.extend(kept[..split].iter().map(|&b| char::from(b)));
    if digits > 0 {
        rendered.push('.');
        rendered.extend(kept[split..].iter().map(|&b| char::from(b)));
    }
    rendered
}

fn carry(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

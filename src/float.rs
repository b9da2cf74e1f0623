//! Floating-point rendering.
//!
//! Decimal digit generation is delegated to the standard library's correctly
//! rounded `{:e}` / `{:.N}` / `{:.Ne}` formatting; this module reshapes that output
//! into the presentation types of the mini-language:
//!
//! | Type | Rendering | `123.4567` |
//! |------|-----------|------------|
//! | none | shortest round-trip, fixed or scientific, whichever is shorter | `123.4567` |
//! | none + precision | general, trailing zeros removed | `{:.3}` → `123` |
//! | `f` `F` | fixed, precision 6 | `123.456700` |
//! | `e` `E` | scientific, precision 6 | `1.234567e+02` |
//! | `g` `G` | general, precision 6 | `123.457` |
//! | `a` `A` | hexadecimal mantissa, binary exponent | `1.edd3a92a30553p+6` |

use crate::options::Locale;
use crate::render::{sign_str, write_padded};
use crate::sink::Sink;
use crate::spec::{Align, ResolvedSpec, TypeSpec};
use crate::{Error, Result};

/// A float argument; single precision keeps its own shortest representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Float {
    Single(f32),
    Double(f64),
}

impl Float {
    fn to_f64(self) -> f64 {
        match self {
            Float::Single(v) => f64::from(v),
            Float::Double(v) => v,
        }
    }
}

pub(crate) fn write_float<S: Sink + ?Sized>(
    out: &mut S,
    value: Float,
    spec: &ResolvedSpec,
    locale: &Locale,
) -> Result<()> {
    let upper = match spec.ty {
        None
        | Some(TypeSpec::Fixed)
        | Some(TypeSpec::Exponent)
        | Some(TypeSpec::General)
        | Some(TypeSpec::HexFloat) => false,
        Some(TypeSpec::FixedUpper)
        | Some(TypeSpec::ExponentUpper)
        | Some(TypeSpec::GeneralUpper)
        | Some(TypeSpec::HexFloatUpper) => true,
        Some(other) => {
            return Err(Error::type_error(
                "floating-point",
                &format!("invalid type '{}'", other.as_char()),
            ))
        }
    };

    let v = value.to_f64();
    let sign = sign_str(v.is_sign_negative(), spec.sign);

    if !v.is_finite() {
        let body = match (v.is_nan(), upper) {
            (true, false) => "nan",
            (true, true) => "NAN",
            (false, false) => "inf",
            (false, true) => "INF",
        };
        write_padded(out, sign, body, spec, Align::Right, false);
        return Ok(());
    }

    let abs = v.abs();
    let alternate = spec.alternate;
    let body = match (spec.ty, spec.precision) {
        (None, None) => shortest(value, alternate),
        (None, Some(precision)) => general(abs, precision, false, alternate),
        (Some(TypeSpec::Fixed | TypeSpec::FixedUpper), precision) => {
            fixed(abs, precision.unwrap_or(6), alternate)
        }
        (Some(TypeSpec::Exponent | TypeSpec::ExponentUpper), precision) => {
            exponent(abs, precision.unwrap_or(6), upper, alternate)
        }
        (Some(TypeSpec::General | TypeSpec::GeneralUpper), precision) => {
            general(abs, precision.unwrap_or(6), upper, alternate)
        }
        (Some(_), precision) => hexadecimal(abs, precision, upper, alternate),
    };

    let body = if spec.localized {
        localize(&body, locale)
    } else {
        body
    };

    write_padded(out, sign, &body, spec, Align::Right, true);
    Ok(())
}

/// Splits `"1.5e-3"` into `("1.5", -3)`.
fn split_exponent(s: &str) -> (&str, i32) {
    match s.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

fn push_exponent(out: &mut String, exp: i32, upper: bool) {
    out.push(if upper { 'E' } else { 'e' });
    out.push(if exp < 0 { '-' } else { '+' });
    out.push_str(&format!("{:02}", exp.unsigned_abs()));
}

/// Fractional digits an `f64` can carry; every digit past this is `0`.
///
/// Also caps the digits requested from `core::fmt`, whose precision is 16 bits.
const MAX_EXACT_DIGITS: usize = 1074;

fn push_zeros(out: &mut String, count: usize) {
    out.extend(std::iter::repeat('0').take(count));
}

fn fixed(abs: f64, precision: usize, alternate: bool) -> String {
    let exact = precision.min(MAX_EXACT_DIGITS);
    let mut s = format!("{:.*}", exact, abs);
    push_zeros(&mut s, precision - exact);
    if alternate && precision == 0 {
        s.push('.');
    }
    s
}

fn exponent(abs: f64, precision: usize, upper: bool, alternate: bool) -> String {
    let exact = precision.min(MAX_EXACT_DIGITS);
    let formatted = format!("{:.*e}", exact, abs);
    let (mantissa, exp) = split_exponent(&formatted);
    let mut s = String::with_capacity(precision + 8);
    s.push_str(mantissa);
    push_zeros(&mut s, precision - exact);
    if alternate && precision == 0 {
        s.push('.');
    }
    push_exponent(&mut s, exp, upper);
    s
}

/// `%g`: scientific when the exponent is below -4 or not below the precision.
fn general(abs: f64, precision: usize, upper: bool, alternate: bool) -> String {
    let precision = precision.max(1);
    let exp = if abs == 0.0 {
        0
    } else {
        let exact = (precision - 1).min(MAX_EXACT_DIGITS);
        split_exponent(&format!("{:.*e}", exact, abs)).1
    };

    let mut s = match i32::try_from(precision) {
        Ok(p) if exp >= -4 && exp < p => fixed(abs, (p - 1 - exp) as usize, alternate),
        _ => exponent(abs, precision - 1, upper, alternate),
    };
    if !alternate {
        strip_trailing_zeros(&mut s);
    }
    s
}

fn strip_trailing_zeros(s: &mut String) {
    let exp_at = s.find(|c: char| c == 'e' || c == 'E').unwrap_or(s.len());
    let (mantissa, exponent) = s.split_at(exp_at);
    if !mantissa.contains('.') {
        return;
    }
    let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.');
    *s = format!("{}{}", trimmed, exponent);
}

/// Shortest round-trip digits, laid out fixed or scientific, whichever is shorter.
fn shortest(value: Float, alternate: bool) -> String {
    let formatted = match value {
        Float::Single(v) => format!("{:e}", v.abs()),
        Float::Double(v) => format!("{:e}", v.abs()),
    };
    let (mantissa, exp) = split_exponent(&formatted);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut scientific = String::with_capacity(digits.len() + 6);
    scientific.push_str(&digits[..1]);
    if digits.len() > 1 {
        scientific.push('.');
        scientific.push_str(&digits[1..]);
    }
    push_exponent(&mut scientific, exp, false);

    let fixed = if exp >= 0 {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            format!("{}{}", digits, "0".repeat(int_len - digits.len()))
        } else {
            format!("{}.{}", &digits[..int_len], &digits[int_len..])
        }
    } else {
        format!("0.{}{}", "0".repeat(exp.unsigned_abs() as usize - 1), digits)
    };

    let mut s = if fixed.len() <= scientific.len() {
        fixed
    } else {
        scientific
    };
    if alternate && !s.contains('.') {
        match s.find('e') {
            Some(at) => s.insert(at, '.'),
            None => s.push('.'),
        }
    }
    s
}

/// `%a` without the `0x` prefix; shortest exact mantissa when no precision is given.
fn hexadecimal(abs: f64, precision: Option<usize>, upper: bool, alternate: bool) -> String {
    const MANTISSA_DIGITS: usize = 13;

    let bits = abs.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let mut mantissa = bits & ((1u64 << 52) - 1);
    let (mut lead, exp) = if abs == 0.0 {
        (0u64, 0)
    } else if biased == 0 {
        (0, -1022)
    } else {
        (1, biased - 1023)
    };

    let digits = match precision {
        None => format!("{:013x}", mantissa).trim_end_matches('0').to_string(),
        Some(p) if p >= MANTISSA_DIGITS => {
            format!("{:013x}{}", mantissa, "0".repeat(p - MANTISSA_DIGITS))
        }
        Some(p) => {
            let shift = (MANTISSA_DIGITS - p) * 4;
            let remainder = mantissa & ((1u64 << shift) - 1);
            let half = 1u64 << (shift - 1);
            mantissa >>= shift;

            let odd = if p == 0 { lead & 1 == 1 } else { mantissa & 1 == 1 };
            if remainder > half || (remainder == half && odd) {
                mantissa += 1;
            }

            if p == 0 {
                lead += mantissa;
                String::new()
            } else {
                if mantissa >> (p * 4) != 0 {
                    lead += 1;
                    mantissa &= (1u64 << (p * 4)) - 1;
                }
                format!("{:0width$x}", mantissa, width = p)
            }
        }
    };

    let mut s = lead.to_string();
    if !digits.is_empty() || alternate {
        s.push('.');
    }
    s.push_str(&digits);
    s.push('p');
    s.push(if exp < 0 { '-' } else { '+' });
    s.push_str(&exp.unsigned_abs().to_string());

    if upper {
        s.make_ascii_uppercase();
    }
    s
}

/// Groups the integer digits and swaps in the locale's decimal point.
fn localize(body: &str, locale: &Locale) -> String {
    let int_end = body
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(body.len());
    let mut s = locale.group_digits(&body[..int_end]);
    let rest = &body[int_end..];
    match rest.strip_prefix('.') {
        Some(fraction) => {
            s.push(locale.decimal_point);
            s.push_str(fraction);
        }
        None => s.push_str(rest),
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest() {
        assert_eq!(shortest(Float::Double(0.0), false), "0");
        assert_eq!(shortest(Float::Double(123.4567), false), "123.4567");
        assert_eq!(shortest(Float::Double(34567.0), false), "34567");
        assert_eq!(shortest(Float::Double(1e20), false), "1e+20");
        assert_eq!(shortest(Float::Double(0.001), false), "0.001");
        assert_eq!(shortest(Float::Double(0.00001), false), "1e-05");
        assert_eq!(shortest(Float::Double(1.5e300), false), "1.5e+300");
        assert_eq!(shortest(Float::Single(1.234), false), "1.234");
    }

    #[test]
    fn test_shortest_alternate() {
        assert_eq!(shortest(Float::Double(0.0), true), "0.");
        assert_eq!(shortest(Float::Double(34567.0), true), "34567.");
        assert_eq!(shortest(Float::Double(1e20), true), "1.e+20");
        assert_eq!(shortest(Float::Double(2.5), true), "2.5");
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(0.0, 6, false), "0.000000");
        assert_eq!(fixed(123.4567, 3, false), "123.457");
        assert_eq!(fixed(1e20, 6, false), "100000000000000000000.000000");
        assert_eq!(fixed(2.0, 0, false), "2");
        assert_eq!(fixed(2.0, 0, true), "2.");
    }

    #[test]
    fn test_exponent() {
        assert_eq!(exponent(0.0, 6, false, false), "0.000000e+00");
        assert_eq!(exponent(123.4567, 6, false, false), "1.234567e+02");
        assert_eq!(exponent(34567.0, 3, true, false), "3.457E+04");
        assert_eq!(exponent(1e-300, 1, false, false), "1.0e-300");
        assert_eq!(exponent(5.0, 0, false, true), "5.e+00");
    }

    #[test]
    fn test_general() {
        assert_eq!(general(0.0, 6, false, false), "0");
        assert_eq!(general(123.4567, 6, false, false), "123.457");
        assert_eq!(general(34567.0, 6, false, false), "34567");
        assert_eq!(general(1e10, 6, false, false), "1e+10");
        assert_eq!(general(0.0001, 6, false, false), "0.0001");
        assert_eq!(general(0.00001, 6, true, false), "1E-05");
        assert_eq!(general(34567.0, 3, false, false), "3.46e+04");
        assert_eq!(general(123.4567, 0, false, false), "1e+02");
    }

    #[test]
    fn test_general_alternate() {
        assert_eq!(general(0.0, 6, false, true), "0.00000");
        assert_eq!(general(34567.0, 6, false, true), "34567.0");
        assert_eq!(general(1e20, 6, false, true), "1.00000e+20");
        assert_eq!(general(123.4567, 3, false, true), "123.");
    }

    #[test]
    fn test_precision_past_exact_digits() {
        let s = fixed(1.0, 70_000, false);
        assert_eq!(s.len(), 70_002);
        assert!(s[2..].bytes().all(|b| b == b'0'));

        let tiny = fixed(f64::from_bits(1), 1100, false);
        assert!(tiny[2..1076].trim_start_matches('0').starts_with("4940656458"));
        assert_eq!(&tiny[1075..1076], "5");
        assert!(tiny[1076..].bytes().all(|b| b == b'0'));

        let e = exponent(0.1, 70_000, false, false);
        assert!(e.starts_with("1.000000000000000055511151231257827"));
        assert!(e.ends_with("0e-01"));
        assert_eq!(e.len(), 70_006);

        assert_eq!(general(2.5, 70_000, false, false), "2.5");
        let alt = general(2.5, 70_000, false, true);
        assert_eq!(alt.len(), 70_001);
        assert!(alt.starts_with("2.5000"));
    }

    #[test]
    fn test_hexadecimal() {
        assert_eq!(hexadecimal(0.0, None, false, false), "0p+0");
        assert_eq!(hexadecimal(1.0, None, false, false), "1p+0");
        assert_eq!(hexadecimal(0.5, None, false, false), "1p-1");
        assert_eq!(hexadecimal(34567.0, None, false, false), "1.0e0ep+15");
        assert_eq!(hexadecimal(34567.0, None, true, false), "1.0E0EP+15");
        assert_eq!(hexadecimal(1.0, None, false, true), "1.p+0");
        assert_eq!(hexadecimal(1.0, Some(3), false, false), "1.000p+0");
        assert_eq!(hexadecimal(f64::MIN_POSITIVE / 2.0, None, false, false), "0.8p-1022");
    }

    #[test]
    fn test_hexadecimal_rounding() {
        // 1.5 = 0x1.8p+0: ties to even on the leading digit.
        assert_eq!(hexadecimal(1.5, Some(0), false, false), "2p+0");
        assert_eq!(hexadecimal(1.25, Some(0), false, false), "1p+0");
        // 0x1.ffp+0 rounds up and carries into the leading digit.
        assert_eq!(hexadecimal(1.99609375, Some(1), false, false), "2.0p+0");
        assert_eq!(hexadecimal(1.0 + 3.0 / 256.0, Some(1), false, false), "1.0p+0");
    }

    #[test]
    fn test_localize() {
        let de = Locale::de_de();
        assert_eq!(localize("1234567.125", &de), "1.234.567,125");
        assert_eq!(localize("1.50", &de), "1,50");
        assert_eq!(localize("1.5e+20", &de), "1,5e+20");
        assert_eq!(localize("42", &Locale::en_us()), "42");
        assert_eq!(localize("1000.5", &Locale::classic()), "1000.5");
    }
}

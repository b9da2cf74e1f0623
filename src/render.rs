//! Field rendering.
//!
//! This module interprets a [`ResolvedSpec`] for each argument category and writes
//! the padded result to a [`Sink`]. Floating-point values are delegated to
//! [`crate::float`].
//!
//! Every category produces a *prefix* (sign and base prefix) and a *body* (digits or
//! text). Padding then either goes around both, according to the alignment, or, for
//! zero padding, between them:
//!
//! ```text
//! {:>+8x}   of 255  ->  "   +ff"  fill | prefix | body
//! {:+#08x}  of 255  ->  "+0x000ff" prefix | zeros | body
//! ```

use crate::args::Resolver;
use crate::float::{self, Float};
use crate::options::Locale;
use crate::parse::Segment;
use crate::sink::Sink;
use crate::spec::{Align, ResolvedSpec, Sign, TypeSpec};
use crate::{Arg, Error, Result};
use num_bigint::{BigInt, Sign as BigSign};

/// Writes one segment, resolving its argument and dynamic counts.
pub(crate) fn write_segment<S: Sink + ?Sized>(
    out: &mut S,
    segment: &Segment<'_>,
    resolver: &mut Resolver<'_, '_>,
    locale: &Locale,
) -> Result<()> {
    match segment {
        Segment::Literal(text) => {
            out.write_str(text);
            Ok(())
        }
        Segment::Field(field) => {
            let arg = resolver.resolve(&field.arg)?;
            let spec = field.spec.resolve(resolver)?;
            write_arg(out, arg, &spec, locale)
        }
    }
}

/// Renders a single argument under a resolved spec.
pub(crate) fn write_arg<S: Sink + ?Sized>(
    out: &mut S,
    arg: &Arg<'_>,
    spec: &ResolvedSpec,
    locale: &Locale,
) -> Result<()> {
    match *arg {
        Arg::Bool(v) => write_bool(out, v, spec, locale),
        Arg::Int(v) => write_integer(out, v < 0, v.unsigned_abs(), spec, locale),
        Arg::UInt(v) => write_integer(out, false, v, spec, locale),
        Arg::BigInt(v) => write_big_integer(out, v, spec, locale),
        Arg::F32(v) => float::write_float(out, Float::Single(v), spec, locale),
        Arg::F64(v) => float::write_float(out, Float::Double(v), spec, locale),
        Arg::Char(v) => write_char(out, v, spec, locale),
        Arg::Str(v) => write_string(out, v, spec),
        Arg::Pointer(v) => write_pointer(out, v, spec),
        Arg::Custom(v) => {
            let mut body = String::new();
            v.format(spec, &mut body)?;
            write_padded(out, "", &body, spec, Align::Left, false);
            Ok(())
        }
    }
}

pub(crate) fn sign_str(negative: bool, sign: Sign) -> &'static str {
    match (negative, sign) {
        (true, _) => "-",
        (false, Sign::Plus) => "+",
        (false, Sign::Space) => " ",
        (false, Sign::Default | Sign::Minus) => "",
    }
}

/// Pads `prefix + body` to the spec's width.
///
/// With `numeric` set, the zero flag (when no alignment is given) inserts `0`s
/// between prefix and body instead of using the fill character.
pub(crate) fn write_padded<S: Sink + ?Sized>(
    out: &mut S,
    prefix: &str,
    body: &str,
    spec: &ResolvedSpec,
    default_align: Align,
    numeric: bool,
) {
    let len = prefix.chars().count() + body.chars().count();
    let padding = spec.width.saturating_sub(len);
    if padding == 0 {
        out.write_str(prefix);
        out.write_str(body);
        return;
    }

    if numeric && spec.zero_pad && spec.align.is_none() {
        out.write_str(prefix);
        write_fill(out, '0', padding);
        out.write_str(body);
        return;
    }

    let (before, after) = match spec.align.unwrap_or(default_align) {
        Align::Left => (0, padding),
        Align::Right => (padding, 0),
        Align::Center => (padding / 2, padding - padding / 2),
    };
    write_fill(out, spec.fill, before);
    out.write_str(prefix);
    out.write_str(body);
    write_fill(out, spec.fill, after);
}

fn write_fill<S: Sink + ?Sized>(out: &mut S, fill: char, count: usize) {
    for _ in 0..count {
        out.write_char(fill);
    }
}

fn reject_precision(spec: &ResolvedSpec, category: &'static str) -> Result<()> {
    if spec.precision.is_some() {
        return Err(Error::type_error(category, "precision is not allowed"));
    }
    Ok(())
}

/// Sign, `#`, and `0` only apply to numeric renderings.
fn reject_numeric_flags(spec: &ResolvedSpec, category: &'static str) -> Result<()> {
    if spec.sign != Sign::Default {
        return Err(Error::type_error(category, "sign is not allowed"));
    }
    if spec.alternate {
        return Err(Error::type_error(category, "alternate form '#' is not allowed"));
    }
    if spec.zero_pad {
        return Err(Error::type_error(category, "zero padding is not allowed"));
    }
    Ok(())
}

fn invalid_type(category: &'static str, ty: TypeSpec) -> Error {
    Error::type_error(category, &format!("invalid type '{}'", ty.as_char()))
}

fn write_text<S: Sink + ?Sized>(
    out: &mut S,
    text: &str,
    spec: &ResolvedSpec,
    category: &'static str,
) -> Result<()> {
    reject_numeric_flags(spec, category)?;
    write_padded(out, "", text, spec, Align::Left, false);
    Ok(())
}

fn write_char_text<S: Sink + ?Sized>(
    out: &mut S,
    c: char,
    spec: &ResolvedSpec,
    category: &'static str,
) -> Result<()> {
    reject_precision(spec, category)?;
    let mut buf = [0u8; 4];
    write_text(out, c.encode_utf8(&mut buf), spec, category)
}

fn write_bool<S: Sink + ?Sized>(
    out: &mut S,
    v: bool,
    spec: &ResolvedSpec,
    locale: &Locale,
) -> Result<()> {
    match spec.ty {
        None | Some(TypeSpec::String) => {
            reject_precision(spec, "bool")?;
            write_text(out, if v { "true" } else { "false" }, spec, "bool")
        }
        Some(TypeSpec::Char) => {
            write_char_text(out, if v { '\u{1}' } else { '\0' }, spec, "bool")
        }
        Some(ty) if ty.is_integer() => write_integer(out, false, u128::from(v), spec, locale),
        Some(ty) => Err(invalid_type("bool", ty)),
    }
}

fn write_char<S: Sink + ?Sized>(
    out: &mut S,
    v: char,
    spec: &ResolvedSpec,
    locale: &Locale,
) -> Result<()> {
    match spec.ty {
        None | Some(TypeSpec::Char) => write_char_text(out, v, spec, "char"),
        Some(ty) if ty.is_integer() => write_integer(out, false, u128::from(v), spec, locale),
        Some(ty) => Err(invalid_type("char", ty)),
    }
}

fn write_string<S: Sink + ?Sized>(out: &mut S, v: &str, spec: &ResolvedSpec) -> Result<()> {
    match spec.ty {
        None | Some(TypeSpec::String) => {
            let text = match spec.precision.and_then(|p| v.char_indices().nth(p)) {
                Some((end, _)) => &v[..end],
                None => v,
            };
            write_text(out, text, spec, "string")
        }
        Some(ty) => Err(invalid_type("string", ty)),
    }
}

fn write_pointer<S: Sink + ?Sized>(out: &mut S, address: usize, spec: &ResolvedSpec) -> Result<()> {
    match spec.ty {
        None | Some(TypeSpec::Pointer) => {
            reject_precision(spec, "pointer")?;
            if spec.sign != Sign::Default {
                return Err(Error::type_error("pointer", "sign is not allowed"));
            }
            if spec.alternate {
                return Err(Error::type_error("pointer", "alternate form '#' is not allowed"));
            }
            write_padded(out, "0x", &format!("{:x}", address), spec, Align::Right, true);
            Ok(())
        }
        Some(ty) => Err(invalid_type("pointer", ty)),
    }
}

/// Radix and alternate-form prefix of an integer presentation.
fn integer_radix(ty: Option<TypeSpec>, category: &'static str) -> Result<(u32, &'static str)> {
    match ty {
        None | Some(TypeSpec::Decimal) => Ok((10, "")),
        Some(TypeSpec::Binary) => Ok((2, "0b")),
        Some(TypeSpec::BinaryUpper) => Ok((2, "0B")),
        Some(TypeSpec::Octal) => Ok((8, "0")),
        Some(TypeSpec::Hex) => Ok((16, "0x")),
        Some(TypeSpec::HexUpper) => Ok((16, "0X")),
        Some(ty) => Err(invalid_type(category, ty)),
    }
}

fn write_integer<S: Sink + ?Sized>(
    out: &mut S,
    negative: bool,
    magnitude: u128,
    spec: &ResolvedSpec,
    locale: &Locale,
) -> Result<()> {
    reject_precision(spec, "integer")?;

    if spec.ty == Some(TypeSpec::Char) {
        let c = u32::try_from(magnitude)
            .ok()
            .filter(|_| !negative)
            .and_then(char::from_u32)
            .ok_or_else(|| {
                Error::type_error("integer", "value is out of range for a character")
            })?;
        return write_char_text(out, c, spec, "integer");
    }

    let (radix, _) = integer_radix(spec.ty, "integer")?;
    let digits = match (radix, spec.ty) {
        (2, _) => format!("{:b}", magnitude),
        (8, _) => format!("{:o}", magnitude),
        (16, Some(TypeSpec::HexUpper)) => format!("{:X}", magnitude),
        (16, _) => format!("{:x}", magnitude),
        _ => magnitude.to_string(),
    };
    write_digits(out, negative, digits, spec, locale)
}

fn write_big_integer<S: Sink + ?Sized>(
    out: &mut S,
    v: &BigInt,
    spec: &ResolvedSpec,
    locale: &Locale,
) -> Result<()> {
    reject_precision(spec, "integer")?;

    if spec.ty == Some(TypeSpec::Char) {
        let c = u32::try_from(v)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| {
                Error::type_error("integer", "value is out of range for a character")
            })?;
        return write_char_text(out, c, spec, "integer");
    }

    let (radix, _) = integer_radix(spec.ty, "integer")?;
    let mut digits = v.magnitude().to_str_radix(radix);
    if spec.ty == Some(TypeSpec::HexUpper) {
        digits.make_ascii_uppercase();
    }
    write_digits(out, v.sign() == BigSign::Minus, digits, spec, locale)
}

/// Shared tail of integer rendering: sign, base prefix, grouping, padding.
fn write_digits<S: Sink + ?Sized>(
    out: &mut S,
    negative: bool,
    digits: String,
    spec: &ResolvedSpec,
    locale: &Locale,
) -> Result<()> {
    let (radix, base_prefix) = integer_radix(spec.ty, "integer")?;

    let mut prefix = String::from(sign_str(negative, spec.sign));
    if spec.alternate && !(radix == 8 && digits == "0") {
        prefix.push_str(base_prefix);
    }

    let digits = if spec.localized && radix == 10 {
        locale.group_digits(&digits)
    } else {
        digits
    };

    write_padded(out, &prefix, &digits, spec, Align::Right, true);
    Ok(())
}

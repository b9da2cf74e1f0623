//! Format spec mini-language.
//!
//! This module documents and implements the part of a replacement field after the
//! `:`.
//!
//! # Grammar
//!
//! ```text
//! field       ::= '{' [arg_ref] [':' format_spec] '}'
//! arg_ref     ::= integer | identifier
//! format_spec ::= [[fill] align] [sign] ['#'] ['0'] [width] ['.' precision] ['L'] [type]
//! fill        ::= <any character other than '{' or '}'>
//! align       ::= '<' | '>' | '^'
//! sign        ::= '+' | '-' | ' '
//! width       ::= integer | '{' [arg_ref] '}'
//! precision   ::= integer | '{' [arg_ref] '}'
//! type        ::= 's' | 'c' | 'b' | 'B' | 'd' | 'o' | 'x' | 'X'
//!               | 'f' | 'F' | 'e' | 'E' | 'g' | 'G' | 'a' | 'A' | 'p'
//! ```
//!
//! Literal braces outside fields are written `{{` and `}}`.
//!
//! # Fill and Alignment
//!
//! | Align | Meaning | Example (`width=10`) |
//! |-------|---------|----------------------|
//! | `<` | pad on the right | `{:*<10}` → `left******` |
//! | `>` | pad on the left | `{:*>10}` → `*****right` |
//! | `^` | split, extra fill on the right | `{:*^10}` → `**centre**` |
//!
//! Without an explicit alignment, strings, characters, textual booleans and custom
//! values align left; numbers and pointers align right. Width counts `char`s.
//!
//! # Sign, Alternate Form, Zero Padding
//!
//! - `+` shows a sign for non-negative numbers too, ` ` uses a space, `-` (the
//!   default) only marks negatives
//! - `#` adds `0b`, `0B`, `0`, `0x`, `0X` prefixes to integers and forces a decimal
//!   point for floats
//! - `0` pads with zeros between the sign/prefix and the digits: `{:+06}` of 5 is
//!   `+00005`. It is ignored when an alignment is given, and non-finite floats are
//!   padded with spaces instead
//!
//! # Presentation Types
//!
//! | Category | Types |
//! |----------|-------|
//! | integer | `b B c d o x X` |
//! | floating-point | `a A e E f F g G` |
//! | bool | `s b B c d o x X` |
//! | char | `c b B d o x X` |
//! | string | `s` |
//! | pointer | `p` |
//!
//! # Dynamic Width and Precision
//!
//! `{:{}.{}f}` takes the width and precision from the arguments following the value;
//! `{0:{1}.{2}f}` and `{:{w}}` name them explicitly. Dynamic values must be
//! non-negative integers.
//!
//! Literal and dynamic counts are both capped at [`MAX_COUNT`]. A larger literal is a
//! syntax error, a larger dynamic value is a type error.

use crate::args::Resolver;
use crate::parse::{Cursor, IndexTracker};
use crate::{ArgRef, Error, Result};

/// Largest accepted width or precision.
pub const MAX_COUNT: usize = 1 << 20;

/// Field alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            _ => None,
        }
    }
}

/// Sign policy for numeric fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Sign {
    /// No sign flag given (same output as `Minus`)
    #[default]
    Default,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// ` `
    Space,
}

/// Width or precision: a literal or a reference to another argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Count<'a> {
    Literal(usize),
    Arg(ArgRef<'a>),
}

/// Presentation type letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeSpec {
    String,
    Char,
    Binary,
    BinaryUpper,
    Decimal,
    Octal,
    Hex,
    HexUpper,
    HexFloat,
    HexFloatUpper,
    Exponent,
    ExponentUpper,
    Fixed,
    FixedUpper,
    General,
    GeneralUpper,
    Pointer,
}

impl TypeSpec {
    fn from_char(c: char) -> Option<Self> {
        let ty = match c {
            's' => TypeSpec::String,
            'c' => TypeSpec::Char,
            'b' => TypeSpec::Binary,
            'B' => TypeSpec::BinaryUpper,
            'd' => TypeSpec::Decimal,
            'o' => TypeSpec::Octal,
            'x' => TypeSpec::Hex,
            'X' => TypeSpec::HexUpper,
            'a' => TypeSpec::HexFloat,
            'A' => TypeSpec::HexFloatUpper,
            'e' => TypeSpec::Exponent,
            'E' => TypeSpec::ExponentUpper,
            'f' => TypeSpec::Fixed,
            'F' => TypeSpec::FixedUpper,
            'g' => TypeSpec::General,
            'G' => TypeSpec::GeneralUpper,
            'p' => TypeSpec::Pointer,
            _ => return None,
        };
        Some(ty)
    }

    /// The letter this type is written as.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            TypeSpec::String => 's',
            TypeSpec::Char => 'c',
            TypeSpec::Binary => 'b',
            TypeSpec::BinaryUpper => 'B',
            TypeSpec::Decimal => 'd',
            TypeSpec::Octal => 'o',
            TypeSpec::Hex => 'x',
            TypeSpec::HexUpper => 'X',
            TypeSpec::HexFloat => 'a',
            TypeSpec::HexFloatUpper => 'A',
            TypeSpec::Exponent => 'e',
            TypeSpec::ExponentUpper => 'E',
            TypeSpec::Fixed => 'f',
            TypeSpec::FixedUpper => 'F',
            TypeSpec::General => 'g',
            TypeSpec::GeneralUpper => 'G',
            TypeSpec::Pointer => 'p',
        }
    }

    /// Whether this is one of the integer presentations `b B d o x X`.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            TypeSpec::Binary
                | TypeSpec::BinaryUpper
                | TypeSpec::Decimal
                | TypeSpec::Octal
                | TypeSpec::Hex
                | TypeSpec::HexUpper
        )
    }
}

/// A parsed format spec; width and precision may still refer to arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatSpec<'a> {
    pub fill: char,
    pub align: Option<Align>,
    pub sign: Sign,
    pub alternate: bool,
    pub zero_pad: bool,
    pub width: Option<Count<'a>>,
    pub precision: Option<Count<'a>>,
    pub localized: bool,
    pub ty: Option<TypeSpec>,
}

impl Default for FormatSpec<'_> {
    fn default() -> Self {
        FormatSpec {
            fill: ' ',
            align: None,
            sign: Sign::Default,
            alternate: false,
            zero_pad: false,
            width: None,
            precision: None,
            localized: false,
            ty: None,
        }
    }
}

/// A format spec with width and precision resolved against the arguments.
///
/// This is what renderers, including [`CustomFormat`](crate::CustomFormat)
/// implementations, receive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedSpec {
    pub fill: char,
    pub align: Option<Align>,
    pub sign: Sign,
    pub alternate: bool,
    pub zero_pad: bool,
    /// `0` when no width was given.
    pub width: usize,
    pub precision: Option<usize>,
    pub localized: bool,
    pub ty: Option<TypeSpec>,
}

impl Default for ResolvedSpec {
    fn default() -> Self {
        ResolvedSpec {
            fill: ' ',
            align: None,
            sign: Sign::Default,
            alternate: false,
            zero_pad: false,
            width: 0,
            precision: None,
            localized: false,
            ty: None,
        }
    }
}

impl FormatSpec<'_> {
    /// Resolves dynamic width, then dynamic precision.
    pub(crate) fn resolve(&self, resolver: &mut Resolver<'_, '_>) -> Result<ResolvedSpec> {
        let width = match self.width {
            Some(count) => resolve_count(count, resolver, "width")?,
            None => 0,
        };
        let precision = match self.precision {
            Some(count) => Some(resolve_count(count, resolver, "precision")?),
            None => None,
        };

        Ok(ResolvedSpec {
            fill: self.fill,
            align: self.align,
            sign: self.sign,
            alternate: self.alternate,
            zero_pad: self.zero_pad,
            width,
            precision,
            localized: self.localized,
            ty: self.ty,
        })
    }
}

fn resolve_count(
    count: Count<'_>,
    resolver: &mut Resolver<'_, '_>,
    what: &str,
) -> Result<usize> {
    match count {
        Count::Literal(n) => Ok(n),
        Count::Arg(arg_ref) => {
            let arg = resolver.resolve(&arg_ref)?;
            match arg.as_count() {
                Some(n) if n <= MAX_COUNT => Ok(n),
                Some(_) => Err(Error::type_error(
                    arg.category(),
                    &format!("dynamic {} exceeds {}", what, MAX_COUNT),
                )),
                None => Err(Error::type_error(
                    arg.category(),
                    &format!("dynamic {} must be a non-negative integer", what),
                )),
            }
        }
    }
}

/// Parses a format spec starting right after the `:`, stopping before the closing `}`.
pub(crate) fn parse_spec<'a>(
    cursor: &mut Cursor<'a>,
    tracker: &mut IndexTracker,
) -> Result<FormatSpec<'a>> {
    let mut spec = FormatSpec::default();

    match (cursor.peek(), cursor.peek_second().and_then(Align::from_char)) {
        (Some('{'), Some(_)) => {
            return Err(Error::syntax(
                cursor.position(),
                "invalid fill character '{'",
            ));
        }
        (Some(fill), Some(align)) if fill != '}' => {
            spec.fill = fill;
            spec.align = Some(align);
            cursor.bump();
            cursor.bump();
        }
        (Some(c), _) => {
            if let Some(align) = Align::from_char(c) {
                spec.align = Some(align);
                cursor.bump();
            }
        }
        (None, _) => return Ok(spec),
    }

    spec.sign = match cursor.peek() {
        Some('+') => Sign::Plus,
        Some('-') => Sign::Minus,
        Some(' ') => Sign::Space,
        _ => Sign::Default,
    };
    if spec.sign != Sign::Default {
        cursor.bump();
    }

    spec.alternate = cursor.eat('#');
    spec.zero_pad = cursor.eat('0');
    spec.width = parse_count(cursor, tracker)?;

    if cursor.eat('.') {
        let position = cursor.position();
        spec.precision = parse_count(cursor, tracker)?;
        if spec.precision.is_none() {
            return Err(Error::syntax(position, "missing precision after '.'"));
        }
    }

    spec.localized = cursor.eat('L');

    if let Some(c) = cursor.peek().filter(|&c| c != '}') {
        let ty = TypeSpec::from_char(c).ok_or_else(|| {
            Error::syntax(
                cursor.position(),
                &format!("invalid type specifier '{}'", c),
            )
        })?;
        spec.ty = Some(ty);
        cursor.bump();
    }

    Ok(spec)
}

fn parse_count<'a>(
    cursor: &mut Cursor<'a>,
    tracker: &mut IndexTracker,
) -> Result<Option<Count<'a>>> {
    let start = cursor.position();
    if let Some(n) = cursor.parse_integer()? {
        if n > MAX_COUNT {
            return Err(Error::syntax(start, "number is too big"));
        }
        return Ok(Some(Count::Literal(n)));
    }

    if !cursor.eat('{') {
        return Ok(None);
    }

    let position = cursor.position();
    let arg_ref = cursor.parse_arg_ref()?;
    tracker.observe(&arg_ref, position)?;
    if !cursor.eat('}') {
        return Err(Error::syntax(
            cursor.position(),
            "expected '}' after dynamic width or precision",
        ));
    }
    Ok(Some(Count::Arg(arg_ref)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn spec(text: &str) -> Result<FormatSpec<'_>> {
        let mut cursor = Cursor::new(text);
        let mut tracker = IndexTracker::default();
        let spec = parse_spec(&mut cursor, &mut tracker)?;
        assert!(cursor.at_end(), "unparsed input in {:?}", text);
        Ok(spec)
    }

    #[test]
    fn test_empty_spec() {
        assert_eq!(spec("").unwrap(), FormatSpec::default());
    }

    #[test]
    fn test_fill_and_align() {
        let s = spec("*^10").unwrap();
        assert_eq!((s.fill, s.align), ('*', Some(Align::Center)));
        assert_eq!(s.width, Some(Count::Literal(10)));

        let s = spec("<").unwrap();
        assert_eq!((s.fill, s.align), (' ', Some(Align::Left)));

        // A fill that is itself an align character.
        let s = spec("<>").unwrap();
        assert_eq!((s.fill, s.align), ('<', Some(Align::Right)));

        let s = spec("é^5").unwrap();
        assert_eq!((s.fill, s.align), ('é', Some(Align::Center)));
    }

    #[test]
    fn test_invalid_fill() {
        let err = spec("{<5").unwrap_err();
        assert_eq!(err, Error::syntax(0, "invalid fill character '{'"));
    }

    #[test]
    fn test_sign_alt_zero() {
        let s = spec("+#010x").unwrap();
        assert_eq!(s.sign, Sign::Plus);
        assert!(s.alternate);
        assert!(s.zero_pad);
        assert_eq!(s.width, Some(Count::Literal(10)));
        assert_eq!(s.ty, Some(TypeSpec::Hex));

        assert_eq!(spec(" ").unwrap().sign, Sign::Space);
        assert_eq!(spec("-").unwrap().sign, Sign::Minus);
    }

    #[test]
    fn test_zero_flag_without_width() {
        let s = spec("0").unwrap();
        assert!(s.zero_pad);
        assert_eq!(s.width, None);
    }

    #[test]
    fn test_precision_and_locale() {
        let s = spec(".2Lf").unwrap();
        assert_eq!(s.precision, Some(Count::Literal(2)));
        assert!(s.localized);
        assert_eq!(s.ty, Some(TypeSpec::Fixed));

        let err = spec(".f").unwrap_err();
        assert_eq!(err, Error::syntax(1, "missing precision after '.'"));
    }

    #[test]
    fn test_dynamic_counts() {
        let s = spec("{}.{}f").unwrap();
        assert_eq!(s.width, Some(Count::Arg(ArgRef::Auto)));
        assert_eq!(s.precision, Some(Count::Arg(ArgRef::Auto)));

        let s = spec("{1}.{prec}").unwrap();
        assert_eq!(s.width, Some(Count::Arg(ArgRef::Index(1))));
        assert_eq!(s.precision, Some(Count::Arg(ArgRef::Name("prec"))));

        assert_eq!(spec("{x").unwrap_err().kind(), ErrorKind::Syntax);
    }

    #[test]
    fn test_count_limit() {
        let s = spec("1048576.1048576").unwrap();
        assert_eq!(s.width, Some(Count::Literal(MAX_COUNT)));
        assert_eq!(s.precision, Some(Count::Literal(MAX_COUNT)));

        assert_eq!(spec("1048577").unwrap_err(), Error::syntax(0, "number is too big"));
        assert_eq!(spec(">.1048577").unwrap_err(), Error::syntax(2, "number is too big"));
        assert_eq!(
            spec("18446744073709551615").unwrap_err(),
            Error::syntax(0, "number is too big")
        );
    }

    #[test]
    fn test_every_type_letter() {
        for c in "scbBdoxXaAeEfFgGp".chars() {
            let text = c.to_string();
            let s = spec(&text).unwrap();
            assert_eq!(s.ty.map(TypeSpec::as_char), Some(c));
        }
        assert_eq!(spec("q").unwrap_err(), Error::syntax(0, "invalid type specifier 'q'"));
    }
}

//! Template parsing.
//!
//! This module turns a template such as `"{0:>8} items at {price:.2f}"` into a
//! sequence of [`Segment`]s: literal runs interleaved with replacement fields.
//!
//! ## Overview
//!
//! - **Lazy**: [`parse`] returns a [`Segments`] iterator that parses one segment per
//!   call to `next`
//! - **Restartable**: [`Segments`] is `Clone`, and parsing the same template again
//!   always yields the same sequence
//! - **Zero-copy**: literal runs and argument names borrow from the template;
//!   `{{` and `}}` become one-character literals pointing at the first brace
//! - **Cacheable**: [`Template::parse`] collects the segments once so a template can
//!   be rendered many times without re-parsing
//!
//! ## Usage
//!
//! ```rust
//! use textfmt::{parse, ArgRef, Segment};
//!
//! let segments: Vec<Segment> = parse("{{x}} = {0}").collect::<Result<_, _>>().unwrap();
//! assert_eq!(segments[0], Segment::Literal("{"));
//! assert_eq!(segments[1], Segment::Literal("x"));
//! assert_eq!(segments[2], Segment::Literal("}"));
//! assert_eq!(segments[3], Segment::Literal(" = "));
//! match &segments[4] {
//!     Segment::Field(field) => assert_eq!(field.arg, ArgRef::Index(0)),
//!     _ => panic!("Expected field"),
//! }
//! ```

use crate::args::{FormatArgs, Resolver};
use crate::options::{global_locale, Locale};
use crate::render;
use crate::spec::{self, FormatSpec};
use crate::{Error, Result};

/// Reference from a replacement field (or a dynamic width/precision) to an argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgRef<'a> {
    /// `{}`: the next argument in field order
    Auto,
    /// `{2}`: a positional argument
    Index(usize),
    /// `{width}`: a named argument
    Name(&'a str),
}

/// A parsed `{...}` replacement field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field<'a> {
    pub arg: ArgRef<'a>,
    pub spec: FormatSpec<'a>,
    /// Byte offset of the opening brace.
    pub position: usize,
}

/// One piece of a parsed template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Field(Field<'a>),
}

/// Character cursor over a template.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor { input, position: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes `len` bytes and returns them.
    fn take(&mut self, len: usize) -> &'a str {
        let start = self.position;
        self.position += len;
        &self.input[start..self.position]
    }

    /// Parses a run of decimal digits, or returns `None` if there is none.
    pub(crate) fn parse_integer(&mut self) -> Result<Option<usize>> {
        let start = self.position;
        let mut value: usize = 0;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit as usize))
                .ok_or_else(|| Error::syntax(start, "number is too big"))?;
            self.bump();
        }

        if self.position == start {
            Ok(None)
        } else {
            Ok(Some(value))
        }
    }

    /// Parses the optional argument reference at the start of a field or nested count.
    pub(crate) fn parse_arg_ref(&mut self) -> Result<ArgRef<'a>> {
        let start = self.position;
        match self.peek() {
            Some('0') if self.peek_second().map_or(false, |c| c.is_ascii_digit()) => Err(
                Error::syntax(start, "argument index cannot have leading zeros"),
            ),
            Some(c) if c.is_ascii_digit() => {
                let index = self.parse_integer()?.unwrap_or_default();
                Ok(ArgRef::Index(index))
            }
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                while self
                    .peek()
                    .map_or(false, |c| c.is_ascii_alphanumeric() || c == '_')
                {
                    self.bump();
                }
                Ok(ArgRef::Name(&self.input[start..self.position]))
            }
            _ => Ok(ArgRef::Auto),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Indexing {
    Automatic,
    Manual,
}

impl Indexing {
    fn as_str(self) -> &'static str {
        match self {
            Indexing::Automatic => "automatic",
            Indexing::Manual => "manual",
        }
    }
}

/// Enforces that a template sticks to one positional indexing mode.
#[derive(Clone, Debug, Default)]
pub(crate) struct IndexTracker {
    mode: Option<Indexing>,
}

impl IndexTracker {
    pub(crate) fn observe(&mut self, arg: &ArgRef<'_>, position: usize) -> Result<()> {
        let mode = match arg {
            ArgRef::Auto => Indexing::Automatic,
            ArgRef::Index(_) => Indexing::Manual,
            ArgRef::Name(_) => return Ok(()),
        };

        match self.mode {
            None => {
                self.mode = Some(mode);
                Ok(())
            }
            Some(current) if current == mode => Ok(()),
            Some(current) => Err(Error::mixed_indexing(
                position,
                current.as_str(),
                mode.as_str(),
            )),
        }
    }
}

/// Lazy iterator over the segments of a template.
///
/// Yields `Err` once for the first malformed construct and then stops.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    cursor: Cursor<'a>,
    tracker: IndexTracker,
    finished: bool,
}

/// Parses a template into a lazy sequence of segments.
///
/// # Examples
///
/// ```rust
/// use textfmt::{parse, ErrorKind};
///
/// assert_eq!(parse("plain text").count(), 1);
///
/// let err = parse("oops }").find_map(Result::err).unwrap();
/// assert_eq!(err.kind(), ErrorKind::Syntax);
/// ```
#[must_use]
pub fn parse(template: &str) -> Segments<'_> {
    Segments {
        cursor: Cursor::new(template),
        tracker: IndexTracker::default(),
        finished: false,
    }
}

impl<'a> Segments<'a> {
    fn next_segment(&mut self) -> Result<Segment<'a>> {
        let rest = self.cursor.rest();
        match rest.find(|c: char| c == '{' || c == '}') {
            Some(0) => {}
            Some(len) => return Ok(Segment::Literal(self.cursor.take(len))),
            None => return Ok(Segment::Literal(self.cursor.take(rest.len()))),
        }

        let start = self.cursor.position();
        let brace = self.cursor.take(1);
        if brace == "}" {
            if self.cursor.eat('}') {
                return Ok(Segment::Literal(brace));
            }
            return Err(Error::syntax(
                start,
                "unmatched '}' in format string (use '}}' for a literal brace)",
            ));
        }

        if self.cursor.eat('{') {
            return Ok(Segment::Literal(brace));
        }

        self.parse_field(start).map(Segment::Field)
    }

    fn parse_field(&mut self, start: usize) -> Result<Field<'a>> {
        let arg_position = self.cursor.position();
        let arg = self.cursor.parse_arg_ref()?;
        self.tracker.observe(&arg, arg_position)?;

        let spec = if self.cursor.eat(':') {
            spec::parse_spec(&mut self.cursor, &mut self.tracker)?
        } else {
            FormatSpec::default()
        };

        let position = self.cursor.position();
        match self.cursor.bump() {
            Some('}') => Ok(Field {
                arg,
                spec,
                position: start,
            }),
            Some(other) => Err(Error::syntax(
                position,
                &format!("unexpected '{}' in replacement field", other),
            )),
            None => Err(Error::syntax(start, "unterminated replacement field")),
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Result<Segment<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.cursor.at_end() {
            return None;
        }

        let result = self.next_segment();
        if let Err(err) = &result {
            log::debug!("rejecting template: {}", err);
            self.finished = true;
        }
        Some(result)
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

/// A template parsed once and rendered any number of times.
///
/// # Examples
///
/// ```rust
/// use textfmt::{args, Template};
///
/// let template = Template::parse("{:>4}|{:<4}|").unwrap();
/// assert_eq!(template.render(&args![1, 2]).unwrap(), "   1|2   |");
/// assert_eq!(template.render(&args![10, 20]).unwrap(), "  10|20  |");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template<'a> {
    source: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> Template<'a> {
    /// Parses and validates the whole template.
    ///
    /// # Errors
    ///
    /// Returns the first syntax or indexing error in the template.
    pub fn parse(source: &'a str) -> Result<Self> {
        let segments = parse(source).collect::<Result<Vec<_>>>()?;
        log::trace!(
            "parsed template of {} bytes into {} segment(s)",
            source.len(),
            segments.len()
        );
        Ok(Template { source, segments })
    }

    #[must_use]
    pub fn source(&self) -> &'a str {
        self.source
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Renders with the global default locale.
    ///
    /// # Errors
    ///
    /// Returns an argument-index or type error if the arguments don't fit the fields.
    pub fn render(&self, args: &FormatArgs<'_>) -> Result<String> {
        self.render_with_locale(&global_locale(), args)
    }

    /// Renders with an explicit locale for `L` fields.
    ///
    /// # Errors
    ///
    /// Returns an argument-index or type error if the arguments don't fit the fields.
    pub fn render_with_locale(&self, locale: &Locale, args: &FormatArgs<'_>) -> Result<String> {
        let mut out = String::with_capacity(self.source.len() + 16);
        let mut resolver = Resolver::new(args);
        for segment in &self.segments {
            render::write_segment(&mut out, segment, &mut resolver, locale)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Align, Count, TypeSpec};
    use crate::ErrorKind;

    fn segments(template: &str) -> Result<Vec<Segment<'_>>> {
        parse(template).collect()
    }

    fn field<'a>(segment: &Segment<'a>) -> Field<'a> {
        match segment {
            Segment::Field(field) => field.clone(),
            other => panic!("Expected field, got {:?}", other),
        }
    }

    #[test]
    fn test_literal_only() {
        assert_eq!(segments("hello").unwrap(), vec![Segment::Literal("hello")]);
        assert!(segments("").unwrap().is_empty());
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(
            segments("a{{b}}c").unwrap(),
            vec![
                Segment::Literal("a"),
                Segment::Literal("{"),
                Segment::Literal("b"),
                Segment::Literal("}"),
                Segment::Literal("c"),
            ]
        );
    }

    #[test]
    fn test_field_refs() {
        let parsed = segments("{} {}").unwrap();
        assert_eq!(field(&parsed[0]).arg, ArgRef::Auto);
        assert_eq!(field(&parsed[2]).arg, ArgRef::Auto);

        let parsed = segments("{1}{0}{1}").unwrap();
        assert_eq!(field(&parsed[0]).arg, ArgRef::Index(1));
        assert_eq!(field(&parsed[1]).arg, ArgRef::Index(0));
        assert_eq!(field(&parsed[2]).position, 6);

        let parsed = segments("{name} {_x1}").unwrap();
        assert_eq!(field(&parsed[0]).arg, ArgRef::Name("name"));
        assert_eq!(field(&parsed[2]).arg, ArgRef::Name("_x1"));
    }

    #[test]
    fn test_field_with_spec() {
        let parsed = segments("[{0:*^10.3f}]").unwrap();
        let f = field(&parsed[1]);
        assert_eq!(f.spec.fill, '*');
        assert_eq!(f.spec.align, Some(Align::Center));
        assert_eq!(f.spec.width, Some(Count::Literal(10)));
        assert_eq!(f.spec.precision, Some(Count::Literal(3)));
        assert_eq!(f.spec.ty, Some(TypeSpec::Fixed));
    }

    #[test]
    fn test_unmatched_close() {
        let err = segments("abc } def").unwrap_err();
        assert_eq!(
            err,
            Error::syntax(
                4,
                "unmatched '}' in format string (use '}}' for a literal brace)"
            )
        );
    }

    #[test]
    fn test_unterminated_field() {
        for template in ["{", "{0", "{:", "abc {:>10", "{:{}"] {
            let err = segments(template).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Syntax, "template {:?}", template);
        }
    }

    #[test]
    fn test_malformed_fields() {
        for template in ["{0x}", "{01}", "{-1}", "{:10q}", "{:dd}", "{ }"] {
            let err = segments(template).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Syntax, "template {:?}", template);
        }
    }

    #[test]
    fn test_mixed_indexing() {
        let err = segments("{} {1}").unwrap_err();
        assert_eq!(err, Error::mixed_indexing(4, "automatic", "manual"));

        let err = segments("{0:{}}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentIndex);

        // Named references don't pin the mode.
        assert!(segments("{w} {} {}").is_ok());
        assert!(segments("{0:{w}} {1}").is_ok());
    }

    #[test]
    fn test_stops_after_error() {
        let mut iter = parse("a}b{c}");
        assert_eq!(iter.next(), Some(Ok(Segment::Literal("a"))));
        assert!(matches!(iter.next(), Some(Err(_))));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_restartable() {
        let template = "x={0:>5} y={1:#x} {{done}}";
        let first: Vec<_> = parse(template).collect();
        let second: Vec<_> = parse(template).collect();
        assert_eq!(first, second);

        let iter = parse(template);
        let cloned: Vec<_> = iter.clone().collect();
        assert_eq!(cloned, iter.collect::<Vec<_>>());
    }

    #[test]
    fn test_template_cache() {
        let template = Template::parse("{0}-{0}").unwrap();
        assert_eq!(template.source(), "{0}-{0}");
        assert_eq!(template.segments().len(), 3);
        assert!(Template::parse("{").is_err());
    }

    #[test]
    fn test_integer_overflow() {
        let err = segments("{:99999999999999999999999}").unwrap_err();
        assert_eq!(err, Error::syntax(2, "number is too big"));
    }
}

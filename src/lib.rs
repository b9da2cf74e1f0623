//! # textfmt
//!
//! A runtime text formatting engine for brace-style templates.
//!
//! ## What is it?
//!
//! `textfmt` renders templates like `"{:>8.2f} {name}"` against a list of typed
//! arguments supplied at runtime. Templates are plain strings, so they can come from
//! configuration, translations, or user input, and every mistake is reported as an
//! [`Error`] instead of a panic.
//!
//! ## Key Features
//!
//! - **Full format-spec mini-language**: fill, alignment, sign, alternate form, zero
//!   padding, width, precision, locale flag, and presentation type
//! - **Automatic, manual, and named arguments**, with dynamic width and precision
//! - **Exact floating-point output**: shortest round-trip, fixed, scientific, general,
//!   and hexadecimal renderings
//! - **Locale-aware numbers** through an explicit [`Locale`] or a process-wide default
//! - **Several sinks**: owned strings, any `fmt::Write` or `io::Write`, bounded byte
//!   buffers, size-only counting, and user types implementing [`Sink`]
//! - **User extensions** through the [`CustomFormat`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use textfmt::{args, format};
//!
//! let text = format("{:<6}|{:^6}|{:>6}", &args!["a", "b", "c"]).unwrap();
//! assert_eq!(text, "a     |  b   |     c");
//!
//! let text = format("{0} {0:o} {0:x} {0:#b}", &args![10]).unwrap();
//! assert_eq!(text, "10 12 a 0b1010");
//!
//! let text = format("{:+.3e} {:g} {}", &args![1234.56, 0.0001, 0.1]).unwrap();
//! assert_eq!(text, "+1.235e+03 0.0001 0.1");
//! ```
//!
//! ### Named Arguments and Dynamic Width
//!
//! ```rust
//! use textfmt::{args, format};
//!
//! let text = format("[{:{w}.{p}f}]", &args![3.14159; w = 8, p = 2]).unwrap();
//! assert_eq!(text, "[    3.14]");
//! ```
//!
//! ### Locales
//!
//! ```rust
//! use textfmt::{args, format_with_locale, Locale};
//!
//! let de = Locale::de_de();
//! let text = format_with_locale(&de, "{:L} {:.2Lf}", &args![1234567, 1234.5]).unwrap();
//! assert_eq!(text, "1.234.567 1.234,50");
//! ```
//!
//! ### Errors
//!
//! ```rust
//! use textfmt::{args, format, ErrorKind};
//!
//! let err = format("{} {1}", &args![1, 2]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ArgumentIndex);
//!
//! let err = format("{:d}", &args!["text"]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Type);
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`basic_formatting.rs`** - alignment, fill, and argument indexing
//! - **`integer_format.rs`** - bases, signs, and zero padding
//! - **`float_format.rs`** - every floating-point presentation
//! - **`locale.rs`** - localized numbers and the global locale
//! - **`format_to_n.rs`** - bounded buffers and size queries
//! - **`bad_format.rs`** - error reporting
//!
//! Run any example with: `cargo run --example <name>`

pub mod macros;

pub mod args;
pub mod error;
mod float;
pub mod options;
pub mod parse;
mod render;
pub mod sink;
pub mod spec;
pub mod value;

pub use args::FormatArgs;
pub use error::{Error, ErrorKind, Result};
pub use options::{global_locale, set_global_locale, Locale};
pub use parse::{parse, ArgRef, Field, Segment, Segments, Template};
pub use sink::{FormatToN, Sink, SizeCounter, TruncatingBuffer};
pub use spec::{Align, Count, FormatSpec, ResolvedSpec, Sign, TypeSpec, MAX_COUNT};
pub use value::{Arg, CustomFormat};

use crate::args::Resolver;
use std::{fmt, io};

/// Renders `template` with the global default locale.
///
/// # Examples
///
/// ```rust
/// use textfmt::{args, format};
///
/// assert_eq!(format("{:*^10}", &args!["left"]).unwrap(), "***left***");
/// assert_eq!(format("{:07}", &args![f64::INFINITY]).unwrap(), "    inf");
/// ```
///
/// # Errors
///
/// Returns a syntax error for a malformed template, an argument-index error for a
/// missing argument or mixed indexing, and a type error when a spec doesn't suit
/// its argument.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format(template: &str, args: &FormatArgs<'_>) -> Result<String> {
    format_with_locale(&global_locale(), template, args)
}

/// Renders `template` with an explicit locale for `L` fields.
///
/// # Errors
///
/// Same as [`format`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_with_locale(
    locale: &Locale,
    template: &str,
    args: &FormatArgs<'_>,
) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 16);
    format_into(&mut out, locale, template, args)?;
    Ok(out)
}

/// Renders into any [`fmt::Write`].
///
/// Nothing is written unless the whole template renders successfully.
///
/// # Examples
///
/// ```rust
/// use textfmt::{args, format_to};
///
/// let mut out = String::from("> ");
/// format_to(&mut out, "{:>5}", &args![42]).unwrap();
/// assert_eq!(out, ">    42");
///
/// assert!(format_to(&mut out, "{:>5", &args![42]).is_err());
/// assert_eq!(out, ">    42");
/// ```
///
/// # Errors
///
/// Same as [`format`], plus an I/O error if the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_to<W>(writer: &mut W, template: &str, args: &FormatArgs<'_>) -> Result<()>
where
    W: fmt::Write + ?Sized,
{
    let text = format(template, args)?;
    writer
        .write_str(&text)
        .map_err(|e| Error::io(&e.to_string()))
}

/// Renders into any [`io::Write`].
///
/// # Examples
///
/// ```rust
/// use textfmt::{args, write_to};
///
/// let mut buffer = Vec::new();
/// write_to(&mut buffer, "{}-{}", &args![1, 2]).unwrap();
/// assert_eq!(buffer, b"1-2");
/// ```
///
/// # Errors
///
/// Same as [`format`], plus an I/O error if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_to<W>(mut writer: W, template: &str, args: &FormatArgs<'_>) -> Result<()>
where
    W: io::Write,
{
    let text = format(template, args)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Renders at most `buf.len()` bytes into `buf`.
///
/// The stored prefix never ends in a partial UTF-8 sequence. The returned
/// [`FormatToN::size`] is the length of the complete rendering.
///
/// # Examples
///
/// ```rust
/// use textfmt::{args, format_to_n};
///
/// let mut buf = [0u8; 8];
/// let result = format_to_n(&mut buf, "{} {}", &args!["hello", "world"]).unwrap();
/// assert_eq!(&buf[..result.written], b"hello wo");
/// assert_eq!(result.size, 11);
/// ```
///
/// # Errors
///
/// Same as [`format`]. On error the buffer holds whatever prefix was rendered before
/// the failing field.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_to_n(buf: &mut [u8], template: &str, args: &FormatArgs<'_>) -> Result<FormatToN> {
    format_to_n_with_locale(buf, &global_locale(), template, args)
}

/// [`format_to_n`] with an explicit locale for `L` fields.
///
/// # Errors
///
/// Same as [`format_to_n`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_to_n_with_locale(
    buf: &mut [u8],
    locale: &Locale,
    template: &str,
    args: &FormatArgs<'_>,
) -> Result<FormatToN> {
    let mut sink = TruncatingBuffer::new(buf);
    format_into(&mut sink, locale, template, args)?;
    Ok(FormatToN {
        written: sink.written(),
        size: sink.size(),
    })
}

/// Byte length of the rendering, without producing it.
///
/// # Examples
///
/// ```rust
/// use textfmt::{args, formatted_size};
///
/// let size = formatted_size("The answer is {}.", &args![42]).unwrap();
/// assert_eq!(size, 17);
/// ```
///
/// # Errors
///
/// Same as [`format`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn formatted_size(template: &str, args: &FormatArgs<'_>) -> Result<usize> {
    formatted_size_with_locale(&global_locale(), template, args)
}

/// [`formatted_size`] with an explicit locale for `L` fields.
///
/// # Errors
///
/// Same as [`format`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn formatted_size_with_locale(
    locale: &Locale,
    template: &str,
    args: &FormatArgs<'_>,
) -> Result<usize> {
    let mut counter = SizeCounter::new();
    format_into(&mut counter, locale, template, args)?;
    Ok(counter.size())
}

/// Renders field by field into a caller-supplied [`Sink`].
///
/// Every other entry point is built on this one. Output is pushed as it is
/// produced, so on error the sink holds the prefix rendered before the failing
/// field.
///
/// # Examples
///
/// ```rust
/// use textfmt::{args, format_into, Locale, Sink};
///
/// struct Chunks(Vec<String>);
///
/// impl Sink for Chunks {
///     fn write_str(&mut self, s: &str) {
///         self.0.push(s.to_owned());
///     }
/// }
///
/// let mut chunks = Chunks(Vec::new());
/// format_into(&mut chunks, &Locale::classic(), "a{}b", &args![1]).unwrap();
/// assert_eq!(chunks.0.concat(), "a1b");
/// ```
///
/// # Errors
///
/// Same as [`format`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_into<S: Sink + ?Sized>(
    out: &mut S,
    locale: &Locale,
    template: &str,
    args: &FormatArgs<'_>,
) -> Result<()> {
    log::trace!(
        "rendering template of {} bytes with {} positional argument(s)",
        template.len(),
        args.len()
    );
    let mut resolver = Resolver::new(args);
    for segment in parse(template) {
        render::write_segment(out, &segment?, &mut resolver, locale)?;
    }
    Ok(())
}

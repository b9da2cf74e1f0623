//! Error types for template parsing and rendering.
//!
//! Every failure is reported synchronously to the caller and falls into one of a
//! small number of kinds, so callers can match on [`Error::kind`] instead of parsing
//! messages.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: Malformed template or format spec, with the byte position
//! - **Argument Index Errors**: Index out of range, unknown name, or automatic and
//!   manual indexing mixed in one template
//! - **Type Errors**: Presentation type or flag incompatible with the argument
//! - **Locale Errors**: Unknown locale name
//! - **I/O Errors**: Writer failures when delivering the rendered text
//!
//! ## Examples
//!
//! ```rust
//! use textfmt::{args, format, ErrorKind};
//!
//! let err = format("Using format: {:s}", &args![10]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Type);
//! eprintln!("Caught format error: {}", err);
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing or rendering a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed template or format spec
    #[error("Syntax error at position {position}: {msg}")]
    Syntax { position: usize, msg: String },

    /// Positional index beyond the supplied arguments
    #[error("Argument index {index} is out of range ({count} argument(s) supplied)")]
    ArgumentIndex { index: usize, count: usize },

    /// Named reference with no matching named argument
    #[error("No argument named '{0}'")]
    UnknownArgument(String),

    /// Automatic and manual indexing used in the same template
    #[error("Cannot switch from {from} to {to} argument indexing at position {position}")]
    MixedIndexing {
        position: usize,
        from: &'static str,
        to: &'static str,
    },

    /// Format spec incompatible with the argument's category
    #[error("Invalid format for {category} argument: {msg}")]
    Type { category: &'static str, msg: String },

    /// Locale name not present in the preset table
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// IO error while writing the rendered text
    #[error("IO error: {0}")]
    Io(String),

    /// Error raised by a user-supplied formatter
    #[error("Error: {0}")]
    Custom(String),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Syntax,
    ArgumentIndex,
    Type,
    Locale,
    Io,
    Custom,
}

impl Error {
    /// Creates a syntax error at a byte position of the template.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textfmt::Error;
    ///
    /// let err = Error::syntax(4, "unmatched '}'");
    /// assert!(err.to_string().contains("position 4"));
    /// ```
    pub fn syntax(position: usize, msg: &str) -> Self {
        Error::Syntax {
            position,
            msg: msg.to_string(),
        }
    }

    /// Creates an out-of-range argument index error.
    pub fn argument_index(index: usize, count: usize) -> Self {
        Error::ArgumentIndex { index, count }
    }

    /// Creates an error for a named reference that has no argument.
    pub fn unknown_argument(name: &str) -> Self {
        Error::UnknownArgument(name.to_string())
    }

    /// Creates an error for a template that mixes automatic and manual indexing.
    pub fn mixed_indexing(position: usize, from: &'static str, to: &'static str) -> Self {
        Error::MixedIndexing { position, from, to }
    }

    /// Creates a type error for an argument category.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textfmt::{Error, ErrorKind};
    ///
    /// let err = Error::type_error("integer", "precision is not allowed");
    /// assert_eq!(err.kind(), ErrorKind::Type);
    /// assert!(err.to_string().contains("integer argument"));
    /// ```
    pub fn type_error(category: &'static str, msg: &str) -> Self {
        Error::Type {
            category,
            msg: msg.to_string(),
        }
    }

    /// Creates an unknown-locale error.
    pub fn unknown_locale(name: &str) -> Self {
        Error::UnknownLocale(name.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntax { .. } => ErrorKind::Syntax,
            Error::ArgumentIndex { .. }
            | Error::UnknownArgument(_)
            | Error::MixedIndexing { .. } => ErrorKind::ArgumentIndex,
            Error::Type { .. } => ErrorKind::Type,
            Error::UnknownLocale(_) => ErrorKind::Locale,
            Error::Io(_) => ErrorKind::Io,
            Error::Custom(_) => ErrorKind::Custom,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Error::syntax(0, "x").kind(), ErrorKind::Syntax);
        assert_eq!(Error::argument_index(3, 1).kind(), ErrorKind::ArgumentIndex);
        assert_eq!(Error::unknown_argument("w").kind(), ErrorKind::ArgumentIndex);
        assert_eq!(
            Error::mixed_indexing(4, "automatic", "manual").kind(),
            ErrorKind::ArgumentIndex
        );
        assert_eq!(Error::type_error("string", "x").kind(), ErrorKind::Type);
        assert_eq!(Error::unknown_locale("xx").kind(), ErrorKind::Locale);
        assert_eq!(Error::io("broken pipe").kind(), ErrorKind::Io);
        assert_eq!(Error::custom("nope").kind(), ErrorKind::Custom);
    }

    #[test]
    fn test_messages() {
        let err = Error::argument_index(3, 2);
        assert_eq!(
            err.to_string(),
            "Argument index 3 is out of range (2 argument(s) supplied)"
        );

        let err = Error::mixed_indexing(3, "automatic", "manual");
        assert_eq!(
            err.to_string(),
            "Cannot switch from automatic to manual argument indexing at position 3"
        );
    }
}

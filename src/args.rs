//! Argument lists.
//!
//! This module provides [`FormatArgs`], the ordered positional arguments plus the
//! optional named arguments bound to one render call.
//!
//! Named arguments live in an [`IndexMap`] so iteration follows insertion order.
//!
//! ## Examples
//!
//! ```rust
//! use textfmt::{format, FormatArgs};
//!
//! let args = FormatArgs::new()
//!     .with(3.14159)
//!     .named("width", 10)
//!     .named("prec", 2);
//!
//! assert_eq!(format("[{:{width}.{prec}f}]", &args).unwrap(), "[      3.14]");
//! ```

use crate::parse::ArgRef;
use crate::{Arg, Error, Result};
use indexmap::IndexMap;

/// Arguments for one render call, borrowed for its duration.
#[derive(Clone, Debug, Default)]
pub struct FormatArgs<'a> {
    positional: Vec<Arg<'a>>,
    named: IndexMap<&'a str, Arg<'a>>,
}

impl<'a> FormatArgs<'a> {
    /// Creates an empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn push<T: Into<Arg<'a>>>(&mut self, value: T) {
        self.positional.push(value.into());
    }

    /// Adds or replaces a named argument.
    pub fn push_named<T: Into<Arg<'a>>>(&mut self, name: &'a str, value: T) {
        self.named.insert(name, value.into());
    }

    /// Builder form of [`FormatArgs::push`].
    #[must_use]
    pub fn with<T: Into<Arg<'a>>>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Builder form of [`FormatArgs::push_named`].
    #[must_use]
    pub fn named<T: Into<Arg<'a>>>(mut self, name: &'a str, value: T) -> Self {
        self.push_named(name, value);
        self
    }

    /// Number of positional arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positional.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arg<'a>> {
        self.positional.get(index)
    }

    #[must_use]
    pub fn get_named(&self, name: &str) -> Option<&Arg<'a>> {
        self.named.get(name)
    }

    /// Iterates over the named arguments in insertion order.
    pub fn named_args(&self) -> impl Iterator<Item = (&'a str, &Arg<'a>)> + '_ {
        self.named.iter().map(|(name, arg)| (*name, arg))
    }
}

impl<'a, T: Into<Arg<'a>>> FromIterator<T> for FormatArgs<'a> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FormatArgs {
            positional: iter.into_iter().map(Into::into).collect(),
            named: IndexMap::new(),
        }
    }
}

impl<'a, T: Into<Arg<'a>>> Extend<T> for FormatArgs<'a> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.positional.extend(iter.into_iter().map(Into::into));
    }
}

/// Per-render argument lookup; owns the automatic-indexing cursor.
pub(crate) struct Resolver<'r, 'a> {
    args: &'r FormatArgs<'a>,
    next: usize,
}

impl<'r, 'a> Resolver<'r, 'a> {
    pub(crate) fn new(args: &'r FormatArgs<'a>) -> Self {
        Resolver { args, next: 0 }
    }

    pub(crate) fn resolve(&mut self, arg_ref: &ArgRef<'_>) -> Result<&'r Arg<'a>> {
        let index = match *arg_ref {
            ArgRef::Auto => {
                let index = self.next;
                self.next += 1;
                index
            }
            ArgRef::Index(index) => index,
            ArgRef::Name(name) => {
                return self
                    .args
                    .get_named(name)
                    .ok_or_else(|| Error::unknown_argument(name));
            }
        };

        self.args
            .get(index)
            .ok_or_else(|| Error::argument_index(index, self.args.len()))
    }
}

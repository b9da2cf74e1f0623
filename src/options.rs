//! Numeric locale configuration.
//!
//! This module provides the configuration consulted by fields carrying the `L` flag:
//!
//! - [`Locale`]: decimal point, thousands separator, and digit grouping
//! - [`global_locale`] / [`set_global_locale`]: the process-wide default snapshot
//!
//! The global default is an immutable [`Locale`] behind an [`Arc`]. Replacing it
//! swaps the whole snapshot, so renders that already took a copy keep using the
//! old one. Per-call locales passed to [`format_with_locale`](crate::format_with_locale)
//! never touch the global slot.
//!
//! ## Examples
//!
//! ```rust
//! use textfmt::{args, format_with_locale, Locale};
//!
//! let de = Locale::de_de();
//! let text = format_with_locale(&de, "{0:.2f} {0:.2Lf}", &args![1.5]).unwrap();
//! assert_eq!(text, "1.50 1,50");
//!
//! let custom = Locale::new()
//!     .with_decimal_point('\'')
//!     .with_thousands_sep(' ')
//!     .with_grouping(vec![3]);
//! let text = format_with_locale(&custom, "{:Ld}", &args![1234567]).unwrap();
//! assert_eq!(text, "1 234 567");
//! ```

use crate::{Error, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

/// Numeric formatting conventions for locale-sensitive (`L`) fields.
///
/// `grouping` lists group sizes from the least significant digit; the last entry
/// repeats, and a `0` entry stops grouping (mirroring the C `lconv::grouping`
/// convention).
///
/// # Examples
///
/// ```rust
/// use textfmt::Locale;
///
/// let en = Locale::en_us();
/// assert_eq!(en.group_digits("1000000"), "1,000,000");
///
/// let c = Locale::classic();
/// assert_eq!(c.group_digits("1000000"), "1000000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub name: String,
    pub decimal_point: char,
    pub thousands_sep: Option<char>,
    pub grouping: Vec<u8>,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::classic()
    }
}

impl Locale {
    /// Creates the classic "C" locale (`.` decimal point, no grouping).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic "C" locale.
    #[must_use]
    pub fn classic() -> Self {
        Locale {
            name: "C".to_string(),
            decimal_point: '.',
            thousands_sep: None,
            grouping: Vec::new(),
        }
    }

    /// US English: `1,234,567.89`.
    #[must_use]
    pub fn en_us() -> Self {
        Locale {
            name: "en_US".to_string(),
            decimal_point: '.',
            thousands_sep: Some(','),
            grouping: vec![3],
        }
    }

    /// German: `1.234.567,89`.
    #[must_use]
    pub fn de_de() -> Self {
        Locale {
            name: "de_DE".to_string(),
            decimal_point: ',',
            thousands_sep: Some('.'),
            grouping: vec![3],
        }
    }

    /// French: `1 234 567,89` with a narrow no-break space.
    #[must_use]
    pub fn fr_fr() -> Self {
        Locale {
            name: "fr_FR".to_string(),
            decimal_point: ',',
            thousands_sep: Some('\u{202f}'),
            grouping: vec![3],
        }
    }

    /// Looks up a preset by name.
    ///
    /// Accepts `C`, `POSIX`, and `language_TERRITORY` names with an optional
    /// `.codeset` or `@modifier` suffix; `-` is accepted in place of `_`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textfmt::Locale;
    ///
    /// assert_eq!(Locale::named("de_DE.UTF-8").unwrap(), Locale::de_de());
    /// assert_eq!(Locale::named("en-US").unwrap(), Locale::en_us());
    /// assert!(Locale::named("tlh_QO").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocale`] if the name matches no preset.
    pub fn named(name: &str) -> Result<Self> {
        let base = name
            .split(|c: char| c == '.' || c == '@')
            .next()
            .unwrap_or_default()
            .replace('-', "_");

        match base.as_str() {
            "" | "C" | "POSIX" => Ok(Locale::classic()),
            "en_US" => Ok(Locale::en_us()),
            "de_DE" => Ok(Locale::de_de()),
            "fr_FR" => Ok(Locale::fr_fr()),
            _ => Err(Error::unknown_locale(name)),
        }
    }

    /// Resolves the process locale from `LC_ALL`, `LC_NUMERIC`, then `LANG`.
    ///
    /// Falls back to the classic locale when none of them is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocale`] if the first non-empty variable names an
    /// unknown locale.
    pub fn from_env() -> Result<Self> {
        let name = ["LC_ALL", "LC_NUMERIC", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty());

        match name {
            Some(name) => Locale::named(&name),
            None => Ok(Locale::classic()),
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Sets the decimal point character.
    #[must_use]
    pub fn with_decimal_point(mut self, decimal_point: char) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    /// Sets the thousands separator.
    #[must_use]
    pub fn with_thousands_sep(mut self, sep: char) -> Self {
        self.thousands_sep = Some(sep);
        self
    }

    /// Sets the group sizes, least significant group first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textfmt::Locale;
    ///
    /// // Indian numbering: 12,34,567
    /// let hi = Locale::new().with_thousands_sep(',').with_grouping(vec![3, 2]);
    /// assert_eq!(hi.group_digits("1234567"), "12,34,567");
    /// ```
    #[must_use]
    pub fn with_grouping(mut self, grouping: Vec<u8>) -> Self {
        self.grouping = grouping;
        self
    }

    /// Inserts the thousands separator into a run of ASCII digits.
    #[must_use]
    pub fn group_digits(&self, digits: &str) -> String {
        let (Some(sep), Some(&last)) = (self.thousands_sep, self.grouping.last()) else {
            return digits.to_string();
        };

        let mut cuts = Vec::new();
        let mut remaining = digits.len();
        for size in self
            .grouping
            .iter()
            .copied()
            .chain(std::iter::repeat(last))
        {
            let size = usize::from(size);
            if size == 0 || remaining <= size {
                break;
            }
            remaining -= size;
            cuts.push(remaining);
        }

        let mut grouped = String::with_capacity(digits.len() + cuts.len() * sep.len_utf8());
        for (i, ch) in digits.char_indices() {
            if cuts.contains(&i) {
                grouped.push(sep);
            }
            grouped.push(ch);
        }
        grouped
    }
}

fn global_slot() -> &'static RwLock<Arc<Locale>> {
    static SLOT: OnceLock<RwLock<Arc<Locale>>> = OnceLock::new();
    SLOT.get_or_init(|| RwLock::new(Arc::new(Locale::classic())))
}

/// Returns the current process-wide default locale.
///
/// The returned snapshot is immutable; later calls to [`set_global_locale`] do not
/// affect it.
#[must_use]
pub fn global_locale() -> Arc<Locale> {
    Arc::clone(&global_slot().read())
}

/// Replaces the process-wide default locale and returns the previous snapshot.
///
/// # Examples
///
/// ```rust
/// use textfmt::{global_locale, set_global_locale, Locale};
///
/// let previous = set_global_locale(Locale::en_us());
/// assert_eq!(global_locale().name, "en_US");
/// set_global_locale((*previous).clone());
/// ```
pub fn set_global_locale(locale: Locale) -> Arc<Locale> {
    log::debug!("replacing global locale with {}", locale.name);
    std::mem::replace(&mut *global_slot().write(), Arc::new(locale))
}

//! Argument values.
//!
//! This module provides [`Arg`], the closed set of argument categories the engine
//! knows how to render, and [`CustomFormat`], the contract a type implements to be
//! rendered as a user extension.
//!
//! ## Core Types
//!
//! - [`Arg`]: bool, integer (up to 128 bits or arbitrary precision), float, char,
//!   string, pointer, or custom value
//! - [`CustomFormat`]: renders a user type from a [`ResolvedSpec`]
//!
//! ## Creating Arguments
//!
//! Every primitive converts with `From`, so most callers never name [`Arg`]:
//!
//! ```rust
//! use textfmt::Arg;
//!
//! assert!(matches!(Arg::from(42u8), Arg::UInt(42)));
//! assert!(matches!(Arg::from(-1i64), Arg::Int(-1)));
//! assert!(matches!(Arg::from("hi"), Arg::Str("hi")));
//!
//! let x = 7;
//! assert!(matches!(Arg::pointer(&x as *const i32), Arg::Pointer(addr) if addr != 0));
//! ```
//!
//! ## User Extensions
//!
//! ```rust
//! use textfmt::{args, format, Arg, CustomFormat, ResolvedSpec, Result};
//!
//! struct Celsius(f64);
//!
//! impl CustomFormat for Celsius {
//!     fn format(&self, spec: &ResolvedSpec, out: &mut String) -> Result<()> {
//!         let precision = spec.precision.unwrap_or(1);
//!         out.push_str(&format!("{:.*}°C", precision, self.0));
//!         Ok(())
//!     }
//! }
//!
//! let temp = Celsius(21.456);
//! let text = format("[{:>8.2}]", &args![Arg::custom(&temp)]).unwrap();
//! assert_eq!(text, "[ 21.46°C]");
//! ```

use crate::spec::ResolvedSpec;
use crate::Result;
use num_bigint::BigInt;
use std::fmt;

/// Formatting contract for user types.
///
/// The implementation writes the unpadded text into `out`; the engine then applies
/// width, fill, and alignment (left by default).
pub trait CustomFormat {
    /// Writes the rendering of `self` for `spec`.
    ///
    /// # Errors
    ///
    /// Implementations return [`Error::Type`](crate::Error::Type) or
    /// [`Error::Custom`](crate::Error::Custom) for specs they don't support.
    fn format(&self, spec: &ResolvedSpec, out: &mut String) -> Result<()>;
}

/// A borrowed argument of one of the recognized categories.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    Bool(bool),
    Int(i128),
    UInt(u128),
    BigInt(&'a BigInt),
    F32(f32),
    F64(f64),
    Char(char),
    Str(&'a str),
    /// Address of a pointer; `0` is null.
    Pointer(usize),
    Custom(&'a dyn CustomFormat),
}

impl<'a> Arg<'a> {
    /// Creates a pointer argument from any raw pointer.
    #[must_use]
    pub fn pointer<T: ?Sized>(ptr: *const T) -> Self {
        Arg::Pointer(ptr.cast::<()>() as usize)
    }

    /// Wraps a user type implementing [`CustomFormat`].
    #[must_use]
    pub fn custom(value: &'a dyn CustomFormat) -> Self {
        Arg::Custom(value)
    }

    /// Name of the category, as used in error messages.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Arg::Bool(_) => "bool",
            Arg::Int(_) | Arg::UInt(_) | Arg::BigInt(_) => "integer",
            Arg::F32(_) | Arg::F64(_) => "floating-point",
            Arg::Char(_) => "char",
            Arg::Str(_) => "string",
            Arg::Pointer(_) => "pointer",
            Arg::Custom(_) => "custom",
        }
    }

    /// The value as a dynamic width or precision, if it is a non-negative integer.
    #[must_use]
    pub fn as_count(&self) -> Option<usize> {
        match *self {
            Arg::Int(v) => usize::try_from(v).ok(),
            Arg::UInt(v) => usize::try_from(v).ok(),
            Arg::BigInt(v) => usize::try_from(v).ok(),
            _ => None,
        }
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Arg::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Arg::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            Arg::BigInt(v) => f.debug_tuple("BigInt").field(v).finish(),
            Arg::F32(v) => f.debug_tuple("F32").field(v).finish(),
            Arg::F64(v) => f.debug_tuple("F64").field(v).finish(),
            Arg::Char(v) => f.debug_tuple("Char").field(v).finish(),
            Arg::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Arg::Pointer(v) => write!(f, "Pointer({:#x})", v),
            Arg::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl<'a> From<$ty> for Arg<'a> {
                fn from(v: $ty) -> Self {
                    Arg::Int(v as i128)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl<'a> From<$ty> for Arg<'a> {
                fn from(v: $ty) -> Self {
                    Arg::UInt(v as u128)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl<'a> From<bool> for Arg<'a> {
    fn from(v: bool) -> Self {
        Arg::Bool(v)
    }
}

impl<'a> From<f32> for Arg<'a> {
    fn from(v: f32) -> Self {
        Arg::F32(v)
    }
}

impl<'a> From<f64> for Arg<'a> {
    fn from(v: f64) -> Self {
        Arg::F64(v)
    }
}

impl<'a> From<char> for Arg<'a> {
    fn from(v: char) -> Self {
        Arg::Char(v)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(v: &'a str) -> Self {
        Arg::Str(v)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(v: &'a String) -> Self {
        Arg::Str(v.as_str())
    }
}

impl<'a> From<&'a BigInt> for Arg<'a> {
    fn from(v: &'a BigInt) -> Self {
        Arg::BigInt(v)
    }
}

impl<'a, T> From<*const T> for Arg<'a> {
    fn from(v: *const T) -> Self {
        Arg::pointer(v)
    }
}

impl<'a, T> From<*mut T> for Arg<'a> {
    fn from(v: *mut T) -> Self {
        Arg::pointer(v.cast_const())
    }
}

impl<'a> From<&'a dyn CustomFormat> for Arg<'a> {
    fn from(v: &'a dyn CustomFormat) -> Self {
        Arg::Custom(v)
    }
}

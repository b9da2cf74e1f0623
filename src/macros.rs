/// Builds a [`FormatArgs`](crate::FormatArgs) from a list of values.
///
/// Positional values come first; named values follow a `;`.
///
/// ```rust
/// use textfmt::{args, format};
///
/// let text = format("{} of {total}", &args![3; total = 10]).unwrap();
/// assert_eq!(text, "3 of 10");
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* ; $($name:ident = $named:expr),+ $(,)?) => {{
        let mut args = $crate::FormatArgs::new();
        $(
            args.push($value);
        )*
        $(
            args.push_named(stringify!($name), $named);
        )+
        args
    }};

    () => {
        $crate::FormatArgs::new()
    };

    ($($value:expr),+ $(,)?) => {{
        let mut args = $crate::FormatArgs::new();
        $(
            args.push($value);
        )+
        args
    }};
}

/// Renders a template with the global locale, taking the same arguments as [`args!`].
///
/// ```rust
/// use textfmt::render;
///
/// assert_eq!(render!("{:*^10}", "left").unwrap(), "***left***");
/// assert_eq!(render!("{:.{p}f}", 2.5; p = 2).unwrap(), "2.50");
/// ```
#[macro_export]
macro_rules! render {
    ($template:expr) => {
        $crate::format($template, &$crate::FormatArgs::new())
    };

    ($template:expr; $($rest:tt)+) => {
        $crate::format($template, &$crate::args!(; $($rest)+))
    };

    ($template:expr, $($rest:tt)+) => {
        $crate::format($template, &$crate::args!($($rest)+))
    };
}

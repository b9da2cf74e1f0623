//! Every floating-point presentation, with and without `#` and precision.
//!
//! Run with: cargo run --example float_format

use std::error::Error;
use textfmt::{args, format};

fn main() -> Result<(), Box<dyn Error>> {
    let a = args![0.0, 123.4567, 34567.0, 1e10 + 12.345, 1e20];

    for (heading, modifier) in [
        ("Default precision", ""),
        ("Alternate form", "#"),
        ("Precision=3", ".3"),
        ("Precision=3, alternate form", "#.3"),
    ] {
        println!("{}:", heading);
        for ty in ["", "f", "e", "g", "a"] {
            let field = format!("{{:{}{}}}", modifier, ty);
            let template = vec![field; 5].join(" ");
            let label = if ty.is_empty() { "Default" } else { ty };
            println!("  {:<8}: {}", label, format(&template, &a)?);
        }
        println!();
    }

    let specials = args![f64::NEG_INFINITY, f64::INFINITY, -f64::NAN, f64::NAN];
    println!("{}", format("Default: {} {} {} {}", &specials)?);
    println!("{}", format("Type F : {:F} {:F} {:F} {:F}", &specials)?);
    println!("{}", format("Width  : |{:07}| |{:07}| |{:07}| |{:07}|", &specials)?);

    Ok(())
}

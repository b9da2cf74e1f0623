//! Distinguishing error kinds.
//!
//! Run with: cargo run --example bad_format

use std::error::Error;
use textfmt::{args, format, ErrorKind};

fn main() -> Result<(), Box<dyn Error>> {
    let cases = [
        ("Using format: {:s}", args![10]),
        ("{} {1}", args![1, 2]),
        ("{} {} {}", args![1, 2]),
        ("unclosed {0", args![1]),
        ("{:{}}", args![1.5, "wide"]),
    ];

    for (template, a) in &cases {
        match format(template, a) {
            Ok(text) => println!("{:<20} -> {}", template, text),
            Err(e) => {
                let kind = match e.kind() {
                    ErrorKind::Syntax => "syntax",
                    ErrorKind::ArgumentIndex => "argument",
                    ErrorKind::Type => "type",
                    _ => "other",
                };
                println!("{:<20} -> {} error: {}", template, kind, e);
            }
        }
    }

    Ok(())
}

//! Alignment, fill characters, and argument indexing.
//!
//! Run with: cargo run --example basic_formatting

use std::error::Error;
use textfmt::{args, format};

fn main() -> Result<(), Box<dyn Error>> {
    println!("{}", format("Using format: {} {} {}", &args![10, 1.234, "Hello World!"])?);

    println!(
        "{}",
        format(
            "|{:^10}| |{:<10}| |{:^10}| |{:>10}|",
            &args!["default", "left", "centre", "right"]
        )?
    );
    println!(
        "{}",
        format("|{:*<10}| |{:*^10}| |{:*>10}|", &args!["left", "centre", "right"])?
    );

    // Manual indexing lets one argument appear several times.
    println!("{}", format("{0} {0:o} {0:x}", &args![10])?);

    for (warnings, errors) in [(0, 0), (10, 0), (0, 10), (10, 10)] {
        let mut template = String::from("Compilation ");
        if errors == 0 {
            template.push_str("succeeded");
            if warnings != 0 {
                template.push_str(" with {0} Warning(s)");
            }
        } else {
            template.push_str("failed with {1} Error(s)");
            if warnings != 0 {
                template.push_str(" and {0} Warning(s)");
            }
        }
        println!("{}", format(&template, &args![warnings, errors])?);
    }

    let (v1, v2) = (10, 10_000_000);
    println!("|{}|", format("{:{}}| |{:{}}", &args![v1, 5, v2, 12])?);
    for len in 7..11 {
        println!(
            "{}",
            format("width={0:>2}: |{1:{0}}| |{2:{0}}|", &args![len, v1, v2])?
        );
    }

    let s = "Hello World!";
    println!("{}", format("|{0:<8.4}| |{0:^8.4}| |{0:>8.4}|", &args![s])?);

    Ok(())
}

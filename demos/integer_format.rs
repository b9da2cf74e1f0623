//! Integer, bool, and char presentations with signs and zero padding.
//!
//! Run with: cargo run --example integer_format

use std::error::Error;
use textfmt::{args, format};

fn main() -> Result<(), Box<dyn Error>> {
    let a = args![-10, 0, 10];
    let templates = [
        ("Default", "{} {} {}"),
        ("Binary", "{0:b} {0:B} {1:b} {1:B} {2:b} {2:B}"),
        ("Binary '#'", "{0:#b} {0:#B} {1:#b} {1:#B} {2:#b} {2:#B}"),
        ("Octal", "{0:o} {1:o} {2:o}"),
        ("Octal '#'", "{0:#o} {1:#o} {2:#o}"),
        ("Hex", "{0:x} {0:X} {1:x} {1:X} {2:x} {2:X}"),
        ("Hex '#'", "{0:#x} {0:#X} {1:#x} {1:#X} {2:#x} {2:#X}"),
    ];
    for (label, template) in templates {
        println!("{:<12}: {}", label, format(template, &a)?);
    }
    println!("{:<12}: {}", "Char", format("|{:c}| |{:c}|", &args![32, 126])?);

    println!();
    for value in [true, false] {
        println!("{}", format("{0} {0:b} {0:d} {0:#o} {0:#x}", &args![value])?);
    }
    println!("{}", format("{0} {0:d} {0:#b} {0:#x}", &args!['A'])?);

    println!();
    let a = args![-10, -1.2, 5, 2.34];
    for sign in ['+', '-', ' '] {
        let plain = format!("|{{:{0}}}|{{:{0}}}|{{:{0}}}|{{:{0}}}|", sign);
        let padded = format!("|{{:{0}06}}|{{:{0}06}}|{{:{0}06}}|{{:{0}06}}|", sign);
        println!("sign '{}'      : {}", sign, format(&plain, &a)?);
        println!("sign '{}' + '0': {}", sign, format(&padded, &a)?);
    }

    Ok(())
}

//! Bounded buffers and size queries.
//!
//! Run with: cargo run --example format_to_n

use std::error::Error;
use textfmt::{args, format, format_to_n, formatted_size};

fn vec_out(values: &[i32]) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();
    for value in values {
        let mut buf = [0u8; 5];
        let result = format_to_n(&mut buf, "{}", &args![*value])?;
        out.push_str(std::str::from_utf8(&buf[..result.written])?);
        out.push(' ');
    }
    Ok(out)
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("{}", vec_out(&[1, 100, 10000])?);
    println!("{}", vec_out(&[1, 1000, 1000000])?);

    let a = args![10, 1.234, "Hello World!"];
    println!("Length of formatted data: {}", formatted_size("{} {} {}\n", &a)?);
    print!("{}", format("{} {} {}\n", &a)?);
    println!("123456789|123456789|12");

    Ok(())
}

//! Locale-aware numbers through explicit and global locales.
//!
//! Run with: cargo run --example locale

use std::error::Error;
use textfmt::{args, format, format_with_locale, set_global_locale, Locale};

fn main() -> Result<(), Box<dyn Error>> {
    let a = args![1.5, 1_000_000];

    println!("Using default locale:");
    println!("{}", format("format  : {:.2f} {:12d}", &a)?);
    println!("{}", format("format+L: {:.2Lf} {:12Ld}", &a)?);

    println!("\nUsing global locale de_DE:");
    let previous = set_global_locale(Locale::named("de_DE")?);
    println!("{}", format("format  : {:.2f} {:12d}", &a)?);
    println!("{}", format("format+L: {:.2Lf} {:12Ld}", &a)?);
    set_global_locale((*previous).clone());

    println!("\nUsing function-specific locale:");
    for locale in [Locale::en_us(), Locale::de_de(), Locale::fr_fr()] {
        let line = format_with_locale(
            &locale,
            "{2}: {0:.2f} {0:.2Lf} {1:12d} {1:12Ld}",
            &args![1.5, 1_000_000, locale.name.as_str()],
        )?;
        println!("{}", line);
    }

    match Locale::from_env() {
        Ok(locale) => println!("\nEnvironment locale: {}", locale.name),
        Err(e) => println!("\nEnvironment locale not supported: {}", e),
    }

    Ok(())
}

//! Basic placeholder substitution.
//!
//! Run with: cargo run --example basic

use bracefmt::{args, bfmt, format};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Auto-indexed placeholders consume arguments left to right.
    let greeting = bfmt!("Hello, {}! You have {} new messages.", "Alice", 3)?;
    println!("{}", greeting);

    // Explicit indices address arguments directly and may repeat.
    let echo = bfmt!("{0}... {0}... {0}...", "echo")?;
    println!("{}", echo);

    // The two styles mix; {N} reserves its position for the auto cursor.
    let mixed = bfmt!("{} {0} {}", "a", "b", "c")?;
    println!("{}", mixed); // a a b

    // Escaped braces render literally.
    let braces = bfmt!("set = {{{}, {}, {}}}", 1, 2, 3)?;
    println!("{}", braces);

    // An out-of-range index is not an error; it passes through verbatim,
    // so a template can be applied against a partial argument set.
    let partial = format("got {0}, still waiting on {7}", &args!["this"])?;
    println!("{}", partial);

    Ok(())
}

//! Tour of the format-spec mini-language.
//!
//! Run with: cargo run --example format_specs

use bracefmt::bfmt;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Integer bases.
    println!("{}", bfmt!("decimal: {:d}", 255)?);
    println!("{}", bfmt!("hex:     {:x} / {:X}", 255, 255)?);
    println!("{}", bfmt!("octal:   {:o}", 255)?);
    println!("{}", bfmt!("binary:  {:b} (8 bits) / {:16b} (16 bits)", 5, 5)?);

    // Zero padding forces right alignment with '0' fill.
    println!("{}", bfmt!("padded:  {:08x}", 255)?);

    // Floats: fixed, scientific and general.
    println!("{}", bfmt!("fixed:      {:.2f}", 3.14159)?);
    println!("{}", bfmt!("scientific: {:.2e}", 1500.0)?);
    println!("{}", bfmt!("general:    {:g}", 3.5)?);

    // Fill, alignment and width on any value.
    println!("{}", bfmt!("[{:<10}]", "left")?);
    println!("{}", bfmt!("[{:>10}]", "right")?);
    println!("{}", bfmt!("[{:^10}]", "center")?);
    println!("{}", bfmt!("[{:*^10}]", "stars")?);

    // Width is a minimum; long values are never truncated.
    println!("{}", bfmt!("[{:4}]", "longer than four")?);

    Ok(())
}

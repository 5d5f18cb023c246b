//! Format-spec grammar coverage: fill, alignment, width, precision and type
//! characters, exercised through the public entry points.

use bracefmt::{bfmt, format_value, Align, FormatSpec, TypeChar, Value};

#[test]
fn decimal_integer() {
    assert_eq!(bfmt!("{:d}", 42).unwrap(), "42");
    assert_eq!(bfmt!("{:d}", -42).unwrap(), "-42");
    assert_eq!(bfmt!("{:5d}", 42).unwrap(), "   42");
    assert_eq!(bfmt!("{:05d}", 42).unwrap(), "00042");
}

#[test]
fn hex_and_octal() {
    assert_eq!(bfmt!("{:x}", 255).unwrap(), "ff");
    assert_eq!(bfmt!("{:X}", 255).unwrap(), "FF");
    assert_eq!(bfmt!("{:o}", 8).unwrap(), "10");
    // Lenient decoding: characters that fit nowhere are ignored.
    assert_eq!(bfmt!("{:#?x}", 255).unwrap(), "ff");
}

#[test]
fn negative_integers_render_their_bit_pattern_unsigned() {
    assert_eq!(bfmt!("{:x}", -1i64).unwrap(), "ffffffffffffffff");
    assert_eq!(bfmt!("{:X}", -1i64).unwrap(), "FFFFFFFFFFFFFFFF");
}

#[test]
fn binary_bit_strings() {
    assert_eq!(bfmt!("{:b}", 5).unwrap(), "00000101");
    assert_eq!(bfmt!("{:B}", 5).unwrap(), "00000101");
    assert_eq!(bfmt!("{:16b}", 5).unwrap(), "0000000000000101");
    // Width is the bit count: high bits beyond it are truncated.
    assert_eq!(bfmt!("{:4b}", 255).unwrap(), "1111");
    assert_eq!(bfmt!("{:8b}", 256).unwrap(), "00000000");
}

#[test]
fn fixed_point_floats() {
    assert_eq!(bfmt!("{:.2f}", 3.14159).unwrap(), "3.14");
    assert_eq!(bfmt!("{:.0f}", 3.7).unwrap(), "4");
    // Default precision is six fractional digits.
    assert_eq!(bfmt!("{:f}", 3.5).unwrap(), "3.500000");
    assert_eq!(bfmt!("{:8.2f}", 3.14159).unwrap(), "    3.14");
}

#[test]
fn scientific_floats() {
    assert_eq!(bfmt!("{:.2e}", 1500.0).unwrap(), "1.50e3");
    assert_eq!(bfmt!("{:.1e}", 0.25).unwrap(), "2.5e-1");
}

#[test]
fn general_floats() {
    assert_eq!(bfmt!("{:g}", 3.5).unwrap(), "3.5");
    assert_eq!(bfmt!("{:g}", 3.0).unwrap(), "3");
    assert_eq!(bfmt!("{:.4g}", 3.1).unwrap(), "3.1");
    assert_eq!(bfmt!("{:.2g}", 3.0).unwrap(), "3");
}

#[test]
fn general_floats_switch_notation_by_exponent() {
    // Precision counts significant digits, and the conversion flips to
    // scientific below 1e-4 or once the exponent reaches the digit count.
    assert_eq!(bfmt!("{:.4g}", 1.234e-5).unwrap(), "1.234e-5");
    assert_eq!(bfmt!("{:.4g}", 123.456).unwrap(), "123.5");
    assert_eq!(bfmt!("{:.2g}", 150000.0).unwrap(), "1.5e5");
}

#[test]
fn padding_and_alignment() {
    assert_eq!(bfmt!("{:<10}", "Bob").unwrap(), "Bob       ");
    assert_eq!(bfmt!("{:>10}", "Bob").unwrap(), "       Bob");
    assert_eq!(bfmt!("{:^9}", "Bob").unwrap(), "   Bob   ");
    assert_eq!(bfmt!("{:*<6}", "ab").unwrap(), "ab****");
    assert_eq!(bfmt!("{:*>6}", "ab").unwrap(), "****ab");
    assert_eq!(bfmt!("{:*^6}", "ab").unwrap(), "**ab**");
}

#[test]
fn width_never_truncates() {
    assert_eq!(bfmt!("{:2}", "longer than two").unwrap(), "longer than two");
    assert_eq!(bfmt!("{:0}", "x").unwrap(), "x");
}

#[test]
fn zero_fill_forces_right_alignment() {
    assert_eq!(bfmt!("{:06.1f}", -1.5).unwrap(), "00-1.5");
    assert_eq!(bfmt!("{:04}", 7).unwrap(), "0007");
}

#[test]
fn no_type_char_means_natural_conversion() {
    assert_eq!(bfmt!("{:6}", true).unwrap(), "  true");
    assert_eq!(bfmt!("{:3}", 'x').unwrap(), "  x");
    // Precision is a numeric-specific flag, ignored without a type char.
    assert_eq!(bfmt!("{:.2}", 3.14159).unwrap(), "3.14159");
}

#[test]
fn spec_state_does_not_leak_between_placeholders() {
    assert_eq!(
        bfmt!("{:08x} {} {:<4}", 255, 7, "a").unwrap(),
        "000000ff 7 a   "
    );
}

#[test]
fn format_value_entry_point() {
    assert_eq!(format_value(&Value::from(255), "08x").unwrap(), "000000ff");
    assert_eq!(format_value(&Value::from("hi"), "").unwrap(), "hi");
    assert!(format_value(&Value::from("hi"), "d").is_err());
}

#[test]
fn parsed_spec_shape() {
    let spec = FormatSpec::parse("*^12.3f");
    assert_eq!(spec.fill, '*');
    assert_eq!(spec.align, Align::Center);
    assert_eq!(spec.width, 12);
    assert_eq!(spec.precision, Some(3));
    assert_eq!(spec.type_char, Some(TypeChar::Fixed));
}

#[test]
fn default_spec_matches_bare_placeholder() {
    let spec = FormatSpec::default();
    assert_eq!(spec.fill, ' ');
    assert_eq!(spec.align, Align::Right);
    assert_eq!(spec.width, 0);
    assert_eq!(spec.precision, None);
    assert_eq!(spec.type_char, None);
}

//! Value rendering.
//!
//! Turns one bound argument plus its decoded [`FormatSpec`] into text:
//! the type conversion first, then fill/align/width padding. All state is
//! local to one call, so nothing leaks between placeholders.
//!
//! Integer types (`d x X o b B`) reject non-integer arguments and float
//! types (`f e g`) reject non-float arguments with
//! [`Error::TypeMismatch`](crate::Error::TypeMismatch); no implicit numeric
//! coercion happens here.

use crate::spec::{Align, FormatSpec, TypeChar};
use crate::value::Value;
use crate::{Error, Result};

/// Default precision for fixed and scientific float output.
const DEFAULT_PRECISION: usize = 6;

/// Bit count for `{:b}` when the spec carries no width.
const DEFAULT_BINARY_BITS: usize = 8;

/// Renders one argument through a decoded spec.
///
/// `offset` is the placeholder's byte offset in the template, carried into
/// type-mismatch errors.
pub fn render(value: &Value, spec: &FormatSpec, offset: usize) -> Result<String> {
    let core = match spec.type_char {
        // No recognized type: natural conversion, numeric-specific flags
        // (precision) are ignored, padding still applies.
        None => value.to_string(),
        Some(ty) => match ty {
            TypeChar::Decimal => match value {
                Value::Int(i) => i.to_string(),
                _ => int_bits(value, ty, offset)?.to_string(),
            },
            TypeChar::HexLower => format!("{:x}", int_bits(value, ty, offset)?),
            TypeChar::HexUpper => format!("{:X}", int_bits(value, ty, offset)?),
            TypeChar::Octal => format!("{:o}", int_bits(value, ty, offset)?),
            // Width is the bit count here, not a padding minimum, so binary
            // output skips the padding pass entirely.
            TypeChar::Binary => return Ok(bit_string(int_bits(value, ty, offset)?, spec.width)),
            TypeChar::Fixed => {
                let precision = spec.precision.unwrap_or(DEFAULT_PRECISION);
                format!("{:.*}", precision, float_of(value, ty, offset)?)
            }
            TypeChar::Scientific => {
                let precision = spec.precision.unwrap_or(DEFAULT_PRECISION);
                format!("{:.*e}", precision, float_of(value, ty, offset)?)
            }
            TypeChar::General => {
                let f = float_of(value, ty, offset)?;
                match spec.precision {
                    None => f.to_string(),
                    Some(p) => general(f, p),
                }
            }
        },
    };

    Ok(pad(core, spec))
}

/// The unsigned bit pattern of an integer argument, or a type mismatch.
fn int_bits(value: &Value, ty: TypeChar, offset: usize) -> Result<u64> {
    value
        .as_bits()
        .ok_or_else(|| Error::type_mismatch(offset, ty.as_char(), value.kind()))
}

fn float_of(value: &Value, ty: TypeChar, offset: usize) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| Error::type_mismatch(offset, ty.as_char(), value.kind()))
}

/// Fixed-width bit string over the low `width` bits, MSB first.
fn bit_string(bits: u64, width: usize) -> String {
    let count = if width == 0 { DEFAULT_BINARY_BITS } else { width };
    (0..count)
        .rev()
        .map(|i| {
            if i < u64::BITS as usize && (bits >> i) & 1 == 1 {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}

/// General float conversion with `digits` significant digits.
///
/// Picks fixed or scientific notation by the rounded exponent: scientific
/// when it falls below -4 or reaches the digit count, fixed otherwise,
/// with trailing fractional zeros dropped either way. A precision of 0 is
/// treated as 1 significant digit.
fn general(f: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if !f.is_finite() {
        return f.to_string();
    }
    // Rounding at the requested digit count can bump the exponent (999.5
    // at two digits is 1.0e3), so derive it from the rounded rendering.
    let sci = format!("{:.*e}", digits - 1, f);
    let exponent = match sci.rfind('e') {
        Some(at) => sci[at + 1..].parse::<i32>().unwrap_or(0),
        None => 0,
    };
    if exponent < -4 || exponent >= digits as i32 {
        match sci.rfind('e') {
            Some(at) => {
                let mantissa = trim_zeros(sci[..at].to_string());
                format!("{}{}", mantissa, &sci[at..])
            }
            None => sci,
        }
    } else {
        let fractional = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(format!("{:.*}", fractional, f))
    }
}

/// Drops trailing fractional zeros (and a bare trailing dot) from a
/// fixed-point rendering, for the `g` general type.
fn trim_zeros(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Pads `core` to the spec's width with its fill character.
///
/// Width counts characters, not bytes and not display cells. Center
/// alignment is true centering with the surplus fill on the right.
fn pad(core: String, spec: &FormatSpec) -> String {
    let len = core.chars().count();
    if spec.width == 0 || len >= spec.width {
        return core;
    }
    let missing = spec.width - len;
    let mut out = String::with_capacity(core.len() + missing);
    match spec.align {
        Align::Right => {
            out.extend(std::iter::repeat(spec.fill).take(missing));
            out.push_str(&core);
        }
        Align::Left => {
            out.push_str(&core);
            out.extend(std::iter::repeat(spec.fill).take(missing));
        }
        Align::Center => {
            let left = missing / 2;
            out.extend(std::iter::repeat(spec.fill).take(left));
            out.push_str(&core);
            out.extend(std::iter::repeat(spec.fill).take(missing - left));
        }
    }
    out
}

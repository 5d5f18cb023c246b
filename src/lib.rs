//! # bracefmt
//!
//! A runtime brace-placeholder string formatter: a small `str.format`-style
//! engine resolving `{}`, `{N}` and `{:spec}` placeholders against a
//! heterogeneous ordered argument list.
//!
//! ## Key Features
//!
//! - **Positional and auto-indexed placeholders**: `{}` walks an
//!   auto-index cursor, `{N}` addresses arguments directly and may repeat
//! - **Format specs**: `{:spec}` carries fill, alignment, width, precision
//!   and a type character (`{:08x}`, `{:<10}`, `{:.2f}`, `{:16b}`)
//! - **Forgiving by design where it matters**: an out-of-range `{N}` is not
//!   an error; it passes through verbatim so templates can be applied to
//!   partial argument sets
//! - **Strict where it matters**: unmatched braces, named placeholders,
//!   argument shortfalls and spec/argument type mismatches all fail with
//!   the byte offset of the offending placeholder
//! - **Call-local state only**: safe to call from any number of threads
//!   without synchronization
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bracefmt = "0.1"
//! ```
//!
//! ### Basic formatting
//!
//! ```rust
//! use bracefmt::bfmt;
//!
//! let s = bfmt!("Name: {}, Age: {}, Score: {}", "Alice", 25, 95.5).unwrap();
//! assert_eq!(s, "Name: Alice, Age: 25, Score: 95.5");
//! ```
//!
//! ### Explicit indices and specs
//!
//! ```rust
//! use bracefmt::bfmt;
//!
//! assert_eq!(bfmt!("{0} vs {0}", "tie").unwrap(), "tie vs tie");
//! assert_eq!(bfmt!("{:08x}", 255).unwrap(), "000000ff");
//! assert_eq!(bfmt!("{{{}}}", 1).unwrap(), "{1}");
//! ```
//!
//! ### The slice API
//!
//! The macros are sugar over [`format`], which takes the template and a
//! slice of [`Value`] arguments:
//!
//! ```rust
//! use bracefmt::{format, Value};
//!
//! let args = vec![Value::from(2), Value::from(3), Value::from(5)];
//! assert_eq!(format("{} + {} = {}", &args).unwrap(), "2 + 3 = 5");
//! ```
//!
//! ## Template Syntax
//!
//! See the [`syntax`] module for the complete placeholder mini-language
//! reference.
//!
//! ## Performance Characteristics
//!
//! - **Scanning**: single pass, O(n) in the template length
//! - **Binding**: O(p) in the placeholder count
//! - **Memory**: everything is allocated, used and dropped within one
//!   `format` call; the engine holds no global or cached state
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API (except for logic errors that indicate bugs)
//! - Proper error propagation with `Result` types

pub mod bind;
pub mod error;
pub mod macros;
pub mod render;
pub mod scan;
pub mod ser;
pub mod spec;
pub mod syntax;
pub mod value;

pub use error::{Error, Result};
pub use ser::ValueSerializer;
pub use spec::{Align, FormatSpec, TypeChar};
pub use value::{Kind, Value};

use bind::Binding;
use serde::Serialize;

/// Formats a template against an ordered argument list.
///
/// Placeholders resolve left to right: `{}` and `{:spec}` consume the next
/// unused argument position, `{N}` addresses position `N` directly. `{{` and
/// `}}` render literal braces. See [`syntax`] for the full grammar.
///
/// # Examples
///
/// ```rust
/// use bracefmt::{format, args};
///
/// let s = format("Hello, {}!", &args!["World"]).unwrap();
/// assert_eq!(s, "Hello, World!");
/// ```
///
/// # Errors
///
/// Fails on unmatched braces, named placeholders, spec/argument type
/// mismatches, and templates demanding more arguments than supplied. Errors
/// abort the whole call; no partial output is returned. An out-of-range
/// explicit index is NOT an error; the placeholder passes through
/// unchanged:
///
/// ```rust
/// use bracefmt::{format, args};
///
/// assert_eq!(format("{5}", &args![1, 2]).unwrap(), "{5}");
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format(template: &str, arguments: &[Value]) -> Result<String> {
    let tokens = scan::scan(template)?;
    let bindings = bind::bind(tokens, arguments.len())?;

    let mut output = String::with_capacity(template.len());
    for binding in bindings {
        match binding {
            Binding::Literal(text) | Binding::Passthrough(text) => output.push_str(&text),
            Binding::Arg {
                index,
                spec,
                offset,
            } => {
                let spec = match spec {
                    Some(raw) => FormatSpec::parse(&raw),
                    None => FormatSpec::default(),
                };
                output.push_str(&render::render(&arguments[index], &spec, offset)?);
            }
        }
    }
    Ok(output)
}

/// Renders a single value through a raw format spec.
///
/// This is the renderer behind `{:spec}` placeholders, exposed directly for
/// callers that already hold a [`Value`].
///
/// # Examples
///
/// ```rust
/// use bracefmt::{format_value, Value};
///
/// assert_eq!(format_value(&Value::from(255), "08x").unwrap(), "000000ff");
/// assert_eq!(format_value(&Value::from("hi"), "").unwrap(), "hi");
/// ```
///
/// # Errors
///
/// Returns a type mismatch if the spec's type character is incompatible with
/// the value's runtime kind.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_value(value: &Value, raw_spec: &str) -> Result<String> {
    render::render(value, &FormatSpec::parse(raw_spec), 0)
}

/// Converts any primitive `T: Serialize` into a format argument.
///
/// Useful for passing newtype wrappers and unit enum variants as arguments
/// without manual unwrapping.
///
/// # Examples
///
/// ```rust
/// use bracefmt::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Celsius(f64);
///
/// assert_eq!(to_value(&Celsius(21.5)).unwrap(), Value::Float(21.5));
/// ```
///
/// # Errors
///
/// Returns an error for compound types (sequences, maps, structs): only
/// leaf values can be format arguments.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Builds a `Vec<Value>` from heterogeneous arguments.
///
/// Every expression must convert into [`crate::Value`] via `From`, which
/// covers the primitive integer widths, floats, `bool`, `char`, `&str` and
/// `String`.
///
/// # Examples
///
/// ```rust
/// use bracefmt::{args, Value};
///
/// let arguments = args!["Alice", 25, 95.5];
/// assert_eq!(arguments[0], Value::from("Alice"));
/// assert_eq!(arguments.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        Vec::<$crate::Value>::new()
    };

    ($($arg:expr),+ $(,)?) => {
        vec![$($crate::Value::from($arg)),+]
    };
}

/// Formats a template against inline arguments.
///
/// Shorthand for [`crate::format`] with an [`args!`] list; evaluates to a
/// `Result<String>`.
///
/// # Examples
///
/// ```rust
/// use bracefmt::bfmt;
///
/// let s = bfmt!("{} + {} = {}", 2, 3, 5).unwrap();
/// assert_eq!(s, "2 + 3 = 5");
/// ```
#[macro_export]
macro_rules! bfmt {
    ($template:expr) => {
        $crate::format($template, &$crate::args![])
    };

    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format($template, &$crate::args![$($arg),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn test_args_macro_empty() {
        let arguments = args![];
        assert!(arguments.is_empty());
    }

    #[test]
    fn test_args_macro_mixed() {
        let arguments = args!["Alice", 25, 95.5, true, 'x'];
        assert_eq!(
            arguments,
            vec![
                Value::Str("Alice".to_string()),
                Value::Int(25),
                Value::Float(95.5),
                Value::Bool(true),
                Value::Char('x'),
            ]
        );
    }

    #[test]
    fn test_args_macro_trailing_comma() {
        let arguments = args![1, 2,];
        assert_eq!(arguments.len(), 2);
    }

    #[test]
    fn test_bfmt_macro() {
        assert_eq!(bfmt!("Hello, {}!", "World").unwrap(), "Hello, World!");
        assert_eq!(bfmt!("no placeholders").unwrap(), "no placeholders");
    }
}

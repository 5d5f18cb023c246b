//! Property-based tests - pragmatic approach covering the formatting
//! invariants across a wide range of generated inputs.

use bracefmt::{args, format, Value};
use proptest::prelude::*;

proptest! {
    // Templates without braces or backslashes come back unchanged.
    #[test]
    fn prop_identity(template in "[^{}\\\\]*") {
        prop_assert_eq!(format(&template, &[]).unwrap(), template);
    }

    // Formatting is idempotent on its own placeholder-free output.
    #[test]
    fn prop_idempotent_on_literal_output(template in "[^{}\\\\]*") {
        let once = format(&template, &[]).unwrap();
        prop_assert_eq!(format(&once, &[]).unwrap(), once);
    }

    // Escaped braces always halve: "{{x}}" renders "{x}"... except that the
    // output then contains live braces, so only the first pass is checked.
    #[test]
    fn prop_escaped_braces(inner in "[^{}\\\\:]*") {
        let template = std::format!("{{{{{}}}}}", inner);
        let expected = std::format!("{{{}}}", inner);
        prop_assert_eq!(format(&template, &[]).unwrap(), expected);
    }

    // Natural integer conversion matches the standard one.
    #[test]
    fn prop_int_display(n in any::<i64>()) {
        prop_assert_eq!(format("{}", &args![n]).unwrap(), n.to_string());
    }

    #[test]
    fn prop_uint_display(n in any::<u64>()) {
        prop_assert_eq!(format("{}", &args![n]).unwrap(), n.to_string());
    }

    // Any out-of-range explicit index passes through verbatim.
    #[test]
    fn prop_out_of_range_passthrough(index in 3u64..1_000_000) {
        let template = std::format!("{{{}}}", index);
        let arguments = args![1, 2, 3];
        prop_assert_eq!(format(&template, &arguments).unwrap(), template);
    }

    // Padding always reaches the requested width and never truncates.
    #[test]
    fn prop_width_is_a_minimum(s in "[a-z]{0,12}", width in 0usize..30) {
        let template = std::format!("{{:{}}}", width);
        let out = format(&template, &args![s.clone()]).unwrap();
        prop_assert_eq!(out.chars().count(), s.len().max(width));
        prop_assert!(out.contains(&s));
    }

    // Hex output always matches the standard library's rendering.
    #[test]
    fn prop_hex_matches_std(n in any::<u64>()) {
        prop_assert_eq!(
            format("{:x}", &args![n]).unwrap(),
            std::format!("{:x}", n)
        );
    }

    // Auto placeholders bind every argument exactly once, in order.
    #[test]
    fn prop_autos_bind_in_order(values in prop::collection::vec(any::<i32>(), 1..10)) {
        let template: String = (0..values.len()).map(|_| "{} ").collect();
        let arguments: Vec<Value> = values.iter().map(|&v| Value::from(v)).collect();
        let expected: String = values.iter().map(|v| std::format!("{} ", v)).collect();
        prop_assert_eq!(format(&template, &arguments).unwrap(), expected);
    }
}

//! Numeric coercion for operator-entered values.
//!
//! Optical parameters are typed free-form at the prompt. A stored value is
//! either a cleanly parsed number or NULL: blank answers and answers that
//! fail to parse are dropped to NULL instead of failing the record.

use std::str::FromStr;

/// Parse a prompt answer into `Some(T)`, or `None` when the answer is
/// blank or does not parse.
///
/// Surrounding whitespace is ignored, matching the tolerance of the
/// numeric parsers this replaces.
pub fn parse_or_null<T: FromStr>(input: &str) -> Option<T> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_values() {
        assert_eq!(parse_or_null::<f64>("-2.50"), Some(-2.5));
        assert_eq!(parse_or_null::<f64>("+1.00"), Some(1.0));
        assert_eq!(parse_or_null::<f64>("0"), Some(0.0));
    }

    #[test]
    fn parses_axis_degrees() {
        assert_eq!(parse_or_null::<i32>("90"), Some(90));
        assert_eq!(parse_or_null::<i32>("0"), Some(0));
    }

    #[test]
    fn blank_input_is_null() {
        assert_eq!(parse_or_null::<f64>(""), None);
        assert_eq!(parse_or_null::<f64>("   "), None);
        assert_eq!(parse_or_null::<i32>("\t"), None);
    }

    #[test]
    fn garbage_input_is_null_not_an_error() {
        assert_eq!(parse_or_null::<f64>("abc"), None);
        assert_eq!(parse_or_null::<f64>("2,50"), None);
        assert_eq!(parse_or_null::<i32>("ninety"), None);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(parse_or_null::<f64>(" -2.50 "), Some(-2.5));
        assert_eq!(parse_or_null::<i32>(" 85\n"), Some(85));
    }

    #[test]
    fn fractional_text_does_not_parse_as_axis() {
        // Axis fields take an integer parse; "2.5" degrades to NULL.
        assert_eq!(parse_or_null::<i32>("2.5"), None);
    }
}

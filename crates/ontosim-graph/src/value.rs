//! Free-text `key: value` annotations and the numeric/unit value lexer.
//!
//! Grammar of a value, as understood here:
//!
//! ```text
//! value   := number? rest
//! number  := (DIGIT | '.')+      -- at most one '.'
//! rest    := WS* unit
//! ```
//!
//! The lexer never fails. A value without a numeric prefix becomes
//! [`ParsedValue::Text`]. A digit run too long for `i64` is read as a float.
//! The only prefix that does not parse is a bare `.`, which becomes
//! [`ParsedValue::Unparsed`].

use std::fmt;

/// A number read from the start of a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericLiteral {
    Integer(i64),
    Float(f64),
}

impl NumericLiteral {
    pub fn as_f64(&self) -> f64 {
        match self {
            NumericLiteral::Integer(i) => *i as f64,
            NumericLiteral::Float(f) => *f,
        }
    }
}

impl fmt::Display for NumericLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericLiteral::Integer(i) => write!(f, "{i}"),
            NumericLiteral::Float(x) => write!(f, "{x}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    /// `"266 L/min"` → `266` with unit `L/min`; `"5.49"` → `5.49` without unit.
    Numeric {
        number: NumericLiteral,
        unit: Option<String>,
    },
    /// The prefix looked numeric but did not parse. The raw prefix is kept for
    /// the value and the whole input value stands in for the unit.
    Unparsed { raw_number: String, unit: String },
    /// No numeric prefix at all.
    Text(String),
}

/// Split `value` into its numeric prefix and the remainder.
///
/// Returns `None` when `value` does not start with a digit or `.`.
pub fn scan_numeric_prefix(value: &str) -> Option<(&str, &str)> {
    let mut seen_dot = false;
    let mut end = 0;
    for (i, c) in value.char_indices() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if end == 0 {
        None
    } else {
        Some((&value[..end], &value[end..]))
    }
}

pub fn parse_value(value: &str) -> ParsedValue {
    let Some((number, rest)) = scan_numeric_prefix(value) else {
        return ParsedValue::Text(value.to_string());
    };

    let parsed = if number.contains('.') {
        number.parse::<f64>().ok().map(NumericLiteral::Float)
    } else {
        number
            .parse::<i64>()
            .map(NumericLiteral::Integer)
            .or_else(|_| number.parse::<f64>().map(NumericLiteral::Float))
            .ok()
    };

    match parsed {
        Some(number) => {
            let unit = rest.trim_start();
            ParsedValue::Numeric {
                number,
                unit: (!unit.is_empty()).then(|| unit.to_string()),
            }
        }
        None => ParsedValue::Unparsed {
            raw_number: number.to_string(),
            unit: value.to_string(),
        },
    }
}

/// Split an `additionalInformation` string into trimmed `(key, value)` pairs.
///
/// Segments are separated by `,`; a segment without `:` is skipped. Only the
/// first `:` separates key from value, so `"window: 08:00-17:00"` keeps its
/// time range intact.
pub fn split_annotations(info: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for segment in info.split(',').map(str::trim) {
        let Some((key, value)) = segment.split_once(':') else {
            if !segment.is_empty() {
                tracing::debug!(segment, "skipping annotation without `:`");
            }
            continue;
        };
        out.push((key.trim().to_string(), value.trim().to_string()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn integer_with_unit() {
        assert_eq!(
            parse_value("266 L/min"),
            ParsedValue::Numeric {
                number: NumericLiteral::Integer(266),
                unit: Some("L/min".to_string()),
            }
        );
    }

    #[test]
    fn float_without_unit() {
        assert_eq!(
            parse_value("5.49"),
            ParsedValue::Numeric {
                number: NumericLiteral::Float(5.49),
                unit: None,
            }
        );
    }

    #[test]
    fn unit_glued_to_number() {
        assert_eq!(
            parse_value("2000rpm"),
            ParsedValue::Numeric {
                number: NumericLiteral::Integer(2000),
                unit: Some("rpm".to_string()),
            }
        );
    }

    #[test]
    fn second_dot_starts_the_unit() {
        assert_eq!(
            parse_value("1.2.3 mm"),
            ParsedValue::Numeric {
                number: NumericLiteral::Float(1.2),
                unit: Some(".3 mm".to_string()),
            }
        );
    }

    #[test]
    fn text_without_numeric_prefix() {
        assert_eq!(
            parse_value("diesel"),
            ParsedValue::Text("diesel".to_string())
        );
        assert_eq!(parse_value(""), ParsedValue::Text(String::new()));
    }

    #[test]
    fn bare_dot_falls_back_to_unparsed() {
        assert_eq!(
            parse_value(". per shift"),
            ParsedValue::Unparsed {
                raw_number: ".".to_string(),
                unit: ". per shift".to_string(),
            }
        );
    }

    #[test]
    fn overflowing_integer_is_read_as_float() {
        assert_eq!(
            parse_value("99999999999999999999 t"),
            ParsedValue::Numeric {
                number: NumericLiteral::Float(1e20),
                unit: Some("t".to_string()),
            }
        );
    }

    #[test]
    fn splits_annotations_and_skips_malformed() {
        let pairs = split_annotations(
            "maxFlowRate: 266 L/min, garbage ,maintenanceIntervalCheck : 1000 working hours, window: 08:00",
        );
        assert_eq!(
            pairs,
            vec![
                ("maxFlowRate".to_string(), "266 L/min".to_string()),
                (
                    "maintenanceIntervalCheck".to_string(),
                    "1000 working hours".to_string()
                ),
                ("window".to_string(), "08:00".to_string()),
            ]
        );
    }

    #[test]
    fn empty_annotations() {
        assert!(split_annotations("").is_empty());
    }

    proptest! {
        #[test]
        fn integer_and_unit_are_recovered(n in 0u32..1_000_000, unit in "[A-Za-z/%][A-Za-z/% ]{0,12}") {
            let unit = unit.trim_end().to_string();
            let parsed = parse_value(&format!("{n} {unit}"));
            let expected_unit = (!unit.is_empty()).then(|| unit.clone());
            prop_assert_eq!(parsed, ParsedValue::Numeric {
                number: NumericLiteral::Integer(n as i64),
                unit: expected_unit,
            });
        }

        #[test]
        fn float_prefix_is_recovered(whole in 0u32..100_000, frac in 0u32..1000, unit in "[A-Za-z]{0,6}") {
            let text = format!("{whole}.{frac}");
            let parsed = parse_value(&format!("{text}{unit}"));
            match parsed {
                ParsedValue::Numeric { number, unit: got_unit } => {
                    prop_assert_eq!(number, NumericLiteral::Float(text.parse::<f64>().unwrap()));
                    prop_assert_eq!(got_unit, (!unit.is_empty()).then(|| unit.clone()));
                }
                other => prop_assert!(false, "unexpected {:?}", other),
            }
        }
    }
}

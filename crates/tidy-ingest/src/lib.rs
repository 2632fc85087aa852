//! Raw text ingestion.
//!
//! Pasted input is split on runs of newline or comma characters, trimmed,
//! and converted to the column's declared type. Parsing always produces a
//! full replacement for the column's data; separator-only input yields the
//! empty variant, which clears whatever was stored before.

use tidy_model::{ColumnData, ColumnType};
use tracing::{debug, warn};

/// Parse raw pasted text into typed column data.
///
/// Numeric columns convert each token by taking its longest prefix that
/// parses as `f64`, so unit-suffixed input like `12px` ingests as `12`.
/// A token with no numeric prefix is coerced to `0` rather than
/// rejected. Ingestion never fails on malformed numeric tokens; it
/// degrades the data and logs a warning instead.
pub fn parse_raw_input(raw: &str, column_type: ColumnType) -> ColumnData {
    let tokens = split_tokens(raw);
    debug!(count = tokens.len(), %column_type, "parsed raw input");
    match column_type {
        ColumnType::Categorical => {
            ColumnData::Categorical(tokens.iter().map(|t| (*t).to_string()).collect())
        }
        ColumnType::Numeric => {
            ColumnData::Numeric(tokens.iter().map(|t| parse_numeric_token(t)).collect())
        }
    }
}

/// Split on any run of newline or comma characters, trim, drop empties.
///
/// Token order is preserved. Carriage returns survive the split but are
/// removed by trimming, so CRLF input behaves like LF input.
fn split_tokens(raw: &str) -> Vec<&str> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Longest numeric prefix of the token, or `0` when none parses.
fn parse_numeric_token(token: &str) -> f64 {
    for end in (1..=token.len()).rev() {
        if let Some(prefix) = token.get(..end)
            && let Ok(value) = prefix.parse::<f64>()
        {
            if end < token.len() {
                debug!(token, prefix, "trailing text dropped from numeric token");
            }
            return value;
        }
    }
    warn!(token, "non-numeric token coerced to 0");
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_and_newlines() {
        let data = parse_raw_input("North, South\nEast,,\n West ", ColumnType::Categorical);
        assert_eq!(
            data,
            ColumnData::Categorical(vec![
                "North".to_string(),
                "South".to_string(),
                "East".to_string(),
                "West".to_string(),
            ])
        );
    }

    #[test]
    fn crlf_input_is_trimmed() {
        let data = parse_raw_input("a\r\nb\r\n", ColumnType::Categorical);
        assert_eq!(
            data,
            ColumnData::Categorical(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn malformed_numeric_tokens_coerce_to_zero() {
        let data = parse_raw_input("12, abc, 7", ColumnType::Numeric);
        assert_eq!(data, ColumnData::Numeric(vec![12.0, 0.0, 7.0]));
    }

    #[test]
    fn unit_suffixes_drop_to_the_numeric_prefix() {
        let data = parse_raw_input("12px, 3.5kg, -2.5e2m", ColumnType::Numeric);
        assert_eq!(data, ColumnData::Numeric(vec![12.0, 3.5, -250.0]));
    }

    #[test]
    fn separator_only_input_is_empty() {
        for raw in ["", ",", "\n,\n", " \n "] {
            let data = parse_raw_input(raw, ColumnType::Numeric);
            assert_eq!(data, ColumnData::Numeric(Vec::new()), "input {raw:?}");
        }
    }
}

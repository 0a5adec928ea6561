//! Parse Maven-style `-Dkey=value` parameter strings

use tracing::trace;

/// Token prefix introducing a system property definition
const DEFINE_PREFIX: &str = "-D";

/// A single `-Dkey=value` definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenParameter {
    /// Property name (between `-D` and the first `=`)
    pub key: String,
    /// Everything after the first `=`
    pub value: String,
}

/// Strip one matched pair of surrounding quotes
///
/// Only a single pair is removed, and only when the first and last characters
/// are the same quote character.
pub fn strip_quotes(raw: &str) -> &str {
    for quote in ['\'', '"'] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

/// Split on runs of ASCII whitespace (space, tab, line feed, vertical tab,
/// form feed, carriage return)
///
/// Other Unicode spaces such as U+00A0 stay inside their token.
fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
        .filter(|token| !token.is_empty())
}

/// Find the value of `key` in a composite parameter string
///
/// The first token starting with `-D<key>=` wins and its value is everything
/// after the token's first `=`. Tokens of any other shape are ignored.
pub fn find_parameter<'a>(raw: &'a str, key: &str) -> Option<&'a str> {
    let prefix = format!("{}{}=", DEFINE_PREFIX, key);

    tokens(strip_quotes(raw))
        .find(|token| token.starts_with(&prefix))
        .and_then(|token| token.split_once('='))
        .map(|(_, value)| value)
}

/// List every well-formed definition in declaration order
///
/// Duplicates are kept; lookups through [`find_parameter`] resolve to the
/// first occurrence.
pub fn parse_parameters(raw: &str) -> Vec<MavenParameter> {
    tokens(strip_quotes(raw))
        .filter_map(|token| {
            let parameter = parse_token(token);
            if parameter.is_none() {
                trace!("Skipping malformed parameter token: {}", token);
            }
            parameter
        })
        .collect()
}

fn parse_token(token: &str) -> Option<MavenParameter> {
    let definition = token.strip_prefix(DEFINE_PREFIX)?;
    let (key, value) = definition.split_once('=')?;
    if key.is_empty() {
        return None;
    }
    Some(MavenParameter {
        key: key.to_string(),
        value: value.to_string(),
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: each key of a two-parameter string resolves to its own value
        #[test]
        fn test_two_parameters(
            k1 in "[a-z][a-z0-9.]{0,8}",
            k2 in "[A-Z][A-Z0-9_]{0,8}",
            v1 in "[^\\s'\"]{0,10}",
            v2 in "[^\\s'\"]{0,10}",
        ) {
            let raw = format!("-D{}={} -D{}={}", k1, v1, k2, v2);

            prop_assert_eq!(find_parameter(&raw, &k1), Some(v1.as_str()));
            prop_assert_eq!(find_parameter(&raw, &k2), Some(v2.as_str()));
            prop_assert_eq!(find_parameter(&raw, "missing-key"), None);
        }

        /// Property: wrapping in one matched pair of quotes is transparent
        #[test]
        fn test_quote_wrapping_is_transparent(
            key in "[a-z]{1,8}",
            value in "[a-z0-9=]{0,10}",
            quote in prop_oneof![Just('\''), Just('"')],
        ) {
            let raw = format!("-Dother=x -D{}={}", key, value);
            let wrapped = format!("{}{}{}", quote, raw, quote);

            prop_assert_eq!(find_parameter(&raw, &key), find_parameter(&wrapped, &key));
            prop_assert_eq!(find_parameter(&raw, "other"), find_parameter(&wrapped, "other"));
        }
    }
}

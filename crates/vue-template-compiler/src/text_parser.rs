//! Interpolation (`{{ }}`) detection and text expression building.

use crate::helpers::to_js_string;
use once_cell::sync::Lazy;
use regex::Regex;
use vue_shared::Cache;

/// Opening and closing interpolation delimiters.
pub type Delimiters = (String, String);

static DEFAULT_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{\{(.+?)\}\}").expect("default interpolation regex is valid"));

static DELIMITER_RE_CACHE: Lazy<Cache<Delimiters, Option<Regex>>> = Lazy::new(Cache::new);

/// A piece of parsed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextToken {
    /// Literal text between interpolations.
    Literal(String),
    /// Interpolated expression.
    Binding(String),
}

/// Result of [`parse_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedText {
    /// Concatenation expression, e.g. `"Hi "+_s(name)`.
    pub expression: String,
    /// Raw tokens in source order.
    pub tokens: Vec<TextToken>,
}

/// Parse text for interpolations. Returns `None` when there are none.
pub fn parse_text(text: &str, delimiters: Option<&Delimiters>) -> Option<ParsedText> {
    let custom;
    let tag_re: &Regex = match delimiters {
        Some(d) => {
            custom = DELIMITER_RE_CACHE.compute_or_fetch(d, build_delimiter_regex)?;
            &custom
        }
        None => &DEFAULT_TAG_RE,
    };

    let mut tokens = Vec::new();
    let mut parts = Vec::new();
    let mut last_index = 0;

    for caps in tag_re.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last_index {
            let literal = &text[last_index..whole.start()];
            parts.push(to_js_string(literal));
            tokens.push(TextToken::Literal(literal.to_string()));
        }
        let exp = inner.as_str().trim();
        parts.push(format!("_s({exp})"));
        tokens.push(TextToken::Binding(exp.to_string()));
        last_index = whole.end();
    }

    if tokens.is_empty() {
        return None;
    }
    if last_index < text.len() {
        let literal = &text[last_index..];
        parts.push(to_js_string(literal));
        tokens.push(TextToken::Literal(literal.to_string()));
    }

    Some(ParsedText {
        expression: parts.join("+"),
        tokens,
    })
}

fn build_delimiter_regex((open, close): &Delimiters) -> Option<Regex> {
    let pattern = format!("{}((?s:.)+?){}", regex::escape(open), regex::escape(close));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::debug!(error = %e, open, close, "unusable interpolation delimiters");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_interpolation() {
        assert_eq!(parse_text("plain text", None), None);
    }

    #[test]
    fn test_mixed_text() {
        let parsed = parse_text("Hi {{ name }}!", None).unwrap();
        assert_eq!(parsed.expression, r#""Hi "+_s(name)+"!""#);
        assert_eq!(
            parsed.tokens,
            vec![
                TextToken::Literal("Hi ".into()),
                TextToken::Binding("name".into()),
                TextToken::Literal("!".into()),
            ]
        );
    }

    #[test]
    fn test_custom_delimiters() {
        let delimiters = ("${".to_string(), "}".to_string());
        let parsed = parse_text("${a}${b}", Some(&delimiters)).unwrap();
        assert_eq!(parsed.expression, "_s(a)+_s(b)");
        assert_eq!(parse_text("{{ a }}", Some(&delimiters)), None);
    }
}

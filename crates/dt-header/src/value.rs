use std::fmt;

/// A classified property value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A decimal cell like `<42>`
    Integer(i64),
    /// A string literal like `"foo"`, without the quotes. Escapes are not processed.
    QuotedString(String),
    /// Anything else, kept verbatim. For `<...>` cells that aren't decimal, this is the content
    /// between the brackets.
    Token(String),
}

impl Value {
    /// Classifies a trimmed raw property value.
    ///
    /// Rules are tried in order:
    /// 1. `<digits>` is an [`Integer`](Value::Integer), any other `<...>` is a
    ///    [`Token`](Value::Token) of its content
    /// 2. `"..."` is a [`QuotedString`](Value::QuotedString)
    /// 3. everything else is a [`Token`](Value::Token)
    ///
    /// Only ASCII decimal digits are recognized, `<0x10>` is the token `0x10`. A digit run that
    /// doesn't fit in an [`i64`] stays a token.
    ///
    /// # Example
    ///
    /// ```
    /// use dt_header::Value;
    /// assert_eq!(Value::classify("<42>"), Value::Integer(42));
    /// assert_eq!(Value::classify("<&gpio0>"), Value::Token("&gpio0".to_owned()));
    /// assert_eq!(Value::classify("\"okay\""), Value::QuotedString("okay".to_owned()));
    /// assert_eq!(Value::classify("GPIO_ACTIVE_LOW"), Value::Token("GPIO_ACTIVE_LOW".to_owned()));
    /// ```
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        if let Some(cell) = raw.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
            if !cell.is_empty() && cell.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(number) = cell.parse() {
                    return Self::Integer(number);
                }
            }
            return Self::Token(cell.to_owned());
        }

        if raw.starts_with('"') && raw.ends_with('"') {
            // A lone `"` both starts and ends with a quote
            let content = raw.get(1..raw.len() - 1).unwrap_or_default();
            return Self::QuotedString(content.to_owned());
        }

        Self::Token(raw.to_owned())
    }

    /// Returns true if this is a [`Token`](Value::Token) that looks like a C macro name, that is
    /// it only consists of `A-Z`, `0-9` and `_`.
    #[must_use]
    pub fn is_macro_like(&self) -> bool {
        match self {
            Self::Token(token) => is_macro_like(token),
            _ => false,
        }
    }
}

fn is_macro_like(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
}

/// Formats the value as the right-hand side of a `#define`.
///
/// Strings are wrapped in quotes without re-escaping. Tokens are wrapped in quotes unless they
/// [look like macros](Value::is_macro_like).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(number) => write!(f, "{number}"),
            Self::Token(token) if is_macro_like(token) => f.write_str(token),
            Self::QuotedString(text) | Self::Token(text) => write!(f, "\"{text}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[track_caller]
    fn check(raw: &str, expected: Value, rendered: &str) {
        let value = Value::classify(raw);
        assert_eq!(value, expected);
        assert_eq!(value.to_string(), rendered);
    }

    fn token(s: &str) -> Value {
        Value::Token(s.to_owned())
    }

    #[test]
    fn classify_integers() {
        check("<42>", Value::Integer(42), "42");
        check("<0>", Value::Integer(0), "0");
        check("<007>", Value::Integer(7), "7");
        check("<9223372036854775807>", Value::Integer(i64::MAX), "9223372036854775807");
    }

    #[test]
    fn overflowing_integers_stay_tokens() {
        check(
            "<99999999999999999999>",
            token("99999999999999999999"),
            "99999999999999999999",
        );
    }

    #[test]
    fn classify_cells_that_are_not_decimal() {
        check("<0x10>", token("0x10"), "\"0x10\"");
        check("<&gpio0 5>", token("&gpio0 5"), "\"&gpio0 5\"");
        check("<1 2>", token("1 2"), "\"1 2\"");
        check("<-1>", token("-1"), "\"-1\"");
        check("<>", token(""), "\"\"");
        check("<IRQ_NUM>", token("IRQ_NUM"), "IRQ_NUM");
        // full-width digits aren't decimal digits here
        check("<１>", token("１"), "\"１\"");
    }

    #[test]
    fn classify_strings() {
        check("\"foo-bar\"", Value::QuotedString("foo-bar".to_owned()), "\"foo-bar\"");
        check("\"\"", Value::QuotedString(String::new()), "\"\"");
        check("\"\"\"", Value::QuotedString("\"".to_owned()), "\"\"\"");
        check("\"", Value::QuotedString(String::new()), "\"\"");
        // no escape processing either way
        check("\"a\\n\"", Value::QuotedString("a\\n".to_owned()), "\"a\\n\"");
        // uppercase strings stay quoted
        check("\"OKAY\"", Value::QuotedString("OKAY".to_owned()), "\"OKAY\"");
    }

    #[test]
    fn classify_tokens() {
        check("ACTIVE_HIGH", token("ACTIVE_HIGH"), "ACTIVE_HIGH");
        check("123", token("123"), "123");
        check("foo(1)", token("foo(1)"), "\"foo(1)\"");
        check("Mixed_Case", token("Mixed_Case"), "\"Mixed_Case\"");
        check("A + B", token("A + B"), "\"A + B\"");
        check("\"half", token("\"half"), "\"\"half\"");
        check("<open", token("<open"), "\"<open\"");
        check("", token(""), "\"\"");
    }

    #[test]
    fn macro_like() {
        assert!(token("GPIO_0").is_macro_like());
        assert!(!token("gpio").is_macro_like());
        assert!(!token("").is_macro_like());
        assert!(!Value::Integer(1).is_macro_like());
        assert!(!Value::QuotedString("ABC".to_owned()).is_macro_like());
    }
}

//! PostgreSQL literal rendering.
//!
//! Text is single-quoted with `'` doubled and `\` doubled. Text containing a
//! backslash gets the escape-string prefix (`E'...'`), which is the only form
//! in which a doubled backslash reads back as one under
//! `standard_conforming_strings = on`.

use std::fmt;

/// One value in an `INSERT` tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlLiteral {
    Null,
    Text(String),
    Integer(i64),
    /// Rendered as `ARRAY[...]` over individually quoted elements.
    TextArray(Vec<String>),
}

impl SqlLiteral {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// `None` renders as unquoted `NULL`.
    #[must_use]
    pub fn nullable(value: Option<&str>) -> Self {
        value.map_or(Self::Null, |v| Self::Text(v.to_string()))
    }

    #[must_use]
    pub fn text_array(values: &[String]) -> Self {
        Self::TextArray(values.to_vec())
    }

    /// True when any text inside the literal contains a NUL byte, which
    /// PostgreSQL text columns reject.
    #[must_use]
    pub fn contains_nul(&self) -> bool {
        match self {
            Self::Null | Self::Integer(_) => false,
            Self::Text(value) => value.contains('\0'),
            Self::TextArray(values) => values.iter().any(|v| v.contains('\0')),
        }
    }
}

impl From<u32> for SqlLiteral {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl fmt::Display for SqlLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Text(value) => f.write_str(&quote_text(value)),
            Self::Integer(value) => write!(f, "{value}"),
            Self::TextArray(values) if values.is_empty() => f.write_str("ARRAY[]::text[]"),
            Self::TextArray(values) => {
                let items: Vec<String> = values.iter().map(String::as_str).map(quote_text).collect();
                write!(f, "ARRAY[{}]", items.join(","))
            }
        }
    }
}

/// Quote a string as a PostgreSQL text literal.
#[must_use]
pub fn quote_text(value: &str) -> String {
    let escaped = value.replace('\'', "''").replace('\\', "\\\\");
    if value.contains('\\') {
        format!("E'{escaped}'")
    } else {
        format!("'{escaped}'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Decode a literal the way PostgreSQL reads it, for the escapes
    /// [`quote_text`] produces.
    fn decode(literal: &str) -> String {
        let (escape_string, body) = match literal.strip_prefix('E') {
            Some(rest) => (true, rest),
            None => (false, literal),
        };
        let body = &body[1..body.len() - 1];
        let mut out = String::new();
        let mut chars = body.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\'' => {
                    assert_eq!(chars.next(), Some('\''), "lone quote in {literal}");
                    out.push('\'');
                }
                '\\' if escape_string => {
                    assert_eq!(chars.next(), Some('\\'), "unexpected escape in {literal}");
                    out.push('\\');
                }
                other => out.push(other),
            }
        }
        out
    }

    #[rstest]
    #[case("Quiet Luxury")]
    #[case("O'Brien\\path")]
    #[case("''")]
    #[case("\\\\server\\share")]
    #[case("it's a \"quote\"")]
    #[case("Создание HTML/CSS структуры сайта — его «скелета».")]
    #[case("")]
    #[case("trailing\\")]
    fn text_round_trips(#[case] original: &str) {
        let literal = quote_text(original);
        assert_eq!(decode(&literal), original);
    }

    #[test]
    fn plain_text_has_no_escape_prefix() {
        assert_eq!(quote_text("Quiet Luxury"), "'Quiet Luxury'");
        assert_eq!(quote_text("O'Brien"), "'O''Brien'");
    }

    #[test]
    fn backslash_text_uses_escape_string() {
        assert_eq!(quote_text("O'Brien\\path"), "E'O''Brien\\\\path'");
    }

    #[test]
    fn none_renders_bare_null() {
        assert_eq!(SqlLiteral::nullable(None).to_string(), "NULL");
        assert_eq!(SqlLiteral::nullable(Some("Фронтенд")).to_string(), "'Фронтенд'");
    }

    #[test]
    fn integers_are_unquoted() {
        assert_eq!(SqlLiteral::from(15).to_string(), "15");
    }

    #[test]
    fn arrays_keep_order_and_escape_elements() {
        let tags = vec!["Premium".to_string(), "Gen Z".to_string(), "Rock'n'Roll".to_string()];
        assert_eq!(
            SqlLiteral::text_array(&tags).to_string(),
            "ARRAY['Premium','Gen Z','Rock''n''Roll']"
        );
    }

    #[test]
    fn empty_array_is_typed_not_null() {
        assert_eq!(SqlLiteral::text_array(&[]).to_string(), "ARRAY[]::text[]");
    }

    #[test]
    fn nul_detection() {
        assert!(SqlLiteral::text("a\0b").contains_nul());
        assert!(SqlLiteral::text_array(&["ok".to_string(), "\0".to_string()]).contains_nul());
        assert!(!SqlLiteral::text("fine").contains_nul());
        assert!(!SqlLiteral::Null.contains_nul());
    }
}

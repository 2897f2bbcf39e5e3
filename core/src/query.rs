use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Bytes that `encodeURIComponent` escapes. Everything outside
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` ends up here.
const COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("value is not valid utf-8 after decoding: {0}")]
    InvalidUtf8(String),
}

/// One form control's contribution to the query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `name=value` with only the value encoded.
    pub fn to_pair(&self) -> String {
        format!("{}={}", self.name, encode_component(&self.value))
    }
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Inverse of [`encode_component`]. The page only ever encodes; this exists so the encoding
/// can be checked to round-trip.
pub fn decode_component(value: &str) -> Result<String, QueryError> {
    percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| QueryError::InvalidUtf8(value.to_string()))
}

/// Joins fields in the order given. No sorting, no deduplication.
pub fn build_query(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(FormField::to_pair)
        .collect::<Vec<_>>()
        .join("&")
}

/// Splits a query produced by [`build_query`] back into fields. A leading `?` is ignored.
/// Round-trip helper, like [`decode_component`]: nothing on the page parses queries.
pub fn parse_query(query: &str) -> Result<Vec<FormField>, QueryError> {
    let raw = query.strip_prefix('?').unwrap_or(query);
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    raw.split('&')
        .map(|chunk| -> Result<FormField, QueryError> {
            let mut iter = chunk.splitn(2, '=');
            let name = iter.next().unwrap_or("");
            let value = iter.next().unwrap_or("");
            Ok(FormField::new(name, decode_component(value)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_unreserved_marks_literal() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
    }

    #[test]
    fn escapes_reserved_characters_uppercase() {
        assert_eq!(encode_component("a b&c=d/e?f#g+h"), "a%20b%26c%3Dd%2Fe%3Ff%23g%2Bh");
        assert_eq!(encode_component("100%"), "100%25");
    }

    #[test]
    fn encodes_non_ascii_as_utf8_bytes() {
        assert_eq!(encode_component("é"), "%C3%A9");
        assert_eq!(encode_component("日本"), "%E6%97%A5%E6%9C%AC");
    }

    #[test]
    fn empty_field_list_builds_empty_query() {
        assert_eq!(build_query(&[]), "");
    }

    #[test]
    fn names_are_not_encoded() {
        let field = FormField::new("a b", "c d");
        assert_eq!(field.to_pair(), "a b=c%20d");
    }

    #[test]
    fn decode_rejects_broken_utf8() {
        assert!(matches!(
            decode_component("%FF"),
            Err(QueryError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn parse_keeps_empty_names_and_values() {
        let fields = parse_query("?=x&y=").unwrap();
        assert_eq!(fields, vec![FormField::new("", "x"), FormField::new("y", "")]);
    }
}

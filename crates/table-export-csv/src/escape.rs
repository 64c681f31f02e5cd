//! CSV field escaping

use std::borrow::Cow;

/// Make a field safe to place between delimiters.
///
/// Embedded double quotes are doubled. The field is wrapped in double quotes
/// when it contained a quote, the delimiter, a carriage return or a line
/// feed. Any other text is returned as-is without allocating.
///
/// ```rust
/// use table_export_csv::escape_field;
///
/// assert_eq!(escape_field("plain", ","), "plain");
/// assert_eq!(escape_field("c,d", ","), "\"c,d\"");
/// assert_eq!(escape_field("e\"f", ","), "\"e\"\"f\"");
/// ```
pub fn escape_field<'a>(text: &'a str, delimiter: &str) -> Cow<'a, str> {
    let has_quote = text.contains('"');
    let needs_quotes = has_quote
        || (!delimiter.is_empty() && text.contains(delimiter))
        || text.contains('\r')
        || text.contains('\n');

    if !needs_quotes {
        return Cow::Borrowed(text);
    }

    let body = if has_quote {
        Cow::Owned(text.replace('"', "\"\""))
    } else {
        Cow::Borrowed(text)
    };

    let mut quoted = String::with_capacity(body.len() + 2);
    quoted.push('"');
    quoted.push_str(&body);
    quoted.push('"');
    Cow::Owned(quoted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_field("abc", ","), Cow::Borrowed("abc")));
        assert!(matches!(escape_field("", ","), Cow::Borrowed("")));
    }

    #[test]
    fn test_delimiter_is_quoted() {
        assert_eq!(escape_field("a,b", ","), "\"a,b\"");
        assert_eq!(escape_field("a;b", ";"), "\"a;b\"");
        // Comma is not special once the delimiter changes
        assert_eq!(escape_field("a,b", ";"), "a,b");
    }

    #[test]
    fn test_multi_char_delimiter() {
        assert_eq!(escape_field("a||b", "||"), "\"a||b\"");
        assert_eq!(escape_field("a|b", "||"), "a|b");
    }

    #[test]
    fn test_line_breaks_are_quoted() {
        assert_eq!(escape_field("a\nb", ","), "\"a\nb\"");
        assert_eq!(escape_field("a\rb", ","), "\"a\rb\"");
        assert_eq!(escape_field("a\r\nb", ","), "\"a\r\nb\"");
    }

    #[test]
    fn test_quotes_are_doubled() {
        assert_eq!(escape_field("e\"f", ","), "\"e\"\"f\"");
        assert_eq!(escape_field("\"", ","), "\"\"\"\"");
        assert_eq!(escape_field("say \"hi\", bye", ","), "\"say \"\"hi\"\", bye\"");
    }

    #[test]
    fn test_empty_delimiter_never_matches() {
        assert_eq!(escape_field("abc", ""), "abc");
    }

    proptest! {
        #[test]
        fn prop_special_fields_are_quoted(s in "(?s).{0,40}", delim in "[,;|\t]") {
            let escaped = escape_field(&s, &delim);
            let special = s.contains(delim.as_str())
                || s.contains('"')
                || s.contains('\r')
                || s.contains('\n');

            if special {
                prop_assert!(escaped.starts_with('"') && escaped.ends_with('"'));
                let inner = &escaped[1..escaped.len() - 1];
                prop_assert_eq!(inner.replace("\"\"", "\""), s.clone());
                prop_assert_eq!(inner.matches('"').count(), 2 * s.matches('"').count());
            } else {
                prop_assert_eq!(&*escaped, s.as_str());
            }
        }
    }
}

//! Case conversion between snake_case, camelCase and StudlyCase.
//!
//! Word boundaries are ASCII: only ASCII letters change case when a word
//! is capitalised, while the final lower-casing in `snake` is Unicode.

/// Characters that start a new word when capitalising
const WORD_DELIMITERS: [char; 6] = [' ', '\t', '\r', '\n', '\x0c', '\x0b'];

/// Default delimiter used by `snake_default`
pub const DEFAULT_DELIMITER: &str = "_";

/// Convert a value to StudlyCase.
///
/// `-` and `_` separate words; every word is capitalised and the spaces
/// between them removed.
///
/// ```
/// use satchel_str::studly;
///
/// assert_eq!(studly("foo_bar-baz"), "FooBarBaz");
/// ```
pub fn studly(value: &str) -> String {
    let spaced: String = value
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();

    capitalize_words(&spaced).replace(' ', "")
}

/// Convert a value to camelCase
pub fn camel(value: &str) -> String {
    lower_first(&studly(value))
}

/// Convert a value to snake case using `delimiter` between words.
///
/// Values made only of ASCII lower-case letters are returned unchanged.
pub fn snake(value: &str, delimiter: &str) -> String {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_lowercase()) {
        return value.to_string();
    }

    let compact: String = capitalize_words(value)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let mut out = String::with_capacity(compact.len() + delimiter.len() * 4);
    for (index, c) in compact.chars().enumerate() {
        if index > 0 && c.is_ascii_uppercase() {
            out.push_str(delimiter);
        }
        out.push(c);
    }

    out.to_lowercase()
}

/// `snake` with the `_` delimiter
pub fn snake_default(value: &str) -> String {
    snake(value, DEFAULT_DELIMITER)
}

pub fn is_snake_case(value: &str) -> bool {
    value == snake_default(value)
}

pub fn is_camel_case(value: &str) -> bool {
    value == camel(value)
}

pub fn is_studly_case(value: &str) -> bool {
    value == studly(value)
}

// Upper-case the first ASCII letter of every whitespace-delimited word
fn capitalize_words(value: &str) -> String {
    let mut at_word_start = true;
    value
        .chars()
        .map(|c| {
            let mapped = if at_word_start { c.to_ascii_uppercase() } else { c };
            at_word_start = WORD_DELIMITERS.contains(&c);
            mapped
        })
        .collect()
}

fn lower_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_studly() {
        assert_eq!(studly("foo_bar_baz"), "FooBarBaz");
        assert_eq!(studly("foo-bar-baz"), "FooBarBaz");
        assert_eq!(studly("foo bar"), "FooBar");
        assert_eq!(studly("FooBar"), "FooBar");
        assert_eq!(studly(""), "");
    }

    #[test]
    fn test_studly_keeps_non_ascii_words() {
        // Only ASCII letters are capitalised
        assert_eq!(studly("ñoño_bar"), "ñoñoBar");
    }

    #[test]
    fn test_camel() {
        assert_eq!(camel("foo_bar_baz"), "fooBarBaz");
        assert_eq!(camel("foo-bar"), "fooBar");
        assert_eq!(camel("FooBar"), "fooBar");
        assert_eq!(camel(""), "");
    }

    #[test]
    fn test_snake() {
        assert_eq!(snake_default("fooBarBaz"), "foo_bar_baz");
        assert_eq!(snake_default("fooBarBazQux"), "foo_bar_baz_qux");
        assert_eq!(snake_default("FooBar"), "foo_bar");
        assert_eq!(snake("FooBar", "-"), "foo-bar");
        assert_eq!(snake_default("foo bar"), "foo_bar");
        assert_eq!(snake_default("foo"), "foo");
        assert_eq!(snake_default(""), "");
    }

    #[test]
    fn test_snake_consecutive_capitals() {
        assert_eq!(snake_default("HTMLParser"), "h_t_m_l_parser");
    }

    #[test]
    fn test_snake_removes_unicode_whitespace() {
        assert_eq!(snake_default("foo\u{00a0}bar"), "foobar");
        assert_eq!(snake_default("foo\tbar"), "foo_bar");
    }

    #[test]
    fn test_case_predicates() {
        assert!(is_snake_case("foo_bar_baz"));
        assert!(!is_snake_case("fooBarBaz"));
        assert!(is_snake_case("foo"));

        assert!(is_camel_case("fooBarBaz"));
        assert!(!is_camel_case("foo_bar_baz"));
        assert!(is_camel_case("foo"));

        assert!(is_studly_case("FooBarBaz"));
        assert!(!is_studly_case("foo_bar_baz"));
        assert!(is_studly_case("Foo"));
    }
}

//! Code-point safe text helpers.
//!
//! Lengths and offsets count Unicode scalar values, never bytes.
//! Needle predicates accept one needle or a list; an empty needle never
//! matches.

/// One needle or a list of needles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Needles<'a> {
    One(&'a str),
    Many(Vec<&'a str>),
}

impl<'a> Needles<'a> {
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, &'a str>> {
        self.as_slice().iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        match self {
            Needles::One(needle) => std::slice::from_ref(needle),
            Needles::Many(needles) => needles,
        }
    }

    /// Replacement paired with the search needle at `index`
    fn replacement(&self, index: usize) -> &'a str {
        match self {
            Needles::One(replacement) => replacement,
            Needles::Many(replacements) => replacements.get(index).copied().unwrap_or(""),
        }
    }
}

impl<'a> From<&'a str> for Needles<'a> {
    fn from(needle: &'a str) -> Self {
        Needles::One(needle)
    }
}

impl<'a> From<&'a String> for Needles<'a> {
    fn from(needle: &'a String) -> Self {
        Needles::One(needle.as_str())
    }
}

impl<'a> From<Vec<&'a str>> for Needles<'a> {
    fn from(needles: Vec<&'a str>) -> Self {
        Needles::Many(needles)
    }
}

impl<'a> From<&[&'a str]> for Needles<'a> {
    fn from(needles: &[&'a str]) -> Self {
        Needles::Many(needles.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Needles<'a> {
    fn from(needles: [&'a str; N]) -> Self {
        Needles::Many(needles.to_vec())
    }
}

impl<'a> From<&'a [String]> for Needles<'a> {
    fn from(needles: &'a [String]) -> Self {
        Needles::Many(needles.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a Vec<String>> for Needles<'a> {
    fn from(needles: &'a Vec<String>) -> Self {
        Needles::from(needles.as_slice())
    }
}

/// Unicode lower-case
pub fn lower(value: &str) -> String {
    value.to_lowercase()
}

/// Number of code points
pub fn length(value: &str) -> usize {
    value.chars().count()
}

/// Code-point substring.
///
/// A negative `start` counts from the end. A negative `length` stops that
/// many code points before the end; `None` runs to the end.
pub fn substr(value: &str, start: i64, length: Option<i64>) -> String {
    let total = value.chars().count() as i64;

    let begin = if start < 0 {
        total.saturating_add(start).max(0)
    } else {
        start.min(total)
    };
    let end = match length {
        None => total,
        Some(len) if len < 0 => total.saturating_add(len).max(begin),
        Some(len) => begin.saturating_add(len).min(total),
    };

    value
        .chars()
        .skip(begin as usize)
        .take((end - begin) as usize)
        .collect()
}

/// Replace every occurrence of each search needle.
///
/// A list of searches pairs with a list of replacements by position
/// (missing replacements are empty); a single replacement is used for
/// every search. Replacements are applied in order.
pub fn replace<'a, 'b>(
    search: impl Into<Needles<'a>>,
    replace: impl Into<Needles<'b>>,
    subject: &str,
) -> String {
    let search: Needles<'a> = search.into();
    let replace: Needles<'b> = replace.into();

    search
        .iter()
        .enumerate()
        .filter(|(_, needle)| !needle.is_empty())
        .fold(subject.to_string(), |acc, (index, needle)| {
            acc.replace(needle, replace.replacement(index))
        })
}

/// Check whether `haystack` starts with any of the needles
pub fn starts_with<'a>(haystack: &str, needles: impl Into<Needles<'a>>) -> bool {
    let needles: Needles<'a> = needles.into();
    let found = needles
        .iter()
        .any(|needle| !needle.is_empty() && haystack.starts_with(needle));
    found
}

/// Check whether `haystack` ends with any of the needles
pub fn ends_with<'a>(haystack: &str, needles: impl Into<Needles<'a>>) -> bool {
    let needles: Needles<'a> = needles.into();
    let found = needles
        .iter()
        .any(|needle| !needle.is_empty() && haystack.ends_with(needle));
    found
}

/// Check whether `haystack` contains any of the needles
pub fn contains<'a>(haystack: &str, needles: impl Into<Needles<'a>>) -> bool {
    let needles: Needles<'a> = needles.into();
    let found = needles
        .iter()
        .any(|needle| !needle.is_empty() && haystack.contains(needle));
    found
}

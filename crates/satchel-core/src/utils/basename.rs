//! Class basename helpers.
//!
//! Strip module, namespace and package qualifiers from a type name while
//! keeping its shape: `alloc::vec::Vec<alloc::string::String>` becomes
//! `Vec<String>`, `App\Models\User` becomes `User`.

/// Short name of a type or class identifier, without qualifiers
pub fn class_basename(name: &str) -> String {
    let name = name.trim_end_matches(is_qualifier);
    let mut output = String::with_capacity(name.len());
    let mut start = 0;

    for (index, c) in name.char_indices() {
        if is_delimiter(c) {
            output.push_str(last_segment(&name[start..index]));
            output.push(c);
            start = index + c.len_utf8();
        }
    }
    output.push_str(last_segment(&name[start..]));

    output
}

/// Short name of `T`
pub fn type_basename<T: ?Sized>() -> String {
    class_basename(std::any::type_name::<T>())
}

/// Short name of the type of `value`
pub fn basename_of_val<T: ?Sized>(_value: &T) -> String {
    type_basename::<T>()
}

fn last_segment(path: &str) -> &str {
    path.rsplit(is_qualifier).next().unwrap_or(path)
}

fn is_qualifier(c: char) -> bool {
    matches!(c, ':' | '\\' | '/')
}

// Characters that separate type names inside a generic signature
fn is_delimiter(c: char) -> bool {
    matches!(c, '<' | '>' | ',' | ' ' | '&' | '*' | '(' | ')' | '[' | ']' | ';')
}

//! String helpers for satchel
//!
//! This crate provides:
//! - Case conversion (`studly`, `camel`, `snake`) and case predicates
//! - Code-point safe `lower`, `length` and `substr`
//! - Needle predicates (`starts_with`, `ends_with`, `contains`) and `replace`
//! - Random strings drawn from an injectable secure source

pub mod case;
pub mod random;
pub mod text;

// Re-export main operations
pub use case::{camel, is_camel_case, is_snake_case, is_studly_case, snake, snake_default, studly};
pub use random::{
    random, random_alphanumeric, random_ascii, random_numeric, random_string,
    random_string_with_numeric, random_string_with_special_character, Generator, RandomSource,
    SystemRandomSource,
};
pub use text::{contains, ends_with, length, lower, replace, starts_with, substr, Needles};

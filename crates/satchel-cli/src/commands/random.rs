//! `satchel random` command implementation.

use crate::RandomKind;
use satchel_config::Settings;
use satchel_core::SatchelResult;
use satchel_str::Generator;

/// Execute `satchel random`; an explicit `--charset` forces a custom draw
pub fn execute(kind: RandomKind, has_charset: bool, settings: &Settings) -> SatchelResult<String> {
    generate(&Generator::system(), kind, has_charset, settings)
}

pub(crate) fn generate<R: satchel_str::RandomSource>(
    generator: &Generator<R>,
    kind: RandomKind,
    has_charset: bool,
    settings: &Settings,
) -> SatchelResult<String> {
    let length = settings.random.length;
    let kind = if has_charset { RandomKind::Custom } else { kind };

    match kind {
        RandomKind::Base64 => generator.random(length),
        RandomKind::Ascii => generator.random_ascii(length),
        RandomKind::Numeric => generator.random_numeric(length),
        RandomKind::Alphanumeric => generator.random_alphanumeric(length),
        RandomKind::Special => generator.random_string_with_special_character(length),
        RandomKind::Custom => generator.random_string(length, settings.random.charset.as_deref()),
    }
}

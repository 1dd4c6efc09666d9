//! `satchel case` command implementation.

use crate::CaseStyle;
use satchel_config::Settings;
use satchel_str::{camel, lower, snake, studly};

/// Execute `satchel case`
pub fn execute(style: CaseStyle, value: &str, settings: &Settings) -> String {
    match style {
        CaseStyle::Camel => camel(value),
        CaseStyle::Studly => studly(value),
        CaseStyle::Snake => snake(value, &settings.case.delimiter),
        CaseStyle::Lower => lower(value),
    }
}

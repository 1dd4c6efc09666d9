//! Common utilities for benchmarks

use criterion::Criterion;
use indexmap::IndexMap;
use pprof::criterion::{Output, PProfProfiler};
use satchel_core::Value;

/// Configure criterion with flamegraph profiling support
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(2))
        .measurement_time(std::time::Duration::from_secs(5))
        .sample_size(100)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

/// Tree `depth` levels deep with `width` keys per level; every level has
/// a `next` key leading further down and the leaf holds `depth`
pub fn nested_value(depth: usize, width: usize) -> Value {
    (0..depth).fold(Value::Int(depth as i64), |inner, level| {
        let mut map: IndexMap<String, Value> = (0..width)
            .map(|i| (format!("key{}", i), Value::Int((level * width + i) as i64)))
            .collect();
        map.insert("next".to_string(), inner);
        Value::Map(map)
    })
}

/// Dot path reaching the leaf of `nested_value(depth, _)`
pub fn leaf_path(depth: usize) -> String {
    vec!["next"; depth].join(".")
}

/// JSON text with the same shape as `nested_value`
pub fn nested_json(depth: usize, width: usize) -> String {
    serde_json::Value::try_from(&nested_value(depth, width))
        .map(|json| json.to_string())
        .unwrap_or_default()
}

/// TOML text with `sections` tables of `keys` entries each
pub fn sectioned_toml(sections: usize, keys: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!("[section{}]\n", section));
        for key in 0..keys {
            content.push_str(&format!("key{} = \"value{}\"\n", key, key));
        }
        content.push('\n');
    }
    content
}

//! Builds the flat variable mapping consumed by template rendering.
//! Each logical field (name, dir, prefix, suffix, ...) is exploded into
//! one entry per case variant.

use crate::case::{transform, CaseVariant};
use crate::name::analyze;
use indexmap::IndexMap;

/// Flat variable-name to value mapping. Insertion order is preserved so
/// rendering contexts stay deterministic.
pub type VariableMapping = IndexMap<String, String>;

/// Explodes one logical field into its case variants:
/// `name` -> `name`, `nameParam`, `nameCamel`, `namePascal`, `nameSnake`,
/// `nameConstant`, `nameDot`.
fn explode(key: &str, value: &str) -> VariableMapping {
    let mut vars = VariableMapping::new();
    vars.insert(key.to_string(), value.to_string());
    for variant in CaseVariant::ALL {
        vars.insert(
            format!("{key}{}", variant.key_suffix()),
            transform(variant, value),
        );
    }
    vars
}

/// Builds the full variable mapping for one compilation.
///
/// `dir` is the basename of the resolved output directory. Every key is
/// present even when its source value is empty; transforms of the empty
/// string are all empty.
pub fn build_context(name: &str, dir: &str) -> VariableMapping {
    let breakdown = analyze(name);
    let mut vars = VariableMapping::new();
    let fields = [
        ("name", name),
        ("dir", dir),
        ("nameExt", breakdown.extension.as_str()),
        ("namePrefix", breakdown.prefix.as_str()),
        ("nameSuffix", breakdown.suffix.as_str()),
        ("nameWithoutExt", breakdown.name_without_extension.as_str()),
        ("nameWithoutPrefix", breakdown.name_without_prefix.as_str()),
        ("nameWithoutSuffix", breakdown.name_without_suffix.as_str()),
    ];
    for (key, value) in fields {
        vars.extend(explode(key, value));
    }
    vars
}

/// Converts a variable mapping into the JSON object the renderer consumes.
pub fn to_render_context(vars: &VariableMapping) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = vars
        .iter()
        .map(|(key, value)| (key.clone(), serde_json::Value::String(value.clone())))
        .collect();
    serde_json::Value::Object(map)
}

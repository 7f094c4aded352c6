//! Breaks a target name into its extension, prefix and suffix parts.
//! The breakdown feeds the variable mapping built in [`crate::context`].

use crate::case::{transform, CaseVariant};
use std::path::Path;

/// Structured breakdown of a target name. All fields may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameBreakdown {
    /// Last `.`-delimited suffix including the dot, e.g. `.ts`
    pub extension: String,
    /// The name with `extension` removed
    pub name_without_extension: String,
    /// Last token of the kebab-cased name (see note on `suffix`)
    pub prefix: String,
    /// Last token of the kebab-cased name. `prefix` and `suffix` draw from
    /// the same token; templates rely on that, so it stays.
    pub suffix: String,
    /// All tokens except the first, joined by `-`
    pub name_without_prefix: String,
    /// All tokens except the last, joined by `-`
    pub name_without_suffix: String,
}

/// Analyzes `name` into a [`NameBreakdown`].
///
/// Tokenization runs over the kebab-cased form of the name, so
/// `UserProfile`, `user_profile` and `user-profile` all break down the
/// same way. A name that yields a single token keeps its original,
/// unnormalized spelling in `name_without_prefix`/`name_without_suffix`
/// and has no prefix or suffix.
pub fn analyze(name: &str) -> NameBreakdown {
    let (extension, name_without_extension) = split_extension(name);

    let param = transform(CaseVariant::Param, name);
    let tokens: Vec<&str> = param.split('-').collect();

    if tokens.len() <= 1 {
        return NameBreakdown {
            extension,
            name_without_extension,
            prefix: String::new(),
            suffix: String::new(),
            name_without_prefix: name.to_string(),
            name_without_suffix: name.to_string(),
        };
    }

    let last = tokens[tokens.len() - 1].to_string();
    NameBreakdown {
        extension,
        name_without_extension,
        prefix: last.clone(),
        suffix: last,
        name_without_prefix: tokens[1..].join("-"),
        name_without_suffix: tokens[..tokens.len() - 1].join("-"),
    }
}

/// Splits `name` into `(extension, name_without_extension)`.
/// Names without a dot (or with only a leading dot) have no extension.
fn split_extension(name: &str) -> (String, String) {
    if !name.contains('.') {
        return (String::new(), name.to_string());
    }
    let path = Path::new(name);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or(name);
            (format!(".{ext}"), stem.to_string())
        }
        None => (String::new(), name.to_string()),
    }
}

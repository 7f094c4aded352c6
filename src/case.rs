//! Case variants for identifier-like strings.
//! Every variable in the template context exists once per variant, so a
//! template can ask for `{{namePascal}}` or `{{nameSnake}}` as needed.

use cruet::Inflector;

/// The standardized renderings of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseVariant {
    /// kebab-case, e.g. `user-profile`
    Param,
    /// camelCase, e.g. `userProfile`
    Camel,
    /// PascalCase, e.g. `UserProfile`
    Pascal,
    /// snake_case, e.g. `user_profile`
    Snake,
    /// SCREAMING_SNAKE_CASE, e.g. `USER_PROFILE`
    Constant,
    /// dot.case, e.g. `user.profile`
    Dot,
}

impl CaseVariant {
    pub const ALL: [CaseVariant; 6] = [
        CaseVariant::Param,
        CaseVariant::Camel,
        CaseVariant::Pascal,
        CaseVariant::Snake,
        CaseVariant::Constant,
        CaseVariant::Dot,
    ];

    /// Suffix appended to a logical key in the variable mapping,
    /// e.g. `name` + `Pascal` -> `namePascal`.
    pub fn key_suffix(self) -> &'static str {
        match self {
            CaseVariant::Param => "Param",
            CaseVariant::Camel => "Camel",
            CaseVariant::Pascal => "Pascal",
            CaseVariant::Snake => "Snake",
            CaseVariant::Constant => "Constant",
            CaseVariant::Dot => "Dot",
        }
    }
}

/// Converts `input` into the requested case variant.
///
/// Empty input stays empty and every variant is idempotent over its own
/// output. Words are split on case boundaries and on the `-`, `_`, `.`,
/// `/` and space delimiters; the delimiters are normalized up front so all
/// variants share one tokenization.
pub fn transform(variant: CaseVariant, input: &str) -> String {
    let input = input.replace(['.', '/', ' '], "-");
    match variant {
        CaseVariant::Param => input.to_kebab_case(),
        CaseVariant::Camel => input.to_camel_case(),
        CaseVariant::Pascal => input.to_pascal_case(),
        CaseVariant::Snake => input.to_snake_case(),
        CaseVariant::Constant => input.to_screaming_snake_case(),
        CaseVariant::Dot => input.to_kebab_case().replace('-', "."),
    }
}

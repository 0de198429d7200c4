use serde::Deserialize;
use std_util::str;

/// Identifier casing applied to names taken from the database.
///
/// Deserializes from the single-letter codes (`"c"`, `"p"`, ...) or the
/// long names (`"camel"`, `"pascal"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Case {
    /// `userRole`
    #[serde(rename = "c", alias = "camel")]
    Camel,

    /// `UserRole`
    #[serde(rename = "p", alias = "pascal")]
    Pascal,

    /// `USER_ROLE`
    #[serde(rename = "u", alias = "upper")]
    UpperSnake,

    /// `user_role`
    #[serde(rename = "l", alias = "lower")]
    LowerSnake,

    /// `user-role`
    #[serde(rename = "k", alias = "kebab")]
    Kebab,

    /// Leave the name as it is
    #[default]
    #[serde(rename = "o", alias = "original")]
    Original,
}

impl Case {
    pub fn apply(self, src: &str) -> String {
        match self {
            Self::Camel => str::camel_case(src),
            Self::Pascal => str::upper_camel_case(src),
            Self::UpperSnake => str::upper_snake_case(src),
            Self::LowerSnake => str::snake_case(src),
            Self::Kebab => str::kebab_case(src),
            Self::Original => src.to_string(),
        }
    }
}

//! Identifier recasing and English inflection.

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

/// `user_roles` -> `userRoles`
pub fn camel_case(src: &str) -> String {
    src.to_lower_camel_case()
}

/// `user_roles` -> `UserRoles`
pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

/// `UserRoles` -> `user_roles`
pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

/// `userRoles` -> `USER_ROLES`
pub fn upper_snake_case(src: &str) -> String {
    src.to_shouty_snake_case()
}

/// `userRoles` -> `user-roles`
pub fn kebab_case(src: &str) -> String {
    src.to_kebab_case()
}

pub fn pluralize(src: &str) -> String {
    pluralizer::pluralize(src, 2, false)
}

pub fn singularize(src: &str) -> String {
    pluralizer::pluralize(src, 1, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recase_snake_identifiers() {
        assert_eq!(camel_case("user_roles"), "userRoles");
        assert_eq!(upper_camel_case("user_roles"), "UserRoles");
        assert_eq!(upper_snake_case("userRoles"), "USER_ROLES");
        assert_eq!(kebab_case("user_roles"), "user-roles");
        assert_eq!(snake_case("UserRoles"), "user_roles");
    }

    #[test]
    fn inflect_trailing_word() {
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("user_roles"), "user_role");
        assert_eq!(pluralize("role"), "roles");
        assert_eq!(pluralize("category"), "categories");
    }
}

use crate::config::Case;
use std_util::str;

/// Recases a database identifier, singularizing it first if requested.
pub(crate) fn recase(src: &str, case: Case, singularize: bool) -> String {
    if singularize {
        case.apply(&str::singularize(src))
    } else {
        case.apply(src)
    }
}

/// Strips a primary-key suffix from a foreign-key field name, along with any
/// separator left behind: `user_id` -> `user`, `ownerId` -> `owner`.
///
/// Returns the field unchanged when no suffix applies or trimming would leave
/// nothing.
pub(crate) fn trim_id(field: &str, suffixes: &[String]) -> String {
    let mut trimmed = field;

    for suffix in suffixes {
        if trimmed.len() <= suffix.len() {
            continue;
        }

        let cut = trimmed.len() - suffix.len();
        if trimmed.is_char_boundary(cut) && trimmed[cut..].eq_ignore_ascii_case(suffix) {
            trimmed = &trimmed[..cut];
        }
    }

    match trimmed.trim_end_matches(['_', '-']) {
        "" => field.to_string(),
        trimmed => trimmed.to_string(),
    }
}

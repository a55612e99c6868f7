//! Input rules shared by the parameter types.

use crate::server::error::validation::ValidationErrors;

pub const MAX_USER_IDS: usize = 100;
pub const MAX_RSN_LEN: usize = 12;
pub const MAX_BOSS_NAME_LEN: usize = 64;
pub const MAX_SOURCE_NAME_LEN: usize = 64;
pub const MAX_REASON_LEN: usize = 255;
pub const MAX_EVENT_NAME_LEN: usize = 100;

/// RuneScape display names: letters, digits, spaces, `_` and `-`.
pub fn is_valid_rsn(rsn: &str) -> bool {
    let len = rsn.chars().count();
    (1..=MAX_RSN_LEN).contains(&len)
        && rsn
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
}

/// Point source names: lowercase letters, digits and `_`.
pub fn is_valid_source_name(name: &str) -> bool {
    (1..=MAX_SOURCE_NAME_LEN).contains(&name.len())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

pub fn is_valid_boss_name(name: &str) -> bool {
    (1..=MAX_BOSS_NAME_LEN).contains(&name.chars().count())
}

/// Boss names are stored lowercased and trimmed so lookups are case-insensitive.
pub fn normalize_boss_name(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn check_boss_name(errors: &mut ValidationErrors, name: &str) {
    errors.check(
        is_valid_boss_name(name),
        "boss_name",
        name,
        "length",
        format!("boss name must be 1 to {} characters", MAX_BOSS_NAME_LEN),
    );
}

pub fn check_source_name(errors: &mut ValidationErrors, name: &str) {
    errors.check(
        is_valid_source_name(name),
        "source",
        name,
        "pattern",
        format!(
            "point source must be 1 to {} characters of a-z, 0-9 and _",
            MAX_SOURCE_NAME_LEN
        ),
    );
}

pub fn check_user_ids(errors: &mut ValidationErrors, user_ids: &[u64]) {
    errors
        .check(
            !user_ids.is_empty(),
            "user_ids",
            0,
            "min_items",
            "at least one user id is required",
        )
        .check(
            user_ids.len() <= MAX_USER_IDS,
            "user_ids",
            user_ids.len(),
            "max_items",
            format!("at most {} user ids are allowed", MAX_USER_IDS),
        );
}

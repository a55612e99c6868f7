use crate::server::{error::validation::ValidationErrors, util::validate::MAX_USER_IDS};

/// Parses a comma-separated list of user ids from a path segment.
///
/// Duplicates are kept: settlement credits a user once per occurrence.
///
/// # Arguments
/// - `value` - Raw path segment, e.g. `"123,456,123"`
///
/// # Returns
/// - `Ok(Vec<u64>)` - Ids in request order
/// - `Err(ValidationErrors)` - Empty list, more than `MAX_USER_IDS` ids, or a
///   segment that is not an unsigned integer
pub fn parse_user_ids(value: &str) -> Result<Vec<u64>, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut ids = Vec::new();

    for part in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.parse::<u64>() {
            Ok(id) => ids.push(id),
            Err(_) => {
                errors.check(false, "user_ids", part, "format", "user ids must be unsigned integers");
            }
        }
    }

    errors
        .check(
            !ids.is_empty() || !errors.is_empty(),
            "user_ids",
            value,
            "min_items",
            "at least one user id is required",
        )
        .check(
            ids.len() <= MAX_USER_IDS,
            "user_ids",
            ids.len(),
            "max_items",
            format!("at most {} user ids are allowed", MAX_USER_IDS),
        );

    errors.into_result()?;
    Ok(ids)
}

use std::num::NonZeroU64;

use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalError(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .trim()
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a comma-separated list of Discord ids, skipping empty entries.
///
/// # Arguments
/// - `value` - Raw list such as `"123, 456"`
///
/// # Returns
/// - `Ok(Vec<u64>)` - Parsed ids in input order
/// - `Err(AppError::InternalError(ParseStringId))` - An entry was not numeric
pub fn parse_u64_list(value: &str) -> Result<Vec<u64>, AppError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_u64_from_string(entry.to_string()))
        .collect()
}

/// Extracts a user id from a Discord mention (`<@123>` or `<@!123>`).
///
/// A bare numeric id is accepted as well. Returns `None` for anything else,
/// including role mentions (`<@&123>`) and the zero id.
pub fn parse_user_mention(value: &str) -> Option<u64> {
    let trimmed = value.trim();
    let inner = match trimmed.strip_prefix("<@") {
        Some(rest) => rest.strip_suffix('>')?,
        None => trimmed,
    };
    let inner = inner.strip_prefix('!').unwrap_or(inner);

    inner.parse::<NonZeroU64>().ok().map(NonZeroU64::get)
}

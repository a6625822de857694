/// Parses a snowflake stored in the database.
///
/// Repositories surface malformed ids as `DbErr::Custom` so callers only deal with
/// database errors at that layer.
///
/// # Arguments
/// - `value` - The stored string to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed id
/// - `Err(DbErr::Custom)` - The stored value is not a valid snowflake
pub fn parse_stored_id(value: &str) -> Result<u64, sea_orm::DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| sea_orm::DbErr::Custom(format!("Failed to parse id '{}': {}", value, e)))
}

//! Blacklist factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a blacklist entry for the given user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord user ID as string
///
/// # Returns
/// - `Ok(entity::blacklist::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_blacklist_entry(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::blacklist::Model, DbErr> {
    entity::blacklist::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
    }
    .insert(db)
    .await
}

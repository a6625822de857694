//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User with customizable fields.
///
/// The user uses the new username system (discriminator `0`) and has no global name.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique username
/// - `avatar` - Optional avatar hash (padded to 32 characters if shorter)
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str, avatar: Option<&str>) -> User {
    let avatar = avatar.map(|hash| format!("{:0<32}", hash));

    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": avatar,
        "bot": false,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}

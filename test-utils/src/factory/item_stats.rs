//! Item stats factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating per-user item counters.
pub struct ItemStatsFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    items_collected: i64,
    items_destroyed: i64,
}

impl<'a> ItemStatsFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id().to_string(),
            items_collected: 0,
            items_destroyed: 0,
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn items_collected(mut self, items_collected: i64) -> Self {
        self.items_collected = items_collected;
        self
    }

    pub fn items_destroyed(mut self, items_destroyed: i64) -> Self {
        self.items_destroyed = items_destroyed;
        self
    }

    pub async fn build(self) -> Result<entity::item_stats::Model, DbErr> {
        entity::item_stats::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            items_collected: ActiveValue::Set(self.items_collected),
            items_destroyed: ActiveValue::Set(self.items_destroyed),
        }
        .insert(self.db)
        .await
    }
}

/// Creates item counters for a fresh user.
pub async fn create_item_stats(
    db: &DatabaseConnection,
    items_collected: i64,
    items_destroyed: i64,
) -> Result<entity::item_stats::Model, DbErr> {
    ItemStatsFactory::new(db)
        .items_collected(items_collected)
        .items_destroyed(items_destroyed)
        .build()
        .await
}

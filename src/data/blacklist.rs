use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct BlacklistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlacklistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn is_blacklisted(&self, user_id: u64) -> Result<bool, DbErr> {
        Ok(entity::prelude::Blacklist::find_by_id(user_id.to_string())
            .one(self.db)
            .await?
            .is_some())
    }

    /// Blacklists a user; adding an already blacklisted user is a no-op.
    pub async fn add(&self, user_id: u64) -> Result<(), DbErr> {
        entity::prelude::Blacklist::insert(entity::blacklist::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::blacklist::Column::UserId)
                .update_column(entity::blacklist::Column::UserId)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(())
    }
}

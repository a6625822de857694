use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::model::stats::ItemTotals;

pub struct ItemStatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemStatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sums collected and destroyed items over every user.
    ///
    /// # Returns
    /// - `Ok(ItemTotals)` - Totals, zero when the table is empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn totals(&self) -> Result<ItemTotals, DbErr> {
        let rows = entity::prelude::ItemStats::find().all(self.db).await?;

        Ok(rows
            .into_iter()
            .fold(ItemTotals::default(), |totals, row| ItemTotals {
                collected: totals.collected + row.items_collected,
                destroyed: totals.destroyed + row.items_destroyed,
            }))
    }
}

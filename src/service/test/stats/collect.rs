use super::*;

/// Tests collecting statistics.
///
/// Expected: counts passed through, item totals summed and uptime formatted
#[tokio::test]
async fn collects_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ItemStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_item_stats(db, 5, 1).await?;
    factory::create_item_stats(db, 2, 0).await?;

    let service = StatsService::new(db);
    let started_at = Utc::now() - Duration::hours(2) - Duration::seconds(30);

    let stats = service
        .collect(3, 120, Some(StdDuration::from_millis(85)), started_at)
        .await
        .unwrap();

    assert_eq!(stats.servers, 3);
    assert_eq!(stats.users, 120);
    assert_eq!(stats.ping_ms, Some(85));
    assert_eq!(stats.items_collected, 7);
    assert_eq!(stats.items_destroyed, 1);
    assert_eq!(stats.uptime, "2 hour(s)");

    Ok(())
}

use super::*;

/// Tests enabling every event through the ALL selection.
///
/// Verifies that a guild without a row gets one with all eight flags enabled.
///
/// Expected: Ok with every flag true
#[tokio::test]
async fn enables_all_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoggingConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoggingConfigRepository::new(db);
    let config = repo
        .set_flags(123456789, &LogEventSelection::All.events(), true)
        .await?;

    assert!(config.flags().iter().all(|(_, enabled)| *enabled));

    Ok(())
}

/// Tests disabling one event after enabling all of them.
///
/// Verifies that a single-field update leaves the other seven flags intact.
///
/// Expected: Ok with only message_edit disabled
#[tokio::test]
async fn disabling_one_event_keeps_the_rest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoggingConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoggingConfigRepository::new(db);
    repo.set_flags(123456789, &LogEvent::ALL, true).await?;
    repo.set_flags(123456789, &[LogEvent::MessageEdit], false)
        .await?;

    for event in LogEvent::ALL {
        let expected = event != LogEvent::MessageEdit;
        assert_eq!(repo.get_flag(123456789, event).await?, expected, "{event}");
    }

    Ok(())
}

/// Tests enabling a single event on a guild without a row.
///
/// Verifies that the inserted row has every other flag disabled.
///
/// Expected: Ok with only voice_state_update enabled
#[tokio::test]
async fn new_row_defaults_unselected_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoggingConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoggingConfigRepository::new(db);
    let config = repo
        .set_flags(123456789, &[LogEvent::VoiceStateUpdate], true)
        .await?;

    assert!(config.voice_state_update);
    assert!(!config.member_join);
    assert!(!config.channel_update);

    Ok(())
}

/// Tests that repeated updates never create duplicate rows.
///
/// Expected: Ok with exactly one row for the guild
#[tokio::test]
async fn keeps_single_row_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoggingConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoggingConfigRepository::new(db);
    repo.set_flags(123456789, &[LogEvent::MemberJoin], true)
        .await?;
    repo.set_flags(123456789, &[LogEvent::MemberRemove], true)
        .await?;
    repo.set_flags(123456789, &[LogEvent::MemberJoin], false)
        .await?;

    let count = entity::prelude::LoggingConfig::find().count(db).await?;
    assert_eq!(count, 1);

    let config = repo.get(123456789).await?.unwrap();
    assert!(!config.member_join);
    assert!(config.member_remove);

    Ok(())
}

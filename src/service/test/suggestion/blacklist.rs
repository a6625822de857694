use super::*;

/// Tests blacklisting through the button twice.
///
/// Expected: Ok both times with a single row
#[tokio::test]
async fn blacklisting_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Blacklist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new();
    let service = SuggestionService::new(db, &notifier, Some(SUPPORT_CHANNEL));

    service.blacklist(42).await.unwrap();
    service.blacklist(42).await.unwrap();

    assert_eq!(entity::prelude::Blacklist::find().count(db).await?, 1);

    Ok(())
}

/// Tests parsing button custom ids.
///
/// Expected: the author id for blacklist buttons, None otherwise
#[test]
fn parses_button_ids() {
    assert_eq!(parse_blacklist_button("blacklist:42"), Some(42));
    assert_eq!(parse_blacklist_button("blacklist:abc"), None);
    assert_eq!(parse_blacklist_button("logging:enable"), None);
}

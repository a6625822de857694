use super::*;

/// Tests posting a suggestion.
///
/// Expected: one embed in the support channel with a blacklist button for the author
#[tokio::test]
async fn posts_suggestion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Blacklist)
        .with_table(entity::prelude::Customisation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_setting(db, "1", "embed_color", "00ff00").await?;

    let notifier = RecordingNotifier::new();
    let service = SuggestionService::new(db, &notifier, Some(SUPPORT_CHANNEL));

    service
        .submit(42, "alice", Some(1), &suggestion(None))
        .await
        .unwrap();

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    let (channel_id, notification) = &sent[0];
    assert_eq!(*channel_id, SUPPORT_CHANNEL);
    assert_eq!(notification.title.as_deref(), Some("Suggestion: Dark mode"));
    assert_eq!(notification.description, "```Please add dark mode```");
    assert_eq!(notification.colour, 0x00FF00);
    assert_eq!(
        notification.field_value("Additional Information"),
        Some("```None provided```")
    );
    assert!(notification
        .footer
        .as_deref()
        .unwrap()
        .starts_with("Submitted by alice on "));

    let button = notification.button.as_ref().unwrap();
    assert_eq!(button.custom_id, "blacklist:42");
    assert_eq!(button.label, "Blacklist User");

    Ok(())
}

/// Tests a blacklisted author.
///
/// Expected: Err(Blacklisted) with nothing sent
#[tokio::test]
async fn refuses_blacklisted_authors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Blacklist)
        .with_table(entity::prelude::Customisation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_blacklist_entry(db, "42").await?;

    let notifier = RecordingNotifier::new();
    let service = SuggestionService::new(db, &notifier, Some(SUPPORT_CHANNEL));

    let result = service
        .submit(42, "alice", Some(1), &suggestion(Some("soon")))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Blacklisted))
    ));
    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests submitting without a reachable support channel.
///
/// Expected: Err(NotFound) when unset and when unavailable
#[tokio::test]
async fn reports_missing_support_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Blacklist)
        .with_table(entity::prelude::Customisation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new().with_unavailable(SUPPORT_CHANNEL);

    let unset = SuggestionService::new(db, &notifier, None)
        .submit(42, "alice", None, &suggestion(None))
        .await;
    assert!(matches!(unset, Err(AppError::NotFound(_))));

    let unavailable = SuggestionService::new(db, &notifier, Some(SUPPORT_CHANNEL))
        .submit(42, "alice", None, &suggestion(None))
        .await;
    assert!(matches!(unavailable, Err(AppError::NotFound(_))));

    Ok(())
}

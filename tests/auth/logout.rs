use character_gallery::model::session::Session;
use gallery_test_utils::prelude::*;

/// Expect logout to clear the persisted session
#[tokio::test]
async fn clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(factory::identity(factory::OWNER_EMAIL))
        .build()
        .await?;
    assert!(test.session().is_authenticated());

    test.auth().logout();

    assert_eq!(test.session(), Session::Anonymous);
    assert!(test.store.storage().is_empty());

    Ok(())
}

/// Expect logout to leave the remote collection untouched
#[tokio::test]
async fn leaves_remote_state_untouched() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::character("1", "Max", factory::OWNER_EMAIL))
        .with_session(factory::identity(factory::OWNER_EMAIL))
        .build()
        .await?;

    test.auth().logout();

    assert_eq!(test.api.call_count(), 0);
    assert_eq!(test.api.stored_characters().len(), 1);

    Ok(())
}

/// Expect a client built after logout to reject mutations
#[tokio::test]
async fn client_after_logout_is_anonymous() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::character("1", "Max", factory::OWNER_EMAIL))
        .with_session(factory::identity(factory::OWNER_EMAIL))
        .build()
        .await?;

    test.auth().logout();
    let client = test.client();

    assert!(!client.can_modify(&test.characters[0]));
    assert!(client.create(&factory::draft("Nova")).await.is_err());
    assert_eq!(test.api.call_count(), 0);

    Ok(())
}

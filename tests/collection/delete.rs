use character_gallery::gallery::{
    collection::DeleteOutcome,
    error::{AuthError, Error},
};
use gallery_test_utils::prelude::*;

async fn owner_setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_character(factory::character("1", "Max", factory::OWNER_EMAIL))
        .with_character(factory::character("2", "Mona", factory::OTHER_EMAIL))
        .with_character(factory::character("3", "Zed", factory::OWNER_EMAIL))
        .with_session(factory::identity(factory::OWNER_EMAIL))
        .build()
        .await
}

/// Expect the record removed and the others kept in order
#[tokio::test]
async fn removes_record_after_confirmation() -> Result<(), TestError> {
    let mut test = owner_setup().await?;

    let outcome = test
        .client()
        .delete(&test.characters, "3", |c| c.name == "Zed")
        .await?;
    let DeleteOutcome::Deleted(mutation) = outcome else {
        panic!("expected DeleteOutcome::Deleted, got {outcome:?}");
    };
    test.apply(mutation);

    let ids: Vec<&str> = test.characters.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
    assert_eq!(test.api.calls(), vec![ApiCall::DeleteCharacter("3".to_string())]);

    Ok(())
}

/// Expect a declined confirmation to issue no request
#[tokio::test]
async fn cancelled_confirmation_does_nothing() -> Result<(), TestError> {
    let test = owner_setup().await?;

    let outcome = test
        .client()
        .delete(&test.characters, "1", |_| false)
        .await?;

    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(test.api.call_count(), 0);
    assert_eq!(test.api.stored_characters().len(), 3);

    Ok(())
}

/// Expect a record owned by another session to be rejected before confirming
#[tokio::test]
async fn rejects_record_of_other_owner() -> Result<(), TestError> {
    let test = owner_setup().await?;
    let mut asked = false;

    let result = test
        .client()
        .delete(&test.characters, "2", |_| {
            asked = true;
            true
        })
        .await;

    assert!(matches!(result, Err(Error::Auth(AuthError::NotOwnerDelete))));
    assert!(!asked);
    assert_eq!(test.api.call_count(), 0);

    Ok(())
}

/// Expect an anonymous session to be rejected without a request
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::character("1", "Max", factory::OWNER_EMAIL))
        .build()
        .await?;

    let result = test.client().delete(&test.characters, "1", |_| true).await;

    assert!(matches!(result, Err(Error::Auth(AuthError::NotLoggedIn))));
    assert_eq!(test.api.call_count(), 0);

    Ok(())
}

/// Expect the local list unchanged when the request fails
#[tokio::test]
async fn leaves_list_unchanged_on_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::character("1", "Max", factory::OWNER_EMAIL))
        .with_session(factory::identity(factory::OWNER_EMAIL))
        .failing(Endpoint::DeleteCharacter)
        .build()
        .await?;
    let before = test.characters.clone();

    let result = test.client().delete(&test.characters, "1", |_| true).await;

    assert!(matches!(result, Err(Error::Transport(_))));
    assert_eq!(test.api.call_count(), 1);
    assert_eq!(test.characters, before);

    Ok(())
}

use character_gallery::gallery::{error::Error, reconcile::Mutation};
use gallery_test_utils::prelude::*;

/// Expect the collection newest first
#[tokio::test]
async fn lists_newest_first() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::character("1", "Max", factory::OWNER_EMAIL))
        .with_character(factory::character("2", "Mona", factory::OTHER_EMAIL))
        .with_character(factory::character("3", "Zed", factory::OTHER_EMAIL))
        .without_initial_list()
        .build()
        .await?;

    let result = test.client().list().await?;

    let Mutation::Listed(characters) = result else {
        panic!("expected Mutation::Listed, got {result:?}");
    };
    let ids: Vec<&str> = characters.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2", "1"]);
    assert_eq!(test.api.calls(), vec![ApiCall::ListCharacters]);

    Ok(())
}

/// Expect listing to work without a session
#[tokio::test]
async fn lists_for_anonymous_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::character("1", "Max", factory::OWNER_EMAIL))
        .build()
        .await?;

    assert!(!test.session().is_authenticated());
    assert_eq!(test.characters.len(), 1);

    Ok(())
}

/// Expect a transport error after exactly one attempt
#[tokio::test]
async fn fails_without_retry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::character("1", "Max", factory::OWNER_EMAIL))
        .without_initial_list()
        .failing(Endpoint::ListCharacters)
        .build()
        .await?;

    let result = test.client().list().await;

    assert!(matches!(result, Err(Error::Transport(_))));
    assert_eq!(test.api.call_count(), 1);
    assert!(test.characters.is_empty());

    Ok(())
}

/// Expect the operation-specific message for a failed listing
#[tokio::test]
async fn failure_notice_names_operation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .without_initial_list()
        .failing(Endpoint::ListCharacters)
        .build()
        .await?;

    let err = test.client().list().await.unwrap_err();

    assert!(!err.is_rejected_locally());
    assert_eq!(err.notice("Failed to load characters"), "Failed to load characters");

    Ok(())
}

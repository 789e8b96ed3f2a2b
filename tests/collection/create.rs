use character_gallery::{
    gallery::{
        error::{AuthError, Error, ValidationError},
        reconcile::Mutation,
    },
    model::character::{CharacterDraft, Gender},
};
use gallery_test_utils::prelude::*;

/// Expect the stored record prepended once, with the session as owner
#[tokio::test]
async fn prepends_created_record() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_character(factory::character("1", "Max", factory::OWNER_EMAIL))
        .with_character(factory::character("2", "Mona", factory::OTHER_EMAIL))
        .with_session(factory::identity(factory::OWNER_EMAIL))
        .build()
        .await?;
    let before = test.characters.clone();

    let mutation = test.client().create(&factory::draft("Nova")).await?;
    test.apply(mutation);

    let created = &test.characters[0];
    assert_eq!(created.id, "3");
    assert_eq!(created.name, "Nova");
    assert_eq!(created.gender, Gender::Female);
    assert_eq!(created.owner.as_deref(), Some(factory::OWNER_EMAIL));
    assert_eq!(test.characters.iter().filter(|c| c.id == "3").count(), 1);
    assert_eq!(&test.characters[1..], before.as_slice());

    Ok(())
}

/// Expect the payload to carry every draft field and the owner
#[tokio::test]
async fn sends_owner_in_payload() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(factory::identity(factory::OWNER_EMAIL))
        .build()
        .await?;

    test.client().create(&factory::draft("Nova")).await?;

    let calls = test.api.calls();
    let [ApiCall::CreateCharacter(payload)] = calls.as_slice() else {
        panic!("expected a single create call, got {calls:?}");
    };
    assert_eq!(payload.name, "Nova");
    assert_eq!(payload.image, "http://x/y.png");
    assert_eq!(payload.world, "Midgard");
    assert_eq!(payload.owner, factory::OWNER_EMAIL);

    Ok(())
}

/// Expect an empty name to be rejected without a request
#[tokio::test]
async fn rejects_empty_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::character("1", "Max", factory::OWNER_EMAIL))
        .with_session(factory::identity(factory::OWNER_EMAIL))
        .build()
        .await?;
    let draft = CharacterDraft {
        name: String::new(),
        image: "http://x/y.png".to_string(),
        gender: Gender::Male,
        world: "Earth".to_string(),
    };

    let result = test.client().create(&draft).await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::NameRequired))
    ));
    assert_eq!(test.api.call_count(), 0);
    assert_eq!(test.api.stored_characters().len(), 1);

    Ok(())
}

/// Expect a malformed image URL to be rejected without a request
#[tokio::test]
async fn rejects_invalid_image_url() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(factory::identity(factory::OWNER_EMAIL))
        .build()
        .await?;
    let draft = CharacterDraft {
        image: "not a url".to_string(),
        ..factory::draft("Nova")
    };

    let result = test.client().create(&draft).await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::InvalidImageUrl))
    ));
    assert_eq!(test.api.call_count(), 0);

    Ok(())
}

/// Expect a missing world to be rejected without a request
#[tokio::test]
async fn rejects_missing_world() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(factory::identity(factory::OWNER_EMAIL))
        .build()
        .await?;
    let draft = CharacterDraft {
        world: String::new(),
        ..factory::draft("Nova")
    };

    let result = test.client().create(&draft).await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::WorldRequired))
    ));
    assert_eq!(test.api.call_count(), 0);

    Ok(())
}

/// Expect an anonymous session to be rejected without a request
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = test.client().create(&factory::draft("Nova")).await;

    assert!(matches!(result, Err(Error::Auth(AuthError::NotLoggedIn))));
    assert_eq!(test.api.call_count(), 0);

    Ok(())
}

/// Expect an empty name to report a validation error even when anonymous
#[tokio::test]
async fn validates_before_session_check() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = test.client().create(&factory::draft("  ")).await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::NameRequired))
    ));
    assert_eq!(test.api.call_count(), 0);

    Ok(())
}

/// Expect the local list unchanged when the request fails
#[tokio::test]
async fn leaves_list_unchanged_on_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::character("1", "Max", factory::OWNER_EMAIL))
        .with_session(factory::identity(factory::OWNER_EMAIL))
        .failing(Endpoint::CreateCharacter)
        .build()
        .await?;
    let before = test.characters.clone();

    let result = test.client().create(&factory::draft("Nova")).await;

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.notice("Failed to add character"), "Failed to add character");
    assert_eq!(test.api.call_count(), 1);
    assert_eq!(test.characters, before);

    Ok(())
}

/// Expect consecutive creates to stack newest first
#[tokio::test]
async fn consecutive_creates_stack_newest_first() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_session(factory::identity(factory::OWNER_EMAIL))
        .build()
        .await?;

    for name in ["First", "Second"] {
        let mutation = test.client().create(&factory::draft(name)).await?;
        assert!(matches!(mutation, Mutation::Created(_)));
        test.apply(mutation);
    }

    let names: Vec<&str> = test.characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Second", "First"]);

    Ok(())
}

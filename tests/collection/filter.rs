use gallery_test_utils::prelude::*;

/// Expect only the session's own records with `mine_only`
#[tokio::test]
async fn mine_only_returns_own_records() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::character("2", "Mona", factory::OTHER_EMAIL))
        .with_character(factory::character("1", "Max", factory::OWNER_EMAIL))
        .with_session(factory::identity(factory::OWNER_EMAIL))
        .build()
        .await?;
    let client = test.client();

    let result = client.filter(&test.characters, "", true);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "1");
    assert!(client.can_modify(result[0]));

    Ok(())
}

/// Expect filtering to issue no requests
#[tokio::test]
async fn filter_is_local() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::character("1", "Max", factory::OWNER_EMAIL))
        .with_character(factory::character("2", "Mona", factory::OTHER_EMAIL))
        .build()
        .await?;
    let client = test.client();

    assert_eq!(client.filter(&test.characters, "", false).len(), 2);
    assert_eq!(
        client.filter(&test.characters, "MO", false),
        client.filter(&test.characters, "mo", false)
    );
    assert!(client.filter(&test.characters, "", true).is_empty());
    assert_eq!(test.api.call_count(), 0);

    Ok(())
}

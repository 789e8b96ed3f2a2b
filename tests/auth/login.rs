use character_gallery::{
    gallery::{
        error::{AuthError, Error, ValidationError},
        session::{SessionStorage, AUTHENTICATED_KEY, EMAIL_KEY, FULL_NAME_KEY},
    },
    model::session::Session,
};
use gallery_test_utils::prelude::*;

/// Expect the identity persisted under the session keys
#[tokio::test]
async fn persists_session_on_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login(factory::login_record(factory::OWNER_EMAIL, factory::PASSWORD))
        .build()
        .await?;

    let identity = test
        .auth()
        .login(&factory::login_form(factory::OWNER_EMAIL, factory::PASSWORD))
        .await?;

    assert_eq!(identity.email, factory::OWNER_EMAIL);
    assert_eq!(test.session(), Session::Authenticated(identity.clone()));

    let storage = test.store.storage();
    assert_eq!(storage.get(AUTHENTICATED_KEY).as_deref(), Some("true"));
    assert_eq!(storage.get(EMAIL_KEY).as_deref(), Some(factory::OWNER_EMAIL));
    assert_eq!(storage.get(FULL_NAME_KEY), Some(identity.display_name));

    Ok(())
}

/// Expect an unknown email to leave the session anonymous
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login(factory::login_record(factory::OTHER_EMAIL, factory::PASSWORD))
        .build()
        .await?;

    let result = test
        .auth()
        .login(&factory::login_form(factory::OWNER_EMAIL, factory::PASSWORD))
        .await;

    assert!(matches!(result, Err(Error::Auth(AuthError::AccountNotFound))));
    assert_eq!(test.session(), Session::Anonymous);

    Ok(())
}

/// Expect a substring match from the store not to count as the account
#[tokio::test]
async fn ignores_partial_email_matches() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login(factory::login_record("ba@x.com", factory::PASSWORD))
        .build()
        .await?;

    let result = test
        .auth()
        .login(&factory::login_form(factory::OWNER_EMAIL, factory::PASSWORD))
        .await;

    assert!(matches!(result, Err(Error::Auth(AuthError::AccountNotFound))));

    Ok(())
}

/// Expect a wrong password to leave the session anonymous
#[tokio::test]
async fn rejects_incorrect_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login(factory::login_record(factory::OWNER_EMAIL, factory::PASSWORD))
        .build()
        .await?;

    let result = test
        .auth()
        .login(&factory::login_form(factory::OWNER_EMAIL, "wrong-password"))
        .await;

    assert!(matches!(result, Err(Error::Auth(AuthError::IncorrectPassword))));
    assert_eq!(test.session(), Session::Anonymous);
    assert!(test.store.storage().is_empty());

    Ok(())
}

/// Expect an invalid email to be rejected without a request
#[tokio::test]
async fn rejects_invalid_email_locally() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = test
        .auth()
        .login(&factory::login_form("not-an-email", factory::PASSWORD))
        .await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::InvalidEmail))
    ));
    assert_eq!(test.api.call_count(), 0);

    Ok(())
}

/// Expect a transport failure to surface the generic login message
#[tokio::test]
async fn transport_failure_uses_fallback_notice() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .failing(Endpoint::FindLogins)
        .build()
        .await?;

    let err = test
        .auth()
        .login(&factory::login_form(factory::OWNER_EMAIL, factory::PASSWORD))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(
        err.notice("Login failed. Please try again later."),
        "Login failed. Please try again later."
    );
    assert_eq!(test.session(), Session::Anonymous);

    Ok(())
}

/// Expect a logged in session to allow creating characters
#[tokio::test]
async fn login_enables_mutations() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login(factory::login_record(factory::OWNER_EMAIL, factory::PASSWORD))
        .build()
        .await?;

    test.auth()
        .login(&factory::login_form(factory::OWNER_EMAIL, factory::PASSWORD))
        .await?;
    test.api.clear_calls();

    test.client().create(&factory::draft("Nova")).await?;

    assert_eq!(test.api.call_count(), 1);
    assert_eq!(
        test.api.stored_characters()[0].owner.as_deref(),
        Some(factory::OWNER_EMAIL)
    );

    Ok(())
}

mod common;

use common::*;
use storefront_backend::AppError;
use storefront_backend::models::{LoginRequest, RegisterRequest};
use storefront_backend::services::AuthService;
use storefront_backend::utils::JwtService;

fn request(username: &str, email: &str) -> RegisterRequest {
    RegisterRequest {
        firstname: Some("Ada".into()),
        lastname: Some("Lovelace".into()),
        username: Some(username.into()),
        email: Some(email.into()),
        password: Some("secret-password".into()),
        address: Some("1 Main St".into()),
        telephonenumber: Some("5550100".into()),
    }
}

#[tokio::test]
async fn register_then_login_with_username_or_email() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let jwt = JwtService::new("test-secret", 600);
    let service = AuthService::new(db.clone(), jwt.clone());

    let user = service.register(request("ada", "ada@example.com")).await?;
    assert_eq!(user.username, "ada");
    assert_eq!(user.membership_status, "Bronze");

    let login = service
        .login(LoginRequest {
            identifier: "ada".into(),
            password: "secret-password".into(),
        })
        .await?;
    assert_eq!(login.id, user.id);
    assert_eq!(login.expires_in, 600);

    let claims = jwt.verify_access_token(&login.token)?;
    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.role, "User");

    let by_email = service
        .login(LoginRequest {
            identifier: "ada@example.com".into(),
            password: "secret-password".into(),
        })
        .await?;
    assert_eq!(by_email.id, user.id);
    Ok(())
}

#[tokio::test]
async fn register_rejects_invalid_input() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let service = AuthService::new(db.clone(), JwtService::new("test-secret", 600));

    match service.register(RegisterRequest::default()).await {
        Err(AppError::ValidationError(msg)) => assert_eq!(msg, "All fields are required"),
        other => panic!("unexpected: {other:?}"),
    }
    match service.register(request("ada", "not-an-email")).await {
        Err(AppError::ValidationError(msg)) => assert_eq!(msg, "Invalid email address"),
        other => panic!("unexpected: {other:?}"),
    }

    service.register(request("ada", "ada@example.com")).await?;
    match service.register(request("ada", "other@example.com")).await {
        Err(AppError::ValidationError(msg)) => assert_eq!(msg, "Username or email already taken"),
        other => panic!("unexpected: {other:?}"),
    }
    assert!(service
        .register(request("grace", "ada@example.com"))
        .await
        .is_err());
    Ok(())
}

#[tokio::test]
async fn login_rejects_wrong_credentials() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let service = AuthService::new(db.clone(), JwtService::new("test-secret", 600));
    service.register(request("ada", "ada@example.com")).await?;

    for (identifier, password) in [("ada", "wrong"), ("nobody", "secret-password")] {
        match service
            .login(LoginRequest {
                identifier: identifier.into(),
                password: password.into(),
            })
            .await
        {
            Err(AppError::AuthError(msg)) => assert_eq!(msg, "Invalid credentials"),
            other => panic!("unexpected: {other:?}"),
        }
    }
    Ok(())
}

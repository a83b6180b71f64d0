mod common;

use anyhow::Result;
use mastery_api::auth::{Claims, ADMIN_ROLE, USER_ROLE};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn admin_status(server: &common::TestServer, token: &str) -> Result<(StatusCode, Value)> {
    let res = reqwest::Client::new()
        .get(server.url("/api/admin/status"))
        .header("Cookie", common::cookie(token))
        .send()
        .await?;
    Ok((res.status(), res.json().await?))
}

#[tokio::test]
async fn user_role_is_admin_only() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let (status, body) = admin_status(&server, &common::token_for_role(USER_ROLE)).await?;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "message": "Admin only" }));
    Ok(())
}

#[tokio::test]
async fn token_without_role_is_admin_only() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let mut claims = common::claims_for_role(ADMIN_ROLE);
    claims.remove("role");
    let token = common::token_with(common::TEST_JWT_SECRET, &claims);

    let (status, body) = admin_status(&server, &token).await?;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Admin only");
    Ok(())
}

#[tokio::test]
async fn admin_role_reaches_handler() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let (status, body) = admin_status(&server, &common::token_for_role(ADMIN_ROLE)).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["admin"], "test-user");
    assert!(body.get("server_time").is_some());
    Ok(())
}

#[tokio::test]
async fn bad_token_is_rejected_before_role_check() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = common::token_with("wrong-secret", &common::claims_for_role(ADMIN_ROLE));

    let (status, body) = admin_status(&server, &token).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Bad token");
    Ok(())
}

#[tokio::test]
async fn numeric_subject_admin_reaches_handler() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let claims = Claims::from_map(
        json!({ "sub": 42, "role": ADMIN_ROLE })
            .as_object()
            .cloned()
            .expect("payload is an object"),
    );
    let token = common::token_with(common::TEST_JWT_SECRET, &claims);

    let (status, body) = admin_status(&server, &token).await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("server_time").is_some());
    Ok(())
}

#[tokio::test]
async fn non_string_role_is_admin_only() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    for role in [json!(1), json!(["admin"]), json!(true)] {
        let mut claims = common::claims_for_role(ADMIN_ROLE);
        claims.set("role", role.clone());
        let token = common::token_with(common::TEST_JWT_SECRET, &claims);

        let (status, body) = admin_status(&server, &token).await?;

        assert_eq!(status, StatusCode::FORBIDDEN, "{}", role);
        assert_eq!(body, json!({ "message": "Admin only" }));
    }
    Ok(())
}

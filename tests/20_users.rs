//! User endpoint tests against a live server, including the cascade-delete
//! contract. Skipped when no DATABASE_URL is configured.

mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

async fn create_org(
    client: &reqwest::Client,
    base_url: &str,
    prefix: &str,
) -> Result<serde_json::Value> {
    let slug = common::unique_slug(prefix);
    let res = client
        .post(format!("{base_url}/api/organizations"))
        .json(&json!({ "name": prefix, "slug": slug, "email": format!("{slug}@example.com") }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    Ok(res.json().await?)
}

#[tokio::test]
async fn user_create_defaults_role_to_coordinator() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let org = create_org(&client, &server.base_url, "cobalt").await?;
    let org_id = org["id"].as_i64().unwrap();

    let res = client
        .post(format!("{}/api/organizations/{}/users", server.base_url, org_id))
        .json(&json!({ "name": "Dave Richards" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let user = res.json::<serde_json::Value>().await?;

    assert_eq!(user["name"], "Dave Richards");
    assert_eq!(user["role"], "coordinator");
    assert_eq!(user["organizationId"], org_id);

    Ok(())
}

#[tokio::test]
async fn user_create_under_missing_org_is_not_found() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/organizations/999999999/users", server.base_url))
        .json(&json!({ "name": "Nobody" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Organization not found");

    Ok(())
}

#[tokio::test]
async fn user_update_and_delete() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let org = create_org(&client, &server.base_url, "pioneer").await?;
    let org_id = org["id"].as_i64().unwrap();

    let user = client
        .post(format!("{}/api/organizations/{}/users", server.base_url, org_id))
        .json(&json!({ "name": "Sana Khan", "role": "coordinator" }))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let user_id = user["id"].as_i64().unwrap();

    // promote without touching the name
    let res = client
        .put(format!("{}/api/users/{}", server.base_url, user_id))
        .json(&json!({ "role": "admin" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["role"], "admin");
    assert_eq!(updated["name"], "Sana Khan");

    let res = client
        .delete(format!("{}/api/users/{}", server.base_url, user_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "User deleted successfully");

    // deleting again is a 404
    let res = client
        .delete(format!("{}/api/users/{}", server.base_url, user_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn deleting_org_cascades_to_its_users() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let org = create_org(&client, &server.base_url, "heliotrope").await?;
    let org_id = org["id"].as_i64().unwrap();

    for name in ["Liam Smith", "Nishta Gupta"] {
        let res = client
            .post(format!("{}/api/organizations/{}/users", server.base_url, org_id))
            .json(&json!({ "name": name }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = client
        .delete(format!("{}/api/organizations/{}", server.base_url, org_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // user list for the deleted org is empty, not an error
    let res = client
        .get(format!("{}/api/organizations/{}/users", server.base_url, org_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let users = res.json::<Vec<serde_json::Value>>().await?;
    assert!(users.is_empty(), "cascade should have removed all users");

    Ok(())
}

#[tokio::test]
async fn user_list_is_ordered_newest_first() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let org = create_org(&client, &server.base_url, "ordering").await?;
    let org_id = org["id"].as_i64().unwrap();

    let mut ids = Vec::new();
    for name in ["First In", "Second In", "Third In"] {
        let user = client
            .post(format!("{}/api/organizations/{}/users", server.base_url, org_id))
            .json(&json!({ "name": name }))
            .send()
            .await?
            .json::<serde_json::Value>()
            .await?;
        ids.push(user["id"].as_i64().unwrap());
        // keep created_at strictly increasing
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }

    let users = client
        .get(format!("{}/api/organizations/{}/users", server.base_url, org_id))
        .send()
        .await?
        .json::<Vec<serde_json::Value>>()
        .await?;

    assert_eq!(users.len(), 3);
    // serial ids increase with creation time, so descending created_at
    // means descending ids here
    let listed: Vec<i64> = users.iter().map(|u| u["id"].as_i64().unwrap()).collect();
    let mut expected = ids.clone();
    expected.reverse();
    assert_eq!(listed, expected);

    Ok(())
}

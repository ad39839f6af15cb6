//! Client adapter tests against a live server. Skipped when no DATABASE_URL
//! is configured.

mod common;

use anyhow::Result;

use org_console_api::client::{ApiClient, ClientError};
use org_console_api::database::models::{NewOrganization, NewUser, UserRole};

#[tokio::test]
async fn get_organization_embeds_user_summaries() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let api = ApiClient::new(server.base_url.clone());

    let created = api
        .create_organization(&NewOrganization {
            name: "Cobalt Collective".into(),
            slug: common::unique_slug("cobalt-collective"),
            email: "cobalt@example.com".into(),
            ..Default::default()
        })
        .await?;
    assert!(created.users.is_empty());

    api.create_user(
        created.id,
        &NewUser {
            name: "Abhishek Hari".into(),
            role: Some(UserRole::Admin),
        },
    )
    .await?;

    let view = api.get_organization(created.id).await?;
    assert_eq!(view.users.len(), 1);
    assert_eq!(view.users[0].name, "Abhishek Hari");
    assert_eq!(view.users[0].role, UserRole::Admin);

    api.delete_organization(created.id).await?;
    Ok(())
}

#[tokio::test]
async fn non_2xx_surfaces_descriptive_error() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let api = ApiClient::new(server.base_url.clone());

    let err = api.get_organization(999_999_999).await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Organization not found");
        }
        other => panic!("expected api error, got {other:?}"),
    }

    Ok(())
}

//! Typed client for the console API.
//!
//! Mirrors the frontend adapter: organizations are returned as view models
//! with their user list embedded (fetched through the nested endpoint), and
//! users are narrowed to `{id, name, role}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::database::models::{NewOrganization, NewUser, OrgStatus, Organization, User, UserRole};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub role: UserRole,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
        }
    }
}

/// Organization as the console renders it: entity fields plus members.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationView {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub avatar: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub status: OrgStatus,
    pub pending_requests: i32,
    pub users: Vec<UserSummary>,
}

impl OrganizationView {
    fn from_parts(org: Organization, users: Vec<User>) -> Self {
        Self {
            id: org.id,
            name: org.name,
            slug: org.slug,
            avatar: org.avatar,
            email: org.email,
            phone: org.phone,
            website: org.website,
            status: org.status,
            pending_requests: org.pending_requests,
            users: users.into_iter().map(UserSummary::from).collect(),
        }
    }
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn list_organizations(&self) -> Result<Vec<OrganizationView>, ClientError> {
        let res = self
            .http
            .get(format!("{}/api/organizations", self.base_url))
            .send()
            .await?;
        let orgs: Vec<Organization> = Self::parse(res).await?;

        let mut views = Vec::with_capacity(orgs.len());
        for org in orgs {
            let users = self.list_users(org.id).await?;
            views.push(OrganizationView::from_parts(org, users));
        }
        Ok(views)
    }

    pub async fn get_organization(&self, id: i32) -> Result<OrganizationView, ClientError> {
        let res = self
            .http
            .get(format!("{}/api/organizations/{}", self.base_url, id))
            .send()
            .await?;
        let org: Organization = Self::parse(res).await?;
        let users = self.list_users(id).await?;
        Ok(OrganizationView::from_parts(org, users))
    }

    pub async fn create_organization(
        &self,
        new: &NewOrganization,
    ) -> Result<OrganizationView, ClientError> {
        let res = self
            .http
            .post(format!("{}/api/organizations", self.base_url))
            .json(new)
            .send()
            .await?;
        let org: Organization = Self::parse(res).await?;
        Ok(OrganizationView::from_parts(org, Vec::new()))
    }

    /// Send a partial update; only the keys present in `patch` change.
    pub async fn update_organization(
        &self,
        id: i32,
        patch: &Value,
    ) -> Result<OrganizationView, ClientError> {
        let res = self
            .http
            .put(format!("{}/api/organizations/{}", self.base_url, id))
            .json(patch)
            .send()
            .await?;
        let org: Organization = Self::parse(res).await?;
        let users = self.list_users(id).await?;
        Ok(OrganizationView::from_parts(org, users))
    }

    pub async fn delete_organization(&self, id: i32) -> Result<(), ClientError> {
        let res = self
            .http
            .delete(format!("{}/api/organizations/{}", self.base_url, id))
            .send()
            .await?;
        let _: Value = Self::parse(res).await?;
        Ok(())
    }

    pub async fn list_users(&self, organization_id: i32) -> Result<Vec<User>, ClientError> {
        let res = self
            .http
            .get(format!(
                "{}/api/organizations/{}/users",
                self.base_url, organization_id
            ))
            .send()
            .await?;
        Self::parse(res).await
    }

    pub async fn create_user(
        &self,
        organization_id: i32,
        new: &NewUser,
    ) -> Result<User, ClientError> {
        let res = self
            .http
            .post(format!(
                "{}/api/organizations/{}/users",
                self.base_url, organization_id
            ))
            .json(new)
            .send()
            .await?;
        Self::parse(res).await
    }

    pub async fn update_user(&self, id: i32, patch: &Value) -> Result<User, ClientError> {
        let res = self
            .http
            .put(format!("{}/api/users/{}", self.base_url, id))
            .json(patch)
            .send()
            .await?;
        Self::parse(res).await
    }

    pub async fn delete_user(&self, id: i32) -> Result<(), ClientError> {
        let res = self
            .http
            .delete(format!("{}/api/users/{}", self.base_url, id))
            .send()
            .await?;
        let _: Value = Self::parse(res).await?;
        Ok(())
    }

    /// Decode a 2xx body, or surface the error body's message.
    async fn parse<T: serde::de::DeserializeOwned>(
        res: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res.json::<T>().await?);
        }

        let message = res
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body["message"].as_str().map(str::to_owned))
            .unwrap_or_else(|| format!("request failed with status {}", status));

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

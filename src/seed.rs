//! Demo-data seeding for local development.

use anyhow::Result;
use rand::Rng;
use sqlx::PgPool;
use tracing::info;

use crate::database::models::{NewOrganization, NewUser, OrgStatus, UserRole};
use crate::services::{OrganizationService, UserService};

const ORG_NAMES: &[&str] = &[
    "Aurora Labs",
    "Nimbus Co",
    "Vertex Solutions",
    "Heliotrope Systems",
    "Meridian Works",
    "Cobalt Collective",
    "Pioneer Labs",
];

const PERSON_NAMES: &[&str] = &[
    "Dave Richards",
    "Abhishek Hari",
    "Nishta Gupta",
    "Taylor Jones",
    "Sana Khan",
    "Liam Smith",
];

const STATUSES: &[OrgStatus] = &[OrgStatus::Active, OrgStatus::Blocked, OrgStatus::Inactive];

/// Lowercase, non-alphanumeric runs collapsed to single hyphens.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

// Random draws happen in sync helpers so no ThreadRng lives across an await.
fn random_org(name: &str) -> NewOrganization {
    let mut rng = rand::thread_rng();
    let slug = slugify(name);
    NewOrganization {
        name: name.to_string(),
        slug: slug.clone(),
        email: format!("{slug}@example.com"),
        phone: Some(format!(
            "+91 {}",
            rng.gen_range(7_000_000_000_u64..=9_999_999_999)
        )),
        website: Some(format!("{slug}.com")),
        avatar: Some(format!(
            "https://api.dicebear.com/6.x/identicon/svg?seed={slug}"
        )),
        status: Some(STATUSES[rng.gen_range(0..STATUSES.len())]),
        pending_requests: Some(rng.gen_range(0..=120)),
    }
}

fn random_user() -> NewUser {
    let mut rng = rand::thread_rng();
    let role = if rng.gen_bool(0.4) {
        UserRole::Admin
    } else {
        UserRole::Coordinator
    };
    NewUser {
        name: PERSON_NAMES[rng.gen_range(0..PERSON_NAMES.len())].to_string(),
        role: Some(role),
    }
}

/// Insert a fixed roster of organizations with 2-4 random users each.
pub async fn run(pool: PgPool) -> Result<()> {
    info!("Seeding database...");

    let orgs = OrganizationService::new(pool.clone());
    let users = UserService::new(pool);

    for &name in ORG_NAMES {
        let org = orgs.create(random_org(name)).await?;

        let user_count = rand::thread_rng().gen_range(2..=4);
        for _ in 0..user_count {
            users.create(org.id, random_user()).await?;
        }
    }

    info!("Database seeded successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Aurora Labs"), "aurora-labs");
        assert_eq!(slugify("Nimbus  &  Co"), "nimbus-co");
        assert_eq!(slugify("Vertex-Solutions"), "vertex-solutions");
    }
}

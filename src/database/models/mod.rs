pub mod organization;
pub mod user;

pub use organization::{NewOrganization, OrgStatus, Organization, OrganizationPatch};
pub use user::{NewUser, User, UserPatch, UserRole};

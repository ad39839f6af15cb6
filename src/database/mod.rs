pub mod models;
pub mod pool;

pub use models::{
    NewOrganization, NewUser, OrgStatus, Organization, OrganizationPatch, User, UserPatch,
    UserRole,
};
pub use pool::DatabaseError;

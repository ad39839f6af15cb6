// handlers/users/mod.rs - User CRUD handlers

pub mod create; // POST /api/organizations/:org_id/users
pub mod delete; // DELETE /api/users/:id
pub mod list; //   GET /api/organizations/:org_id/users
pub mod update; // PUT /api/users/:id

pub use create::user_create;
pub use delete::user_delete;
pub use list::user_list;
pub use update::user_update;

/// Permission entity module
pub mod permission;
/// Role entity module
pub mod role;

pub use permission::Entity as Permission;
pub use role::Entity as Role;

pub use super::recipes::Entity as Recipes;
pub use super::sessions::Entity as Sessions;
pub use super::users::Entity as Users;

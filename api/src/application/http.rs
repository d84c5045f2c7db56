pub mod authentication;
pub mod health;
pub mod index;
pub mod recipe;
pub mod server;

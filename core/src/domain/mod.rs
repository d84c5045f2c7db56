pub mod authentication;
pub mod common;
pub mod crypto;
pub mod health;
pub mod recipe;
pub mod user;

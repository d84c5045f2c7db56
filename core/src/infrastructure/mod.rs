pub mod authentication;
pub mod crypto;
pub mod db;
pub mod health;
pub mod image_search;
pub mod llm;
pub mod recipe;
pub mod user;

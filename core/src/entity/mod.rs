//! `SeaORM` Entity definitions

pub mod prelude;

pub mod recipes;
pub mod sessions;
pub mod users;

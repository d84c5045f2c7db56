pub mod generated_recipe;
pub mod photo;
pub mod recipe;

pub use generated_recipe::*;
pub use photo::*;
pub use recipe::*;

pub mod generate_recipes;
pub mod generate_recipes_from_image;
pub mod get_recipe;
pub mod list_recipes;
pub mod save_recipe;

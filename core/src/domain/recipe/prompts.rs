pub const INGREDIENT_EXTRACTION_PROMPT: &str =
    "Extract the ingredients visible in this image and return them as a list.";

fn or_any<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "any".to_string())
}

pub fn build_generation_prompt(
    ingredients: &str,
    time: Option<i32>,
    servings: Option<i32>,
    cuisine: Option<&str>,
    recipe_count: u32,
) -> String {
    format!(
        "Generate multiple unique recipes based on the following inputs:\n\n\
         Ingredients available: {ingredients}\n\
         Time available: {time}\n\
         Number of servings: {servings}\n\
         Cuisine type: {cuisine}\n\n\
         Important requirements:\n\
         - Use only the provided ingredients and no additional or extra ingredients.\n\
         - Ensure each recipe is feasible and realistic within the provided time and servings.\n\n\
         Provide {recipe_count} unique recipes in JSON format with the following fields:\n\
         - title\n\
         - cookingTime: the estimated cooking time in minutes\n\
         - servings: the number of servings\n\
         - cuisine: the cuisine type\n\
         - ingredients: a list of ingredients needed, with measurements\n\
         - instructions: a step-by-step list of instructions, each step a separate item\n\
         - extraIngredients: optional additions that would improve the dish\n",
        time = or_any(time.map(|t| format!("{t} minutes"))),
        servings = or_any(servings),
        cuisine = or_any(cuisine),
    )
}

/// Search query for a stock photo of a finished dish.
pub fn build_photo_query(title: &str, cuisine: &str) -> String {
    format!(
        "{title} recipe dish food plated close-up {cuisine} style ingredients realistic high-quality photography"
    )
    .split_whitespace()
    .collect::<Vec<_>>()
    .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_prompt_carries_every_input() {
        let prompt = build_generation_prompt("rice, eggs", Some(30), Some(2), Some("Korean"), 3);

        assert!(prompt.contains("Ingredients available: rice, eggs"));
        assert!(prompt.contains("Time available: 30 minutes"));
        assert!(prompt.contains("Number of servings: 2"));
        assert!(prompt.contains("Cuisine type: Korean"));
        assert!(prompt.contains("Provide 3 unique recipes"));
        assert!(prompt.contains("cookingTime"));
    }

    #[test]
    fn generation_prompt_fills_missing_inputs() {
        let prompt = build_generation_prompt("rice", None, None, Some("  "), 3);

        assert!(prompt.contains("Time available: any\n"));
        assert!(prompt.contains("Number of servings: any"));
        assert!(prompt.contains("Cuisine type: any"));
    }

    #[test]
    fn photo_query_collapses_empty_cuisine() {
        assert_eq!(
            build_photo_query("Fried rice", ""),
            "Fried rice recipe dish food plated close-up style ingredients realistic high-quality photography"
        );
    }
}

use tracing::{info, warn};

use crate::domain::{
    authentication::{
        ports::{SessionRepository, TokenCodec},
        value_objects::Identity,
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    recipe::{
        entities::{GeneratedRecipe, Recipe, RecipeConfig},
        helpers::{parse_extracted_ingredients, parse_generated_recipes, select_photo},
        ports::{ImageSearchClient, LLMClient, RecipeRepository, RecipeService},
        prompts::{INGREDIENT_EXTRACTION_PROMPT, build_generation_prompt, build_photo_query},
        schema::{get_ingredients_schema, get_recipes_schema},
        value_objects::{
            GenerateRecipesInput, GetRecipeInput, ListRecipesInput, RecipeFilter,
            SaveRecipeInput, SaveRecipeOutcome, UploadedImage,
        },
    },
    user::ports::UserRepository,
};

const PHOTOS_PER_QUERY: u32 = 5;

async fn extract_ingredients<LLM: LLMClient>(
    llm_client: &LLM,
    image: UploadedImage,
) -> Result<Vec<String>, CoreError> {
    let raw_response = llm_client
        .generate_with_image(
            INGREDIENT_EXTRACTION_PROMPT.to_string(),
            image.data,
            image.mime_type,
            get_ingredients_schema(),
        )
        .await?;

    parse_extracted_ingredients(&raw_response)
}

/// Image search is best effort: any failure leaves the recipe without a photo.
async fn lookup_photo<IS: ImageSearchClient>(
    image_search_client: &IS,
    recipe: &GeneratedRecipe,
    fallback_cuisine: &str,
) -> Option<String> {
    let cuisine = if recipe.cuisine.is_empty() {
        fallback_cuisine
    } else {
        recipe.cuisine.as_str()
    };
    let query = build_photo_query(&recipe.title, cuisine);

    match image_search_client
        .search_photos(query, PHOTOS_PER_QUERY)
        .await
    {
        Ok(candidates) => select_photo(&candidates).map(|photo| photo.url.clone()),
        Err(e) => {
            warn!("Photo lookup failed for '{}': {}", recipe.title, e);
            None
        }
    }
}

impl<U, S, H, T, RR, LLM, IS, HC> RecipeService for Service<U, S, H, T, RR, LLM, IS, HC>
where
    U: UserRepository,
    S: SessionRepository,
    H: HasherRepository,
    T: TokenCodec,
    RR: RecipeRepository,
    LLM: LLMClient,
    IS: ImageSearchClient,
    HC: HealthCheckRepository,
{
    async fn generate_recipes(
        &self,
        identity: Identity,
        input: GenerateRecipesInput,
    ) -> Result<Vec<Recipe>, CoreError> {
        // 1. Resolve ingredients: a photo takes precedence over typed text
        let typed_ingredients = input
            .ingredients
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let ingredients = match input.image.filter(|image| !image.data.is_empty()) {
            Some(image) => Some(extract_ingredients(&self.llm_client, image).await?.join(", ")),
            None => typed_ingredients,
        }
        .ok_or(CoreError::NoIngredients)?;

        let cuisine = input
            .cuisine
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        // 2. Ask the model for recipes
        let prompt = build_generation_prompt(
            &ingredients,
            input.time,
            input.servings,
            cuisine,
            self.settings.recipe_count,
        );

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_recipes_schema())
            .await?;

        let generated = parse_generated_recipes(&raw_response)?;

        // 3. Enrich with a photo and persist, one record per recipe
        let mut recipes = Vec::with_capacity(generated.len());
        for recipe in generated {
            let image_url =
                lookup_photo(&self.image_search_client, &recipe, cuisine.unwrap_or("")).await;

            let record = Recipe::new(RecipeConfig {
                user_id: identity.id(),
                time: recipe.cooking_time.or(input.time).unwrap_or(0),
                servings: input.servings.or(recipe.servings).unwrap_or(0),
                cuisine: if recipe.cuisine.is_empty() {
                    cuisine.unwrap_or_default().to_string()
                } else {
                    recipe.cuisine
                },
                title: recipe.title,
                ingredients: recipe.ingredients,
                instructions: recipe.instructions,
                image_url,
            });

            recipes.push(self.recipe_repository.create_recipe(record).await?);
        }

        info!(
            user_id = %identity.id(),
            count = recipes.len(),
            "generated recipes"
        );

        Ok(recipes)
    }

    async fn list_recipes(
        &self,
        identity: Identity,
        input: ListRecipesInput,
    ) -> Result<Vec<Recipe>, CoreError> {
        self.recipe_repository
            .get_by_user(identity.id(), RecipeFilter::from(input))
            .await
    }

    async fn get_recipe(
        &self,
        identity: Identity,
        input: GetRecipeInput,
    ) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .get_by_id(input.recipe_id)
            .await?
            .filter(|recipe| recipe.user_id == identity.id())
            .ok_or(CoreError::RecipeNotFound)
    }

    async fn save_recipe(
        &self,
        identity: Identity,
        input: SaveRecipeInput,
    ) -> Result<SaveRecipeOutcome, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(input.recipe_id)
            .await?
            .ok_or(CoreError::RecipeNotFound)?;

        if recipe.user_id == identity.id() {
            return Ok(SaveRecipeOutcome::AlreadySaved(recipe));
        }

        if let Some(existing) = self
            .recipe_repository
            .find_duplicate(
                identity.id(),
                recipe.title.clone(),
                recipe.ingredients.clone(),
            )
            .await?
        {
            return Ok(SaveRecipeOutcome::AlreadySaved(existing));
        }

        let saved = self
            .recipe_repository
            .create_recipe(recipe.copy_for(identity.id()))
            .await?;

        Ok(SaveRecipeOutcome::Saved(saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        authentication::ports::{MockSessionRepository, MockTokenCodec},
        common::services::ServiceSettings,
        crypto::ports::MockHasherRepository,
        health::ports::MockHealthCheckRepository,
        recipe::{
            entities::PhotoCandidate,
            ports::{MockImageSearchClient, MockLLMClient, MockRecipeRepository},
        },
        user::ports::MockUserRepository,
    };
    use uuid::Uuid;

    type TestService = Service<
        MockUserRepository,
        MockSessionRepository,
        MockHasherRepository,
        MockTokenCodec,
        MockRecipeRepository,
        MockLLMClient,
        MockImageSearchClient,
        MockHealthCheckRepository,
    >;

    fn service(
        recipes: MockRecipeRepository,
        llm: MockLLMClient,
        images: MockImageSearchClient,
    ) -> TestService {
        Service::new(
            MockUserRepository::new(),
            MockSessionRepository::new(),
            MockHasherRepository::new(),
            MockTokenCodec::new(),
            recipes,
            llm,
            images,
            MockHealthCheckRepository::new(),
            ServiceSettings::default(),
        )
    }

    fn identity() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            username: "cook".to_string(),
            session_id: Uuid::new_v4(),
        }
    }

    fn stored_recipe(user_id: Uuid, title: &str) -> Recipe {
        Recipe::new(RecipeConfig {
            user_id,
            title: title.to_string(),
            time: 20,
            cuisine: "Thai".to_string(),
            servings: 2,
            ingredients: vec!["rice".to_string(), "basil".to_string()],
            instructions: vec!["Cook rice".to_string()],
            image_url: None,
        })
    }

    fn echoing_repository() -> MockRecipeRepository {
        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_create_recipe()
            .returning(|recipe| Box::pin(async move { Ok(recipe) }));
        recipes
    }

    const THREE_RECIPES: &str = r#"{"recipes": [
        {"title": "Basil rice", "cookingTime": 25, "servings": 4, "cuisine": "Thai",
         "ingredients": ["1 cup rice", "basil"], "instructions": ["Boil", "Stir"]},
        {"title": "Rice cakes", "cookingTime": "40 minutes", "cuisine": "",
         "ingredients": ["rice"], "instructions": ["Press", "Fry"]},
        {"title": "Congee", "ingredients": ["rice", "water"], "instructions": ["Simmer"]}
    ]}"#;

    #[tokio::test]
    async fn well_formed_response_stores_one_record_per_recipe() {
        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_create_recipe()
            .times(3)
            .returning(|recipe| Box::pin(async move { Ok(recipe) }));

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(THREE_RECIPES.to_string()) }));
        llm.expect_generate_with_image().never();

        let mut images = MockImageSearchClient::new();
        images.expect_search_photos().times(3).returning(|_, _| {
            Box::pin(async {
                Ok(vec![
                    PhotoCandidate {
                        width: 3000,
                        height: 1000,
                        url: "https://photos.example/wide.jpg".to_string(),
                    },
                    PhotoCandidate {
                        width: 1000,
                        height: 1000,
                        url: "https://photos.example/square.jpg".to_string(),
                    },
                ])
            })
        });

        let service = service(recipes, llm, images);
        let caller = identity();

        let created = service
            .generate_recipes(
                caller.clone(),
                GenerateRecipesInput {
                    ingredients: Some("  rice, basil, water ".to_string()),
                    time: Some(45),
                    servings: Some(2),
                    cuisine: Some("Thai".to_string()),
                    image: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(created.len(), 3);
        assert!(created.iter().all(|r| r.user_id == caller.user_id));
        assert_eq!(
            created.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
            vec!["Basil rice", "Rice cakes", "Congee"]
        );
        assert_eq!(created[0].time, 25);
        assert_eq!(created[1].time, 40);
        assert_eq!(created[2].time, 45);
        assert!(created.iter().all(|r| r.servings == 2));
        assert_eq!(created[1].cuisine, "Thai");
        assert_eq!(
            created[0].image_url.as_deref(),
            Some("https://photos.example/square.jpg")
        );
    }

    #[tokio::test]
    async fn malformed_response_reports_generation_failure() {
        let mut recipes = MockRecipeRepository::new();
        recipes.expect_create_recipe().never();

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _| Box::pin(async { Ok("Here are three recipes: ...".to_string()) }));

        let mut images = MockImageSearchClient::new();
        images.expect_search_photos().never();

        let service = service(recipes, llm, images);

        let result = service
            .generate_recipes(
                identity(),
                GenerateRecipesInput {
                    ingredients: Some("eggs".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::RecipeGenerationFailed));
    }

    #[tokio::test]
    async fn missing_ingredients_never_reach_external_apis() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();
        llm.expect_generate_with_image().never();

        let mut images = MockImageSearchClient::new();
        images.expect_search_photos().never();

        let mut recipes = MockRecipeRepository::new();
        recipes.expect_create_recipe().never();

        let service = service(recipes, llm, images);

        let result = service
            .generate_recipes(
                identity(),
                GenerateRecipesInput {
                    ingredients: Some("   ".to_string()),
                    image: Some(UploadedImage {
                        data: Vec::new(),
                        mime_type: "image/jpeg".to_string(),
                    }),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::NoIngredients));
    }

    #[tokio::test]
    async fn image_ingredients_feed_the_generation_prompt() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .withf(|_, data, mime_type, _| data == &vec![1u8, 2, 3] && mime_type == "image/png")
            .times(1)
            .returning(|_, _, _, _| {
                Box::pin(async { Ok(r#"{"ingredients": ["eggs", "spinach"]}"#.to_string()) })
            });
        llm.expect_generate_with_text()
            .withf(|prompt, _| prompt.contains("Ingredients available: eggs, spinach"))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(r#"[{"title": "Omelette"}]"#.to_string()) }));

        let mut images = MockImageSearchClient::new();
        images
            .expect_search_photos()
            .returning(|_, _| Box::pin(async { Ok(Vec::new()) }));

        let service = service(echoing_repository(), llm, images);

        let created = service
            .generate_recipes(
                identity(),
                GenerateRecipesInput {
                    ingredients: Some("ignored when a photo is sent".to_string()),
                    image: Some(UploadedImage {
                        data: vec![1, 2, 3],
                        mime_type: "image/png".to_string(),
                    }),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].image_url, None);
    }

    #[tokio::test]
    async fn unreadable_photo_reports_extraction_failure() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .returning(|_, _, _, _| Box::pin(async { Ok(r#"{"ingredients": []}"#.to_string()) }));
        llm.expect_generate_with_text().never();

        let service = service(MockRecipeRepository::new(), llm, MockImageSearchClient::new());

        let result = service
            .generate_recipes(
                identity(),
                GenerateRecipesInput {
                    image: Some(UploadedImage {
                        data: vec![9],
                        mime_type: "image/jpeg".to_string(),
                    }),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::IngredientExtractionFailed));
    }

    #[tokio::test]
    async fn failed_photo_lookup_still_stores_the_recipe() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _| Box::pin(async { Ok(r#"[{"title": "Toast"}]"#.to_string()) }));

        let mut images = MockImageSearchClient::new();
        images.expect_search_photos().returning(|_, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("timeout".to_string())) })
        });

        let service = service(echoing_repository(), llm, images);

        let created = service
            .generate_recipes(
                identity(),
                GenerateRecipesInput {
                    ingredients: Some("bread".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].image_url, None);
    }

    #[tokio::test]
    async fn saving_an_owned_recipe_is_a_no_op() {
        let caller = identity();
        let owned = stored_recipe(caller.user_id, "Basil rice");
        let owned_id = owned.id;

        let mut recipes = MockRecipeRepository::new();
        recipes.expect_get_by_id().returning(move |_| {
            let owned = owned.clone();
            Box::pin(async move { Ok(Some(owned)) })
        });
        recipes.expect_create_recipe().never();

        let service = service(recipes, MockLLMClient::new(), MockImageSearchClient::new());

        let outcome = service
            .save_recipe(caller, SaveRecipeInput { recipe_id: owned_id })
            .await
            .unwrap();

        assert!(matches!(outcome, SaveRecipeOutcome::AlreadySaved(_)));
        assert_eq!(outcome.message(), "This recipe is already saved.");
        assert_eq!(outcome.recipe().id, owned_id);
    }

    #[tokio::test]
    async fn saving_a_duplicate_copy_is_a_no_op() {
        let caller = identity();
        let foreign = stored_recipe(Uuid::new_v4(), "Basil rice");
        let existing = foreign.copy_for(caller.user_id);
        let foreign_id = foreign.id;

        let mut recipes = MockRecipeRepository::new();
        recipes.expect_get_by_id().returning(move |_| {
            let foreign = foreign.clone();
            Box::pin(async move { Ok(Some(foreign)) })
        });
        recipes.expect_find_duplicate().returning(move |_, _, _| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });
        recipes.expect_create_recipe().never();

        let service = service(recipes, MockLLMClient::new(), MockImageSearchClient::new());

        let outcome = service
            .save_recipe(caller, SaveRecipeInput { recipe_id: foreign_id })
            .await
            .unwrap();

        assert!(matches!(outcome, SaveRecipeOutcome::AlreadySaved(_)));
    }

    #[tokio::test]
    async fn saving_a_foreign_recipe_copies_it() {
        let caller = identity();
        let foreign = stored_recipe(Uuid::new_v4(), "Basil rice");
        let foreign_id = foreign.id;

        let mut recipes = MockRecipeRepository::new();
        recipes.expect_get_by_id().returning(move |_| {
            let foreign = foreign.clone();
            Box::pin(async move { Ok(Some(foreign)) })
        });
        recipes
            .expect_find_duplicate()
            .returning(|_, _, _| Box::pin(async { Ok(None) }));
        recipes
            .expect_create_recipe()
            .times(1)
            .returning(|recipe| Box::pin(async move { Ok(recipe) }));

        let service = service(recipes, MockLLMClient::new(), MockImageSearchClient::new());

        let outcome = service
            .save_recipe(caller.clone(), SaveRecipeInput { recipe_id: foreign_id })
            .await
            .unwrap();

        assert_eq!(outcome.message(), "Recipe saved successfully!");
        let saved = outcome.into_recipe();
        assert_eq!(saved.user_id, caller.user_id);
        assert_ne!(saved.id, foreign_id);
    }

    #[tokio::test]
    async fn saving_an_unknown_recipe_is_not_found() {
        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service(recipes, MockLLMClient::new(), MockImageSearchClient::new());

        let result = service
            .save_recipe(
                identity(),
                SaveRecipeInput {
                    recipe_id: Uuid::new_v4(),
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::RecipeNotFound));
    }

    #[tokio::test]
    async fn get_recipe_hides_other_users_records() {
        let foreign = stored_recipe(Uuid::new_v4(), "Congee");
        let foreign_id = foreign.id;

        let mut recipes = MockRecipeRepository::new();
        recipes.expect_get_by_id().returning(move |_| {
            let foreign = foreign.clone();
            Box::pin(async move { Ok(Some(foreign)) })
        });

        let service = service(recipes, MockLLMClient::new(), MockImageSearchClient::new());

        let result = service
            .get_recipe(
                identity(),
                GetRecipeInput {
                    recipe_id: foreign_id,
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::RecipeNotFound));
    }
}

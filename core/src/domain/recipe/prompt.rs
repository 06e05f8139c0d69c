use crate::domain::recipe::value_objects::RecommendRecipesInput;

/// Placeholder rendered for a list the caller left out or sent empty
pub const UNCONSTRAINED: &str = "None";

/// Maximum number of recipes the model is asked for
pub const MAX_RECIPES: usize = 5;

/// Render a list as `a, b, c`, or [`UNCONSTRAINED`] when absent or empty.
pub fn format_list(items: Option<&[String]>) -> String {
    match items {
        Some(items) if !items.is_empty() => items.join(", "),
        _ => UNCONSTRAINED.to_string(),
    }
}

pub fn build_recommendation_prompt(input: &RecommendRecipesInput) -> String {
    let dietary_restrictions = format_list(input.dietary_restrictions.as_deref());
    let available_ingredients = format_list(input.available_ingredients.as_deref());

    format!(
        r#"Generate a list of up to {MAX_RECIPES} recipe recommendations in JSON format. Use the following structure:
[
  {{
    "recipe_name": "Recipe Name",
    "description": "A brief description",
    "ingredients": [
      "Ingredient 1 (Provided)",
      "Ingredient 2",
      "Ingredient 3 (Provided)",
      ...
    ],
    "instructions": "Step-by-step instructions...",
    "substitutions_and_tips": "Potential ingredient substitutions or cooking tips..."
  }},
  ...
]

Clearly indicate which ingredients are from the provided available_ingredients.

Dietary Restrictions: {dietary_restrictions}
Available Ingredients: {available_ingredients}

Return ONLY valid JSON without any markdown formatting or text outside the JSON array. Do not wrap your response in code blocks or backticks.
"#
    )
}

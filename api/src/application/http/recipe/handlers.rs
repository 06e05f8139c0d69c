pub mod recommend_recipes;

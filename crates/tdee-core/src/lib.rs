//! TDEE Core - Energy expenditure calculations for the TDEE Calculator API
//!
//! This crate provides the pure calculation pipeline used by the HTTP server:
//! - Input types and request validation
//! - BMR estimation (Mifflin-St Jeor) and TDEE scaling
//! - Calorie goal tiers and macro-nutrient suggestions
//!
//! Every function here is synchronous and free of shared state.

pub mod energy;
pub mod error;
pub mod goals;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use energy::{calculate_bmr, calculate_tdee};
pub use error::ValidationError;
pub use goals::{calculate, calorie_goals, macro_suggestions};
pub use types::{
    ActivityLevel, CalculationInput, CalculationResult, CalorieGoals, MacroSuggestions,
    RawCalculationInput, Sex,
};
pub use validation::validate;

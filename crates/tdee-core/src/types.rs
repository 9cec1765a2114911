//! Request and result types shared by the calculation pipeline

use serde::{Deserialize, Serialize, Serializer};

/// Biological sex category used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse a sex category, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("male") {
            Some(Sex::Male)
        } else if s.eq_ignore_ascii_case("female") {
            Some(Sex::Female)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// Activity category and its TDEE multiplier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Look up a level by its snake_case name (case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise, desk job",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise + physical job",
        }
    }
}

/// Untyped calculation request body
///
/// Every field is kept as raw JSON so the validator can report all
/// problems at once instead of failing on the first bad type. Fields are
/// read by name only, so deserialization accepts JSON objects and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "serde_json::Map<String, serde_json::Value>")]
pub struct RawCalculationInput {
    pub weight: Option<serde_json::Value>,
    pub height: Option<serde_json::Value>,
    pub age: Option<serde_json::Value>,
    pub gender: Option<serde_json::Value>,
    pub activity_level: Option<serde_json::Value>,
}

impl RawCalculationInput {
    /// Build from any JSON body; anything but an object has no named fields
    pub fn from_body(body: serde_json::Value) -> Self {
        match body {
            serde_json::Value::Object(map) => Self::from(map),
            _ => Self::default(),
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for RawCalculationInput {
    fn from(mut map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            weight: map.remove("weight"),
            height: map.remove("height"),
            age: map.remove("age"),
            gender: map.remove("gender"),
            activity_level: map.remove("activity_level"),
        }
    }
}

/// Validated calculation input
///
/// Serializes to the request field names so it can be echoed back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationInput {
    #[serde(rename = "weight", serialize_with = "serialize_number")]
    pub weight_kg: f64,

    #[serde(rename = "height", serialize_with = "serialize_number")]
    pub height_cm: f64,

    #[serde(rename = "age", serialize_with = "serialize_number")]
    pub age_years: f64,

    #[serde(rename = "gender")]
    pub sex: Sex,

    /// Requested activity level name; unknown names are kept as sent
    pub activity_level: String,
}

/// Calorie targets derived from TDEE, in kcal/day
///
/// Field order is the order clients see in the JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalorieGoals {
    pub extreme_weight_loss: i64,
    pub weight_loss: i64,
    pub mild_weight_loss: i64,
    pub maintenance: i64,
    pub mild_weight_gain: i64,
    pub weight_gain: i64,
}

/// Daily macro-nutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroSuggestions {
    pub protein_grams: i64,
    pub fat_grams: i64,
    pub carb_grams: i64,
}

/// Full calculation output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub bmr: i64,
    pub tdee: i64,
    pub calorie_goals: CalorieGoals,
    pub macro_suggestions: MacroSuggestions,
}

/// Write whole numbers as JSON integers so `70` echoes as `70`, not `70.0`
fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

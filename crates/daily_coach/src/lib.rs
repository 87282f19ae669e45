//! Daily coaching comments for a meal-tracking day.
//!
//! Raw daily totals go in, at most [`MAX_COMMENTS`] ordered [`Comment`]s come
//! out. The pipeline is pure and synchronous:
//!
//! 1. [`normalize`] turns macro grams into shares of the day's calories.
//! 2. [`rules`] runs one independent rule group per [`Category`].
//! 3. [`reduce`] keeps the highest-priority candidate per category.
//! 4. [`order`] sorts by [`CATEGORY_ORDER`] and applies the display cap.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub mod config;
pub mod normalize;
pub mod observability;
pub mod order;
pub mod reduce;
pub mod rules;

pub use normalize::{MacroSplit, macro_split, percent_of};
pub use order::{CATEGORY_ORDER, MAX_COMMENTS, order_for_display};
pub use reduce::reduce_by_category;
pub use rules::{RuleSet, evaluate_rules, resolve_protein_goal, resolve_water_goal};

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// How a comment reads to the user.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Good,
    Warn,
    Neutral,
}

impl Tone {
    /// Reduction weight: warn beats neutral beats good.
    pub const fn priority(self) -> u8 {
        match self {
            Tone::Warn => 3,
            Tone::Neutral => 2,
            Tone::Good => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Tone::Good => "good",
            Tone::Warn => "warn",
            Tone::Neutral => "neutral",
        }
    }
}

/// Nutritional dimension a comment talks about.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Kcal,
    Protein,
    Water,
    Carb,
    Fat,
    Tdee,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Kcal => "kcal",
            Category::Protein => "protein",
            Category::Water => "water",
            Category::Carb => "carb",
            Category::Fat => "fat",
            Category::Tdee => "tdee",
        }
    }
}

/// A single coaching message.
///
/// `priority` always mirrors `tone`; build comments through [`Comment::new`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub tone: Tone,
    pub category: Category,
    pub priority: u8,
}

impl Comment {
    pub fn new(id: &str, text: impl Into<String>, tone: Tone, category: Category) -> Self {
        Self {
            id: id.to_string(),
            text: text.into(),
            tone,
            category,
            priority: tone.priority(),
        }
    }
}

/// Per-user goals that override the derived defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    #[serde(default)]
    pub water_goal_ml: Option<f64>,
    #[serde(default)]
    pub protein_goal_g: Option<f64>,
}

/// One day's totals, shaped like the `/api/meal/day/insights` payload.
///
/// Every optional field may be absent or `null`; an absent field switches off
/// the rule that reads it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetrics {
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<f64>")]
    pub total_kcal: f64,
    #[serde(default)]
    pub kcal_target: Option<f64>,
    #[serde(default)]
    pub protein_grams: Option<f64>,
    #[serde(default)]
    pub carb_grams: Option<f64>,
    #[serde(default)]
    pub fat_grams: Option<f64>,
    #[serde(default)]
    pub water_ml: Option<f64>,
    #[serde(default)]
    pub tdee: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub target_weight_kg: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<Goals>")]
    pub goals: Goals,
}

impl DailyMetrics {
    /// Parse a day-insights response body.
    pub fn from_insights_json(body: &str) -> Result<Self, CoachError> {
        Ok(serde_json::from_str(body)?)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Evaluate a day with the stock thresholds.
pub fn evaluate_daily_comments(metrics: &DailyMetrics) -> Vec<Comment> {
    evaluate_with_rules(metrics, &RuleSet::DEFAULT)
}

/// Evaluate a day with explicit thresholds.
pub fn evaluate_with_rules(metrics: &DailyMetrics, rules: &RuleSet) -> Vec<Comment> {
    let candidates = evaluate_rules(metrics, rules);
    let candidate_count = candidates.len();
    let reduced = reduce_by_category(candidates);
    let surviving = reduced.len();
    let shown = order_for_display(reduced);
    let dropped = surviving - shown.len();

    tracing::debug!(
        candidates = candidate_count,
        surviving,
        dropped,
        "evaluated daily comments"
    );
    observability::record_evaluation(&shown, dropped);
    shown
}

//! One rule group per category.
//!
//! Each group reads only its own inputs and yields at most one candidate, so
//! evaluation order never changes the candidate set. A group whose inputs are
//! missing stays silent. Several groups leave a deliberate gap between their
//! warning and praise thresholds where nothing is said.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::normalize::macro_split;
use crate::{Category, Comment, DailyMetrics, Tone};

/// Tuning thresholds for the rule groups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleSet {
    /// Below `target * kcal_low_ratio` the day is flagged as under-eaten.
    pub kcal_low_ratio: f64,
    /// Below `goal * protein_low_ratio` protein is flagged as low.
    pub protein_low_ratio: f64,
    /// Protein goal per kg of body weight when no explicit goal is set.
    pub protein_g_per_kg: f64,
    pub water_low_ml: f64,
    pub default_water_goal_ml: f64,
    pub carb_low_pct: f64,
    pub carb_high_pct: f64,
    pub fat_low_pct: f64,
    pub fat_high_pct: f64,
    pub tdee_low_ratio: f64,
    pub tdee_high_ratio: f64,
}

impl RuleSet {
    pub const DEFAULT: RuleSet = RuleSet {
        kcal_low_ratio: 0.5,
        protein_low_ratio: 0.7,
        protein_g_per_kg: 1.2,
        water_low_ml: 500.0,
        default_water_goal_ml: 1000.0,
        carb_low_pct: 40.0,
        carb_high_pct: 60.0,
        fat_low_pct: 15.0,
        fat_high_pct: 35.0,
        tdee_low_ratio: 0.7,
        tdee_high_ratio: 1.1,
    };
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Explicit goal first, otherwise derived from body weight.
pub fn resolve_protein_goal(metrics: &DailyMetrics, rules: &RuleSet) -> Option<f64> {
    metrics
        .goals
        .protein_goal_g
        .or_else(|| metrics.weight_kg.map(|w| w * rules.protein_g_per_kg))
}

pub fn resolve_water_goal(metrics: &DailyMetrics, rules: &RuleSet) -> f64 {
    metrics
        .goals
        .water_goal_ml
        .unwrap_or(rules.default_water_goal_ml)
}

/// Run every rule group and collect the raw candidates.
pub fn evaluate_rules(metrics: &DailyMetrics, rules: &RuleSet) -> Vec<Comment> {
    let split = macro_split(metrics);
    [
        kcal_comment(metrics, rules),
        protein_comment(metrics, rules),
        water_comment(metrics, rules),
        carb_comment(metrics.total_kcal, split.carb_pct, rules),
        fat_comment(metrics.total_kcal, split.fat_pct, rules),
        tdee_comment(metrics, rules),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn kcal_comment(metrics: &DailyMetrics, rules: &RuleSet) -> Option<Comment> {
    let target = metrics.kcal_target.filter(|t| *t > 0.0)?;
    let total = metrics.total_kcal;

    let comment = if total < target * rules.kcal_low_ratio {
        Comment::new(
            "kcal-low",
            format!(
                "{total:.0} kcal so far is well short of your {target:.0} kcal target. Don't skip meals."
            ),
            Tone::Neutral,
            Category::Kcal,
        )
    } else if total > target {
        Comment::new(
            "kcal-high",
            format!(
                "You've gone {:.0} kcal over your {target:.0} kcal target today.",
                total - target
            ),
            Tone::Warn,
            Category::Kcal,
        )
    } else {
        Comment::new(
            "kcal-ok",
            format!("{total:.0} of {target:.0} kcal. Right on track."),
            Tone::Good,
            Category::Kcal,
        )
    };
    Some(comment)
}

fn protein_comment(metrics: &DailyMetrics, rules: &RuleSet) -> Option<Comment> {
    let grams = metrics.protein_grams?;
    let goal = resolve_protein_goal(metrics, rules)?;

    if grams < goal * rules.protein_low_ratio {
        Some(Comment::new(
            "protein-low",
            format!("Protein is low: {grams:.0} g of about {goal:.0} g."),
            Tone::Warn,
            Category::Protein,
        ))
    } else if grams >= goal {
        Some(Comment::new(
            "protein-ok",
            format!("Protein goal reached with {grams:.0} g."),
            Tone::Good,
            Category::Protein,
        ))
    } else {
        None
    }
}

fn water_comment(metrics: &DailyMetrics, rules: &RuleSet) -> Option<Comment> {
    let ml = metrics.water_ml?;
    let goal = resolve_water_goal(metrics, rules);

    if ml < rules.water_low_ml {
        Some(Comment::new(
            "water-low",
            format!("Only {ml:.0} ml of water so far. Keep a glass nearby."),
            Tone::Warn,
            Category::Water,
        ))
    } else if ml >= goal {
        Some(Comment::new(
            "water-ok",
            format!("Water goal of {goal:.0} ml met."),
            Tone::Good,
            Category::Water,
        ))
    } else {
        None
    }
}

fn carb_comment(total_kcal: f64, carb_pct: f64, rules: &RuleSet) -> Option<Comment> {
    if total_kcal.is_nan() || total_kcal <= 0.0 {
        return None;
    }
    if carb_pct > rules.carb_high_pct {
        Some(Comment::new(
            "carb-high",
            format!("Carbs make up {carb_pct:.0}% of today's calories, on the high side."),
            Tone::Neutral,
            Category::Carb,
        ))
    } else if carb_pct < rules.carb_low_pct {
        Some(Comment::new(
            "carb-low",
            format!("Carbs are only {carb_pct:.0}% of today's calories."),
            Tone::Neutral,
            Category::Carb,
        ))
    } else {
        None
    }
}

fn fat_comment(total_kcal: f64, fat_pct: f64, rules: &RuleSet) -> Option<Comment> {
    if total_kcal.is_nan() || total_kcal <= 0.0 {
        return None;
    }
    if fat_pct > rules.fat_high_pct {
        Some(Comment::new(
            "fat-high",
            format!("Fat makes up {fat_pct:.0}% of today's calories, on the high side."),
            Tone::Neutral,
            Category::Fat,
        ))
    } else if fat_pct < rules.fat_low_pct {
        Some(Comment::new(
            "fat-low",
            format!("Fat is only {fat_pct:.0}% of today's calories."),
            Tone::Neutral,
            Category::Fat,
        ))
    } else {
        None
    }
}

fn tdee_comment(metrics: &DailyMetrics, rules: &RuleSet) -> Option<Comment> {
    let tdee = metrics.tdee.filter(|t| *t > 0.0)?;
    let total = metrics.total_kcal;

    if total < tdee * rules.tdee_low_ratio {
        Some(Comment::new(
            "tdee-low",
            format!("Intake is well below the ~{tdee:.0} kcal you burn. Eat enough to recover."),
            Tone::Warn,
            Category::Tdee,
        ))
    } else if total > tdee * rules.tdee_high_ratio {
        Some(Comment::new(
            "tdee-high",
            format!("Intake is above the ~{tdee:.0} kcal you burn today."),
            Tone::Neutral,
            Category::Tdee,
        ))
    } else {
        None
    }
}

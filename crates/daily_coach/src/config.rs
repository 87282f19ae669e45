use crate::CoachError;
use crate::rules::RuleSet;

pub const WATER_GOAL_ENV: &str = "DAILY_COACH_WATER_GOAL_ML";
pub const PROTEIN_PER_KG_ENV: &str = "DAILY_COACH_PROTEIN_G_PER_KG";

/// Deployment-wide defaults applied when a day carries no explicit goal.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub water_goal_ml: f64,
    pub protein_g_per_kg: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            water_goal_ml: RuleSet::DEFAULT.default_water_goal_ml,
            protein_g_per_kg: RuleSet::DEFAULT.protein_g_per_kg,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, CoachError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, CoachError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let water_goal_ml = positive_or(get(WATER_GOAL_ENV), WATER_GOAL_ENV, defaults.water_goal_ml)?;
        let protein_g_per_kg = positive_or(
            get(PROTEIN_PER_KG_ENV),
            PROTEIN_PER_KG_ENV,
            defaults.protein_g_per_kg,
        )?;
        Ok(Self {
            water_goal_ml,
            protein_g_per_kg,
        })
    }

    /// Thresholds to evaluate with; untouched fields keep their stock values.
    pub fn rule_set(&self) -> RuleSet {
        RuleSet {
            default_water_goal_ml: self.water_goal_ml,
            protein_g_per_kg: self.protein_g_per_kg,
            ..RuleSet::DEFAULT
        }
    }
}

fn positive_or(raw: Option<String>, key: &str, default: f64) -> Result<f64, CoachError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| CoachError::Config(format!("{key} is not a number: {raw}")))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(CoachError::Config(format!("{key} must be positive, got {raw}")));
    }
    Ok(value)
}

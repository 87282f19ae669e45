//! Macro grams to calorie shares.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::DailyMetrics;

pub const KCAL_PER_GRAM_CARB: f64 = 4.0;
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Share of the day's calories each macro contributed, in percent.
///
/// Not renormalized: logged macros are often incomplete, so the three values
/// need not add up to 100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MacroSplit {
    pub carb_pct: f64,
    pub protein_pct: f64,
    pub fat_pct: f64,
}

/// `part / total * 100`, or 0 when `total` is not positive.
pub fn percent_of(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

pub fn macro_split(metrics: &DailyMetrics) -> MacroSplit {
    let total = metrics.total_kcal;
    let carb_kcal = metrics.carb_grams.unwrap_or(0.0) * KCAL_PER_GRAM_CARB;
    let protein_kcal = metrics.protein_grams.unwrap_or(0.0) * KCAL_PER_GRAM_PROTEIN;
    let fat_kcal = metrics.fat_grams.unwrap_or(0.0) * KCAL_PER_GRAM_FAT;

    MacroSplit {
        carb_pct: percent_of(carb_kcal, total),
        protein_pct: percent_of(protein_kcal, total),
        fat_pct: percent_of(fat_kcal, total),
    }
}

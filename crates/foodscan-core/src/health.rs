//! Heuristic health assessment of a [`ProductSchema`].
//!
//! The assessment is a fold over [`HEALTH_RULES`]. Each rule reads the product,
//! appends its reason strings and may overwrite the running rating, so the
//! last rule to set a rating wins. The thresholds are per 100g and fixed.
//!
//! Sugar and fat read a missing value as zero as long as the record carries
//! nutrient data; a record without any nutrient data skips those rules, as a
//! record without an additive list skips the additive rule.

use serde::Serialize;

use crate::product::{format_amount, NutritionGrade, ProductSchema};

const HIGH_SUGAR_G: f64 = 22.5;
const MEDIUM_SUGAR_G: f64 = 5.0;
const HIGH_FAT_G: f64 = 17.5;
const MEDIUM_FAT_G: f64 = 3.0;
const MANY_ADDITIVES: usize = 5;

const LIMITED_INFORMATION: &str =
    "Limited information available for detailed assessment";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthRating {
    Good,
    Average,
    Poor,
}

impl std::fmt::Display for HealthRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthRating::Good => write!(f, "Good"),
            HealthRating::Average => write!(f, "Average"),
            HealthRating::Poor => write!(f, "Poor"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthJudgment {
    pub overall_rating: HealthRating,
    pub positives: Vec<String>,
    pub negatives: Vec<String>,
}

impl HealthJudgment {
    fn start() -> Self {
        Self {
            overall_rating: HealthRating::Average,
            positives: Vec::new(),
            negatives: Vec::new(),
        }
    }

    fn positive(mut self, reason: String) -> Self {
        self.positives.push(reason);
        self
    }

    fn negative(mut self, reason: String) -> Self {
        self.negatives.push(reason);
        self
    }

    fn rated(mut self, rating: HealthRating) -> Self {
        self.overall_rating = rating;
        self
    }
}

type HealthRule = fn(&ProductSchema, HealthJudgment) -> HealthJudgment;

/// Rules in application order.
const HEALTH_RULES: &[HealthRule] = &[
    nutrition_grade_rule,
    sugar_rule,
    fat_rule,
    additives_rule,
    palm_oil_rule,
    nova_rule,
    limited_information_rule,
];

/// Assesses a product against the fixed health rules.
///
/// Always returns at least one positive or negative reason.
#[must_use]
pub fn assess_health(product: &ProductSchema) -> HealthJudgment {
    HEALTH_RULES
        .iter()
        .fold(HealthJudgment::start(), |judgment, rule| {
            rule(product, judgment)
        })
}

fn nutrition_grade_rule(product: &ProductSchema, judgment: HealthJudgment) -> HealthJudgment {
    let Some(grade) = product.nutrition_grade else {
        return judgment;
    };
    let letter = grade.as_str().to_ascii_uppercase();
    match grade {
        NutritionGrade::A | NutritionGrade::B => judgment
            .positive(format!("Good nutrition grade ({letter})"))
            .rated(HealthRating::Good),
        NutritionGrade::C => judgment.positive(format!("Average nutrition grade ({letter})")),
        NutritionGrade::D | NutritionGrade::E => judgment
            .negative(format!("Poor nutrition grade ({letter})"))
            .rated(HealthRating::Poor),
    }
}

fn sugar_rule(product: &ProductSchema, judgment: HealthJudgment) -> HealthJudgment {
    let Some(sugar) = product.sugar_reading() else {
        return judgment;
    };
    let amount = format_amount(sugar);
    if sugar > HIGH_SUGAR_G {
        judgment
            .negative(format!("High sugar content ({amount}g per 100g)"))
            .rated(HealthRating::Poor)
    } else if sugar > MEDIUM_SUGAR_G {
        judgment.negative(format!("Medium sugar content ({amount}g per 100g)"))
    } else {
        judgment.positive(format!("Low sugar content ({amount}g per 100g)"))
    }
}

fn fat_rule(product: &ProductSchema, judgment: HealthJudgment) -> HealthJudgment {
    let Some(fat) = product.fat_reading() else {
        return judgment;
    };
    let amount = format_amount(fat);
    if fat > HIGH_FAT_G {
        judgment
            .negative(format!("High fat content ({amount}g per 100g)"))
            .rated(HealthRating::Poor)
    } else if fat > MEDIUM_FAT_G {
        judgment.negative(format!("Medium fat content ({amount}g per 100g)"))
    } else {
        judgment.positive(format!("Low fat content ({amount}g per 100g)"))
    }
}

fn additives_rule(product: &ProductSchema, judgment: HealthJudgment) -> HealthJudgment {
    let Some(count) = product.additive_count() else {
        return judgment;
    };
    if count > MANY_ADDITIVES {
        judgment
            .negative(format!("Contains many additives ({count})"))
            .rated(HealthRating::Poor)
    } else if count > 0 {
        judgment.negative(format!("Contains some additives ({count})"))
    } else {
        judgment.positive("No additives".to_string())
    }
}

fn palm_oil_rule(product: &ProductSchema, judgment: HealthJudgment) -> HealthJudgment {
    if product
        .ingredients_text
        .to_lowercase()
        .contains("palm oil")
    {
        judgment.negative("Contains palm oil".to_string())
    } else {
        judgment
    }
}

fn nova_rule(product: &ProductSchema, judgment: HealthJudgment) -> HealthJudgment {
    let Some(nova) = product.nova_group else {
        return judgment;
    };
    match nova.get() {
        4 => judgment
            .negative("Ultra-processed food (NOVA group 4)".to_string())
            .rated(HealthRating::Poor),
        3 => judgment.negative("Processed food (NOVA group 3)".to_string()),
        group => {
            let judgment = judgment.positive(format!("Minimally processed food (NOVA group {group})"));
            // Poor from an earlier rule survives a minimally processed product.
            if judgment.overall_rating == HealthRating::Poor {
                judgment
            } else {
                judgment.rated(HealthRating::Good)
            }
        }
    }
}

fn limited_information_rule(_product: &ProductSchema, judgment: HealthJudgment) -> HealthJudgment {
    if judgment.positives.is_empty() && judgment.negatives.is_empty() {
        judgment.positive(LIMITED_INFORMATION.to_string())
    } else {
        judgment
    }
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;

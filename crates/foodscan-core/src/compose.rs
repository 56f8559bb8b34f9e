use serde::Serialize;

use crate::age::{advise_age, AgeJudgment};
use crate::health::{assess_health, HealthJudgment};
use crate::product::{ProductSchema, Region};

/// Notice attached to products served by the India mirror.
pub const INDIA_DISCLAIMER: &str =
    "For Indian users: Please verify product details with local regulations.";

/// Everything returned for a successful lookup, in its wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    #[serde(flatten)]
    pub product: ProductSchema,
    pub india_message: String,
    pub health_assessment: HealthJudgment,
    pub age_recommendations: AgeJudgment,
}

impl LookupResult {
    #[must_use]
    pub fn source_region(&self) -> Region {
        self.product.source_region
    }
}

/// Runs both assessments over one product and bundles the results.
#[must_use]
pub fn compose(product: ProductSchema) -> LookupResult {
    let health_assessment = assess_health(&product);
    let age_recommendations = advise_age(&product);
    let india_message = if product.source_region == Region::India {
        INDIA_DISCLAIMER.to_string()
    } else {
        String::new()
    };

    LookupResult {
        product,
        india_message,
        health_assessment,
        age_recommendations,
    }
}

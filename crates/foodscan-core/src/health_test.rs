use super::*;
use crate::product::{NovaGroup, Nutrients, Region};

fn product_with(
    grade: Option<NutritionGrade>,
    sugar: Option<f64>,
    fat: Option<f64>,
    additives: usize,
    nova: Option<i64>,
) -> ProductSchema {
    let mut product = ProductSchema::empty(Region::Global);
    product.nutrition_grade = grade;
    product.nutrients = Some(Nutrients {
        sugars_100g: sugar,
        fat_100g: fat,
        ..Nutrients::default()
    });
    product.additive_tags = Some((0..additives).map(|i| format!("en:e{}", 100 + i)).collect());
    product.nova_group = nova.and_then(NovaGroup::new);
    product
}

#[test]
fn healthy_product_is_rated_good() {
    let product = product_with(Some(NutritionGrade::A), Some(3.0), Some(1.0), 0, Some(1));
    let judgment = assess_health(&product);

    assert_eq!(judgment.overall_rating, HealthRating::Good);
    assert!(judgment.negatives.is_empty(), "got: {:?}", judgment.negatives);
    assert_eq!(
        judgment.positives,
        vec![
            "Good nutrition grade (A)",
            "Low sugar content (3.0g per 100g)",
            "Low fat content (1.0g per 100g)",
            "No additives",
            "Minimally processed food (NOVA group 1)",
        ]
    );
}

#[test]
fn unhealthy_product_collects_every_poor_reason() {
    let product = product_with(Some(NutritionGrade::E), Some(30.0), Some(20.0), 6, Some(4));
    let judgment = assess_health(&product);

    assert_eq!(judgment.overall_rating, HealthRating::Poor);
    assert!(judgment.positives.is_empty(), "got: {:?}", judgment.positives);
    assert_eq!(
        judgment.negatives,
        vec![
            "Poor nutrition grade (E)",
            "High sugar content (30.0g per 100g)",
            "High fat content (20.0g per 100g)",
            "Contains many additives (6)",
            "Ultra-processed food (NOVA group 4)",
        ]
    );
}

#[test]
fn empty_record_falls_back_to_limited_information() {
    let judgment = assess_health(&ProductSchema::empty(Region::Global));
    assert_eq!(judgment.overall_rating, HealthRating::Average);
    assert_eq!(judgment.positives, vec![LIMITED_INFORMATION]);
    assert!(judgment.negatives.is_empty());
}

#[test]
fn nutrient_map_without_sugar_reads_as_low_sugar() {
    let product = product_with(None, None, None, 0, None);
    let judgment = assess_health(&product);
    assert!(judgment
        .positives
        .contains(&"Low sugar content (0.0g per 100g)".to_string()));
    assert!(judgment
        .positives
        .contains(&"Low fat content (0.0g per 100g)".to_string()));
    assert!(!judgment.positives.contains(&LIMITED_INFORMATION.to_string()));
}

#[test]
fn grade_c_adds_positive_without_changing_rating() {
    let mut product = ProductSchema::empty(Region::Global);
    product.nutrition_grade = Some(NutritionGrade::C);
    let judgment = assess_health(&product);
    assert_eq!(judgment.overall_rating, HealthRating::Average);
    assert_eq!(judgment.positives, vec!["Average nutrition grade (C)"]);
}

#[test]
fn medium_sugar_and_fat_are_negatives_without_rating_change() {
    let product = product_with(None, Some(10.5), Some(5.0), 0, None);
    let judgment = assess_health(&product);
    assert_eq!(judgment.overall_rating, HealthRating::Average);
    assert_eq!(
        judgment.negatives,
        vec![
            "Medium sugar content (10.5g per 100g)",
            "Medium fat content (5.0g per 100g)",
        ]
    );
}

#[test]
fn thresholds_are_strictly_greater_than() {
    let product = product_with(None, Some(22.5), Some(17.5), 5, None);
    let judgment = assess_health(&product);
    assert_eq!(judgment.overall_rating, HealthRating::Average);
    assert!(judgment
        .negatives
        .contains(&"Medium sugar content (22.5g per 100g)".to_string()));
    assert!(judgment
        .negatives
        .contains(&"Medium fat content (17.5g per 100g)".to_string()));
    assert!(judgment
        .negatives
        .contains(&"Contains some additives (5)".to_string()));

    let low = product_with(None, Some(5.0), Some(3.0), 0, None);
    let judgment = assess_health(&low);
    assert!(judgment.negatives.is_empty(), "got: {:?}", judgment.negatives);
}

#[test]
fn palm_oil_match_is_case_insensitive() {
    let mut product = ProductSchema::empty(Region::Global);
    product.ingredients_text = "Sugar, PALM Oil, hazelnuts".to_string();
    let judgment = assess_health(&product);
    assert_eq!(judgment.negatives, vec!["Contains palm oil"]);
    assert_eq!(judgment.overall_rating, HealthRating::Average);
}

#[test]
fn nova_three_is_negative_without_rating_change() {
    let product = product_with(None, Some(1.0), Some(1.0), 0, Some(3));
    let judgment = assess_health(&product);
    assert_eq!(judgment.overall_rating, HealthRating::Average);
    assert!(judgment
        .negatives
        .contains(&"Processed food (NOVA group 3)".to_string()));
}

#[test]
fn minimal_processing_does_not_lift_a_poor_rating() {
    let product = product_with(Some(NutritionGrade::D), Some(1.0), Some(1.0), 0, Some(2));
    let judgment = assess_health(&product);
    assert_eq!(judgment.overall_rating, HealthRating::Poor);
    assert!(judgment
        .positives
        .contains(&"Minimally processed food (NOVA group 2)".to_string()));
}

#[test]
fn minimal_processing_lifts_an_average_rating() {
    let product = product_with(Some(NutritionGrade::C), Some(1.0), Some(1.0), 0, Some(2));
    assert_eq!(assess_health(&product).overall_rating, HealthRating::Good);
}

#[test]
fn later_poor_rule_overrides_good_grade() {
    let product = product_with(Some(NutritionGrade::B), Some(40.0), Some(1.0), 0, None);
    assert_eq!(assess_health(&product).overall_rating, HealthRating::Poor);
}

#[test]
fn assessment_is_idempotent() {
    let product = product_with(Some(NutritionGrade::C), Some(8.0), Some(19.0), 2, Some(3));
    assert_eq!(assess_health(&product), assess_health(&product));
}

#[test]
fn rating_serializes_as_plain_word() {
    let judgment = assess_health(&ProductSchema::empty(Region::Global));
    let json = serde_json::to_value(&judgment).unwrap();
    assert_eq!(json["overall_rating"], "Average");
    assert_eq!(json["positives"][0], LIMITED_INFORMATION);
}

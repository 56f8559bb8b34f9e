//! Mapping from a raw Open Food Facts product object to [`ProductSchema`].
//!
//! Extraction never fails. Missing fields take their defaults and numeric
//! fields that do not parse are treated as absent, never as zero.

use foodscan_core::{NovaGroup, NutritionGrade, Nutrients, ProductSchema, Region};
use serde_json::Value;

use crate::types::RawProductRecord;

const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Builds the product schema from the record the `region` mirror returned.
#[must_use]
pub fn extract_product(raw: &RawProductRecord, region: Region) -> ProductSchema {
    let name = text_field(raw, "product_name");
    let name = if name.trim().is_empty() {
        UNKNOWN_PRODUCT.to_string()
    } else {
        name
    };

    ProductSchema {
        name,
        brands: text_field(raw, "brands"),
        image_url: Some(text_field(raw, "image_url")).filter(|s| !s.is_empty()),
        categories: text_field(raw, "categories"),
        countries: text_field(raw, "countries"),
        origin: text_field(raw, "origins"),
        labels: text_field(raw, "labels"),
        ingredients_text: text_field(raw, "ingredients_text"),
        allergens: tag_list(raw, "allergens_tags").unwrap_or_default(),
        additive_tags: tag_list(raw, "additives_tags"),
        nutrients: nutrients(raw),
        nutrition_grade: nutrition_grade(raw),
        nova_group: raw.get("nova_group").and_then(nova_group),
        source_region: region,
    }
}

/// String value of a field; numbers are rendered, everything else is `""`.
fn text_field(raw: &RawProductRecord, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// String entries of a list field, or `None` when the field is missing or not
/// a list.
fn tag_list(raw: &RawProductRecord, key: &str) -> Option<Vec<String>> {
    let Some(Value::Array(items)) = raw.get(key) else {
        return None;
    };
    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
    )
}

fn nutrients(raw: &RawProductRecord) -> Option<Nutrients> {
    let Some(Value::Object(map)) = raw.get("nutriments") else {
        return None;
    };
    let mut nutrients = Nutrients::default();
    for key in Nutrients::KEYS {
        if let (Some(slot), Some(value)) = (nutrients.slot_mut(key), map.get(key)) {
            *slot = number(key, value);
        }
    }
    Some(nutrients)
}

/// Reads a JSON number or numeric string. Anything else is absent.
fn number(field: &str, value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => return None,
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Null => return None,
        _ => None,
    };
    let parsed = parsed.filter(|v| v.is_finite());
    if parsed.is_none() {
        tracing::debug!(field, value = %value, "ignoring non-numeric field");
    }
    parsed
}

fn nutrition_grade(raw: &RawProductRecord) -> Option<NutritionGrade> {
    ["nutrition_grade_fr", "nutriscore_grade"]
        .iter()
        .find_map(|key| raw.get(*key).and_then(Value::as_str).and_then(NutritionGrade::parse))
}

fn nova_group(value: &Value) -> Option<NovaGroup> {
    let group = number("nova_group", value)?;
    if group.fract() != 0.0 {
        tracing::debug!(value = %value, "ignoring fractional nova_group");
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    NovaGroup::new(group as i64)
}

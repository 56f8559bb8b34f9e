use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// An Open Food Facts mirror, listed in lookup priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Global,
    Us,
    Uk,
    India,
}

impl Region {
    /// Every region, highest priority first.
    pub const ALL: [Region; 4] = [Region::Global, Region::Us, Region::Uk, Region::India];

    #[must_use]
    pub fn default_base_url(self) -> &'static str {
        match self {
            Region::Global => "https://world.openfoodfacts.org",
            Region::Us => "https://us.openfoodfacts.org",
            Region::Uk => "https://uk.openfoodfacts.org",
            Region::India => "https://in.openfoodfacts.org",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Global => write!(f, "global"),
            Region::Us => write!(f, "us"),
            Region::Uk => write!(f, "uk"),
            Region::India => write!(f, "india"),
        }
    }
}

/// Front-of-pack nutrition grade (Nutri-Score letter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutritionGrade {
    A,
    B,
    C,
    D,
    E,
}

impl NutritionGrade {
    /// Parses a single grade letter, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            "d" => Some(Self::D),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::E => "e",
        }
    }
}

impl std::fmt::Display for NutritionGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// NOVA food-processing group, guaranteed to be in `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NovaGroup(u8);

impl NovaGroup {
    #[must_use]
    pub fn new(group: i64) -> Option<Self> {
        u8::try_from(group)
            .ok()
            .filter(|g| (1..=4).contains(g))
            .map(Self)
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for NovaGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-100g nutrient values for the fixed set of keys the rules look at.
///
/// A `None` means the source omitted the value or sent something that was
/// not a number. Serialized with the Open Food Facts key names.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Nutrients {
    #[serde(rename = "energy-kcal_100g")]
    pub energy_kcal_100g: Option<f64>,
    #[serde(rename = "fat_100g")]
    pub fat_100g: Option<f64>,
    #[serde(rename = "saturated-fat_100g")]
    pub saturated_fat_100g: Option<f64>,
    #[serde(rename = "sugars_100g")]
    pub sugars_100g: Option<f64>,
    #[serde(rename = "salt_100g")]
    pub salt_100g: Option<f64>,
    #[serde(rename = "fiber_100g")]
    pub fiber_100g: Option<f64>,
    #[serde(rename = "proteins_100g")]
    pub proteins_100g: Option<f64>,
}

impl Nutrients {
    /// The source keys, in the order they are serialized.
    pub const KEYS: [&'static str; 7] = [
        "energy-kcal_100g",
        "fat_100g",
        "saturated-fat_100g",
        "sugars_100g",
        "salt_100g",
        "fiber_100g",
        "proteins_100g",
    ];

    /// Mutable slot for a source key, or `None` for keys outside the known set.
    pub fn slot_mut(&mut self, key: &str) -> Option<&mut Option<f64>> {
        match key {
            "energy-kcal_100g" => Some(&mut self.energy_kcal_100g),
            "fat_100g" => Some(&mut self.fat_100g),
            "saturated-fat_100g" => Some(&mut self.saturated_fat_100g),
            "sugars_100g" => Some(&mut self.sugars_100g),
            "salt_100g" => Some(&mut self.salt_100g),
            "fiber_100g" => Some(&mut self.fiber_100g),
            "proteins_100g" => Some(&mut self.proteins_100g),
            _ => None,
        }
    }
}

/// A product record mapped onto the fields the assessment rules use.
///
/// Built once per lookup by the field extractor and only borrowed afterwards.
/// `nutrients` and `additive_tags` are `None` when the source record has no
/// such field at all, which is different from an empty map or list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSchema {
    pub name: String,
    pub brands: String,
    pub image_url: Option<String>,
    pub categories: String,
    pub countries: String,
    pub origin: String,
    pub labels: String,
    #[serde(rename = "ingredients")]
    pub ingredients_text: String,
    pub allergens: Vec<String>,
    #[serde(rename = "additives_tags", serialize_with = "serialize_tags")]
    pub additive_tags: Option<Vec<String>>,
    #[serde(rename = "nutriments", serialize_with = "serialize_nutrients")]
    pub nutrients: Option<Nutrients>,
    #[serde(serialize_with = "serialize_grade")]
    pub nutrition_grade: Option<NutritionGrade>,
    pub nova_group: Option<NovaGroup>,
    #[serde(skip)]
    pub source_region: Region,
}

impl ProductSchema {
    /// A schema with every optional field absent.
    #[must_use]
    pub fn empty(source_region: Region) -> Self {
        Self {
            name: "Unknown Product".to_string(),
            brands: String::new(),
            image_url: None,
            categories: String::new(),
            countries: String::new(),
            origin: String::new(),
            labels: String::new(),
            ingredients_text: String::new(),
            allergens: Vec::new(),
            additive_tags: None,
            nutrients: None,
            nutrition_grade: None,
            nova_group: None,
            source_region,
        }
    }

    /// Sugar per 100g as the threshold rules read it.
    ///
    /// A record with nutrient data but no sugar value reads as zero. A record
    /// with no nutrient data at all yields `None` and the rule is skipped.
    #[must_use]
    pub fn sugar_reading(&self) -> Option<f64> {
        self.nutrients
            .as_ref()
            .map(|n| n.sugars_100g.unwrap_or(0.0))
    }

    /// Fat per 100g, read the same way as [`Self::sugar_reading`].
    #[must_use]
    pub fn fat_reading(&self) -> Option<f64> {
        self.nutrients.as_ref().map(|n| n.fat_100g.unwrap_or(0.0))
    }

    /// Salt per 100g, read the same way as [`Self::sugar_reading`].
    #[must_use]
    pub fn salt_reading(&self) -> Option<f64> {
        self.nutrients.as_ref().map(|n| n.salt_100g.unwrap_or(0.0))
    }

    /// Number of additive tags, or `None` when the record has no additive list.
    #[must_use]
    pub fn additive_count(&self) -> Option<usize> {
        self.additive_tags.as_ref().map(Vec::len)
    }
}

// An absent grade goes out as "" so clients can test it for truthiness.
#[allow(clippy::ref_option)]
fn serialize_grade<S: Serializer>(
    grade: &Option<NutritionGrade>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(grade.map_or("", NutritionGrade::as_str))
}

#[allow(clippy::ref_option)]
fn serialize_tags<S: Serializer>(
    tags: &Option<Vec<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    tags.as_deref().unwrap_or_default().serialize(serializer)
}

#[allow(clippy::ref_option)]
fn serialize_nutrients<S: Serializer>(
    nutrients: &Option<Nutrients>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match nutrients {
        Some(n) => n.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// Formats a grams-per-100g amount the way reason strings embed it:
/// whole numbers keep one decimal (`3.0`), everything else uses the
/// shortest exact form (`22.6`).
#[must_use]
pub fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nutrition_grade_parse_is_case_insensitive() {
        assert_eq!(NutritionGrade::parse("A"), Some(NutritionGrade::A));
        assert_eq!(NutritionGrade::parse(" e "), Some(NutritionGrade::E));
    }

    #[test]
    fn nutrition_grade_parse_rejects_unknown_letters() {
        assert_eq!(NutritionGrade::parse(""), None);
        assert_eq!(NutritionGrade::parse("f"), None);
        assert_eq!(NutritionGrade::parse("unknown"), None);
    }

    #[test]
    fn nova_group_accepts_only_one_through_four() {
        assert_eq!(NovaGroup::new(1).map(NovaGroup::get), Some(1));
        assert_eq!(NovaGroup::new(4).map(NovaGroup::get), Some(4));
        assert!(NovaGroup::new(0).is_none());
        assert!(NovaGroup::new(5).is_none());
        assert!(NovaGroup::new(-1).is_none());
    }

    #[test]
    fn format_amount_keeps_one_decimal_for_whole_numbers() {
        assert_eq!(format_amount(3.0), "3.0");
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(30.0), "30.0");
    }

    #[test]
    fn format_amount_uses_shortest_form_for_fractions() {
        assert_eq!(format_amount(22.6), "22.6");
        assert_eq!(format_amount(0.85), "0.85");
    }

    #[test]
    fn nutrients_slot_mut_ignores_unknown_keys() {
        let mut nutrients = Nutrients::default();
        assert!(nutrients.slot_mut("carbohydrates_100g").is_none());
        *nutrients.slot_mut("salt_100g").unwrap() = Some(1.2);
        assert_eq!(nutrients.salt_100g, Some(1.2));
    }

    #[test]
    fn missing_nutrient_keys_read_as_zero() {
        let mut product = ProductSchema::empty(Region::Global);
        product.nutrients = Some(Nutrients::default());
        assert_eq!(product.sugar_reading(), Some(0.0));
        assert_eq!(product.fat_reading(), Some(0.0));
        assert_eq!(product.salt_reading(), Some(0.0));
    }

    #[test]
    fn missing_nutrient_map_gives_no_reading() {
        let product = ProductSchema::empty(Region::Global);
        assert_eq!(product.sugar_reading(), None);
        assert_eq!(product.fat_reading(), None);
        assert_eq!(product.salt_reading(), None);
        assert_eq!(product.additive_count(), None);
    }

    #[test]
    fn schema_serializes_with_source_field_names() {
        let mut product = ProductSchema::empty(Region::India);
        product.nutrients = Some(Nutrients {
            sugars_100g: Some(4.5),
            ..Nutrients::default()
        });
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["name"], "Unknown Product");
        assert_eq!(json["nutrition_grade"], "");
        assert!(json["nova_group"].is_null());
        assert!(json["image_url"].is_null());
        assert_eq!(json["nutriments"]["sugars_100g"], 4.5);
        assert!(json["nutriments"]["fat_100g"].is_null());
        assert_eq!(json["ingredients"], "");
        assert_eq!(json["additives_tags"], serde_json::json!([]));
        assert!(json.get("source_region").is_none());
    }

    #[test]
    fn absent_nutrient_map_serializes_as_empty_object() {
        let product = ProductSchema::empty(Region::Global);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["nutriments"], serde_json::json!({}));
    }
}

pub mod age;
pub mod app_config;
pub mod barcode;
pub mod compose;
pub mod config;
pub mod error;
pub mod health;
pub mod product;

pub use age::{advise_age, AgeGroup, AgeJudgment};
pub use app_config::{AppConfig, Environment};
pub use barcode::{normalize_barcode, Barcode, MIN_BARCODE_DIGITS};
pub use compose::{compose, LookupResult, INDIA_DISCLAIMER};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, LookupError};
pub use health::{assess_health, HealthJudgment, HealthRating};
pub use product::{NovaGroup, NutritionGrade, Nutrients, ProductSchema, Region};

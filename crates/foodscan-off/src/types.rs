//! Open Food Facts `api/v0/product/{barcode}.json` response types.
//!
//! ## Observed shape
//!
//! ### Envelope
//! Every response, hit or miss, is a JSON object with a numeric `status`
//! (`1` found, `0` not found) and a `status_verbose` string such as
//! `"product found"` or `"product not found"`. A miss usually omits
//! `product` entirely. Some mirrors have been seen sending `status` as the
//! string `"1"`, so it is kept as a raw [`serde_json::Value`].
//!
//! ### Product
//! The product object is user-contributed and loosely typed: numbers show up
//! as JSON numbers or numeric strings, lists may be missing, and most text
//! fields may be empty strings. It is therefore kept as an untyped map and
//! mapped field by field in [`crate::extract`].

use serde::Deserialize;

/// The untyped product object from a successful lookup.
pub type RawProductRecord = serde_json::Map<String, serde_json::Value>;

/// Top-level response from `GET /api/v0/product/{barcode}.json`.
#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    #[serde(default)]
    pub status: serde_json::Value,

    #[serde(default)]
    pub status_verbose: Option<String>,

    #[serde(default)]
    pub product: Option<RawProductRecord>,
}

impl ProductEnvelope {
    /// `true` when the status marker says found and a non-empty product
    /// object is present.
    #[must_use]
    pub fn is_found(&self) -> bool {
        let status_found = match &self.status {
            serde_json::Value::Number(n) => n.as_i64() == Some(1),
            serde_json::Value::String(s) => s.trim() == "1",
            _ => false,
        };
        status_found && self.product.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// Consumes the envelope, returning the product only when [`Self::is_found`].
    #[must_use]
    pub fn into_found_product(self) -> Option<RawProductRecord> {
        if self.is_found() {
            self.product
        } else {
            None
        }
    }
}

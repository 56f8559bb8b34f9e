use foodscan_core::{compose, normalize_barcode, LookupError, LookupResult};

use crate::client::OffClient;
use crate::extract::extract_product;

/// Full barcode lookup: normalise the input, resolve it across regions, map
/// the record and attach both assessments.
///
/// No network request is made when the barcode is invalid.
///
/// # Errors
///
/// - [`LookupError::InvalidBarcode`] if fewer than eight digits remain after
///   stripping non-digits.
/// - [`LookupError::ProductNotFound`] if no region has the product.
pub async fn lookup(client: &OffClient, raw: &str) -> Result<LookupResult, LookupError> {
    let barcode = normalize_barcode(raw)?;
    let resolved = client.resolve(&barcode).await?;
    let result = compose(extract_product(&resolved.record, resolved.region));

    tracing::info!(
        barcode = %barcode,
        region = %result.source_region(),
        rating = %result.health_assessment.overall_rating,
        "product lookup complete"
    );
    Ok(result)
}

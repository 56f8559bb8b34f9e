use crate::LookupError;

/// Shortest digit string accepted as a barcode (EAN-8).
pub const MIN_BARCODE_DIGITS: usize = 8;

/// A barcode reduced to its ASCII digits, at least [`MIN_BARCODE_DIGITS`] long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Barcode(String);

impl Barcode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Barcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips everything but ASCII digits from user input and checks the length.
///
/// # Errors
///
/// Returns [`LookupError::InvalidBarcode`] when fewer than
/// [`MIN_BARCODE_DIGITS`] digits remain.
pub fn normalize_barcode(raw: &str) -> Result<Barcode, LookupError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < MIN_BARCODE_DIGITS {
        return Err(LookupError::InvalidBarcode {
            input: raw.to_owned(),
        });
    }
    Ok(Barcode(digits))
}

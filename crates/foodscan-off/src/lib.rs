//! Open Food Facts product source: regional lookup, field extraction and the
//! end-to-end barcode lookup pipeline.

pub mod client;
pub mod error;
pub mod extract;
pub mod lookup;
pub mod types;

pub use client::{OffClient, RegionEndpoint, ResolvedProduct};
pub use error::SourceError;
pub use extract::extract_product;
pub use lookup::lookup;
pub use types::{ProductEnvelope, RawProductRecord};

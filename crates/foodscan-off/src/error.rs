use thiserror::Error;

/// Why a single Open Food Facts endpoint failed to produce a product.
///
/// The resolver treats every variant as a miss and moves on to the next
/// region; these only reach callers from client construction.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the envelope.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The envelope parsed but its status marker says the product is unknown.
    #[error("product not found at {url}")]
    NotFound { url: String },
}

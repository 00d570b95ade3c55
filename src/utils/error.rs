use thiserror::Error;

/// Pricing resolution errors. Malformed timestamps are the one input problem
/// that must surface loudly instead of degrading to an `Unknown` status.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("malformed timestamp '{raw}'")]
    MalformedTimestamp {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl PricingError {
    /// Stable machine-readable code for log aggregation and client mapping.
    pub fn code(&self) -> &'static str {
        match self {
            PricingError::MalformedTimestamp { .. } => "MALFORMED_TIMESTAMP",
        }
    }
}

use chrono::{DateTime, Utc};

use crate::utils::error::PricingError;

/// Parses an API timestamp (RFC 3339) into UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, PricingError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| PricingError::MalformedTimestamp {
            raw: raw.to_string(),
            source,
        })
}

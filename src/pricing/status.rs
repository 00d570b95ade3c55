use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Phase;
use crate::utils::datetime::parse_timestamp;
use crate::utils::error::PricingError;

/// Where a time window sits relative to `now`. Recomputed on every call,
/// never stored on the phase itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseStatus {
    Unknown,
    Upcoming,
    Current,
    Ended,
}

impl PhaseStatus {
    pub fn is_current(self) -> bool {
        self == PhaseStatus::Current
    }
}

/// Classifies an inclusive `[start, end]` window against `now`.
///
/// A window missing either bound is `Unknown`: it cannot be placed in time
/// and must never count as current. Bounds that are present but unparseable
/// are an error, not `Unknown`, so upstream data problems stay visible.
pub fn classify_window(
    start: Option<&str>,
    end: Option<&str>,
    now: DateTime<Utc>,
) -> Result<PhaseStatus, PricingError> {
    let (Some(start), Some(end)) = (start, end) else {
        return Ok(PhaseStatus::Unknown);
    };

    // Parse both bounds up front; a malformed end date must fail even when
    // `now` is already before the start.
    let start = parse_timestamp(start)?;
    let end = parse_timestamp(end)?;

    if now < start {
        Ok(PhaseStatus::Upcoming)
    } else if now > end {
        Ok(PhaseStatus::Ended)
    } else {
        // Boundary equality on either side counts as current.
        Ok(PhaseStatus::Current)
    }
}

pub fn classify(phase: &Phase, now: DateTime<Utc>) -> Result<PhaseStatus, PricingError> {
    classify_window(phase.start_date.as_deref(), phase.end_date.as_deref(), now)
}

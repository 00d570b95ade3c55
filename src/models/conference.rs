use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{PriceSummary, Ticket};
use crate::pricing::status::{classify_window, PhaseStatus};
use crate::pricing::price_range;
use crate::utils::error::PricingError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

impl Conference {
    /// Schedule badge for list cards, derived from the conference's own
    /// date range with the same inclusive-window rules as pricing phases.
    pub fn schedule_status(&self, now: DateTime<Utc>) -> Result<PhaseStatus, PricingError> {
        classify_window(self.start_date.as_deref(), self.end_date.as_deref(), now)
    }

    /// Min/max effective ticket price for the list-view summary.
    pub fn price_summary(&self, now: DateTime<Utc>) -> Result<PriceSummary, PricingError> {
        price_range(&self.tickets, now)
    }
}

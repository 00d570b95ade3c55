use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Phase;

/// A purchasable admission tier for a conference, as received from the
/// conference API. Snapshot data; never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Whole currency units. Absent means the price is not announced yet.
    pub base_price: Option<Decimal>,
    pub total_slots: Option<i32>,
    pub available_slots: Option<i32>,
    #[serde(default)]
    pub is_author_only: bool,
    /// Display order, not necessarily chronological.
    #[serde(default)]
    pub phases: Vec<Phase>,
}

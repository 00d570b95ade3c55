use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A time-bounded pricing override on a ticket, e.g. "early bird".
///
/// Dates arrive as the API's raw ISO-8601 strings and are parsed at
/// classification time so malformed data surfaces as an error instead of
/// being mistaken for an open-ended phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub id: Uuid,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Percent of the base price the buyer pays while this phase is current,
    /// in (0, 100]. Absent means the phase does not change the price.
    pub apply_percent: Option<Decimal>,
    pub available_slots: Option<i32>,
}

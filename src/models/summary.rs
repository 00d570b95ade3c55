use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Min/max effective price over a conference's tickets. Both bounds absent
/// means no ticket carries a price ("free / TBD" in list views).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl PriceSummary {
    pub fn is_free(&self) -> bool {
        self.min_price.is_none()
    }
}

//! Conference pricing core: phase status classification, effective ticket
//! pricing, and per-conference price summaries for list views.

pub mod models;
pub mod pricing;
pub mod utils;

pub use models::{Conference, Phase, PriceSummary, Ticket};
pub use pricing::{
    classify, effective_price, price_range, resolve_ticket, PhaseStatus, ResolvedTicket,
};
pub use utils::error::PricingError;

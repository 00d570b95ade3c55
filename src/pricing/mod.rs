pub mod price;
pub mod range;
pub mod status;

pub use price::{
    active_phase, effective_price, resolve_ticket, ticket_price, ResolvedPhase, ResolvedTicket,
};
pub use range::price_range;
pub use status::{classify, classify_window, PhaseStatus};

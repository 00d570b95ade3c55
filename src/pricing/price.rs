use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Phase, Ticket};
use crate::pricing::status::{classify, PhaseStatus};
use crate::utils::error::PricingError;

/// Price the buyer pays for a base price under an optional phase percent.
///
/// No base price means the ticket is still "TBD" and has no effective price.
/// Rounds half-up to whole currency units; the domain has no fractional
/// currency.
pub fn effective_price(
    base_price: Option<Decimal>,
    apply_percent: Option<Decimal>,
) -> Option<Decimal> {
    let base = base_price?;
    match apply_percent {
        Some(percent) => Some(
            (base * percent / Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        ),
        None => Some(base),
    }
}

/// Selects the single phase treated as active for `ticket` at `now`.
///
/// Only phases classified `Current` qualify. When windows overlap and more
/// than one is current, the cheapest (lowest `apply_percent`) wins; a phase
/// without a percent ranks as 100. Overlaps are logged as anomalous data,
/// not treated as a failure.
pub fn active_phase<'a>(
    ticket: &'a Ticket,
    now: DateTime<Utc>,
) -> Result<Option<&'a Phase>, PricingError> {
    let mut current: Vec<&Phase> = Vec::new();
    for phase in &ticket.phases {
        if classify(phase, now)?.is_current() {
            current.push(phase);
        }
    }

    if current.len() > 1 {
        tracing::warn!(
            ticket_id = %ticket.id,
            overlapping = current.len(),
            "multiple phases current at once, selecting the cheapest"
        );
    }

    Ok(current
        .into_iter()
        .min_by_key(|phase| phase.apply_percent.unwrap_or(Decimal::ONE_HUNDRED)))
}

/// The ticket's single effective price at `now`, or `None` when the base
/// price is not announced.
pub fn ticket_price(ticket: &Ticket, now: DateTime<Utc>) -> Result<Option<Decimal>, PricingError> {
    let active = active_phase(ticket, now)?;
    Ok(effective_price(
        ticket.base_price,
        active.and_then(|phase| phase.apply_percent),
    ))
}

/// One phase row on the pricing screen: its own window status and the price
/// it would charge, independent of whether it is the active phase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPhase {
    pub phase_id: Uuid,
    pub name: String,
    pub status: PhaseStatus,
    pub display_price: Option<Decimal>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTicket {
    pub ticket_id: Uuid,
    pub effective_price: Option<Decimal>,
    pub phases: Vec<ResolvedPhase>,
}

/// Resolves a ticket for display: every phase with its status and displayed
/// price (for the phase list), plus the one effective price the buyer pays.
pub fn resolve_ticket(ticket: &Ticket, now: DateTime<Utc>) -> Result<ResolvedTicket, PricingError> {
    let active = active_phase(ticket, now)?;
    let active_id = active.map(|phase| phase.id);
    let effective = effective_price(
        ticket.base_price,
        active.and_then(|phase| phase.apply_percent),
    );

    let mut phases = Vec::with_capacity(ticket.phases.len());
    for phase in &ticket.phases {
        phases.push(ResolvedPhase {
            phase_id: phase.id,
            name: phase.name.clone(),
            status: classify(phase, now)?,
            display_price: effective_price(ticket.base_price, phase.apply_percent),
            is_active: active_id == Some(phase.id),
        });
    }

    Ok(ResolvedTicket {
        ticket_id: ticket.id,
        effective_price: effective,
        phases,
    })
}

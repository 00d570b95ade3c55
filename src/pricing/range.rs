use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{PriceSummary, Ticket};
use crate::pricing::price::ticket_price;
use crate::utils::error::PricingError;

/// Min/max effective price across `tickets` at `now`, in a single scan.
///
/// Tickets without an effective price ("TBD") are excluded: they neither
/// lower the min nor raise the max. An empty priced set yields a summary
/// with both bounds absent.
pub fn price_range(tickets: &[Ticket], now: DateTime<Utc>) -> Result<PriceSummary, PricingError> {
    let mut min_price: Option<Decimal> = None;
    let mut max_price: Option<Decimal> = None;

    for ticket in tickets {
        let Some(price) = ticket_price(ticket, now)? else {
            continue;
        };
        min_price = Some(min_price.map_or(price, |min| min.min(price)));
        max_price = Some(max_price.map_or(price, |max| max.max(price)));
    }

    Ok(PriceSummary {
        min_price,
        max_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Phase;
    use uuid::Uuid;

    fn ts(raw: &str) -> DateTime<Utc> {
        raw.parse().unwrap()
    }

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn ticket(base_price: Option<i64>, phases: Vec<Phase>) -> Ticket {
        Ticket {
            id: Uuid::new_v4(),
            name: "tier".to_string(),
            description: None,
            base_price: base_price.map(Decimal::from),
            total_slots: None,
            available_slots: None,
            is_author_only: false,
            phases,
        }
    }

    fn discount(percent: i64) -> Phase {
        Phase {
            id: Uuid::new_v4(),
            name: "discount".to_string(),
            start_date: Some("2026-03-01T00:00:00Z".to_string()),
            end_date: Some("2026-03-31T23:59:59Z".to_string()),
            apply_percent: Some(Decimal::from(percent)),
            available_slots: None,
        }
    }

    #[test]
    fn test_empty_ticket_list_is_free() {
        let summary = price_range(&[], ts("2026-03-15T00:00:00Z")).unwrap();
        assert_eq!(summary.min_price, None);
        assert_eq!(summary.max_price, None);
        assert!(summary.is_free());
    }

    #[test]
    fn test_min_max_over_base_prices() {
        let now = ts("2026-03-15T00:00:00Z");
        let tickets = vec![ticket(Some(100000), vec![]), ticket(Some(200000), vec![])];

        let summary = price_range(&tickets, now).unwrap();
        assert_eq!(summary.min_price, Some(dec(100000)));
        assert_eq!(summary.max_price, Some(dec(200000)));
    }

    #[test]
    fn test_unpriced_tickets_are_excluded() {
        let now = ts("2026-03-15T00:00:00Z");
        let tickets = vec![ticket(None, vec![]), ticket(Some(50000), vec![])];

        let summary = price_range(&tickets, now).unwrap();
        assert_eq!(summary.min_price, Some(dec(50000)));
        assert_eq!(summary.max_price, Some(dec(50000)));
    }

    #[test]
    fn test_only_unpriced_tickets_is_free() {
        let now = ts("2026-03-15T00:00:00Z");
        let summary = price_range(&[ticket(None, vec![])], now).unwrap();
        assert!(summary.is_free());
    }

    #[test]
    fn test_active_phase_shapes_the_range() {
        let now = ts("2026-03-15T00:00:00Z");
        // 40% of 200000 undercuts the 100000 tier.
        let tickets = vec![
            ticket(Some(100000), vec![]),
            ticket(Some(200000), vec![discount(40)]),
        ];

        let summary = price_range(&tickets, now).unwrap();
        assert_eq!(summary.min_price, Some(dec(80000)));
        assert_eq!(summary.max_price, Some(dec(100000)));
    }

    #[test]
    fn test_identical_inputs_identical_output() {
        let now = ts("2026-03-15T00:00:00Z");
        let tickets = vec![
            ticket(Some(100000), vec![discount(90), discount(80)]),
            ticket(Some(300000), vec![]),
        ];

        let first = price_range(&tickets, now).unwrap();
        for _ in 0..5 {
            assert_eq!(price_range(&tickets, now).unwrap(), first);
        }
        assert_eq!(first.min_price, Some(dec(80000)));
        assert_eq!(first.max_price, Some(dec(300000)));
    }
}

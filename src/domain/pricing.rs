//! The estimate formula, exactly as the office has always quoted it:
//! base times a binary distance factor, plus 18% GST computed on the base
//! alone. No rounding happens here; display code decides presentation.

use super::catalog::{RateCard, RateSource};
use super::services::Service;

/// GST applied to the base fare.
pub const TAX_RATE: f64 = 0.18;

/// Multiplier when pickup and drop are different places.
pub const LONG_HAUL_FACTOR: f64 = 1.5;

/// Multiplier when the move stays within one location.
pub const LOCAL_FACTOR: f64 = 1.0;

/// Everything a quote or invoice needs to know about one estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostBreakdown {
    pub base: i64,
    pub source: RateSource,
    pub distance_factor: f64,
    pub tax: f64,
    pub total: f64,
}

/// The "distance" heuristic is an exact, case-sensitive string comparison.
/// Two empty fields count as the same place.
pub fn distance_factor(pickup: &str, destination: &str) -> f64 {
    if pickup != destination {
        LONG_HAUL_FACTOR
    } else {
        LOCAL_FACTOR
    }
}

/// Price a service between two free-text locations. Inputs are taken as-is:
/// no trimming, no validation, negative board rates produce negative totals.
pub fn estimate(
    rates: &RateCard,
    service: Service,
    pickup: &str,
    destination: &str,
) -> CostBreakdown {
    let (base, source) = rates.base_for(service);
    let factor = distance_factor(pickup, destination);
    let tax = TAX_RATE * base as f64;
    let total = base as f64 * factor + tax;

    CostBreakdown {
        base,
        source,
        distance_factor: factor,
        tax,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::{HomeSize, OfficeScale};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn same_location_is_base_plus_tax() {
        let rates = RateCard::default();
        let quote = estimate(&rates, Service::Home(HomeSize::Villa), "X", "X");
        assert_eq!(quote.base, 3000);
        assert_eq!(quote.source, RateSource::Listed);
        assert!(close(quote.distance_factor, LOCAL_FACTOR));
        assert!(close(quote.tax, 540.0));
        assert!(close(quote.total, 3540.0));
    }

    #[test]
    fn cross_town_applies_the_long_haul_factor() {
        let rates = RateCard::default();
        let quote = estimate(&rates, Service::Home(HomeSize::OneBhk), "A", "B");
        assert_eq!(quote.base, 1000);
        assert!(close(quote.distance_factor, LONG_HAUL_FACTOR));
        assert!(close(quote.tax, 180.0));
        assert!(close(quote.total, 1680.0));
    }

    #[test]
    fn tax_is_never_applied_to_the_adjusted_amount() {
        // base * 1.5 + 0.18 * base == base * 1.68, not base * 1.5 * 1.18
        let rates = RateCard::default();
        let quote = estimate(&rates, Service::Office(OfficeScale::Small), "Sakchi", "Kadma");
        assert!(close(quote.total, 2500.0 * 1.68));
    }

    #[test]
    fn comparison_is_exact_and_case_sensitive() {
        let rates = RateCard::default();
        let service = Service::Home(HomeSize::OneBhk);
        assert!(close(
            estimate(&rates, service, "Sakchi", "sakchi").distance_factor,
            LONG_HAUL_FACTOR
        ));
        assert!(close(
            estimate(&rates, service, "Sakchi ", "Sakchi").distance_factor,
            LONG_HAUL_FACTOR
        ));
        assert!(close(
            estimate(&rates, service, "", "").distance_factor,
            LOCAL_FACTOR
        ));
    }

    #[test]
    fn unlisted_service_uses_the_fallback_base() {
        let rates = RateCard::empty();
        let quote = estimate(&rates, Service::Home(HomeSize::TwoBhk), "A", "A");
        assert_eq!(quote.base, 1000);
        assert_eq!(quote.source, RateSource::Fallback);
        assert!(close(quote.total, 1180.0));
    }

    #[test]
    fn negative_board_rates_flow_through_unclamped() {
        let mut rates = RateCard::default();
        rates.set_price(Service::Home(HomeSize::OneBhk), -100);
        let quote = estimate(&rates, Service::Home(HomeSize::OneBhk), "A", "A");
        assert!(close(quote.total, -118.0));
    }
}

use std::collections::BTreeMap;

use super::services::{GoodsCategory, HomeSize, OfficeScale, Service};

/// Base applied when a service has no listed rate.
pub const FALLBACK_BASE: i64 = 1000;

/// Published rates, in rupees, as printed on the shop board.
const DEFAULT_RATES: [(Service, i64); 10] = [
    (Service::Home(HomeSize::OneBhk), 1000),
    (Service::Home(HomeSize::TwoBhk), 1500),
    (Service::Home(HomeSize::ThreeBhk), 2000),
    (Service::Home(HomeSize::Villa), 3000),
    (Service::Office(OfficeScale::Small), 2500),
    (Service::Office(OfficeScale::Medium), 3500),
    (Service::Office(OfficeScale::Corporate), 5000),
    (Service::Goods(GoodsCategory::Furniture), 1200),
    (Service::Goods(GoodsCategory::Electronics), 1500),
    (Service::Goods(GoodsCategory::Industrial), 2500),
];

/// Whether an estimate used a listed rate or the fallback base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateSource {
    Listed,
    Fallback,
}

/// The editable price board. Keys are fixed at construction; admin edits
/// overwrite values in place and are lost on restart.
#[derive(Clone, Debug, PartialEq)]
pub struct RateCard {
    rates: BTreeMap<Service, i64>,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            rates: DEFAULT_RATES.into_iter().collect(),
        }
    }
}

impl RateCard {
    /// An empty card, every lookup falls back. Only useful in tests.
    pub fn empty() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    pub fn price(&self, service: Service) -> Option<i64> {
        self.rates.get(&service).copied()
    }

    /// The base an estimate will use, with the fallback made explicit.
    pub fn base_for(&self, service: Service) -> (i64, RateSource) {
        match self.price(service) {
            Some(base) => (base, RateSource::Listed),
            None => (FALLBACK_BASE, RateSource::Fallback),
        }
    }

    /// Overwrite a rate. New keys are not invented here: the board lists a
    /// fixed set of services and the admin page only iterates those.
    pub fn set_price(&mut self, service: Service, price: i64) {
        self.rates.insert(service, price);
    }

    pub fn cheapest_of(&self, services: &[Service]) -> Option<i64> {
        services
            .iter()
            .filter_map(|service| self.price(*service))
            .min()
    }
}

/// Lenient integer parse used by the rate editor: optional sign, leading
/// digits, any trailing garbage discarded. Fully non-numeric input is 0.
pub fn parse_price_input(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (sign, digits_onward) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = digits_onward
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();

    digits.parse::<i64>().map(|value| sign * value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_card_lists_every_service() {
        let card = RateCard::default();
        for service in Service::all() {
            assert!(card.price(service).is_some(), "{} missing", service.label());
        }
        assert_eq!(card.price(Service::Home(HomeSize::OneBhk)), Some(1000));
        assert_eq!(
            card.price(Service::Office(OfficeScale::Corporate)),
            Some(5000)
        );
    }

    #[test]
    fn missing_rate_reports_fallback() {
        let card = RateCard::empty();
        let (base, source) = card.base_for(Service::Home(HomeSize::Villa));
        assert_eq!(base, FALLBACK_BASE);
        assert_eq!(source, RateSource::Fallback);

        let card = RateCard::default();
        let (base, source) = card.base_for(Service::Home(HomeSize::Villa));
        assert_eq!(base, 3000);
        assert_eq!(source, RateSource::Listed);
    }

    #[test]
    fn edits_overwrite_in_place() {
        let mut card = RateCard::default();
        card.set_price(Service::Goods(GoodsCategory::Furniture), 1800);
        assert_eq!(card.price(Service::Goods(GoodsCategory::Furniture)), Some(1800));
    }

    #[test]
    fn lenient_parse_matches_the_board_editor() {
        assert_eq!(parse_price_input("1200"), 1200);
        assert_eq!(parse_price_input("  1200"), 1200);
        assert_eq!(parse_price_input("12abc"), 12);
        assert_eq!(parse_price_input("12.9"), 12);
        assert_eq!(parse_price_input("abc"), 0);
        assert_eq!(parse_price_input(""), 0);
        assert_eq!(parse_price_input("-250"), -250);
        assert_eq!(parse_price_input("+40"), 40);
    }

    #[test]
    fn cheapest_of_ignores_unlisted() {
        use crate::domain::services::ServiceKind;

        let mut card = RateCard::empty();
        card.set_price(Service::Home(HomeSize::TwoBhk), 1500);
        card.set_price(Service::Home(HomeSize::Villa), 3000);
        assert_eq!(card.cheapest_of(ServiceKind::Home.services()), Some(1500));
        assert_eq!(card.cheapest_of(ServiceKind::Goods.services()), None);
    }
}

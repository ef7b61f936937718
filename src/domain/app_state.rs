use super::catalog::{parse_price_input, RateCard};
use super::comments::CommentLog;
use super::pricing::{estimate, CostBreakdown};
use super::services::{Service, ServiceKind};

/// The quote currently being drafted. Fields mirror the paper form the
/// office uses; nothing is validated, the estimator takes them as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteForm {
    pub customer_name: String,
    pub phone: String,
    pub pickup: String,
    pub destination: String,
    pub service: Service,
    /// Set only by `Action::RequestEstimate`, kept until the next one.
    pub estimate: Option<CostBreakdown>,
}

/// Everything a user event may do to the session, applied through
/// [`AppState::apply`] so mutation stays in one place.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    EditCustomerName(String),
    EditPhone(String),
    EditPickup(String),
    EditDestination(String),
    SelectServiceKind(ServiceKind),
    SelectService(Service),
    RequestEstimate,
    EditRate { service: Service, raw: String },
    SubmitComment(String),
}

/// Whole-session state: the price board, the draft quote, the guest book.
/// Owned by a single UI signal; resets on every launch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub rates: RateCard,
    pub quote: QuoteForm,
    pub comments: CommentLog,
}

impl AppState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::EditCustomerName(value) => self.quote.customer_name = value,
            Action::EditPhone(value) => self.quote.phone = value,
            Action::EditPickup(value) => self.quote.pickup = value,
            Action::EditDestination(value) => self.quote.destination = value,
            // Picking a family always snaps the sub-type back to its menu head.
            Action::SelectServiceKind(kind) => self.quote.service = kind.first_service(),
            Action::SelectService(service) => self.quote.service = service,
            Action::RequestEstimate => {
                self.quote.estimate = Some(estimate(
                    &self.rates,
                    self.quote.service,
                    &self.quote.pickup,
                    &self.quote.destination,
                ));
            }
            Action::EditRate { service, raw } => {
                self.rates.set_price(service, parse_price_input(&raw));
            }
            Action::SubmitComment(raw) => {
                self.comments.submit(&raw);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::RateSource;
    use crate::domain::services::{GoodsCategory, HomeSize, OfficeScale};

    #[test]
    fn selecting_a_family_resets_to_its_first_sub_type() {
        let mut state = AppState::default();
        state.apply(Action::SelectService(Service::Home(HomeSize::Villa)));
        state.apply(Action::SelectServiceKind(ServiceKind::Office));
        assert_eq!(state.quote.service, Service::Office(OfficeScale::Small));

        // Re-selecting the current family snaps back too.
        state.apply(Action::SelectService(Service::Office(OfficeScale::Corporate)));
        state.apply(Action::SelectServiceKind(ServiceKind::Office));
        assert_eq!(state.quote.service, Service::Office(OfficeScale::Small));
    }

    #[test]
    fn estimate_is_explicit_and_sticky() {
        let mut state = AppState::default();
        state.apply(Action::EditPickup("A".into()));
        state.apply(Action::EditDestination("B".into()));
        assert!(state.quote.estimate.is_none());

        state.apply(Action::RequestEstimate);
        let first = state.quote.estimate.expect("estimate set");
        assert!((first.total - 1680.0).abs() < 1e-9);

        // Editing fields afterwards does not recompute...
        state.apply(Action::EditDestination("A".into()));
        assert_eq!(state.quote.estimate, Some(first));

        // ...only the next explicit request does.
        state.apply(Action::RequestEstimate);
        let second = state.quote.estimate.expect("estimate re-set");
        assert!((second.total - 1180.0).abs() < 1e-9);
    }

    #[test]
    fn rate_edits_feed_the_next_estimate() {
        let mut state = AppState::default();
        state.apply(Action::EditRate {
            service: Service::Home(HomeSize::OneBhk),
            raw: "2000".into(),
        });
        state.apply(Action::RequestEstimate);
        let breakdown = state.quote.estimate.expect("estimate set");
        assert_eq!(breakdown.base, 2000);
        assert_eq!(breakdown.source, RateSource::Listed);
    }

    #[test]
    fn garbage_rate_input_becomes_zero() {
        let mut state = AppState::default();
        let service = Service::Goods(GoodsCategory::Electronics);
        state.apply(Action::EditRate {
            service,
            raw: "not a number".into(),
        });
        assert_eq!(state.rates.price(service), Some(0));
    }

    #[test]
    fn comments_go_through_the_log() {
        let mut state = AppState::default();
        state.apply(Action::SubmitComment("  shifted my flat, zero scratches  ".into()));
        state.apply(Action::SubmitComment("   ".into()));
        assert_eq!(
            state.comments.entries(),
            ["shifted my flat, zero scratches"]
        );
    }
}

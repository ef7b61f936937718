//! Quoting domain: the price board, the estimate formula, and session state.

pub mod app_state;
pub mod catalog;
pub mod comments;
pub mod pricing;
pub mod services;

#[allow(unused_imports)]
pub use app_state::{Action, AppState, QuoteForm};
#[allow(unused_imports)]
pub use catalog::{parse_price_input, RateCard, RateSource, FALLBACK_BASE};
#[allow(unused_imports)]
pub use comments::CommentLog;
#[allow(unused_imports)]
pub use pricing::{
    distance_factor, estimate, CostBreakdown, LOCAL_FACTOR, LONG_HAUL_FACTOR, TAX_RATE,
};
#[allow(unused_imports)]
pub use services::{GoodsCategory, HomeSize, OfficeScale, Service, ServiceKind};

pub mod kpi_card;
pub mod rate_badge;
pub mod toast;

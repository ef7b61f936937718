use dioxus::prelude::*;

use crate::domain::RateSource;

/// Marks whether an estimate used a board rate or the standard fallback, so
/// a silently-defaulted price never looks like a listed one.
#[component]
pub fn RateBadge(source: RateSource) -> Element {
    let (label, class) = match source {
        RateSource::Listed => ("Board rate", "badge badge-listed"),
        RateSource::Fallback => ("Standard rate", "badge badge-fallback"),
    };

    rsx! {
        span { class: "{class}", "{label}" }
    }
}

use dioxus::prelude::*;

use crate::{
    domain::{Action, AppState, RateSource, Service, ServiceKind},
    invoice::{self, Invoice},
    ui::{
        components::{
            kpi_card::KpiCard,
            rate_badge::RateBadge,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn QuotePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let quote = state.with(|st| st.quote.clone());
    let kind = quote.service.kind();

    let mut dispatch = state.clone();
    let on_name = move |evt: FormEvent| {
        dispatch.with_mut(|st| st.apply(Action::EditCustomerName(evt.value())))
    };
    let mut dispatch = state.clone();
    let on_phone =
        move |evt: FormEvent| dispatch.with_mut(|st| st.apply(Action::EditPhone(evt.value())));
    let mut dispatch = state.clone();
    let on_pickup =
        move |evt: FormEvent| dispatch.with_mut(|st| st.apply(Action::EditPickup(evt.value())));
    let mut dispatch = state.clone();
    let on_destination = move |evt: FormEvent| {
        dispatch.with_mut(|st| st.apply(Action::EditDestination(evt.value())))
    };

    let mut dispatch = state.clone();
    let on_kind_change = move |evt: FormEvent| {
        if let Some(kind) = ServiceKind::from_label(&evt.value()) {
            dispatch.with_mut(|st| st.apply(Action::SelectServiceKind(kind)));
        }
    };

    let mut dispatch = state.clone();
    let on_sub_change = move |evt: FormEvent| {
        if let Some(service) = Service::from_label(&evt.value()) {
            dispatch.with_mut(|st| st.apply(Action::SelectService(service)));
        }
    };

    let mut dispatch = state.clone();
    let estimate_toasts = toasts.clone();
    let on_estimate = move |evt: FormEvent| {
        evt.prevent_default();
        let source = dispatch.with_mut(|st| {
            st.apply(Action::RequestEstimate);
            st.quote.estimate.map(|breakdown| breakdown.source)
        });
        if source == Some(RateSource::Fallback) {
            push_toast(
                estimate_toasts.clone(),
                ToastKind::Warning,
                "No board rate listed for this service; the standard base was applied.",
            );
        }
    };

    let on_download = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let quote = state.with(|st| st.quote.clone());
            let result = Invoice::from_quote(&quote)
                .and_then(|bill| bill.write_to_dir(&invoice::default_output_dir()));
            match result {
                Ok(path) => push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    format!("Invoice saved to {}", path.display()),
                ),
                Err(err) => {
                    tracing::error!(error = %err, "invoice generation failed");
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        format!("Could not generate invoice: {err}"),
                    );
                }
            }
        }
    };

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::PANEL}",
                h2 { class: "{theme::SECTION_TITLE}", "Estimate Your Move" }
                form { onsubmit: on_estimate,
                    div { class: "mt-4 grid grid-cols-2 gap-4",
                        div {
                            label { class: "{theme::FIELD_LABEL}", "Your Name" }
                            input {
                                class: "{theme::INPUT}",
                                value: "{quote.customer_name}",
                                oninput: on_name,
                            }
                        }
                        div {
                            label { class: "{theme::FIELD_LABEL}", "Phone" }
                            input {
                                class: "{theme::INPUT}",
                                value: "{quote.phone}",
                                oninput: on_phone,
                            }
                        }
                        div {
                            label { class: "{theme::FIELD_LABEL}", "Pickup Location" }
                            input {
                                class: "{theme::INPUT}",
                                value: "{quote.pickup}",
                                oninput: on_pickup,
                            }
                        }
                        div {
                            label { class: "{theme::FIELD_LABEL}", "Destination" }
                            input {
                                class: "{theme::INPUT}",
                                value: "{quote.destination}",
                                oninput: on_destination,
                            }
                        }
                        div {
                            label { class: "{theme::FIELD_LABEL}", "Service Type" }
                            select {
                                class: "{theme::INPUT}",
                                value: "{kind.label()}",
                                onchange: on_kind_change,
                                for option_kind in ServiceKind::all() {
                                    option {
                                        value: "{option_kind.label()}",
                                        selected: option_kind == kind,
                                        "{option_kind.label()}"
                                    }
                                }
                            }
                        }
                        div {
                            label { class: "{theme::FIELD_LABEL}", "Sub Type" }
                            select {
                                class: "{theme::INPUT}",
                                value: "{quote.service.label()}",
                                onchange: on_sub_change,
                                for option_service in kind.services().iter().copied() {
                                    option {
                                        value: "{option_service.label()}",
                                        selected: option_service == quote.service,
                                        "{option_service.label()}"
                                    }
                                }
                            }
                        }
                    }
                    button {
                        class: "mt-4 {theme::BTN_PRIMARY}",
                        r#type: "submit",
                        "Estimate Cost"
                    }
                }
            }

            if let Some(breakdown) = quote.estimate {
                section { class: "{theme::PANEL}",
                    div { class: "flex items-center justify-between",
                        h2 { class: "{theme::SECTION_TITLE}", "Your Estimate" }
                        RateBadge { source: breakdown.source }
                    }
                    div { class: "mt-4 grid grid-cols-2 gap-4",
                        KpiCard {
                            title: "Base Fare",
                            value: format!("₹{}", breakdown.base),
                            description: Some(format!("{} · {}", kind.label(), quote.service.label())),
                        }
                        KpiCard {
                            title: "Distance Factor",
                            value: format!("×{}", breakdown.distance_factor),
                            description: Some(
                                if breakdown.distance_factor > 1.0 {
                                    "Pickup and drop are different places".to_string()
                                } else {
                                    "Move stays within one location".to_string()
                                },
                            ),
                        }
                        KpiCard {
                            title: "GST (18%)",
                            value: format!("₹{}", invoice::format_amount(breakdown.tax)),
                            description: Some("Charged on the base fare".to_string()),
                        }
                        KpiCard {
                            title: "Estimated Total",
                            value: format!("₹{}", invoice::format_amount(breakdown.total)),
                            description: None,
                        }
                    }
                    button {
                        class: "mt-4 {theme::BTN_GHOST}",
                        onclick: on_download,
                        "Download Invoice (PDF)"
                    }
                }
            }
        }
    }
}

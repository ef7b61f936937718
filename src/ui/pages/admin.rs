use dioxus::prelude::*;

use crate::{
    domain::{Action, AppState, Service, ServiceKind},
    ui::theme,
};

/// The price board editor. Edits land immediately and only in memory:
/// the next estimate sees them, a restart forgets them.
#[component]
pub fn AdminPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let boards: Vec<(ServiceKind, Vec<(Service, String)>)> = state.with(|st| {
        ServiceKind::all()
            .into_iter()
            .map(|kind| {
                let rows = kind
                    .services()
                    .iter()
                    .map(|service| {
                        let shown = st
                            .rates
                            .price(*service)
                            .map(|price| price.to_string())
                            .unwrap_or_default();
                        (*service, shown)
                    })
                    .collect();
                (kind, rows)
            })
            .collect()
    });

    let mut dispatch = state.clone();

    rsx! {
        div { class: "space-y-8",
            for (kind, rows) in boards {
                section { class: "{theme::PANEL}",
                    h2 { class: "{theme::SECTION_TITLE}", "{kind.label()} Rates" }
                    div { class: "mt-4 space-y-2",
                        for (service, shown) in rows {
                            div { class: "flex items-center justify-between gap-4",
                                label { class: "text-sm font-semibold", "{service.label()}" }
                                input {
                                    class: "input-field w-28",
                                    r#type: "number",
                                    value: "{shown}",
                                    oninput: move |evt: FormEvent| {
                                        dispatch.with_mut(|st| {
                                            st.apply(Action::EditRate {
                                                service,
                                                raw: evt.value(),
                                            })
                                        })
                                    },
                                }
                            }
                        }
                    }
                }
            }
            p { class: "{theme::TEXT_MUTED}",
                "Rates apply to the next estimate right away and reset to the printed board on restart."
            }
        }
    }
}

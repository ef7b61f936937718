use dioxus::prelude::*;

use crate::{
    app::HeroSlide,
    domain::{Action, AppState, ServiceKind},
    ui::theme,
};

#[component]
pub fn HomePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let slides = use_context::<Signal<Vec<HeroSlide>>>();

    let mut comment_input = use_signal(String::new);

    let offerings = state.with(|st| {
        ServiceKind::all()
            .into_iter()
            .map(|kind| (kind, st.rates.cheapest_of(kind.services())))
            .collect::<Vec<_>>()
    });
    let comments = state.with(|st| st.comments.entries().to_vec());

    let on_post_comment = {
        let mut state = state.clone();
        let mut comment_input = comment_input.clone();
        move |_| {
            let raw = comment_input();
            // Whitespace-only input is dropped without any notice.
            if raw.trim().is_empty() {
                return;
            }
            state.with_mut(|st| st.apply(Action::SubmitComment(raw)));
            comment_input.set(String::new());
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                div { class: "grid grid-cols-3 gap-4",
                    for slide in slides() {
                        figure { class: "hero-card",
                            if let Some(uri) = slide.image {
                                img {
                                    class: "h-40 w-full rounded-lg object-cover",
                                    src: "{uri}",
                                    alt: "{slide.caption}",
                                }
                            } else {
                                div { class: "hero-placeholder h-40 w-full rounded-lg" }
                            }
                            figcaption { class: "mt-2 text-xs text-slate-500", "{slide.caption}" }
                        }
                    }
                }
            }

            section { class: "{theme::PANEL}",
                h2 { class: "{theme::SECTION_TITLE}", "What We Move" }
                div { class: "mt-4 grid grid-cols-3 gap-4",
                    for (kind, floor) in offerings {
                        div { class: "offer-card",
                            h3 { class: "text-lg font-semibold", "{kind.label()}" }
                            p { class: "mt-1 text-sm text-slate-400", "{kind.blurb()}" }
                            div { class: "mt-3 flex gap-2",
                                for service in kind.services() {
                                    span { class: "chip", "{service.label()}" }
                                }
                            }
                            if let Some(floor) = floor {
                                p { class: "mt-3 text-sm font-semibold text-indigo-300",
                                    "from ₹{floor}"
                                }
                            }
                        }
                    }
                }
            }

            section { class: "{theme::PANEL}",
                h2 { class: "{theme::SECTION_TITLE}", "Word of Mouth" }
                div { class: "mt-4 flex gap-3",
                    input {
                        class: "input-field w-full",
                        placeholder: "Tell others how your move went...",
                        value: comment_input(),
                        oninput: move |evt| comment_input.set(evt.value()),
                    }
                    button { class: "{theme::BTN_PRIMARY}", onclick: on_post_comment, "Post" }
                }
                if comments.is_empty() {
                    p { class: "mt-3 {theme::TEXT_MUTED}", "No comments yet. Be the first!" }
                } else {
                    ul { class: "mt-3 space-y-2",
                        for comment in comments {
                            li { class: "comment-item", "{comment}" }
                        }
                    }
                }
            }
        }
    }
}

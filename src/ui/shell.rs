use dioxus::prelude::*;

use crate::app::Route;
use crate::seo;
use crate::util::{assets, version};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header { class: "border-b border-slate-800 bg-slate-950 px-6 py-4",
                div { class: "mx-auto flex max-w-5xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        img {
                            class: "h-12 w-12 rounded",
                            src: assets::logo_data_uri(),
                            alt: "{seo::BUSINESS_NAME} logo",
                        }
                        div {
                            h1 { class: "text-xl font-bold tracking-tight", "{seo::BUSINESS_NAME}" }
                            p { class: "text-xs italic text-slate-500", "{seo::TAGLINE}" }
                        }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Home {}),
                            onclick: move |_| { nav.push(Route::Home {}); },
                            label: "Home",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Quote {}),
                            onclick: move |_| { nav.push(Route::Quote {}); },
                            label: "Get a Quote",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Admin {}),
                            onclick: move |_| { nav.push(Route::Admin {}); },
                            label: "Admin",
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-5xl px-6 py-10",
                {children}
            }
            footer { class: "border-t border-slate-800 px-6 py-6 text-center text-xs text-slate-500",
                p { "{seo::BUSINESS_NAME} · {seo::TAGLINE} · {version::version_label()}" }
                // Structured data for crawlers; invisible in the webview.
                script { r#type: "application/ld+json", "{seo::structured_data_json()}" }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "btn-nav btn-nav-active" } else { "btn-nav" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    infra::images::{self, FetchStatus, ImageStore, HERO_SOURCES},
    seo,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{AdminPage, HomePage, QuotePage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/home")]
    Home {},
    #[route("/quote")]
    Quote {},
    #[route("/admin")]
    Admin {},
}

/// One landing-page image slot: caption immediately, pixels once the
/// offline cache has them.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroSlide {
    pub caption: &'static str,
    pub image: Option<String>,
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    let hero_slides = use_signal(|| {
        HERO_SOURCES
            .iter()
            .map(|source| HeroSlide {
                caption: source.caption,
                image: None,
            })
            .collect::<Vec<_>>()
    });
    use_context_provider(|| hero_slides.clone());

    // Startup warm-up of the offline image cache. Decorative only, so a
    // failure keeps the placeholders; it is logged rather than swallowed.
    let _offline_warmup = use_resource({
        let hero_slides = hero_slides.clone();
        let toasts = toasts.clone();
        move || async move { warm_offline_images(hero_slides.clone(), toasts.clone()).await }
    });

    rsx! {
        document::Title { "{seo::PAGE_TITLE}" }
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Link { rel: "manifest", href: seo::manifest_data_uri() }
        document::Meta { name: "description", content: seo::META_DESCRIPTION }
        document::Meta { name: "keywords", content: seo::META_KEYWORDS }
        document::Meta { name: "author", content: seo::BUSINESS_NAME }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

async fn warm_offline_images(
    mut slides: Signal<Vec<HeroSlide>>,
    toasts: Signal<Vec<ToastMessage>>,
) {
    let store = match ImageStore::new() {
        Ok(store) => store,
        Err(err) => {
            tracing::warn!(error = %err, "offline image cache unavailable");
            return;
        }
    };

    let mut any_cached = false;
    for (index, source) in HERO_SOURCES.iter().enumerate() {
        match store.load(source).await {
            Ok((bytes, status)) => {
                let uri = images::data_uri(&bytes);
                slides.with_mut(|slots| {
                    if let Some(slot) = slots.get_mut(index) {
                        slot.image = Some(uri);
                    }
                });
                any_cached |= status == FetchStatus::Cached;
            }
            Err(err) => {
                tracing::warn!(slug = source.slug, error = %err, "hero image unavailable");
            }
        }
    }

    if any_cached {
        push_toast(
            toasts.clone(),
            ToastKind::Info,
            "Showing saved photos; the image service is unreachable.",
        );
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Quote() -> Element {
    rsx! { Shell { QuotePage {} } }
}

#[component]
pub fn Admin() -> Element {
    rsx! { Shell { AdminPage {} } }
}

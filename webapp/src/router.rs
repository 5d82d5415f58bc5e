use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, warn};

use api::fetch_fragment;
use common::route::{NOT_FOUND_MESSAGE, PageSource, PageView, Route, RouteEntry};

use crate::{contact::ContactPage, state::AppState, util::dom};

// swap the content container over to page
//
// nothing here is cancelled when a newer navigation starts, so with two loads in flight
// whichever response arrives last is what stays on screen
pub async fn load_page(mut state: AppState, page: String) {
    let route = state.routes.peek().resolve(&page);
    let transition_ms = state.config.peek().router.transition_ms;

    state.fading.set(true);
    TimeoutFuture::new(transition_ms).await;
    state.view.set(PageView::Loading);
    state.fading.set(false);

    let view = match route {
        Route::Invalid(raw) => {
            warn!("refusing to route to {raw:?}");
            PageView::NotFound
        }
        Route::Page(entry) => {
            update_page_meta(&entry);

            match &entry.source {
                PageSource::Contact => PageView::Contact,
                PageSource::Fragment(path) => {
                    debug!("fetching page {} from {path}", entry.id);
                    PageView::from_fetch(fetch_fragment(path).await)
                }
            }
        }
    };

    state.view.set(view);
}

fn update_page_meta(entry: &RouteEntry) {
    let Ok(document) = dom::document() else {
        return;
    };

    document.set_title(&entry.title);

    if let Ok(Some(meta)) = document.query_selector(r#"meta[name="description"]"#) {
        if let Err(err) = meta.set_attribute("content", &entry.description) {
            warn!("failed to update meta description: {}", dom::js_err(err));
        }
    }
}

// back/forward and manual edits of the address bar
pub fn on_hash_change(mut state: AppState) {
    let hash = dom::location_hash();
    let next = state
        .routes
        .peek()
        .hash_navigation(&hash, &state.page.peek())
        .map(str::to_owned);

    if let Some(page) = next {
        debug!("hash changed to {page}");
        state.page.set(page);
    }
}

#[component]
pub fn PageContent() -> Element {
    let mut state = use_context::<AppState>();

    use_effect(move || {
        let page = state.page.read().clone();
        spawn(load_page(state, page));
    });

    // new markup may carry cards, typing headers and bootstrap widgets
    use_effect(move || {
        let _ = state.view.read();
        if let Some(root) = dom::element_by_id("app-content") {
            state.enhancer.write().scan(&root);
        }
    });

    let class = if *state.fading.read() { "fading" } else { "" };

    rsx! {
        div { id: "app-content", class: "{class}",
            match &*state.view.read() {
                PageView::Loading => rsx! {
                    div { class: "page-loading",
                        div { class: "spinner-border text-primary", role: "status",
                            span { class: "visually-hidden", "Loading..." }
                        }
                    }
                },
                PageView::Markup(markup) => rsx! {
                    div { class: "page-fragment", dangerous_inner_html: "{markup}" }
                },
                PageView::Contact => rsx! {
                    ContactPage {}
                },
                PageView::NotFound => rsx! {
                    div { class: "alert alert-danger text-center", role: "alert",
                        i { class: "fas fa-exclamation-triangle me-2" }
                        "{NOT_FOUND_MESSAGE}"
                    }
                },
            }
        }
    }
}

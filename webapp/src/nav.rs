use dioxus::prelude::*;
use tracing::{debug, warn};
use web_sys::Event;

use api::fetch_fragment;
use common::route::{active_link, hash_for_page};

use crate::{
    state::{AppState, NavbarView},
    util::dom,
};

const NAV_LINK: &str = ".nav-link";

pub async fn load_navbar(mut state: AppState) {
    let path = state.routes.peek().navbar_path().to_owned();

    let view = match fetch_fragment(&path).await {
        Ok(markup) => NavbarView::Markup(markup),
        Err(err) => {
            // static hosting setups without the fragment still get working navigation
            warn!("failed to load navbar from {path}, using static links: {err}");
            NavbarView::Static
        }
    };

    state.navbar.set(view);
}

// any element carrying data-page acts as a navigation link
pub fn on_click(mut state: AppState, event: &Event) {
    let Some(link) = dom::closest(event, "[data-page]") else {
        return;
    };
    let Some(page) = link.get_attribute("data-page").filter(|p| !p.is_empty()) else {
        return;
    };

    event.prevent_default();
    debug!("navigating to {page}");

    mark_active(&page, Some(&link));

    match hash_for_page(&page) {
        Some(hash) => {
            if let Err(err) = dom::set_location_hash(hash) {
                warn!("failed to update location hash: {err}");
            }
        }
        None => debug!("leaving location hash alone for {page:?}"),
    }

    state.page.set(page);
}

// at most one nav link ends up active: the one clicked, or else the first for page
pub fn mark_active(page: &str, clicked: Option<&web_sys::Element>) {
    let Ok(document) = dom::document() else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };

    let clicked = clicked.filter(|el| el.matches(NAV_LINK).unwrap_or(false));
    let links = dom::query_all(&root, NAV_LINK).unwrap_or_default();

    let targets: Vec<(Option<String>, bool)> = links
        .iter()
        .map(|link| (link.get_attribute("data-page"), clicked == Some(link)))
        .collect();
    let active = active_link(&targets, page);

    for (i, link) in links.iter().enumerate() {
        if let Err(err) = link
            .class_list()
            .toggle_with_force("active", active == Some(i))
        {
            debug!("failed to mark nav link: {}", dom::js_err(err));
        }
    }
}

#[component]
fn StaticNav() -> Element {
    let state = use_context::<AppState>();
    let page = state.page.read().clone();

    let links: Vec<(String, String)> = state
        .routes
        .read()
        .nav_entries()
        .filter_map(|e| Some((e.id.to_string(), e.nav_label.clone()?)))
        .collect();

    rsx! {
        nav { class: "nav-links",
            for (id , label) in links {
                a {
                    key: "{id}",
                    class: if id == page { "nav-link active" } else { "nav-link" },
                    href: "#{id}",
                    "data-page": "{id}",
                    "{label}"
                }
            }
        }
    }
}

#[component]
pub fn NavbarHost() -> Element {
    let mut state = use_context::<AppState>();

    use_future(move || load_navbar(state));

    // injected markup knows nothing about the current page, so resync after every
    // navigation and once the navbar lands
    use_effect(move || {
        let page = state.page.read().clone();
        let _ = state.navbar.read();

        mark_active(&page, None);
        if let Some(root) = dom::element_by_id("navbar-container") {
            state.enhancer.write().scan(&root);
        }
    });

    rsx! {
        match &*state.navbar.read() {
            NavbarView::Pending => rsx! {
                div { id: "navbar-container" }
            },
            NavbarView::Markup(markup) => rsx! {
                div { id: "navbar-container", dangerous_inner_html: "{markup}" }
            },
            NavbarView::Static => rsx! {
                div { id: "navbar-container", StaticNav {} }
            },
        }
    }
}

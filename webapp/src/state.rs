use dioxus::prelude::*;
use tracing::{debug, error};

use common::{
    config::SiteConfig,
    effects::ScrollTracker,
    route::{PageView, RouteTable},
    theme::ThemeStore,
};

use crate::{
    enhance::{self, Enhancer},
    nav, router, theme,
    util::{dom, storage::LocalStore},
};

#[derive(Clone, Debug, PartialEq)]
pub enum NavbarView {
    Pending,
    Markup(String),
    // the fragment could not be fetched, so render links from the route table
    Static,
}

// application state
//
// constructed once by the root component and shared through context.  only the
// handlers in router, nav, theme and contact write to it; everything it owns (window
// listeners included) is dropped with the root
#[derive(Clone, Copy)]
pub struct AppState {
    pub config: Signal<SiteConfig>,
    pub routes: Signal<RouteTable>,

    // the location fragment is authoritative; this mirrors it
    pub page: Signal<String>,
    pub view: Signal<PageView>,
    pub fading: Signal<bool>,
    pub navbar: Signal<NavbarView>,
    pub theme: Signal<ThemeStore<LocalStore>>,
    pub enhancer: Signal<Enhancer>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        let routes = RouteTable::new(&config);
        let page = routes.page_from_hash(&dom::location_hash()).to_owned();

        let mut theme = ThemeStore::new(
            LocalStore,
            config.theme.clone(),
            dom::system_prefers_dark(),
        );
        let view = theme.apply(theme.current());
        theme::apply_body_class(&view);

        let enhancer = Enhancer::new(config.effects.clone());

        debug!("starting on page {page}");

        AppState {
            config: Signal::new(config),
            routes: Signal::new(routes),
            page: Signal::new(page),
            view: Signal::new(PageView::Loading),
            fading: Signal::new(false),
            navbar: Signal::new(NavbarView::Pending),
            theme: Signal::new(theme),
            enhancer: Signal::new(enhancer),
        }
    }

    // register the window and document level listeners
    //
    // everything here is delegated from a single listener per event, so content swaps
    // never need to rebind anything
    pub fn bind_window(self) -> WindowBindings {
        let mut bindings = WindowBindings::default();

        if let Err(err) = self.try_bind_window(&mut bindings) {
            error!("failed to bind window listeners: {err}");
        }

        bindings
    }

    fn try_bind_window(self, bindings: &mut WindowBindings) -> anyhow::Result<()> {
        let window = dom::window()?;
        let document = dom::document()?;

        bindings.push(dom::Listener::new(
            &window,
            "hashchange",
            false,
            move |_| router::on_hash_change(self),
        )?);

        bindings.push(dom::Listener::new(
            &document,
            "click",
            false,
            move |event| nav::on_click(self, &event),
        )?);

        let ripple_ms = self.config.peek().effects.ripple_ms;
        bindings.push(dom::Listener::new(
            &document,
            "click",
            false,
            move |event| enhance::ripple(&event, ripple_ms),
        )?);

        // error events do not bubble, so catch broken avatars on the way down
        bindings.push(dom::Listener::new(
            &document,
            "error",
            true,
            move |event| enhance::avatar_fallback(&event),
        )?);

        let effects = self.config.peek().effects.clone();
        let mut tracker = ScrollTracker::new(effects.navbar_hide_threshold);
        bindings.push(dom::Listener::new(
            &window,
            "scroll",
            false,
            move |_| enhance::on_scroll(&mut tracker, effects.parallax_rate),
        )?);

        Ok(())
    }
}

#[derive(Default)]
pub struct WindowBindings {
    listeners: Vec<dom::Listener>,
}

impl WindowBindings {
    fn push(&mut self, listener: dom::Listener) {
        self.listeners.push(listener);
    }
}

impl Drop for WindowBindings {
    fn drop(&mut self) {
        debug!("removing {} window listeners", self.listeners.len());
    }
}

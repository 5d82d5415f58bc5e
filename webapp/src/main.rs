#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{Level, debug};

use common::config::read_config;

mod contact;
mod enhance;
mod nav;
mod router;
mod state;
mod theme;
mod util;

use nav::NavbarHost;
use router::PageContent;
use state::AppState;
use theme::ThemeToggle;
use util::style::PORTFOLIO_STYLES;

const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    let state = use_context_provider(|| AppState::new(read_config(SITE_TOML)));

    // the listeners live exactly as long as the root does
    let _bindings = use_hook(|| Rc::new(state.bind_window()));

    use_drop(|| debug!("portfolio app unmounted"));

    rsx! {
        style { "{PORTFOLIO_STYLES}" }
        header { class: "app-header",
            div { class: "nav-container",
                NavbarHost {}
                ThemeToggle {}
            }
        }
        main { class: "app-main", PageContent {} }
    }
}

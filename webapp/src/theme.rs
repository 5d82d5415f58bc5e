use dioxus::prelude::*;
use tracing::warn;

use common::theme::ThemeView;

use crate::{state::AppState, util::dom};

pub fn apply_body_class(view: &ThemeView) {
    let result = dom::body().and_then(|body| {
        body.class_list()
            .toggle_with_force(&view.body_class, view.dark)
            .map_err(dom::js_err)
    });

    if let Err(err) = result {
        warn!("failed to apply theme class: {err}");
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let view = state.theme.read().view();

    rsx! {
        button {
            id: "theme-toggle",
            class: "theme-toggle",
            r#type: "button",
            aria_label: "{view.aria_label}",
            title: "{view.aria_label}",
            onclick: move |_| {
                let view = state.theme.write().toggle();
                apply_body_class(&view);
            },
            i { class: "{view.icon}" }
        }
    }
}

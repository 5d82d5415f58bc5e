use dioxus::prelude::spawn;
use gloo_timers::{callback::Timeout, future::TimeoutFuture};
use js_sys::{Array, Function, Reflect};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent,
};

use common::{
    config::EffectsConfig,
    effects::{
        REVEAL_HIDDEN, REVEAL_SHOWN, REVEAL_TRANSITION, Rect, Ripple, ScrollTracker,
        TypingAnimator, parallax_transform,
    },
};

use crate::util::dom::{self, js_err};

// enhancement pass over freshly injected markup
//
// the enhancer remembers which elements it has already set up, so scanning the same
// subtree twice is harmless.  elements that have left the document are forgotten on the
// next scan.  scan() spawns tasks and has to run inside the dioxus runtime
pub struct Enhancer {
    config: EffectsConfig,
    reveal: Option<RevealObserver>,
    observed: Vec<Element>,
    typed: Vec<Element>,
    widgets: Vec<Element>,
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Enhancer {
    pub fn new(config: EffectsConfig) -> Self {
        let reveal = match RevealObserver::new(&config) {
            Ok(reveal) => Some(reveal),
            Err(err) => {
                warn!("card reveal disabled: {err}");
                None
            }
        };

        Enhancer {
            config,
            reveal,
            observed: Vec::new(),
            typed: Vec::new(),
            widgets: Vec::new(),
        }
    }

    pub fn scan(&mut self, root: &Element) {
        self.observed.retain(|el| el.is_connected());
        self.typed.retain(|el| el.is_connected());
        self.widgets.retain(|el| el.is_connected());

        self.reveal_cards(root);
        self.start_typing(root);
        self.init_widgets(root);
    }

    fn reveal_cards(&mut self, root: &Element) {
        let Some(reveal) = &self.reveal else {
            return;
        };

        for card in dom::query_all(root, ".card").unwrap_or_default() {
            if self.observed.contains(&card) {
                continue;
            }

            dom::set_style(&card, "transform", REVEAL_HIDDEN.0);
            dom::set_style(&card, "opacity", REVEAL_HIDDEN.1);
            dom::set_style(&card, "transition", REVEAL_TRANSITION);
            reveal.observer.observe(&card);

            self.observed.push(card);
        }
    }

    fn start_typing(&mut self, root: &Element) {
        for element in dom::query_all(root, ".typing-animation").unwrap_or_default() {
            if self.typed.contains(&element) {
                continue;
            }

            let mut animator = TypingAnimator::new(&element.text_content().unwrap_or_default());
            element.set_text_content(Some(""));

            let interval_ms = self.config.typing_interval_ms;
            let target = element.clone();

            spawn(async move {
                while let Some(text) = animator.tick() {
                    TimeoutFuture::new(interval_ms).await;
                    target.set_text_content(Some(&text));
                }
            });

            self.typed.push(element);
        }
    }

    // tooltips and popovers belong to the page's bootstrap bundle, when it has one
    fn init_widgets(&mut self, root: &Element) {
        for (selector, widget) in [
            (r#"[data-bs-toggle="tooltip"]"#, "Tooltip"),
            (r#"[data-bs-toggle="popover"]"#, "Popover"),
        ] {
            for element in dom::query_all(root, selector).unwrap_or_default() {
                if self.widgets.contains(&element) {
                    continue;
                }

                match init_bootstrap_widget(widget, &element) {
                    Ok(true) => self.widgets.push(element),
                    Ok(false) => {
                        debug!("bootstrap is not loaded, skipping {widget} widgets");
                        return;
                    }
                    Err(err) => warn!("failed to initialize {widget}: {err}"),
                }
            }
        }
    }
}

impl RevealObserver {
    fn new(config: &EffectsConfig) -> anyhow::Result<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }

                    let card = entry.target();
                    dom::set_style(&card, "transform", REVEAL_SHOWN.0);
                    dom::set_style(&card, "opacity", REVEAL_SHOWN.1);

                    // only the first intersection matters
                    observer.unobserve(&card);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        options.set_root_margin(&config.reveal_root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(js_err)?;

        Ok(RevealObserver {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// Ok(false) when there is no bootstrap global to call into
fn init_bootstrap_widget(widget: &str, element: &Element) -> anyhow::Result<bool> {
    let window = dom::window()?;

    let bootstrap = Reflect::get(&window, &JsValue::from_str("bootstrap")).map_err(js_err)?;
    if bootstrap.is_undefined() || bootstrap.is_null() {
        return Ok(false);
    }

    let constructor: Function = Reflect::get(&bootstrap, &JsValue::from_str(widget))
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;

    Reflect::construct(&constructor, &Array::of1(element)).map_err(js_err)?;
    Ok(true)
}

// click anywhere inside a .btn
pub fn ripple(event: &Event, duration_ms: u32) {
    let Some(button) = dom::closest(event, ".btn") else {
        return;
    };
    let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
        return;
    };

    let bounds = button.get_bounding_client_rect();
    let ripple = Ripple::at(
        Rect {
            left: bounds.left(),
            top: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
        },
        mouse.client_x() as f64,
        mouse.client_y() as f64,
    );

    let Ok(document) = dom::document() else {
        return;
    };
    let Ok(span) = document.create_element("span") else {
        return;
    };

    span.set_class_name("ripple");
    if let Err(err) = span.set_attribute("style", &ripple.style()) {
        debug!("failed to position ripple: {}", js_err(err));
        return;
    }

    if button.append_child(&span).is_ok() {
        Timeout::new(duration_ms, move || span.remove()).forget();
    }
}

// a broken .testimonial-avatar gives way to the .avatar-fallback right after it
pub fn avatar_fallback(event: &Event) {
    let Some(img) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .filter(|el| el.matches(".testimonial-avatar").unwrap_or(false))
    else {
        return;
    };

    dom::set_style(&img, "display", "none");

    if let Some(fallback) = img
        .next_element_sibling()
        .filter(|el| el.class_list().contains("avatar-fallback"))
    {
        dom::set_style(&fallback, "display", "flex");
    }
}

pub fn on_scroll(tracker: &mut ScrollTracker, parallax_rate: f64) {
    let scroll_top = dom::scroll_top();
    let Ok(document) = dom::document() else {
        return;
    };

    let visibility = tracker.update(scroll_top);
    if let Ok(Some(header)) = document.query_selector(".app-header") {
        dom::set_style(&header, "transform", visibility.transform());
    }

    if let Ok(Some(hero)) = document.query_selector(".hero-section") {
        dom::set_style(&hero, "transform", &parallax_transform(scroll_top, parallax_rate));
    }
}

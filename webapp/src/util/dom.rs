use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

pub fn js_err(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

pub fn window() -> anyhow::Result<Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window"))
}

pub fn document() -> anyhow::Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow::Error::msg("window has no document"))
}

pub fn body() -> anyhow::Result<HtmlElement> {
    document()?
        .body()
        .ok_or_else(|| anyhow::Error::msg("document has no body"))
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn query_all(root: &Element, selector: &str) -> anyhow::Result<Vec<Element>> {
    let nodes = root.query_selector_all(selector).map_err(js_err)?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

// the nearest ancestor-or-self of an event target matching selector
pub fn closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        if let Err(err) = element.style().set_property(property, value) {
            debug!("failed to set {property}: {}", js_err(err));
        }
    }
}

// the browser's own constraint validation; a form that is not mounted has nothing to
// object to
pub fn form_is_valid(id: &str) -> bool {
    element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        .is_none_or(|form| form.check_validity())
}

// smooth-scroll the first match of selector to the middle of the viewport
pub fn scroll_into_view(selector: &str) {
    let found = document().and_then(|doc| doc.query_selector(selector).map_err(js_err));

    match found {
        Ok(Some(element)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Center);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Ok(None) => debug!("nothing matches {selector}, not scrolling"),
        Err(err) => warn!("failed to look up {selector}: {err}"),
    }
}

pub fn location_hash() -> String {
    window()
        .and_then(|w| w.location().hash().map_err(js_err))
        .unwrap_or_default()
}

pub fn set_location_hash(hash: &str) -> anyhow::Result<()> {
    window()?.location().set_hash(hash).map_err(js_err)
}

pub fn scroll_top() -> f64 {
    window()
        .and_then(|w| w.scroll_y().map_err(js_err))
        .unwrap_or_default()
}

pub fn system_prefers_dark() -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

// an event listener that is removed again when dropped
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        capture: bool,
        callback: impl FnMut(Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);

        target
            .add_event_listener_with_callback_and_bool(
                event,
                callback.as_ref().unchecked_ref(),
                capture,
            )
            .map_err(js_err)?;

        Ok(Listener {
            target: target.clone(),
            event,
            capture,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let removed = self.target.remove_event_listener_with_callback_and_bool(
            self.event,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );

        if let Err(err) = removed {
            warn!("failed to remove {} listener: {}", self.event, js_err(err));
        }
    }
}

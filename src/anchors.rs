use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions};

use crate::runtime::PosterRuntime;
use poster_enhance_core::anchor_target;

pub(crate) fn smooth_scroll_to(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Turns clicks on in-page anchors into smooth scrolls.
pub(crate) fn install(runtime: &Rc<PosterRuntime>) -> Result<(), JsValue> {
    let document = runtime.elements.document.clone();
    let options = EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    };
    let listener = EventListener::new_with_options(
        &runtime.elements.document,
        "click",
        options,
        move |event: &Event| {
            let Some(anchor) = clicked_anchor(event) else {
                return;
            };
            let href = anchor.get_attribute("href").unwrap_or_default();
            let Some(id) = anchor_target(&href) else {
                return;
            };
            event.prevent_default();
            if let Some(target) = document.get_element_by_id(id) {
                smooth_scroll_to(&target);
            }
        },
    );
    runtime.keep(listener);
    Ok(())
}

fn clicked_anchor(event: &Event) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest("a").ok().flatten()
}

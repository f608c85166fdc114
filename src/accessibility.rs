use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, KeyboardEvent};

use crate::runtime::PosterRuntime;
use poster_enhance_core::{
    is_toggle_key, PosterAction, CHART_LABEL, CHART_ROLE, SECTION_ROLE, SECTION_TABINDEX,
};

pub(crate) fn install(runtime: &Rc<PosterRuntime>) -> Result<(), JsValue> {
    let labels: Vec<Option<String>> = runtime.with_state(|state| {
        state
            .sections
            .iter()
            .map(|section| section.label.clone())
            .collect()
    });
    for (index, section) in runtime.elements.sections.iter().enumerate() {
        section.set_attribute("tabindex", SECTION_TABINDEX)?;
        section.set_attribute("role", SECTION_ROLE)?;
        if let Some(label) = labels.get(index).and_then(Option::as_deref) {
            section.set_attribute("aria-label", label)?;
        }

        let runtime_ref = Rc::clone(runtime);
        let options = EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        };
        let listener =
            EventListener::new_with_options(section, "keydown", options, move |event: &Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = event.key();
                if !is_toggle_key(&key) {
                    return;
                }
                event.prevent_default();
                runtime_ref.dispatch(PosterAction::SectionKey { index, key });
            });
        runtime.keep(listener);
    }

    if let Some(chart) = runtime.elements.chart.as_ref() {
        chart.set_attribute("role", CHART_ROLE)?;
        chart.set_attribute("aria-label", CHART_LABEL)?;
    }
    Ok(())
}

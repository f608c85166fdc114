use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsValue;

use crate::runtime::PosterRuntime;
use poster_enhance_core::PosterAction;

pub(crate) fn install(runtime: &Rc<PosterRuntime>) -> Result<(), JsValue> {
    for (index, section) in runtime.elements.sections.iter().enumerate() {
        for (event, inside) in [("mouseenter", true), ("mouseleave", false)] {
            let runtime_ref = Rc::clone(runtime);
            let listener = EventListener::new(section, event, move |_| {
                runtime_ref.dispatch(PosterAction::SectionPointer { index, inside });
            });
            runtime.keep(listener);
        }
    }
    for (index, image) in runtime.elements.images.iter().enumerate() {
        let runtime_ref = Rc::clone(runtime);
        let listener = EventListener::new(image, "click", move |_| {
            runtime_ref.dispatch(PosterAction::ImageClicked { index });
        });
        runtime.keep(listener);
    }
    Ok(())
}

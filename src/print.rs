use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsValue;

use crate::runtime::PosterRuntime;
use poster_enhance_core::classes::PRINT_BUTTON;
use poster_enhance_core::PosterAction;

const PRINT_BUTTON_LABEL: &str = "🖨️ Print Poster";
const PRINT_BUTTON_STYLE: &str =
    "position: absolute; top: 10px; right: 10px; font-size: 12px; padding: 6px 12px;";

/// Adds the header print button and tracks the browser's print lifecycle.
/// Only installed when `print_button` is enabled.
pub(crate) fn install(runtime: &Rc<PosterRuntime>) -> Result<(), JsValue> {
    if let Some(header) = runtime.elements.header.as_ref() {
        let button = runtime.elements.document.create_element("button")?;
        button.set_class_name(PRINT_BUTTON);
        button.set_text_content(Some(PRINT_BUTTON_LABEL));
        button.set_attribute("type", "button")?;
        button.set_attribute("style", PRINT_BUTTON_STYLE)?;
        let runtime_ref = Rc::clone(runtime);
        let listener = EventListener::new(&button, "click", move |_| {
            runtime_ref.dispatch(PosterAction::PrintRequested);
        });
        runtime.keep(listener);
        header.style().set_property("position", "relative")?;
        header.append_child(&button)?;
    }

    for (event, action) in [
        ("beforeprint", PosterAction::BeforePrint),
        ("afterprint", PosterAction::AfterPrint),
    ] {
        let runtime_ref = Rc::clone(runtime);
        let listener = EventListener::new(&runtime.elements.window, event, move |_| {
            runtime_ref.dispatch(action.clone());
        });
        runtime.keep(listener);
    }
    Ok(())
}

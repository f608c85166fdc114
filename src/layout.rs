use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::dom::js_err;
use crate::runtime::PosterRuntime;
use poster_enhance_core::PosterAction;

pub(crate) fn install(runtime: &Rc<PosterRuntime>) -> Result<(), JsValue> {
    update_layout(runtime)?;
    let runtime_ref = Rc::clone(runtime);
    let listener = EventListener::new(&runtime.elements.window, "resize", move |_| {
        if let Err(err) = update_layout(&runtime_ref) {
            console::error!("poster layout update failed", js_err(err));
        }
    });
    runtime.keep(listener);
    Ok(())
}

fn update_layout(runtime: &Rc<PosterRuntime>) -> Result<(), JsValue> {
    if let Some(width) = viewport_width(&runtime.elements.window)? {
        runtime.dispatch(PosterAction::Resize { width });
    }
    Ok(())
}

fn viewport_width(window: &Window) -> Result<Option<f64>, JsValue> {
    Ok(window.inner_width()?.as_f64())
}

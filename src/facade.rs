use std::rc::Rc;

use js_sys::{Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::runtime::PosterRuntime;
use poster_enhance_core::PosterAction;

/// Operations offered to page scripts and inline handlers.
#[derive(Clone)]
pub(crate) struct PosterFacade {
    runtime: Rc<PosterRuntime>,
}

impl PosterFacade {
    pub(crate) fn new(runtime: Rc<PosterRuntime>) -> Self {
        Self { runtime }
    }

    pub(crate) fn print(&self) {
        self.runtime.dispatch(PosterAction::PrintRequested);
    }

    pub(crate) fn focus_section(&self, index: usize) {
        self.runtime.dispatch(PosterAction::FocusSection { index });
    }

    pub(crate) fn toggle_image(&self, index: usize) {
        self.runtime.dispatch(PosterAction::ToggleImage { index });
    }

    /// Publishes the facade on `window` under `name` as a plain object with
    /// `print`, `focusSection` and `toggleImage`.
    pub(crate) fn register(&self, window: &Window, name: &str) -> Result<(), JsValue> {
        let api = Object::new();

        let facade = self.clone();
        let print = Closure::<dyn Fn()>::new(move || facade.print());
        Reflect::set(&api, &JsValue::from_str("print"), &print.into_js_value())?;

        let facade = self.clone();
        let focus_section = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
            if let Some(index) = index_arg(&value) {
                facade.focus_section(index);
            }
        });
        Reflect::set(
            &api,
            &JsValue::from_str("focusSection"),
            &focus_section.into_js_value(),
        )?;

        let facade = self.clone();
        let toggle_image = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
            if let Some(index) = index_arg(&value) {
                facade.toggle_image(index);
            }
        });
        Reflect::set(
            &api,
            &JsValue::from_str("toggleImage"),
            &toggle_image.into_js_value(),
        )?;

        Reflect::set(window, &JsValue::from_str(name), &api)?;
        Ok(())
    }
}

/// Non-negative integral numbers are indices; anything else is ignored.
fn index_arg(value: &JsValue) -> Option<usize> {
    let raw = value.as_f64()?;
    if !raw.is_finite() || raw < 0.0 || raw.fract() != 0.0 {
        return None;
    }
    Some(raw as usize)
}

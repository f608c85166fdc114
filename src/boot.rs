use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsValue;

use crate::app_config;
use crate::dom::js_err;
use crate::facade::PosterFacade;
use crate::runtime::{PosterElements, PosterRuntime};
use crate::{
    accessibility, anchors, chart_animator, image_loader, interactions, layout, print, styles,
};
use poster_enhance_core::PosterAction;

thread_local! {
    static STARTED: Cell<bool> = Cell::new(false);
    static RUNTIME: RefCell<Option<Rc<PosterRuntime>>> = RefCell::new(None);
}

/// Runs [`init`] once the document is interactive.
pub(crate) fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| init()).forget();
    } else {
        init();
    }
}

fn init() {
    let already_started = STARTED.with(|flag| flag.replace(true));
    if already_started {
        return;
    }
    match build_runtime() {
        Ok(runtime) => {
            install_components(&runtime);
            RUNTIME.with(|slot| {
                *slot.borrow_mut() = Some(runtime);
            });
        }
        Err(err) => console::error!("poster init failed", js_err(err)),
    }
}

fn build_runtime() -> Result<Rc<PosterRuntime>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let config = app_config::load_config(&body);
    let elements = PosterElements::collect(window, document, body, &config)?;
    PosterRuntime::new(config, elements)
}

fn install_components(runtime: &Rc<PosterRuntime>) {
    console::log!("academic poster initialized");
    run_component("page", || start_page(runtime));
    run_component("image loader", || image_loader::install(runtime));
    run_component("accessibility", || accessibility::install(runtime));
    run_component("interactions", || interactions::install(runtime));
    run_component("chart animator", || chart_animator::install(runtime));
    run_component("layout", || layout::install(runtime));
    run_component("anchors", || anchors::install(runtime));
    if runtime.config.print_button {
        run_component("print", || print::install(runtime));
    }
    run_component("facade", || {
        PosterFacade::new(Rc::clone(runtime))
            .register(&runtime.elements.window, &runtime.config.facade_name)
    });
}

fn run_component(name: &str, install: impl FnOnce() -> Result<(), JsValue>) {
    if let Err(err) = install() {
        console::error!("poster component failed", name, js_err(err));
    }
}

fn start_page(runtime: &Rc<PosterRuntime>) -> Result<(), JsValue> {
    styles::inject(&runtime.elements.document)?;
    runtime.render_page()?;
    let runtime_ref = Rc::clone(runtime);
    Timeout::new(runtime.config.ready_delay_ms, move || {
        runtime_ref.dispatch(PosterAction::PageReady);
    })
    .forget();
    Ok(())
}

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::runtime::PosterRuntime;
use poster_enhance_core::PosterAction;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live visibility observer for the chart. The callback has to outlive the
/// observer, so both are kept together.
pub(crate) struct ChartWatch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ChartWatch {
    pub(crate) fn stop(&self, chart: &Element) {
        self.observer.unobserve(chart);
        self.observer.disconnect();
    }
}

pub(crate) fn install(runtime: &Rc<PosterRuntime>) -> Result<(), JsValue> {
    let Some(chart) = runtime.elements.chart.as_ref() else {
        return Ok(());
    };
    let runtime_ref = Rc::clone(runtime);
    let callback: ObserverCallback = Closure::new(move |entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            runtime_ref.dispatch(PosterAction::ChartVisibility {
                intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            });
        }
    });
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(runtime.config.chart_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(chart);
    *runtime.chart_watch.borrow_mut() = Some(ChartWatch {
        observer,
        _callback: callback,
    });
    Ok(())
}

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, Window};

use crate::chart_animator::ChartWatch;
use crate::dom::{self, js_err};
use crate::image_loader;
use poster_enhance_core::classes::{
    CHART_MANAGED, COLUMN_MANAGED, CONTENT_MANAGED, IMAGE_MANAGED, PAGE_MANAGED, SECTION_MANAGED,
};
use poster_enhance_core::{Effect, PosterAction, PosterConfig, PosterState};

/// Elements found once at start-up. Nodes added later are not tracked.
pub(crate) struct PosterElements {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) body: HtmlElement,
    pub(crate) sections: Vec<HtmlElement>,
    pub(crate) images: Vec<HtmlImageElement>,
    pub(crate) chart: Option<Element>,
    pub(crate) content: Option<Element>,
    pub(crate) columns: Vec<Element>,
    pub(crate) header: Option<HtmlElement>,
}

impl PosterElements {
    pub(crate) fn collect(
        window: Window,
        document: Document,
        body: HtmlElement,
        config: &PosterConfig,
    ) -> Result<Self, JsValue> {
        let selectors = &config.selectors;
        Ok(Self {
            sections: dom::query_all(&document, &selectors.section)?,
            images: dom::query_all(&document, &selectors.image)?,
            chart: dom::query_one(&document, &selectors.chart)?,
            content: dom::query_one(&document, &selectors.content)?,
            columns: dom::query_all(&document, &selectors.column)?,
            header: dom::query_one(&document, &selectors.header)?,
            window,
            document,
            body,
        })
    }
}

pub(crate) struct PosterRuntime {
    pub(crate) config: PosterConfig,
    pub(crate) elements: PosterElements,
    state: RefCell<PosterState>,
    listeners: RefCell<Vec<EventListener>>,
    pub(crate) chart_watch: RefCell<Option<ChartWatch>>,
}

impl PosterRuntime {
    pub(crate) fn new(config: PosterConfig, elements: PosterElements) -> Result<Rc<Self>, JsValue> {
        let mut state = PosterState::new(&config);
        for section in &elements.sections {
            let heading = dom::heading_text(section, &config.selectors.section_title)?;
            state.add_section(heading.as_deref());
        }
        for image in &elements.images {
            state.add_image(&image.alt());
        }
        if elements.chart.is_some() {
            state.set_chart();
        }
        Ok(Rc::new(Self {
            config,
            elements,
            state: RefCell::new(state),
            listeners: RefCell::new(Vec::new()),
            chart_watch: RefCell::new(None),
        }))
    }

    pub(crate) fn with_state<R>(&self, read: impl FnOnce(&PosterState) -> R) -> R {
        read(&self.state.borrow())
    }

    pub(crate) fn keep(&self, listener: EventListener) {
        self.listeners.borrow_mut().push(listener);
    }

    pub(crate) fn dispatch(self: &Rc<Self>, action: PosterAction) {
        let effects = self.state.borrow_mut().apply(action);
        for effect in effects {
            if let Err(err) = self.run_effect(effect) {
                console::error!("poster effect failed", js_err(err));
            }
        }
    }

    pub(crate) fn render_page(&self) -> Result<(), JsValue> {
        let classes = self.with_state(|state| state.page.classes());
        dom::sync_classes(&self.elements.body, PAGE_MANAGED, &classes)
    }

    fn run_effect(self: &Rc<Self>, effect: Effect) -> Result<(), JsValue> {
        match effect {
            Effect::RenderPage => self.render_page(),
            Effect::RenderImage { index } => {
                let Some(image) = self.elements.images.get(index) else {
                    return Ok(());
                };
                let (classes, hidden) = self.with_state(|state| {
                    state
                        .images
                        .get(index)
                        .map(|record| (record.classes(), record.hidden()))
                        .unwrap_or_default()
                });
                dom::sync_classes(image, IMAGE_MANAGED, &classes)?;
                dom::set_hidden(image, hidden)
            }
            Effect::InsertPlaceholder { index, placeholder } => {
                let Some(image) = self.elements.images.get(index) else {
                    return Ok(());
                };
                console::warn!("poster image failed to load", image.src());
                image_loader::insert_placeholder(&self.elements.document, image, &placeholder)
            }
            Effect::RenderSection { index } => {
                let Some(section) = self.elements.sections.get(index) else {
                    return Ok(());
                };
                let classes = self.with_state(|state| {
                    state
                        .sections
                        .get(index)
                        .map(|record| record.classes())
                        .unwrap_or_default()
                });
                dom::sync_classes(section, SECTION_MANAGED, &classes)
            }
            Effect::FocusSection { index } => {
                let Some(section) = self.elements.sections.get(index) else {
                    return Ok(());
                };
                section.focus()?;
                crate::anchors::smooth_scroll_to(section);
                Ok(())
            }
            Effect::RenderChart => {
                let Some(chart) = self.elements.chart.as_ref() else {
                    return Ok(());
                };
                let classes = self.with_state(|state| {
                    state
                        .chart
                        .as_ref()
                        .map(|record| record.classes())
                        .unwrap_or_default()
                });
                dom::sync_classes(chart, CHART_MANAGED, &classes)
            }
            Effect::StopChartObserver => {
                if let (Some(watch), Some(chart)) =
                    (self.chart_watch.borrow().as_ref(), self.elements.chart.as_ref())
                {
                    watch.stop(chart);
                }
                Ok(())
            }
            Effect::RenderLayout => {
                let mode = self.with_state(|state| state.layout_mode());
                if let Some(content) = self.elements.content.as_ref() {
                    dom::sync_classes(content, CONTENT_MANAGED, &mode.content_classes())?;
                }
                let column_classes = mode.column_classes();
                for column in &self.elements.columns {
                    dom::sync_classes(column, COLUMN_MANAGED, &column_classes)?;
                }
                Ok(())
            }
            Effect::OpenPrintDialog => self.elements.window.print(),
            Effect::SchedulePrintReset { delay_ms } => {
                let runtime = Rc::clone(self);
                Timeout::new(delay_ms, move || {
                    runtime.dispatch(PosterAction::PrintReset);
                })
                .forget();
                Ok(())
            }
        }
    }
}

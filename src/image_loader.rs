use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlImageElement};

use crate::dom;
use crate::runtime::PosterRuntime;
use poster_enhance_core::classes::{
    IMAGE_MANAGED, IMAGE_PLACEHOLDER, PLACEHOLDER_CONTENT, PLACEHOLDER_ICON, PLACEHOLDER_TEXT,
};
use poster_enhance_core::{Placeholder, PosterAction};

pub(crate) fn install(runtime: &Rc<PosterRuntime>) -> Result<(), JsValue> {
    bind(runtime)?;
    resolve_completed(runtime);
    Ok(())
}

/// Marks every image as loading and listens for its load outcome.
pub(crate) fn bind(runtime: &Rc<PosterRuntime>) -> Result<(), JsValue> {
    for (index, image) in runtime.elements.images.iter().enumerate() {
        let classes = runtime.with_state(|state| {
            state
                .images
                .get(index)
                .map(|record| record.classes())
                .unwrap_or_default()
        });
        dom::sync_classes(image, IMAGE_MANAGED, &classes)?;

        let on_load = {
            let runtime = Rc::clone(runtime);
            EventListener::new(image, "load", move |_| {
                runtime.dispatch(PosterAction::ImageLoaded { index });
            })
        };
        let on_error = {
            let runtime = Rc::clone(runtime);
            EventListener::new(image, "error", move |_| {
                runtime.dispatch(PosterAction::ImageFailed { index });
            })
        };
        runtime.keep(on_load);
        runtime.keep(on_error);
    }
    Ok(())
}

// Images served from cache can finish before the listeners exist.
fn resolve_completed(runtime: &Rc<PosterRuntime>) {
    let finished: Vec<(usize, bool)> = runtime
        .elements
        .images
        .iter()
        .enumerate()
        .filter(|(_, image)| image.complete())
        .map(|(index, image)| (index, image_decoded(image)))
        .collect();
    for (index, decoded) in finished {
        let action = if decoded {
            PosterAction::ImageLoaded { index }
        } else {
            PosterAction::ImageFailed { index }
        };
        runtime.dispatch(action);
    }
}

fn image_decoded(image: &HtmlImageElement) -> bool {
    image.natural_width() > 0
}

pub(crate) fn insert_placeholder(
    document: &Document,
    image: &HtmlImageElement,
    placeholder: &Placeholder,
) -> Result<(), JsValue> {
    let Some(parent) = image.parent_node() else {
        return Ok(());
    };
    let node = build_placeholder(document, placeholder)?;
    parent.insert_before(&node, Some(image))?;
    Ok(())
}

fn build_placeholder(document: &Document, placeholder: &Placeholder) -> Result<Element, JsValue> {
    let root = document.create_element("div")?;
    root.set_class_name(IMAGE_PLACEHOLDER);
    let content = document.create_element("div")?;
    content.set_class_name(PLACEHOLDER_CONTENT);
    let icon = document.create_element("span")?;
    icon.set_class_name(PLACEHOLDER_ICON);
    icon.set_text_content(Some(placeholder.icon));
    let text = document.create_element("span")?;
    text.set_class_name(PLACEHOLDER_TEXT);
    text.set_text_content(Some(&placeholder.text));
    content.append_child(&icon)?;
    content.append_child(&text)?;
    root.append_child(&content)?;
    Ok(root)
}

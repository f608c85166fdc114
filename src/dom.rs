use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

pub(crate) fn query_all<T: JsCast>(root: &Document, selector: &str) -> Result<Vec<T>, JsValue> {
    let nodes = root.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for idx in 0..nodes.length() {
        if let Some(node) = nodes.item(idx).and_then(|node| node.dyn_into::<T>().ok()) {
            out.push(node);
        }
    }
    Ok(out)
}

pub(crate) fn query_one<T: JsCast>(root: &Document, selector: &str) -> Result<Option<T>, JsValue> {
    Ok(root
        .query_selector(selector)?
        .and_then(|element| element.dyn_into::<T>().ok()))
}

/// Makes `element`'s membership in `managed` classes match `active`; classes
/// outside `managed` are left alone.
pub(crate) fn sync_classes(
    element: &Element,
    managed: &[&str],
    active: &[&str],
) -> Result<(), JsValue> {
    let list = element.class_list();
    for class in managed {
        list.toggle_with_force(class, active.contains(class))?;
    }
    Ok(())
}

pub(crate) fn set_hidden(element: &HtmlElement, hidden: bool) -> Result<(), JsValue> {
    let style = element.style();
    if hidden {
        style.set_property("display", "none")
    } else {
        style.remove_property("display").map(|_| ())
    }
}

/// Trimmed text of the first `selector` match inside `element`.
pub(crate) fn heading_text(element: &Element, selector: &str) -> Result<Option<String>, JsValue> {
    let Some(heading) = element.query_selector(selector)? else {
        return Ok(None);
    };
    let text = heading.text_content().unwrap_or_default();
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    Ok(Some(text.to_string()))
}

pub(crate) fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

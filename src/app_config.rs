use gloo::console;
use web_sys::HtmlElement;

use poster_enhance_core::config::OVERRIDE_ATTR_PREFIX;
use poster_enhance_core::PosterConfig;

const EMBEDDED_CONFIG: &str = include_str!("../poster.toml");

pub(crate) fn load_config(body: &HtmlElement) -> PosterConfig {
    let mut config = PosterConfig::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|err| {
        console::warn!("poster config: using defaults", err.to_string());
        PosterConfig::default()
    });
    apply_body_overrides(&mut config, body);
    config
}

fn apply_body_overrides(config: &mut PosterConfig, body: &HtmlElement) {
    for name in body.get_attribute_names().iter() {
        let Some(name) = name.as_string() else {
            continue;
        };
        let Some(key) = name.strip_prefix(OVERRIDE_ATTR_PREFIX) else {
            continue;
        };
        let value = body.get_attribute(&name).unwrap_or_default();
        if let Err(err) = config.apply_override(key, &value) {
            #[cfg(all(test, target_arch = "wasm32"))]
            record_rejected(&name);
            console::warn!("poster config: ignoring override", name.clone(), err.to_string());
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
thread_local! {
    static REJECTED_OVERRIDES: std::cell::RefCell<Vec<String>> = std::cell::RefCell::new(Vec::new());
}

#[cfg(all(test, target_arch = "wasm32"))]
fn record_rejected(name: &str) {
    REJECTED_OVERRIDES.with(|slot| slot.borrow_mut().push(name.to_string()));
}

#[cfg(all(test, target_arch = "wasm32"))]
fn take_rejected() -> Vec<String> {
    REJECTED_OVERRIDES.with(|slot| std::mem::take(&mut *slot.borrow_mut()))
}

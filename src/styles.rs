use wasm_bindgen::JsValue;
use web_sys::Document;

const STYLE_ID: &str = "poster-enhance-styles";

const POSTER_STYLES: &str = r#"
.data-chart.animated {
    animation: chartSpin 2s ease-in-out;
}

@keyframes chartSpin {
    0% { transform: rotate(0deg) scale(0.5); opacity: 0; }
    50% { transform: rotate(180deg) scale(1.1); opacity: 0.8; }
    100% { transform: rotate(360deg) scale(1); opacity: 1; }
}

.image-placeholder {
    width: 100%;
    max-width: 200px;
    height: 150px;
    background-color: #f0f4f8;
    border: 2px dashed #0d47a1;
    border-radius: 8px;
    display: flex;
    align-items: center;
    justify-content: center;
    margin: 16px auto;
}

.placeholder-content {
    text-align: center;
    color: #0d47a1;
}

.placeholder-icon {
    font-size: 24px;
    display: block;
    margin-bottom: 8px;
}

.placeholder-text {
    font-size: 12px;
    font-weight: 500;
}

.image-focused {
    transform: scale(1.05);
    box-shadow: 0 8px 16px rgba(13, 71, 161, 0.3);
    transition: all 0.3s ease;
}

.section-hover {
    transform: translateY(-1px);
    transition: transform 0.2s ease;
}

.poster-loading .poster-content {
    opacity: 0;
    transform: translateY(20px);
}

.poster-ready .poster-content {
    opacity: 1;
    transform: translateY(0);
    transition: all 0.5s ease;
}

@media print {
    .print-button {
        display: none !important;
    }
}

@media (max-width: 768px) {
    .image-focused {
        transform: none;
    }
}
"#;

/// Adds the layer's style rules to the document head once.
pub(crate) fn inject(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(POSTER_STYLES));
    head.append_child(&style)?;
    Ok(())
}

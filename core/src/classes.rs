//! Presentation class names shared by the core projection and the DOM layer.

pub const POSTER_LOADING: &str = "poster-loading";
pub const POSTER_READY: &str = "poster-ready";
pub const PRINTING: &str = "printing";
pub const BEFORE_PRINT: &str = "before-print";

pub const IMAGE_LOADING: &str = "image-loading";
pub const IMAGE_LOADED: &str = "image-loaded";
pub const IMAGE_ERROR: &str = "image-error";
pub const IMAGE_FOCUSED: &str = "image-focused";

pub const SECTION_EXPANDED: &str = "section-expanded";
pub const SECTION_HOVER: &str = "section-hover";

pub const CHART_ANIMATED: &str = "animated";

pub const MOBILE_LAYOUT: &str = "mobile-layout";
pub const MOBILE_COLUMN: &str = "mobile-column";

pub const IMAGE_PLACEHOLDER: &str = "image-placeholder";
pub const PLACEHOLDER_CONTENT: &str = "placeholder-content";
pub const PLACEHOLDER_ICON: &str = "placeholder-icon";
pub const PLACEHOLDER_TEXT: &str = "placeholder-text";

pub const PRINT_BUTTON: &str = "btn btn--secondary print-button";

/// Classes owned by the body element.
pub const PAGE_MANAGED: &[&str] = &[POSTER_LOADING, POSTER_READY, PRINTING, BEFORE_PRINT];
/// Classes owned by each content image.
pub const IMAGE_MANAGED: &[&str] = &[IMAGE_LOADING, IMAGE_LOADED, IMAGE_ERROR, IMAGE_FOCUSED];
/// Classes owned by each section container.
pub const SECTION_MANAGED: &[&str] = &[SECTION_EXPANDED, SECTION_HOVER];
pub const CHART_MANAGED: &[&str] = &[CHART_ANIMATED];
pub const CONTENT_MANAGED: &[&str] = &[MOBILE_LAYOUT];
pub const COLUMN_MANAGED: &[&str] = &[MOBILE_COLUMN];

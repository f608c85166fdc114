use crate::classes;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    #[default]
    Desktop,
    Mobile,
}

impl LayoutMode {
    pub fn for_width(width: f64, mobile_max_width: f64) -> Self {
        if width <= mobile_max_width {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn content_classes(self) -> Vec<&'static str> {
        match self {
            LayoutMode::Desktop => Vec::new(),
            LayoutMode::Mobile => vec![classes::MOBILE_LAYOUT],
        }
    }

    pub fn column_classes(self) -> Vec<&'static str> {
        match self {
            LayoutMode::Desktop => Vec::new(),
            LayoutMode::Mobile => vec![classes::MOBILE_COLUMN],
        }
    }
}

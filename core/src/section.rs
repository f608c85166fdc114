use crate::classes;

pub const SECTION_ROLE: &str = "region";
pub const SECTION_TABINDEX: &str = "0";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionRecord {
    /// Accessible label taken from the section heading, if any.
    pub label: Option<String>,
    pub expanded: bool,
    pub hovered: bool,
}

impl SectionRecord {
    pub fn new(heading: Option<&str>) -> Self {
        Self {
            label: heading.map(str::to_string),
            expanded: false,
            hovered: false,
        }
    }

    pub fn classes(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.expanded {
            out.push(classes::SECTION_EXPANDED);
        }
        if self.hovered {
            out.push(classes::SECTION_HOVER);
        }
        out
    }
}

/// Keys that toggle a section's expanded flag, matched on `KeyboardEvent.key`.
pub fn is_toggle_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

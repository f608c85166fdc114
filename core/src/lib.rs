pub mod action;
pub mod anchor;
pub mod chart;
pub mod classes;
pub mod config;
pub mod image;
pub mod layout;
pub mod page;
pub mod section;
pub mod state;

pub use action::{Effect, PosterAction};
pub use anchor::anchor_target;
pub use chart::{ChartRecord, ChartState, CHART_LABEL, CHART_ROLE};
pub use config::{ConfigError, PosterConfig, Selectors};
pub use image::{ImageRecord, LoadState, Placeholder, PLACEHOLDER_ICON};
pub use layout::LayoutMode;
pub use page::{PagePhase, PageRecord};
pub use section::{is_toggle_key, SectionRecord, SECTION_ROLE, SECTION_TABINDEX};
pub use state::PosterState;

use crate::classes;

pub const CHART_ROLE: &str = "img";

// Mirrors the categories drawn by the poster's pie chart. The chart markup is
// static, so this text has to be kept in step with it by hand.
pub const CHART_LABEL: &str = "Pie chart showing distribution of data-related challenges: \
Dataset Integrity Issues 35%, Mislabeled Images 25%, Unbalanced Data 25%, Dataset Shortage 15%";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartState {
    #[default]
    Unanimated,
    Animated,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartRecord {
    pub state: ChartState,
    fired: bool,
}

impl ChartRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one visibility signal. Returns true only for the signal that
    /// starts the animation; everything after it is ignored.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        self.state = ChartState::Animated;
        true
    }

    pub fn fired(&self) -> bool {
        self.fired
    }

    pub fn classes(&self) -> Vec<&'static str> {
        match self.state {
            ChartState::Unanimated => Vec::new(),
            ChartState::Animated => vec![classes::CHART_ANIMATED],
        }
    }
}

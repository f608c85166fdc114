use crate::classes;

pub const PLACEHOLDER_ICON: &str = "📊";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Error,
}

/// Fallback shown in place of an image that failed to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub icon: &'static str,
    pub text: String,
}

impl Placeholder {
    pub fn for_alt(alt: &str) -> Self {
        Self {
            icon: PLACEHOLDER_ICON,
            text: alt.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRecord {
    pub alt: String,
    pub load: LoadState,
    pub focused: bool,
}

impl ImageRecord {
    pub fn new(alt: impl Into<String>) -> Self {
        Self {
            alt: alt.into(),
            load: LoadState::Loading,
            focused: false,
        }
    }

    /// Returns true when the image left the loading state.
    pub fn mark_loaded(&mut self) -> bool {
        if self.load != LoadState::Loading {
            return false;
        }
        self.load = LoadState::Loaded;
        true
    }

    /// Moves a loading image into the error state and returns its placeholder.
    /// Images that already resolved never produce a second placeholder.
    pub fn mark_failed(&mut self) -> Option<Placeholder> {
        if self.load != LoadState::Loading {
            return None;
        }
        self.load = LoadState::Error;
        Some(Placeholder::for_alt(&self.alt))
    }

    pub fn has_placeholder(&self) -> bool {
        self.load == LoadState::Error
    }

    /// Hidden images keep their place in the tree but are not rendered.
    pub fn hidden(&self) -> bool {
        self.load == LoadState::Error
    }

    pub fn classes(&self) -> Vec<&'static str> {
        let mut out = vec![match self.load {
            LoadState::Loading => classes::IMAGE_LOADING,
            LoadState::Loaded => classes::IMAGE_LOADED,
            LoadState::Error => classes::IMAGE_ERROR,
        }];
        if self.focused {
            out.push(classes::IMAGE_FOCUSED);
        }
        out
    }
}

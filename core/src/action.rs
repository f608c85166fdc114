use crate::image::Placeholder;

/// Input signals fed into [`crate::PosterState::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum PosterAction {
    PageReady,
    ImageLoaded { index: usize },
    ImageFailed { index: usize },
    ImageClicked { index: usize },
    SectionKey { index: usize, key: String },
    SectionPointer { index: usize, inside: bool },
    ChartVisibility { intersecting: bool, ratio: f64 },
    Resize { width: f64 },
    PrintRequested,
    PrintReset,
    BeforePrint,
    AfterPrint,
    FocusSection { index: usize },
    ToggleImage { index: usize },
}

/// Work the DOM layer performs after an action was applied.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    RenderPage,
    RenderImage { index: usize },
    InsertPlaceholder { index: usize, placeholder: Placeholder },
    RenderSection { index: usize },
    FocusSection { index: usize },
    RenderChart,
    StopChartObserver,
    RenderLayout,
    OpenPrintDialog,
    SchedulePrintReset { delay_ms: u32 },
}

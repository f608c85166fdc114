use crate::action::{Effect, PosterAction};
use crate::chart::ChartRecord;
use crate::config::PosterConfig;
use crate::image::ImageRecord;
use crate::layout::LayoutMode;
use crate::page::{PagePhase, PageRecord};
use crate::section::{is_toggle_key, SectionRecord};

// Observers report ratios like 0.4999 for an entry that crossed a 0.5 threshold.
const VISIBLE_RATIO_SLACK: f64 = 1e-3;

#[derive(Clone, Debug)]
pub struct PosterState {
    pub page: PageRecord,
    pub sections: Vec<SectionRecord>,
    pub images: Vec<ImageRecord>,
    pub chart: Option<ChartRecord>,
    /// `None` until the first width check ran.
    pub layout: Option<LayoutMode>,
    mobile_max_width: f64,
    chart_threshold: f64,
    print_reset_ms: u32,
}

impl PosterState {
    pub fn new(config: &PosterConfig) -> Self {
        Self {
            page: PageRecord::default(),
            sections: Vec::new(),
            images: Vec::new(),
            chart: None,
            layout: None,
            mobile_max_width: config.mobile_max_width,
            chart_threshold: config.chart_threshold,
            print_reset_ms: config.print_reset_ms,
        }
    }

    pub fn add_section(&mut self, heading: Option<&str>) -> usize {
        self.sections.push(SectionRecord::new(heading));
        self.sections.len() - 1
    }

    pub fn add_image(&mut self, alt: &str) -> usize {
        self.images.push(ImageRecord::new(alt));
        self.images.len() - 1
    }

    pub fn set_chart(&mut self) {
        if self.chart.is_none() {
            self.chart = Some(ChartRecord::new());
        }
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout.unwrap_or_default()
    }

    pub fn focused_image(&self) -> Option<usize> {
        self.images.iter().position(|image| image.focused)
    }

    pub fn apply(&mut self, action: PosterAction) -> Vec<Effect> {
        match action {
            PosterAction::PageReady => {
                if self.page.phase == PagePhase::Ready {
                    return Vec::new();
                }
                self.page.phase = PagePhase::Ready;
                vec![Effect::RenderPage]
            }
            PosterAction::ImageLoaded { index } => {
                let Some(image) = self.images.get_mut(index) else {
                    return Vec::new();
                };
                if !image.mark_loaded() {
                    return Vec::new();
                }
                vec![Effect::RenderImage { index }]
            }
            PosterAction::ImageFailed { index } => {
                let Some(image) = self.images.get_mut(index) else {
                    return Vec::new();
                };
                let Some(placeholder) = image.mark_failed() else {
                    return Vec::new();
                };
                vec![
                    Effect::InsertPlaceholder { index, placeholder },
                    Effect::RenderImage { index },
                ]
            }
            PosterAction::ImageClicked { index } | PosterAction::ToggleImage { index } => {
                self.toggle_image(index)
            }
            PosterAction::SectionKey { index, key } => {
                if !is_toggle_key(&key) {
                    return Vec::new();
                }
                let Some(section) = self.sections.get_mut(index) else {
                    return Vec::new();
                };
                section.expanded = !section.expanded;
                vec![Effect::RenderSection { index }]
            }
            PosterAction::SectionPointer { index, inside } => {
                let Some(section) = self.sections.get_mut(index) else {
                    return Vec::new();
                };
                if section.hovered == inside {
                    return Vec::new();
                }
                section.hovered = inside;
                vec![Effect::RenderSection { index }]
            }
            PosterAction::ChartVisibility { intersecting, ratio } => {
                let visible = intersecting && ratio + VISIBLE_RATIO_SLACK >= self.chart_threshold;
                let Some(chart) = self.chart.as_mut() else {
                    return Vec::new();
                };
                if !chart.observe(visible) {
                    return Vec::new();
                }
                vec![Effect::RenderChart, Effect::StopChartObserver]
            }
            PosterAction::Resize { width } => {
                let mode = LayoutMode::for_width(width, self.mobile_max_width);
                if self.layout == Some(mode) {
                    return Vec::new();
                }
                self.layout = Some(mode);
                vec![Effect::RenderLayout]
            }
            PosterAction::PrintRequested => {
                self.page.printing = true;
                vec![
                    Effect::RenderPage,
                    Effect::OpenPrintDialog,
                    Effect::SchedulePrintReset {
                        delay_ms: self.print_reset_ms,
                    },
                ]
            }
            PosterAction::PrintReset => self.set_page_flag(|page| &mut page.printing, false),
            PosterAction::BeforePrint => self.set_page_flag(|page| &mut page.before_print, true),
            PosterAction::AfterPrint => self.set_page_flag(|page| &mut page.before_print, false),
            PosterAction::FocusSection { index } => {
                if index >= self.sections.len() {
                    return Vec::new();
                }
                vec![Effect::FocusSection { index }]
            }
        }
    }

    fn toggle_image(&mut self, index: usize) -> Vec<Effect> {
        if index >= self.images.len() {
            return Vec::new();
        }
        let mut effects = Vec::new();
        for (id, image) in self.images.iter_mut().enumerate() {
            let next = if id == index { !image.focused } else { false };
            if image.focused != next {
                image.focused = next;
                effects.push(Effect::RenderImage { index: id });
            }
        }
        effects
    }

    fn set_page_flag<F>(&mut self, flag: F, value: bool) -> Vec<Effect>
    where
        F: FnOnce(&mut PageRecord) -> &mut bool,
    {
        let slot = flag(&mut self.page);
        if *slot == value {
            return Vec::new();
        }
        *slot = value;
        vec![Effect::RenderPage]
    }
}

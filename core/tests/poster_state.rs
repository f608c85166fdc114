use poster_enhance_core::classes::{
    CHART_ANIMATED, IMAGE_ERROR, IMAGE_FOCUSED, IMAGE_LOADED, IMAGE_LOADING, MOBILE_COLUMN,
    MOBILE_LAYOUT, POSTER_LOADING, POSTER_READY, PRINTING, SECTION_EXPANDED, SECTION_HOVER,
};
use poster_enhance_core::{
    ChartState, Effect, LayoutMode, LoadState, Placeholder, PosterAction, PosterConfig,
    PosterState, PLACEHOLDER_ICON,
};

fn build_state(images: usize) -> PosterState {
    let mut state = PosterState::new(&PosterConfig::default());
    state.add_section(Some("Introduction"));
    state.add_section(None);
    for id in 0..images {
        state.add_image(&format!("Figure {}", id + 1));
    }
    state.set_chart();
    state
}

fn focused_count(state: &PosterState) -> usize {
    state.images.iter().filter(|image| image.focused).count()
}

#[test]
fn failed_image_gets_placeholder_and_is_hidden() {
    let mut state = build_state(2);
    let effects = state.apply(PosterAction::ImageFailed { index: 0 });
    assert_eq!(
        effects,
        vec![
            Effect::InsertPlaceholder {
                index: 0,
                placeholder: Placeholder {
                    icon: PLACEHOLDER_ICON,
                    text: "Figure 1".to_string(),
                },
            },
            Effect::RenderImage { index: 0 },
        ]
    );
    let image = &state.images[0];
    assert_eq!(image.load, LoadState::Error);
    assert!(image.hidden());
    assert!(image.has_placeholder());
    assert_eq!(image.classes(), vec![IMAGE_ERROR]);
}

#[test]
fn loaded_image_has_no_placeholder() {
    let mut state = build_state(1);
    assert_eq!(state.images[0].classes(), vec![IMAGE_LOADING]);
    let effects = state.apply(PosterAction::ImageLoaded { index: 0 });
    assert_eq!(effects, vec![Effect::RenderImage { index: 0 }]);
    assert!(!state.images[0].hidden());
    assert!(!state.images[0].has_placeholder());
    assert_eq!(state.images[0].classes(), vec![IMAGE_LOADED]);
}

#[test]
fn image_resolves_only_once() {
    let mut state = build_state(1);
    state.apply(PosterAction::ImageFailed { index: 0 });
    assert!(state.apply(PosterAction::ImageFailed { index: 0 }).is_empty());
    assert!(state.apply(PosterAction::ImageLoaded { index: 0 }).is_empty());
    assert_eq!(state.images[0].load, LoadState::Error);

    let mut state = build_state(1);
    state.apply(PosterAction::ImageLoaded { index: 0 });
    assert!(state.apply(PosterAction::ImageFailed { index: 0 }).is_empty());
    assert_eq!(state.images[0].load, LoadState::Loaded);
}

#[test]
fn clicks_keep_at_most_one_image_focused() {
    let mut state = build_state(4);
    let clicks = [0usize, 2, 2, 3, 1, 1, 1, 0, 3];
    for index in clicks {
        state.apply(PosterAction::ImageClicked { index });
        assert!(focused_count(&state) <= 1);
    }
    assert_eq!(state.focused_image(), Some(3));
    assert!(state.images[3].classes().contains(&IMAGE_FOCUSED));
}

#[test]
fn clicking_focused_image_clears_it() {
    let mut state = build_state(2);
    state.apply(PosterAction::ImageClicked { index: 1 });
    let effects = state.apply(PosterAction::ImageClicked { index: 1 });
    assert_eq!(effects, vec![Effect::RenderImage { index: 1 }]);
    assert_eq!(state.focused_image(), None);
}

#[test]
fn switching_focus_renders_both_images() {
    let mut state = build_state(3);
    state.apply(PosterAction::ImageClicked { index: 0 });
    let effects = state.apply(PosterAction::ImageClicked { index: 2 });
    assert_eq!(
        effects,
        vec![
            Effect::RenderImage { index: 0 },
            Effect::RenderImage { index: 2 },
        ]
    );
}

#[test]
fn toggle_image_out_of_range_is_noop() {
    let mut state = build_state(5);
    state.apply(PosterAction::ImageClicked { index: 2 });
    let before = state.images.clone();
    let effects = state.apply(PosterAction::ToggleImage { index: 99 });
    assert!(effects.is_empty());
    assert_eq!(state.images, before);
}

#[test]
fn enter_and_space_toggle_expanded() {
    let mut state = build_state(0);
    let key = |key: &str| PosterAction::SectionKey {
        index: 0,
        key: key.to_string(),
    };
    assert_eq!(state.apply(key("Enter")), vec![Effect::RenderSection { index: 0 }]);
    assert!(state.sections[0].expanded);
    assert_eq!(state.sections[0].classes(), vec![SECTION_EXPANDED]);
    state.apply(key(" "));
    assert!(!state.sections[0].expanded);
    assert!(state.apply(key("a")).is_empty());
    assert!(state.apply(key("Escape")).is_empty());
    assert!(!state.sections[0].expanded);
}

#[test]
fn section_label_comes_from_heading() {
    let state = build_state(0);
    assert_eq!(state.sections[0].label.as_deref(), Some("Introduction"));
    assert_eq!(state.sections[1].label, None);
}

#[test]
fn pointer_enter_and_leave_toggle_hover() {
    let mut state = build_state(0);
    state.apply(PosterAction::SectionPointer { index: 1, inside: true });
    assert_eq!(state.sections[1].classes(), vec![SECTION_HOVER]);
    assert!(state
        .apply(PosterAction::SectionPointer { index: 1, inside: true })
        .is_empty());
    state.apply(PosterAction::SectionPointer { index: 1, inside: false });
    assert!(state.sections[1].classes().is_empty());
}

fn visibility(intersecting: bool, ratio: f64) -> PosterAction {
    PosterAction::ChartVisibility {
        intersecting,
        ratio,
    }
}

#[test]
fn chart_animates_once() {
    let mut state = build_state(0);
    assert!(state.apply(visibility(false, 0.0)).is_empty());
    let effects = state.apply(visibility(true, 0.6));
    assert_eq!(effects, vec![Effect::RenderChart, Effect::StopChartObserver]);
    for (intersecting, ratio) in [(false, 0.0), (true, 1.0), (false, 0.2), (true, 0.8)] {
        assert!(state.apply(visibility(intersecting, ratio)).is_empty());
    }
    let chart = state.chart.as_ref().map(|chart| chart.state);
    assert_eq!(chart, Some(ChartState::Animated));
    assert_eq!(state.chart.as_ref().map(|chart| chart.classes()), Some(vec![CHART_ANIMATED]));
}

#[test]
fn chart_waits_for_half_visibility() {
    let mut state = build_state(0);
    assert!(state.apply(visibility(true, 0.3)).is_empty());
    assert_eq!(
        state.chart.as_ref().map(|chart| chart.state),
        Some(ChartState::Unanimated)
    );
    assert!(!state.chart.as_ref().map_or(true, |chart| chart.fired()));
    assert_eq!(
        state.apply(visibility(true, 0.4999)),
        vec![Effect::RenderChart, Effect::StopChartObserver]
    );
}

#[test]
fn chart_threshold_follows_config() {
    let config = PosterConfig {
        chart_threshold: 0.9,
        ..PosterConfig::default()
    };
    let mut state = PosterState::new(&config);
    state.set_chart();
    assert!(state.apply(visibility(true, 0.6)).is_empty());
    assert_eq!(state.apply(visibility(true, 0.95)).len(), 2);
}

#[test]
fn missing_chart_skips_visibility() {
    let mut state = PosterState::new(&PosterConfig::default());
    assert!(state.apply(visibility(true, 1.0)).is_empty());
    assert!(state.chart.is_none());
}

#[test]
fn resize_sequence_tracks_breakpoint() {
    let mut state = build_state(0);
    assert_eq!(state.apply(PosterAction::Resize { width: 1024.0 }), vec![Effect::RenderLayout]);
    assert!(state.layout_mode().content_classes().is_empty());

    assert_eq!(state.apply(PosterAction::Resize { width: 500.0 }), vec![Effect::RenderLayout]);
    assert_eq!(state.layout_mode().content_classes(), vec![MOBILE_LAYOUT]);
    assert_eq!(state.layout_mode().column_classes(), vec![MOBILE_COLUMN]);

    assert_eq!(state.apply(PosterAction::Resize { width: 1024.0 }), vec![Effect::RenderLayout]);
    assert_eq!(state.layout_mode(), LayoutMode::Desktop);
}

#[test]
fn resize_at_same_mode_is_noop() {
    let mut state = build_state(0);
    state.apply(PosterAction::Resize { width: 768.0 });
    assert_eq!(state.layout_mode(), LayoutMode::Mobile);
    assert!(state.apply(PosterAction::Resize { width: 768.0 }).is_empty());
    assert!(state.apply(PosterAction::Resize { width: 320.0 }).is_empty());
    assert_eq!(state.apply(PosterAction::Resize { width: 769.0 }), vec![Effect::RenderLayout]);
}

#[test]
fn print_sets_flag_until_reset() {
    let mut state = build_state(0);
    let effects = state.apply(PosterAction::PrintRequested);
    assert_eq!(
        effects,
        vec![
            Effect::RenderPage,
            Effect::OpenPrintDialog,
            Effect::SchedulePrintReset { delay_ms: 1000 },
        ]
    );
    assert!(state.page.classes().contains(&PRINTING));
    assert_eq!(state.apply(PosterAction::PrintReset), vec![Effect::RenderPage]);
    assert!(!state.page.classes().contains(&PRINTING));
    assert!(state.apply(PosterAction::PrintReset).is_empty());
}

#[test]
fn page_becomes_ready_once() {
    let mut state = build_state(0);
    assert_eq!(state.page.classes(), vec![POSTER_LOADING]);
    assert_eq!(state.apply(PosterAction::PageReady), vec![Effect::RenderPage]);
    assert_eq!(state.page.classes(), vec![POSTER_READY]);
    assert!(state.apply(PosterAction::PageReady).is_empty());
}

#[test]
fn focus_section_checks_range() {
    let mut state = build_state(0);
    assert_eq!(
        state.apply(PosterAction::FocusSection { index: 1 }),
        vec![Effect::FocusSection { index: 1 }]
    );
    assert!(state.apply(PosterAction::FocusSection { index: 2 }).is_empty());
}

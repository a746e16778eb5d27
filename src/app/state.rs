// Folio - app/state.rs
//
// Application state management. Explicit, independently owned state cells
// (phase, theme, scroll, navigation requests) with clear lifecycle.
// Owned by the eframe::App implementation.

use crate::core::boot::BootSequence;
use crate::core::content::Portfolio;
use crate::ui::theme::ThemeMode;
use crate::util::constants;
use std::time::{Duration, Instant};

/// Top-level view phase: the boot screen, then the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

/// Page sections reachable from the navbar and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    Experience,
    Projects,
    Skills,
}

impl Section {
    /// Sections shown as navbar links, in order.
    pub const NAV: [Section; 4] = [
        Section::Home,
        Section::Services,
        Section::Experience,
        Section::Projects,
    ];

    /// Display label (the page uses its own vocabulary for the anchors).
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Identity",
            Section::Services => "Services",
            Section::Experience => "Journey",
            Section::Projects => "Exhibits",
            Section::Skills => "Stack",
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Validated portfolio content.
    pub portfolio: Portfolio,

    /// Current theme mode. Never persisted; toggles last one run.
    pub theme: ThemeMode,

    /// Body font size in points (from config).
    pub font_size: f32,

    /// Current view phase.
    pub phase: Phase,

    /// The boot-log revealer. Some only while the loading view is mounted;
    /// dropped on the loading→ready transition so no stale timer survives.
    pub boot: Option<BootSequence>,

    /// When the loading view mounted; drives the one-shot transition.
    mounted: Instant,

    /// Current vertical scroll offset of the portfolio page (px).
    pub scroll_offset: f32,

    /// Scroll progress 0..1 over the whole page (drives the background).
    pub scroll_progress: f32,

    /// Section the user asked to jump to (consumed by the next frame).
    pub pending_section: Option<Section>,

    /// Scroll-to-top request (consumed by the next frame).
    pub scroll_to_top: bool,

    /// A panel asked for the resume to be saved (consumed by `gui.rs`,
    /// which owns the native dialog).
    pub request_resume_save: bool,

    /// Whether the about dialog is open.
    pub show_about: bool,

    /// Status line for transient feedback (resume saved, warnings).
    pub status_message: String,

    /// Non-fatal warnings collected at startup.
    pub warnings: Vec<String>,

    /// Whether debug mode is enabled (gates the status-bar scroll readout).
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state. The loading view mounts immediately: the boot
    /// revealer starts at `now` over the portfolio's boot lines.
    pub fn new(
        portfolio: Portfolio,
        theme: ThemeMode,
        font_size: f32,
        debug_mode: bool,
        now: Instant,
    ) -> Self {
        let boot = BootSequence::new(
            portfolio.boot.lines.clone(),
            Duration::from_millis(constants::BOOT_TICK_INTERVAL_MS),
            now,
        );
        Self {
            portfolio,
            theme,
            font_size,
            phase: Phase::Loading,
            boot: Some(boot),
            mounted: now,
            scroll_offset: 0.0,
            scroll_progress: 0.0,
            pending_section: None,
            scroll_to_top: false,
            request_resume_save: false,
            show_about: false,
            status_message: String::new(),
            warnings: Vec::new(),
            debug_mode,
        }
    }

    /// When the one-shot loading→ready transition fires.
    pub fn loading_deadline(&self) -> Instant {
        self.mounted + Duration::from_millis(constants::LOAD_SCREEN_DURATION_MS)
    }

    /// Tear down the loading view. Dropping the revealer cancels its timer;
    /// nothing can tick a view that is no longer mounted.
    pub fn finish_loading(&mut self) {
        self.phase = Phase::Ready;
        self.boot = None;
        tracing::info!("Boot screen dismissed; portfolio ready");
    }

    /// Flip light/dark. Swaps style tokens application-wide on the next frame.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(dark = self.theme.is_dark(), "Theme toggled");
    }

    /// Whether the scroll-to-top affordance is visible.
    pub fn show_scroll_top(&self) -> bool {
        scroll_top_visible(self.scroll_offset)
    }
}

/// Pure visibility rule for the scroll-to-top button: shown iff the offset
/// exceeds the fixed threshold. No hysteresis.
pub fn scroll_top_visible(offset: f32) -> bool {
    offset > constants::SCROLL_TOP_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::load_builtin_portfolio;

    fn state() -> AppState {
        AppState::new(
            load_builtin_portfolio().unwrap(),
            ThemeMode::Light,
            constants::DEFAULT_FONT_SIZE,
            false,
            Instant::now(),
        )
    }

    #[test]
    fn test_starts_loading_with_mounted_revealer() {
        let state = state();
        assert_eq!(state.phase, Phase::Loading);
        let boot = state.boot.as_ref().unwrap();
        assert_eq!(boot.reveal_index(), 0);
        assert_eq!(boot.len(), state.portfolio.boot.lines.len());
    }

    #[test]
    fn test_finish_loading_drops_revealer() {
        let mut state = state();
        state.finish_loading();
        assert_eq!(state.phase, Phase::Ready);
        assert!(state.boot.is_none());
    }

    #[test]
    fn test_debug_mode_is_recorded() {
        let state = AppState::new(
            load_builtin_portfolio().unwrap(),
            ThemeMode::Light,
            constants::DEFAULT_FONT_SIZE,
            true,
            Instant::now(),
        );
        assert!(state.debug_mode);
    }

    #[test]
    fn test_scroll_top_threshold_has_no_hysteresis() {
        assert!(!scroll_top_visible(0.0));
        assert!(!scroll_top_visible(400.0)); // exactly at threshold: hidden
        assert!(scroll_top_visible(400.1));
        assert!(scroll_top_visible(2_000.0));
        // Pure function of the offset: dipping back below hides it again.
        assert!(!scroll_top_visible(399.9));
    }

    #[test]
    fn test_theme_toggle_round_trips() {
        let mut state = state();
        let original = state.theme;
        state.toggle_theme();
        assert_ne!(state.theme, original);
        state.toggle_theme();
        assert_eq!(state.theme, original);
    }

    #[test]
    fn test_transition_outlives_completed_revealer() {
        // The one-shot transition and the revealer run on independent
        // clocks. With the built-in content the revealer finishes first;
        // the boot screen stays up until the transition fires regardless.
        let mut state = state();
        let far_future = Instant::now() + Duration::from_secs(60);
        let boot = state.boot.as_mut().unwrap();
        boot.tick(far_future);
        assert!(boot.is_complete());
        assert_eq!(state.phase, Phase::Loading);
        assert!(state.loading_deadline() > Instant::now() - Duration::from_secs(1));
    }
}

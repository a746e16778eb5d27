// Folio - ui/theme.rs
//
// Theme mode, colour palettes, the scroll-driven background sweep, and
// layout constants. No dependencies on app state or business logic.

use egui::Color32;

/// Light/dark display variant. Process-wide for one run, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Parse a user-supplied mode name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// The other mode. Toggling twice returns the original.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

// =============================================================================
// Palettes
// =============================================================================

/// Style tokens swapped application-wide when the theme flips.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub surface: Color32,
    pub border: Color32,
    pub badge_bg: Color32,
    pub badge_fg: Color32,
}

const LIGHT_PALETTE: Palette = Palette {
    text_primary: Color32::from_rgb(26, 28, 30),  // #1A1C1E
    text_muted: Color32::from_rgb(123, 127, 133), // #7B7F85
    surface: Color32::WHITE,
    border: Color32::from_rgb(236, 239, 236), // #ECEFEC
    badge_bg: Color32::from_rgb(238, 242, 255), // Indigo 50
    badge_fg: Color32::from_rgb(79, 70, 229),  // Indigo 600
};

const DARK_PALETTE: Palette = Palette {
    text_primary: Color32::WHITE,
    text_muted: Color32::from_rgb(156, 163, 175), // Gray 400
    surface: Color32::from_rgb(17, 24, 39),       // Gray 900
    border: Color32::from_rgb(31, 41, 55),        // Gray 800
    badge_bg: Color32::from_rgb(30, 27, 75),      // Indigo 950
    badge_fg: Color32::from_rgb(129, 140, 248),   // Indigo 400
};

pub fn palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT_PALETTE,
        ThemeMode::Dark => &DARK_PALETTE,
    }
}

/// Accent colours, shared by both modes.
pub const ACCENT: Color32 = Color32::from_rgb(79, 70, 229); // Indigo 600
pub const ACCENT_SOFT: Color32 = Color32::from_rgb(99, 102, 241); // Indigo 500
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(129, 140, 248); // Indigo 400
pub const FEATURE_DOT: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Boot screen colours (always dark, regardless of theme mode).
pub const BOOT_BG: Color32 = Color32::from_rgb(15, 17, 19); // #0F1113
pub const TERMINAL_BG: Color32 = Color32::from_rgb(8, 9, 10);
pub const TERMINAL_BORDER: Color32 = Color32::from_rgb(31, 41, 55); // Gray 800
pub const TERMINAL_TIMESTAMP: Color32 = Color32::from_rgb(75, 85, 99); // Gray 600
pub const TERMINAL_DONE: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400
pub const TERMINAL_ACTIVE: Color32 = ACCENT_LIGHT;
pub const PROGRESS_TRACK: Color32 = Color32::from_rgb(17, 24, 39); // Gray 900
pub const DOT_RED: Color32 = Color32::from_rgb(127, 34, 34); // Red 500 / 50%
pub const DOT_YELLOW: Color32 = Color32::from_rgb(117, 90, 4); // Yellow 500 / 50%
pub const DOT_GREEN: Color32 = Color32::from_rgb(17, 98, 47); // Green 500 / 50%

// =============================================================================
// Scroll-driven background sweep
// =============================================================================

/// Background stop colours sampled at scroll progress 0, 0.2, ..., 1.0.
const LIGHT_BG_STOPS: [Color32; 6] = [
    Color32::from_rgb(255, 255, 255), // #FFFFFF
    Color32::from_rgb(248, 249, 250), // #F8F9FA
    Color32::from_rgb(253, 245, 230), // #FDF5E6
    Color32::from_rgb(236, 239, 236), // #ECEFEC
    Color32::from_rgb(254, 255, 252), // #FEFFFC
    Color32::from_rgb(245, 246, 247), // #F5F6F7
];

const DARK_BG_STOPS: [Color32; 6] = [
    Color32::from_rgb(15, 17, 19), // #0F1113
    Color32::from_rgb(26, 28, 30), // #1A1C1E
    Color32::from_rgb(22, 24, 26), // #16181A
    Color32::from_rgb(28, 30, 32), // #1C1E20
    Color32::from_rgb(20, 22, 24), // #141618
    Color32::from_rgb(17, 20, 22), // #111416
];

/// Background colour for the current scroll progress (0.0 = top of the
/// page, 1.0 = bottom). Piecewise-linear over the six stops; progress
/// outside [0, 1] clamps to the end colours.
pub fn scroll_background(mode: ThemeMode, progress: f32) -> Color32 {
    let stops = match mode {
        ThemeMode::Light => &LIGHT_BG_STOPS,
        ThemeMode::Dark => &DARK_BG_STOPS,
    };
    let p = progress.clamp(0.0, 1.0) * (stops.len() - 1) as f32;
    let idx = (p.floor() as usize).min(stops.len() - 2);
    lerp_colour(stops[idx], stops[idx + 1], p - idx as f32)
}

fn lerp_colour(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let ch = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(ch(a.r(), b.r()), ch(a.g(), b.g()), ch(a.b(), b.b()))
}

// =============================================================================
// egui visuals
// =============================================================================

/// Apply the theme to the egui context: base visuals, panel fills, accent
/// hyperlinks, and the configured body font size.
pub fn apply(ctx: &egui::Context, mode: ThemeMode, background: Color32, font_size: f32) {
    let pal = palette(mode);
    let mut visuals = if mode.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.panel_fill = background;
    visuals.window_fill = pal.surface;
    visuals.hyperlink_color = if mode.is_dark() { ACCENT_LIGHT } else { ACCENT };
    visuals.override_text_color = Some(pal.text_primary);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        use egui::{FontId, TextStyle};
        style
            .text_styles
            .insert(TextStyle::Body, FontId::proportional(font_size));
        style
            .text_styles
            .insert(TextStyle::Button, FontId::proportional(font_size));
        style
            .text_styles
            .insert(TextStyle::Small, FontId::proportional(font_size * 0.8));
    });
}

// =============================================================================
// Layout constants
// =============================================================================

pub const CONTENT_MAX_WIDTH: f32 = 760.0;
pub const SECTION_SPACING: f32 = 72.0;
pub const CARD_SPACING: f32 = 16.0;
pub const CARD_RADIUS: u8 = 12;
pub const BOOT_PANEL_WIDTH: f32 = 420.0;
pub const SCROLL_TOP_MARGIN: f32 = 24.0;

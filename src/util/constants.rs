// Folio - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Folio";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Folio";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Boot sequence
// =============================================================================

/// Interval between boot-log reveal ticks (ms). One log line is revealed
/// per tick until the terminal line is reached.
pub const BOOT_TICK_INTERVAL_MS: u64 = 450;

/// Total duration of the loading screen (ms). Fires once; independent of
/// the reveal timer, which may finish before or after this deadline.
pub const LOAD_SCREEN_DURATION_MS: u64 = 3_500;

/// Blink period of the terminal cursor on the boot screen (seconds).
pub const BOOT_CURSOR_BLINK_SECS: f64 = 0.8;

// =============================================================================
// Scrolling
// =============================================================================

/// Vertical scroll offset (logical pixels) beyond which the scroll-to-top
/// button is shown. Pure threshold, no hysteresis.
pub const SCROLL_TOP_THRESHOLD_PX: f32 = 400.0;

// =============================================================================
// Content limits
// =============================================================================

/// Maximum size of a user-provided portfolio content file in bytes.
pub const MAX_CONTENT_FILE_SIZE: u64 = 256 * 1024; // 256 KB

/// Maximum number of boot log lines.
pub const MAX_BOOT_LINES: usize = 64;

/// Maximum number of entries in any single content collection
/// (links, metrics, services, experience roles, projects, skill groups).
pub const MAX_CONTENT_ITEMS: usize = 32;

/// Maximum length of any single content string in characters.
pub const MAX_CONTENT_STRING_LEN: usize = 4_096;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Initial window size (logical pixels).
pub const WINDOW_SIZE: [f32; 2] = [1100.0, 760.0];

/// Minimum window size (logical pixels).
pub const MIN_WINDOW_SIZE: [f32; 2] = [720.0, 480.0];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// User content override file name (stored in the platform config directory).
pub const CONTENT_FILE_NAME: &str = "portfolio.toml";

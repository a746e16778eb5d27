// Folio - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Config and portfolio content loading (built-in + user override)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use folio::app;

pub use folio::core;
pub use folio::platform;
pub use folio::ui;
pub use folio::util;

use crate::ui::theme::ThemeMode;
use crate::util::error::FolioError;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

/// Compile-time-embedded icon PNG bytes (64x64 RGBA).
///
/// Using `include_bytes!` ensures the asset is baked into the binary so the
/// icon is always available regardless of the working directory at runtime.
static ICON_PNG: &[u8] = include_bytes!("../assets/icon.png");

/// Decode the embedded PNG and return an `eframe`-compatible `IconData`.
///
/// Falls back to a transparent 1x1 placeholder if decoding fails so the
/// application always launches rather than panicking on a missing asset.
fn load_icon() -> egui::IconData {
    use image::ImageDecoder;

    match image::codecs::png::PngDecoder::new(std::io::Cursor::new(ICON_PNG)) {
        Ok(decoder) => {
            let (w, h) = decoder.dimensions();
            // Convert to RGBA8 regardless of the source colour space.
            match image::DynamicImage::from_decoder(decoder) {
                Ok(img) => {
                    let rgba = img.into_rgba8();
                    egui::IconData {
                        rgba: rgba.into_raw(),
                        width: w,
                        height: h,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to decode icon PNG; using placeholder");
                    placeholder_icon()
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to open icon PNG decoder; using placeholder");
            placeholder_icon()
        }
    }
}

/// 1x1 transparent RGBA icon used when the real icon cannot be loaded.
fn placeholder_icon() -> egui::IconData {
    egui::IconData {
        rgba: vec![0u8; 4],
        width: 1,
        height: 1,
    }
}

/// Configure fonts for the egui context.
///
/// On Windows, loads Segoe UI, Segoe UI Emoji, and Segoe UI Symbol from the
/// system font directory and sets them as the primary proportional fonts.
/// These fonts have much broader Unicode coverage than the egui built-ins,
/// preventing square-glyph rendering for the service icons, arrows, and
/// other symbols the portfolio uses.
/// The built-in egui fonts are kept as final fallbacks so no glyph is ever lost.
///
/// On non-Windows platforms the egui defaults are used unchanged.
fn configure_fonts(ctx: &egui::Context) {
    #[cfg(target_os = "windows")]
    {
        let mut fonts = egui::FontDefinitions::default();

        // Load Windows system fonts in priority order.
        // Segoe UI covers most Latin and common UI symbols.
        // Segoe UI Emoji adds Unicode emoji and many pictographic symbols.
        // Segoe UI Symbol covers Mathematical and other specialist blocks.
        let candidates: &[(&str, &str)] = &[
            ("Segoe UI", r"C:\Windows\Fonts\segoeui.ttf"),
            ("Segoe UI Emoji", r"C:\Windows\Fonts\seguiemj.ttf"),
            ("Segoe UI Symbol", r"C:\Windows\Fonts\seguisym.ttf"),
        ];

        let mut loaded_names: Vec<&str> = Vec::new();
        for (name, path) in candidates {
            match std::fs::read(path) {
                Ok(data) => {
                    fonts
                        .font_data
                        .insert((*name).to_owned(), egui::FontData::from_owned(data).into());
                    loaded_names.push(name);
                    tracing::debug!(font = name, "Loaded Windows system font");
                }
                Err(e) => {
                    tracing::warn!(
                        font = name,
                        error = %e,
                        "Failed to load Windows system font; some symbols may render as squares"
                    );
                }
            }
        }

        if !loaded_names.is_empty() {
            // Proportional: place Windows fonts first so they take priority over
            // the egui default (NotoSans), while keeping it as a final fallback.
            if let Some(proportional) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
                for (i, name) in loaded_names.iter().enumerate() {
                    proportional.insert(i, (*name).to_owned());
                }
            }

            // Monospace: append Windows fonts as symbol fallbacks after the
            // primary monospace font so the boot terminal's column alignment
            // is preserved while symbols outside the monospace range still
            // render correctly.
            if let Some(monospace) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
                for name in &loaded_names {
                    monospace.push((*name).to_owned());
                }
            }

            ctx.set_fonts(fonts);
            tracing::info!(fonts = ?loaded_names, "Windows system fonts configured");
        }
    }

    // On non-Windows platforms the egui built-in fonts are used unchanged.
    #[cfg(not(target_os = "windows"))]
    let _ = ctx;
}

/// Folio - Single-page portfolio as a native desktop app.
///
/// Boots with an animated terminal sequence, then renders the portfolio
/// page: identity, services, experience, projects, and skills.
#[derive(Parser, Debug)]
#[command(name = "Folio", version, about)]
struct Cli {
    /// Portfolio content file overriding the built-in content.
    #[arg(short = 'c', long = "content")]
    content: Option<PathBuf>,

    /// Starting theme: "dark" or "light" (overrides config).
    #[arg(short = 't', long = "theme")]
    theme: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and read config before logging is initialised
    // so the configured log level can take effect.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_errors) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "Folio starting"
    );

    // Non-fatal startup problems are surfaced in the status bar.
    let mut warnings: Vec<String> = Vec::new();
    for err in config_errors {
        let err = FolioError::from(err);
        tracing::warn!(error = %err, "Config warning");
        warnings.push(err.to_string());
    }

    // Starting theme: CLI override > config > light.
    let theme = match cli.theme.as_deref() {
        Some(value) => match ThemeMode::parse(value) {
            Some(mode) => mode,
            None => {
                let msg = format!("Unknown --theme '{value}' (expected 'dark' or 'light')");
                tracing::warn!(warning = %msg, "CLI warning");
                warnings.push(msg);
                ThemeMode::from_dark_flag(config.dark_mode)
            }
        },
        None => ThemeMode::from_dark_flag(config.dark_mode),
    };

    // Content override: CLI > config > platform default location.
    let content_path = cli
        .content
        .clone()
        .or_else(|| config.content_file.clone())
        .unwrap_or_else(|| platform_paths.user_content_file());

    let (portfolio, content_errors) = match app::content_mgr::load_portfolio(Some(&content_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!(error = %e, "Built-in content is unusable");
            eprintln!("Error: Failed to load portfolio content: {e}");
            std::process::exit(1);
        }
    };
    for err in content_errors {
        warnings.push(FolioError::from(err).to_string());
    }

    tracing::info!(
        name = %portfolio.identity.name,
        warnings = warnings.len(),
        "Ready to launch GUI"
    );

    let mut state = app::state::AppState::new(
        portfolio,
        theme,
        config.font_size,
        cli.debug,
        Instant::now(),
    );
    state.warnings = warnings;

    // Launch the GUI. The eframe viewport icon is loaded here from the PNG
    // asset and covers the window icon on all platforms.
    let icon_data = load_icon();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(util::constants::WINDOW_SIZE)
            .with_min_inner_size(util::constants::MIN_WINDOW_SIZE)
            .with_icon(icon_data),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(gui::FolioApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Folio GUI: {e}");
        std::process::exit(1);
    }
}

// Folio - tests/e2e_content.rs
//
// End-to-end tests for content and config loading.
//
// These tests exercise the real filesystem via tempfile, real TOML parsing,
// and the real fallback chain from a user override file to the built-in
// content — no mocks, no stubs.

use folio::app::content_mgr::load_portfolio;
use folio::core::content;
use folio::platform::config::load_config;
use folio::util::constants;
use folio::util::error::{ConfigError, ContentError};
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// A minimal but fully valid override document.
const MINIMAL_OVERRIDE: &str = r#"
[identity]
name = "Ada Lovelace"
accent = "Ada"
brand = "ADA.DEV"

[boot]
title = "ADA.DEV_v1"
lines = ["Warming up...", "Online."]
"#;

/// Write `contents` to `name` inside a fresh temp dir and return its path.
fn write_override(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// =============================================================================
// Built-in content
// =============================================================================

/// The embedded portfolio.toml must parse, validate, and carry every
/// section the page renders.
#[test]
fn e2e_builtin_content_is_complete() {
    let portfolio = content::load_builtin_portfolio().unwrap();

    assert!(!portfolio.identity.name.is_empty());
    assert!(
        portfolio.identity.name.contains(&portfolio.identity.accent),
        "accent must be a substring of the name"
    );
    assert!(!portfolio.boot.lines.is_empty());
    assert!(!portfolio.links.is_empty());
    assert!(!portfolio.metrics.is_empty());
    assert!(!portfolio.services.is_empty());
    assert!(!portfolio.experience.is_empty());
    assert!(!portfolio.projects.is_empty());
    assert!(!portfolio.skills.is_empty());
}

/// No override path still yields the built-in content without errors.
#[test]
fn e2e_missing_override_falls_back_silently() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("portfolio.toml");

    let (portfolio, errors) = load_portfolio(Some(&absent)).unwrap();
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");

    let builtin = content::load_builtin_portfolio().unwrap();
    assert_eq!(portfolio.identity.name, builtin.identity.name);
}

// =============================================================================
// User overrides
// =============================================================================

/// A valid override replaces the built-in content wholesale.
#[test]
fn e2e_valid_override_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_override(&dir, "portfolio.toml", MINIMAL_OVERRIDE);

    let (portfolio, errors) = load_portfolio(Some(&path)).unwrap();
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(portfolio.identity.name, "Ada Lovelace");
    assert_eq!(portfolio.boot.lines.len(), 2);
    // Optional sections default to empty rather than inheriting built-ins.
    assert!(portfolio.projects.is_empty());
}

/// Unparseable override TOML is reported and the built-in content is used.
#[test]
fn e2e_broken_override_falls_back_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_override(&dir, "portfolio.toml", "this is [not toml");

    let (portfolio, errors) = load_portfolio(Some(&path)).unwrap();
    assert_eq!(errors.len(), 1);
    assert!(
        matches!(errors[0], ContentError::TomlParse { .. }),
        "expected TomlParse, got {:?}",
        errors[0]
    );

    let builtin = content::load_builtin_portfolio().unwrap();
    assert_eq!(portfolio.identity.name, builtin.identity.name);
}

/// An override that parses but violates validation is also skipped.
#[test]
fn e2e_invalid_override_falls_back_with_error() {
    let dir = tempfile::tempdir().unwrap();
    // Accent is not a substring of the name.
    let doc = MINIMAL_OVERRIDE.replace("accent = \"Ada\"", "accent = \"Grace\"");
    let path = write_override(&dir, "portfolio.toml", &doc);

    let (_, errors) = load_portfolio(Some(&path)).unwrap();
    assert_eq!(errors.len(), 1);
    assert!(
        matches!(
            errors[0],
            ContentError::Invalid {
                field: "identity.accent",
                ..
            }
        ),
        "expected Invalid accent, got {:?}",
        errors[0]
    );
}

/// An oversized override is rejected before it is read.
#[test]
fn e2e_oversized_override_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let big = "#".repeat(constants::MAX_CONTENT_FILE_SIZE as usize + 1);
    let path = write_override(&dir, "portfolio.toml", &big);

    let (_, errors) = load_portfolio(Some(&path)).unwrap();
    assert_eq!(errors.len(), 1);
    assert!(
        matches!(errors[0], ContentError::FileTooLarge { .. }),
        "expected FileTooLarge, got {:?}",
        errors[0]
    );
}

// =============================================================================
// Config
// =============================================================================

/// No config file means defaults with no errors (first run).
#[test]
fn e2e_absent_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (config, errors) = load_config(dir.path());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert!(!config.dark_mode);
    assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
    assert!(config.content_file.is_none());
}

/// A valid config file is applied in full.
#[test]
fn e2e_valid_config_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(constants::CONFIG_FILE_NAME),
        r#"
[ui]
theme = "dark"
font_size = 16.0

[content]
file = "/tmp/portfolio.toml"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let (config, errors) = load_config(dir.path());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert!(config.dark_mode);
    assert_eq!(config.font_size, 16.0);
    assert_eq!(
        config.content_file,
        Some(PathBuf::from("/tmp/portfolio.toml"))
    );
    assert_eq!(config.log_level.as_deref(), Some("debug"));
}

/// Out-of-range and unrecognised values produce typed per-field errors
/// and fall back per-field, keeping the valid fields.
#[test]
fn e2e_invalid_config_values_warn_and_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(constants::CONFIG_FILE_NAME),
        r#"
[ui]
theme = "solarized"
font_size = 200.0

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let (config, errors) = load_config(dir.path());
    assert_eq!(errors.len(), 2, "errors: {errors:?}");
    for (err, field) in errors.iter().zip(["ui.theme", "ui.font_size"]) {
        assert!(
            matches!(err, ConfigError::ValueOutOfRange { field: f, .. } if f == field),
            "expected ValueOutOfRange for {field}, got {err:?}"
        );
    }
    assert!(!config.dark_mode);
    assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
    assert_eq!(config.log_level.as_deref(), Some("debug"));
}

/// An unparseable config file reports the parse error but the application
/// still gets usable defaults.
#[test]
fn e2e_broken_config_warns_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(constants::CONFIG_FILE_NAME), "[ui broken").unwrap();

    let (config, errors) = load_config(dir.path());
    assert_eq!(errors.len(), 1, "errors: {errors:?}");
    assert!(
        matches!(errors[0], ConfigError::TomlParse { .. }),
        "expected TomlParse, got {:?}",
        errors[0]
    );
    assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
}

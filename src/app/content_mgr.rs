// Folio - app/content_mgr.rs
//
// Loads portfolio content: the built-in copy embedded in the binary, and
// an optional user override file. A valid override replaces the built-in
// content wholesale; an invalid one is reported and skipped.

use crate::core::content::{self, Portfolio};
use crate::util::constants;
use crate::util::error::{ContentError, Result};
use std::path::Path;

/// Load the portfolio to render.
///
/// `override_path` is the user content file (CLI `--content`, config
/// `[content] file`, or the platform default location). If it exists and
/// validates it wins; otherwise the built-in content is used and the
/// failure is returned as a non-fatal error for the caller to surface.
///
/// Only a broken *built-in* file makes this fail, which is a packaging
/// defect rather than a user error.
pub fn load_portfolio(override_path: Option<&Path>) -> Result<(Portfolio, Vec<ContentError>)> {
    let mut errors = Vec::new();

    if let Some(path) = override_path {
        if path.is_file() {
            match load_user_portfolio(path) {
                Ok(portfolio) => {
                    tracing::info!(path = %path.display(), "User content override loaded");
                    return Ok((portfolio, errors));
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid user content");
                    errors.push(e);
                }
            }
        } else {
            tracing::debug!(
                path = %path.display(),
                "No user content file (using built-in content)"
            );
        }
    }

    let portfolio = content::load_builtin_portfolio()?;
    tracing::info!(
        boot_lines = portfolio.boot.lines.len(),
        projects = portfolio.projects.len(),
        "Built-in content loaded"
    );
    Ok((portfolio, errors))
}

/// Read, parse, and validate a user content file.
fn load_user_portfolio(path: &Path) -> std::result::Result<Portfolio, ContentError> {
    let metadata = std::fs::metadata(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.len() > constants::MAX_CONTENT_FILE_SIZE {
        return Err(ContentError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_CONTENT_FILE_SIZE,
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let def = content::parse_portfolio_toml(&raw, path)?;
    content::validate(def)
}

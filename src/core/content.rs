// Folio - core/content.rs
//
// Portfolio content model: TOML definitions, validation, and the runtime
// `Portfolio` types the UI renders from.
// Core layer: accepts TOML strings, never touches the filesystem.
// I/O is handled by app::content_mgr which feeds content here.

use crate::util::constants;
use crate::util::error::ContentError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// TOML deserialization structures (raw input)
// =============================================================================

/// Raw TOML portfolio definition as deserialized from a .toml file.
/// This is validated into a `Portfolio` for runtime use.
#[derive(Debug, Deserialize)]
pub struct PortfolioDefinition {
    pub identity: IdentityDef,
    pub boot: BootScreenDef,
    #[serde(default)]
    pub links: Vec<SocialLinkDef>,
    #[serde(default)]
    pub metrics: Vec<MetricDef>,
    #[serde(default)]
    pub services: Vec<ServiceDef>,
    #[serde(default)]
    pub experience: Vec<RoleDef>,
    #[serde(default)]
    pub projects: Vec<ProjectDef>,
    #[serde(default)]
    pub skills: Vec<SkillGroupDef>,
}

#[derive(Debug, Deserialize)]
pub struct IdentityDef {
    pub name: String,
    #[serde(default)]
    pub accent: String,
    pub brand: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default = "default_resume_file_name")]
    pub resume_file_name: String,
}

fn default_resume_file_name() -> String {
    "resume.md".to_string()
}

#[derive(Debug, Deserialize)]
pub struct BootScreenDef {
    #[serde(default)]
    pub kicker: String,
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SocialLinkDef {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct MetricDef {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ServiceDef {
    #[serde(default)]
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct RoleDef {
    pub period: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectDef {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub era: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SkillGroupDef {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

// =============================================================================
// Runtime content model
// =============================================================================

/// Who the page is about.
#[derive(Debug, Clone)]
pub struct Identity {
    pub name: String,
    /// Substring of `name` rendered in the accent colour (may be empty).
    pub accent: String,
    /// Short brand mark shown in the navbar, boot screen, and footer.
    pub brand: String,
    pub badge: String,
    pub tagline: String,
    pub summary: String,
    pub resume_url: String,
    pub resume_file_name: String,
}

/// Boot screen branding and the fixed log sequence it reveals.
#[derive(Debug, Clone)]
pub struct BootScreen {
    pub kicker: String,
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct Role {
    pub period: String,
    pub title: String,
    pub company: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub era: String,
    pub description: String,
    pub features: Vec<String>,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

/// Validated portfolio content, ready to render.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub identity: Identity,
    pub boot: BootScreen,
    pub links: Vec<SocialLink>,
    pub metrics: Vec<Metric>,
    pub services: Vec<Service>,
    pub experience: Vec<Role>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
}

// =============================================================================
// Parsing and validation
// =============================================================================

/// Built-in portfolio content, embedded in the binary.
const BUILTIN_PORTFOLIO_TOML: &str = include_str!("../../content/portfolio.toml");

/// Parse a TOML string into a raw portfolio definition.
pub fn parse_portfolio_toml(
    content: &str,
    path: &Path,
) -> Result<PortfolioDefinition, ContentError> {
    toml::from_str(content).map_err(|source| ContentError::TomlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Validate a raw definition into a renderable `Portfolio`.
///
/// Checks required fields, collection bounds, string lengths, and link URL
/// schemes. The first violation is returned; nothing is silently patched.
pub fn validate(def: PortfolioDefinition) -> Result<Portfolio, ContentError> {
    require("identity.name", &def.identity.name)?;
    require("identity.brand", &def.identity.brand)?;
    require("boot.title", &def.boot.title)?;

    if def.boot.lines.is_empty() {
        return Err(ContentError::MissingField {
            field: "boot.lines",
        });
    }
    bounded("boot.lines", def.boot.lines.len(), constants::MAX_BOOT_LINES)?;
    for line in &def.boot.lines {
        require("boot.lines", line)?;
        string_len("boot.lines", line)?;
    }

    if !def.identity.accent.is_empty() && !def.identity.name.contains(&def.identity.accent) {
        return Err(ContentError::Invalid {
            field: "identity.accent",
            reason: format!(
                "'{}' is not a substring of the name '{}'",
                def.identity.accent, def.identity.name
            ),
        });
    }
    string_len("identity.summary", &def.identity.summary)?;
    if !def.identity.resume_url.is_empty() {
        url_scheme("identity.resume_url", &def.identity.resume_url)?;
    }

    bounded("links", def.links.len(), constants::MAX_CONTENT_ITEMS)?;
    for link in &def.links {
        require("links.label", &link.label)?;
        url_scheme("links.url", &link.url)?;
    }

    bounded("metrics", def.metrics.len(), constants::MAX_CONTENT_ITEMS)?;
    bounded("services", def.services.len(), constants::MAX_CONTENT_ITEMS)?;
    bounded(
        "experience",
        def.experience.len(),
        constants::MAX_CONTENT_ITEMS,
    )?;
    bounded("projects", def.projects.len(), constants::MAX_CONTENT_ITEMS)?;
    bounded("skills", def.skills.len(), constants::MAX_CONTENT_ITEMS)?;

    for role in &def.experience {
        require("experience.title", &role.title)?;
        require("experience.company", &role.company)?;
        bounded(
            "experience.highlights",
            role.highlights.len(),
            constants::MAX_CONTENT_ITEMS,
        )?;
    }
    for project in &def.projects {
        require("projects.title", &project.title)?;
        string_len("projects.description", &project.description)?;
    }
    for group in &def.skills {
        require("skills.title", &group.title)?;
        bounded(
            "skills.items",
            group.items.len(),
            constants::MAX_CONTENT_ITEMS,
        )?;
    }

    Ok(Portfolio {
        identity: Identity {
            name: def.identity.name,
            accent: def.identity.accent,
            brand: def.identity.brand,
            badge: def.identity.badge,
            tagline: def.identity.tagline,
            summary: def.identity.summary,
            resume_url: def.identity.resume_url,
            resume_file_name: def.identity.resume_file_name,
        },
        boot: BootScreen {
            kicker: def.boot.kicker,
            title: def.boot.title,
            lines: def.boot.lines,
        },
        links: def
            .links
            .into_iter()
            .map(|l| SocialLink {
                label: l.label,
                url: l.url,
            })
            .collect(),
        metrics: def
            .metrics
            .into_iter()
            .map(|m| Metric {
                label: m.label,
                value: m.value,
            })
            .collect(),
        services: def
            .services
            .into_iter()
            .map(|s| Service {
                icon: s.icon,
                title: s.title,
                description: s.description,
            })
            .collect(),
        experience: def
            .experience
            .into_iter()
            .map(|r| Role {
                period: r.period,
                title: r.title,
                company: r.company,
                highlights: r.highlights,
            })
            .collect(),
        projects: def
            .projects
            .into_iter()
            .map(|p| Project {
                title: p.title,
                category: p.category,
                era: p.era,
                description: p.description,
                features: p.features,
                tech: p.tech,
            })
            .collect(),
        skills: def
            .skills
            .into_iter()
            .map(|g| SkillGroup {
                title: g.title,
                items: g.items,
            })
            .collect(),
    })
}

/// Load the built-in portfolio embedded in the binary.
///
/// An error here means the shipped `content/portfolio.toml` is broken,
/// which is a packaging defect; callers treat it as fatal.
pub fn load_builtin_portfolio() -> Result<Portfolio, ContentError> {
    let def = parse_portfolio_toml(
        BUILTIN_PORTFOLIO_TOML,
        &PathBuf::from("<builtin>/portfolio.toml"),
    )?;
    validate(def)
}

fn require(field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::MissingField { field })
    } else {
        Ok(())
    }
}

fn bounded(field: &'static str, count: usize, max: usize) -> Result<(), ContentError> {
    if count > max {
        Err(ContentError::TooManyItems { field, count, max })
    } else {
        Ok(())
    }
}

fn string_len(field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.chars().count() > constants::MAX_CONTENT_STRING_LEN {
        Err(ContentError::Invalid {
            field,
            reason: format!(
                "{} characters exceeds maximum of {}",
                value.chars().count(),
                constants::MAX_CONTENT_STRING_LEN
            ),
        })
    } else {
        Ok(())
    }
}

fn url_scheme(field: &'static str, url: &str) -> Result<(), ContentError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ContentError::Invalid {
            field,
            reason: format!("'{url}' must start with http:// or https://"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_TOML: &str = r#"
[identity]
name = "Ada Lovelace"
accent = "Lovelace"
brand = "ADA.DEV"

[boot]
title = "ADA.DEV_v1.0"
lines = ["Spinning up engines...", "Ready."]
"#;

    fn parse(toml: &str) -> Result<Portfolio, ContentError> {
        let def = parse_portfolio_toml(toml, &PathBuf::from("test.toml"))?;
        validate(def)
    }

    #[test]
    fn test_minimal_content_validates() {
        let portfolio = parse(MINIMAL_TOML).unwrap();
        assert_eq!(portfolio.identity.name, "Ada Lovelace");
        assert_eq!(portfolio.boot.lines.len(), 2);
        assert!(portfolio.projects.is_empty());
    }

    #[test]
    fn test_builtin_portfolio_loads() {
        let portfolio = load_builtin_portfolio().unwrap();
        assert!(!portfolio.identity.name.is_empty());
        assert!(!portfolio.boot.lines.is_empty());
        assert_eq!(portfolio.metrics.len(), 4);
        assert_eq!(portfolio.skills.len(), 4);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse("[identity\nname = ").unwrap_err();
        assert!(matches!(err, ContentError::TomlParse { .. }));
    }

    #[test]
    fn test_empty_boot_lines_rejected() {
        let toml = MINIMAL_TOML.replace(
            "lines = [\"Spinning up engines...\", \"Ready.\"]",
            "lines = []",
        );
        let err = parse(&toml).unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingField { field: "boot.lines" }
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let toml = MINIMAL_TOML.replace("name = \"Ada Lovelace\"", "name = \"   \"");
        let err = parse(&toml).unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingField {
                field: "identity.name"
            }
        ));
    }

    #[test]
    fn test_accent_must_be_substring_of_name() {
        let toml = MINIMAL_TOML.replace("accent = \"Lovelace\"", "accent = \"Byron\"");
        let err = parse(&toml).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Invalid {
                field: "identity.accent",
                ..
            }
        ));
    }

    #[test]
    fn test_link_without_http_scheme_rejected() {
        let toml = format!(
            "{MINIMAL_TOML}\n[[links]]\nlabel = \"Email\"\nurl = \"mailto:ada@example.org\"\n"
        );
        let err = parse(&toml).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Invalid {
                field: "links.url",
                ..
            }
        ));
    }

    #[test]
    fn test_too_many_boot_lines_rejected() {
        let lines: Vec<String> = (0..=crate::util::constants::MAX_BOOT_LINES)
            .map(|i| format!("\"line {i}\""))
            .collect();
        let toml = MINIMAL_TOML.replace(
            "lines = [\"Spinning up engines...\", \"Ready.\"]",
            &format!("lines = [{}]", lines.join(", ")),
        );
        let err = parse(&toml).unwrap_err();
        assert!(matches!(
            err,
            ContentError::TooManyItems {
                field: "boot.lines",
                ..
            }
        ));
    }
}

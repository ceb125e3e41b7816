//! CLI command handlers.
//!
//! Handlers write to any `io::Write` so tests can capture output. Errors go
//! back to `main` as `anyhow::Error` and end the process with a non-zero code.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use playbook_core::{Catalog, OverlayEvent, Page, PageController, PlaybookConfig};
use tracing::{debug, info};

use crate::cli::Commands;

/// Load a config file, or defaults when no path is given.
///
/// # Errors
/// Fails if the file cannot be read, is not valid config TOML, or names a
/// landing page the catalog does not have.
pub fn load_config(path: Option<&Path>) -> Result<PlaybookConfig> {
    let Some(path) = path else {
        debug!("no config file given, using defaults");
        return Ok(PlaybookConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = PlaybookConfig::from_toml_str(&text)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    config
        .validate(Catalog::builtin())
        .with_context(|| format!("Invalid landing page in {}", path.display()))?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Execute a CLI command.
///
/// This is the main command dispatcher that routes to the appropriate handler.
pub fn execute_command(
    command: Commands,
    config: &PlaybookConfig,
    out: &mut impl Write,
) -> Result<()> {
    let catalog = Catalog::builtin();
    match command {
        Commands::List => cmd_list(catalog, out),
        Commands::Show { slug, tab } => cmd_show(catalog, config, &slug, tab.as_deref(), out),
        Commands::Validate => cmd_validate(catalog, config, out),
        Commands::Export { slug, pretty } => cmd_export(catalog, &slug, pretty, out),
        Commands::Replay { slug, events } => cmd_replay(catalog, config, &slug, &events, out),
    }
}

fn page<'a>(catalog: &'a Catalog, slug: &str) -> Result<&'a Page> {
    catalog
        .page(slug)
        .with_context(|| format!("No playbook named '{slug}'"))
}

fn cmd_list(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    for page in catalog.pages() {
        writeln!(
            out,
            "{:<20} {} ({} tabs, {} topics)",
            page.slug,
            page.title,
            page.tabs.len(),
            page.topics().count()
        )?;
    }
    Ok(())
}

fn cmd_show(
    catalog: &Catalog,
    config: &PlaybookConfig,
    slug: &str,
    tab: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let page = page(catalog, slug)?;
    let tabs = match tab {
        Some(id) => vec![page.resolve_tab(id, config.lookup_policy)?],
        None => page.tabs.iter().collect(),
    };

    writeln!(out, "{}", page.title)?;
    writeln!(out, "{}", page.tagline)?;
    for tab in tabs {
        writeln!(out)?;
        writeln!(out, "[{}] {} {}", tab.id, tab.icon, tab.label)?;
        for topic in &tab.topics {
            writeln!(
                out,
                "  {:<22} {} {} ({}, {} sections)",
                topic.id,
                topic.icon,
                topic.title,
                topic.color,
                topic.overlay.sections.len()
            )?;
        }
    }
    Ok(())
}

fn cmd_validate(catalog: &Catalog, config: &PlaybookConfig, out: &mut impl Write) -> Result<()> {
    catalog.validate().context("Built-in catalog is invalid")?;
    config
        .validate(catalog)
        .context("Config does not match the catalog")?;
    writeln!(
        out,
        "ok: {} pages, {} topics, theme {}, lookup policy {:?}",
        catalog.pages().len(),
        catalog.topic_count(),
        config.theme,
        config.lookup_policy
    )?;
    Ok(())
}

fn cmd_export(catalog: &Catalog, slug: &str, pretty: bool, out: &mut impl Write) -> Result<()> {
    let page = page(catalog, slug)?;
    let json = if pretty {
        serde_json::to_string_pretty(page)
    } else {
        serde_json::to_string(page)
    }
    .context("Failed to serialize page")?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// One step of a replay script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayEvent {
    SelectTab(String),
    Overlay(OverlayEvent),
}

impl FromStr for ReplayEvent {
    type Err = anyhow::Error;

    fn from_str(token: &str) -> Result<Self> {
        let event = match token.split_once(':') {
            Some(("tab", id)) if !id.is_empty() => Self::SelectTab(id.to_string()),
            Some(("open", id)) if !id.is_empty() => Self::Overlay(OverlayEvent::Open(id.to_string())),
            None => match token {
                "close" => Self::Overlay(OverlayEvent::CloseButton),
                "backdrop" => Self::Overlay(OverlayEvent::BackdropClicked),
                "panel" => Self::Overlay(OverlayEvent::PanelClicked),
                "escape" => Self::Overlay(OverlayEvent::EscapePressed),
                _ => bail!("Unknown event '{token}'"),
            },
            Some(_) => bail!("Unknown event '{token}'"),
        };
        Ok(event)
    }
}

impl fmt::Display for ReplayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectTab(id) => write!(f, "tab:{id}"),
            Self::Overlay(OverlayEvent::Open(id)) => write!(f, "open:{id}"),
            Self::Overlay(OverlayEvent::CloseButton) => f.write_str("close"),
            Self::Overlay(OverlayEvent::BackdropClicked) => f.write_str("backdrop"),
            Self::Overlay(OverlayEvent::PanelClicked) => f.write_str("panel"),
            Self::Overlay(OverlayEvent::EscapePressed) => f.write_str("escape"),
        }
    }
}

fn cmd_replay(
    catalog: &Catalog,
    config: &PlaybookConfig,
    slug: &str,
    tokens: &[String],
    out: &mut impl Write,
) -> Result<()> {
    let page = page(catalog, slug)?;
    let events = tokens
        .iter()
        .map(|token| token.parse::<ReplayEvent>())
        .collect::<Result<Vec<_>>>()?;

    let mut controller = PageController::for_page(page)?
        .with_policy(config.lookup_policy)
        .with_close_on_escape(config.close_on_escape);

    for event in events {
        let outcome = match &event {
            ReplayEvent::SelectTab(id) => match controller.select_tab(id) {
                Ok(()) => format!("active tab {}", controller.active_tab()),
                Err(e) => format!("rejected: {e}"),
            },
            ReplayEvent::Overlay(overlay) => controller.apply(overlay.clone()).to_string(),
        };
        let step = event.to_string();
        writeln!(out, "{step:<28} -> {outcome}")?;
    }

    writeln!(
        out,
        "final: tab {}, overlay {}",
        controller.active_tab(),
        controller.active_overlay().unwrap_or("closed")
    )?;
    Ok(())
}

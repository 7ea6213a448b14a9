//! Brochure - a single-page site viewer for the terminal
//!
//! Renders a page definition as a scrollable document with:
//! - A fixed navbar that restyles once the page scrolls
//! - Anchor links that glide to their section
//! - Active-link highlighting that follows the viewport
//! - Sections that reveal as they scroll into view
//! - A contact form with a timed acknowledgment

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use brochure_core::page::PageDef;
use brochure_core::paths;

mod tui;

/// Page shipped with the binary, used when no --page is given
const DEFAULT_PAGE: &str = include_str!("../pages/default.toml");

/// Brochure - single-page site viewer
#[derive(Parser)]
#[command(name = "brochure")]
#[command(about = "View a single-page site in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page definition file (TOML); defaults to the built-in page
    #[arg(short, long)]
    page: Option<String>,

    /// Theme name
    #[arg(short, long, default_value = "brochure")]
    theme: String,
}

#[derive(Subcommand)]
enum Commands {
    /// View a page (the default when no command is given)
    View,

    /// List available themes
    Themes,

    /// Validate a page definition without opening the viewer
    Check { page: String },
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

fn load_page(path: Option<&str>) -> Result<PageDef> {
    match path {
        Some(path) => {
            PageDef::load(Path::new(path)).with_context(|| format!("Failed to load page {path}"))
        }
        None => PageDef::from_toml_str(DEFAULT_PAGE).context("Built-in page is invalid"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    // Initialize logging to file (not stdout/stderr which would mess up TUI)
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    // Create null device path based on platform
    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = std::fs::File::create(log_dir.join("brochure.log"))
        .unwrap_or_else(|_| std::fs::File::create(null_device).unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let theme = tui::THEME_REGISTRY.get_or_default(&cli.theme);
    tracing::info!("Using theme: {} ({})", theme.display_name, theme.name);

    match cli.command {
        Some(Commands::Themes) => {
            for (name, theme) in tui::THEME_REGISTRY.list() {
                println!("  {} - {}", name, theme.display_name);
            }
        }
        Some(Commands::Check { page }) => {
            let page = load_page(Some(&page))?;
            println!("Page OK: {}", page.title);
            println!("  {} nav link(s)", page.nav_links.len());
            let form_section = page.form.as_ref().map(|f| f.section.as_str());
            for section in &page.sections {
                let marks = match (section.reveal, form_section == Some(section.id.as_str())) {
                    (true, true) => " [reveal, form]",
                    (true, false) => " [reveal]",
                    (false, true) => " [form]",
                    (false, false) => "",
                };
                println!("  #{} - {}{}", section.id, section.title, marks);
            }
        }
        Some(Commands::View) | None => {
            let page = load_page(cli.page.as_deref())?;
            tracing::info!(title = %page.title, sections = page.sections.len(), "Opening page");
            let mut app = tui::App::new(page, Arc::new(theme.clone()));
            app.run().await?;
        }
    }

    Ok(())
}

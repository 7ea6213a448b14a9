//! Color themes for the TUI

mod definitions;
mod registry;

pub use registry::ThemeRegistry;

use once_cell::sync::Lazy;
use ratatui::style::Color;

/// Global theme registry
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// A complete color theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,

    // Base
    pub bg_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub accent_color: Color,
    pub success_color: Color,

    // Navbar
    pub navbar_bg_color: Color,
    pub navbar_scrolled_bg_color: Color,
    pub active_link_color: Color,

    // Chrome
    pub border_color: Color,
    pub scrollbar_bg_color: Color,
    pub status_bar_bg_color: Color,
}

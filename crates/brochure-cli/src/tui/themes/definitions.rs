//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Default dark theme
pub fn brochure() -> Theme {
    Theme {
        name: "brochure".into(),
        display_name: "Brochure".into(),
        bg_color: Color::Rgb(18, 18, 24),
        text_color: Color::Rgb(220, 220, 228),
        dim_color: Color::Rgb(110, 110, 125),
        accent_color: Color::Rgb(122, 162, 247),
        success_color: Color::Rgb(120, 200, 120),
        navbar_bg_color: Color::Rgb(18, 18, 24),
        navbar_scrolled_bg_color: Color::Rgb(35, 38, 52),
        active_link_color: Color::Rgb(255, 200, 100),
        border_color: Color::Rgb(60, 62, 80),
        scrollbar_bg_color: Color::Rgb(40, 42, 56),
        status_bar_bg_color: Color::Rgb(28, 30, 40),
    }
}

/// Deep blue night theme
pub fn midnight() -> Theme {
    Theme {
        name: "midnight".into(),
        display_name: "Midnight".into(),
        bg_color: Color::Rgb(13, 17, 30),
        text_color: Color::Rgb(200, 210, 235),
        dim_color: Color::Rgb(90, 100, 130),
        accent_color: Color::Rgb(97, 175, 239),
        success_color: Color::Rgb(95, 190, 140),
        navbar_bg_color: Color::Rgb(13, 17, 30),
        navbar_scrolled_bg_color: Color::Rgb(25, 32, 55),
        active_link_color: Color::Rgb(229, 192, 123),
        border_color: Color::Rgb(45, 55, 85),
        scrollbar_bg_color: Color::Rgb(30, 38, 62),
        status_bar_bg_color: Color::Rgb(20, 26, 45),
    }
}

/// Light theme for bright terminals
pub fn paper() -> Theme {
    Theme {
        name: "paper".into(),
        display_name: "Paper".into(),
        bg_color: Color::Rgb(250, 248, 242),
        text_color: Color::Rgb(55, 50, 45),
        dim_color: Color::Rgb(150, 145, 135),
        accent_color: Color::Rgb(25, 95, 170),
        success_color: Color::Rgb(40, 140, 70),
        navbar_bg_color: Color::Rgb(250, 248, 242),
        navbar_scrolled_bg_color: Color::Rgb(235, 230, 218),
        active_link_color: Color::Rgb(180, 95, 10),
        border_color: Color::Rgb(200, 195, 185),
        scrollbar_bg_color: Color::Rgb(225, 220, 210),
        status_bar_bg_color: Color::Rgb(238, 234, 225),
    }
}

/// Native terminal colors, no RGB assumptions
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".into(),
        display_name: "Terminal".into(),
        bg_color: Color::Reset,
        text_color: Color::Reset,
        dim_color: Color::DarkGray,
        accent_color: Color::Blue,
        success_color: Color::Green,
        navbar_bg_color: Color::Reset,
        navbar_scrolled_bg_color: Color::DarkGray,
        active_link_color: Color::Yellow,
        border_color: Color::DarkGray,
        scrollbar_bg_color: Color::DarkGray,
        status_bar_bg_color: Color::Reset,
    }
}

//! Navbar component - fixed bar overlaying the top of the page
//!
//! Shows the site title on the left and the nav links on the right. The
//! scrolled mode swaps the background and brightens the bottom rule, the
//! terminal equivalent of the condensed bar a site shows once you leave
//! the fold.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use brochure_core::nav::NavModel;
use brochure_core::scroll::NavbarMode;

use crate::tui::app::Focus;
use crate::tui::state::LayoutState;
use crate::tui::themes::Theme;

/// Navbar height in rows: padding, content, bottom rule
pub const NAVBAR_HEIGHT: u16 = 3;

/// Render the navbar over the top rows of the content area
pub fn render_navbar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    mode: NavbarMode,
    title: &str,
    nav: &NavModel,
    focus: &Focus,
    layout: &mut LayoutState,
) {
    if area.height < NAVBAR_HEIGHT {
        return;
    }
    let buf = f.buffer_mut();

    let bg = match mode {
        NavbarMode::Default => theme.navbar_bg_color,
        NavbarMode::Scrolled => theme.navbar_scrolled_bg_color,
    };

    // Fill the bar
    for y in area.y..area.y + NAVBAR_HEIGHT - 1 {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ');
                cell.set_bg(bg);
            }
        }
    }

    // Bottom rule, brightened in scrolled mode
    let rule_y = area.y + NAVBAR_HEIGHT - 1;
    let rule_color = match mode {
        NavbarMode::Default => theme.border_color,
        NavbarMode::Scrolled => theme.accent_color,
    };
    for x in area.x..area.x + area.width {
        if let Some(cell) = buf.cell_mut((x, rule_y)) {
            cell.set_char('─').set_fg(rule_color).set_bg(bg);
        }
    }

    let content_y = area.y + 1;

    // Site title on the left
    let title_style = Style::default()
        .fg(theme.accent_color)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    buf.set_stringn(
        area.x + 1,
        content_y,
        title,
        area.width.saturating_sub(2) as usize,
        title_style,
    );

    // Links right-aligned, rects recorded for hit testing
    layout.nav_link_areas.clear();
    let total_width: u16 = nav
        .links()
        .iter()
        .map(|link| link.label.width() as u16 + 3)
        .sum();
    let mut x = area
        .x
        .saturating_add(area.width.saturating_sub(total_width + 1));

    for (i, link) in nav.links().iter().enumerate() {
        let label = format!(" {} ", link.label);
        let w = label.width() as u16;

        let mut style = Style::default().fg(theme.dim_color).bg(bg);
        if link.active {
            style = Style::default()
                .fg(theme.active_link_color)
                .bg(bg)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        if *focus == Focus::NavLink(i) {
            style = style.add_modifier(Modifier::REVERSED);
        }

        buf.set_stringn(x, content_y, &label, w as usize, style);
        layout
            .nav_link_areas
            .push(Rect::new(x, content_y, w, 1));
        x = x.saturating_add(w + 1);
    }

    layout.navbar_area = Some(Rect::new(area.x, area.y, area.width, NAVBAR_HEIGHT));
}

//! Status bar component - bottom bar with page info and key hints

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Longest section title shown before truncation
const MAX_SECTION_WIDTH: usize = 24;

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    page_title: &str,
    current_section: Option<&str>,
    scroll_percent: u8,
) {
    // Background
    let bg = Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color));
    f.render_widget(bg, area);

    let mut left_spans = vec![
        Span::raw(" "),
        Span::styled(page_title.to_string(), Style::default().fg(theme.dim_color)),
    ];
    let mut left_width: u16 = 1 + page_title.width() as u16;

    if let Some(section) = current_section {
        let section = truncate_ellipsis(section, MAX_SECTION_WIDTH);
        left_spans.push(Span::styled(" │ ", Style::default().fg(theme.dim_color)));
        left_width += 3 + section.width() as u16;
        left_spans.push(Span::styled(
            section,
            Style::default().fg(theme.accent_color),
        ));
    }

    let pct_text = format!("{}%", scroll_percent);
    left_spans.push(Span::styled(" │ ", Style::default().fg(theme.dim_color)));
    left_spans.push(Span::styled(
        format!("{:>4}", pct_text),
        Style::default().fg(theme.dim_color),
    ));
    left_width += 3 + 4;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(left_width), Constraint::Fill(1)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(left_spans)), chunks[0]);

    let available_width = chunks[1].width as usize;
    let hints = build_hints_for_width(available_width, theme);
    f.render_widget(
        Paragraph::new(Line::from(hints)).alignment(Alignment::Right),
        chunks[1],
    );
}

/// Build key-hint spans based on available width
/// Priority (highest to lowest): quit, activate, focus, scroll
fn build_hints_for_width<'a>(width: usize, theme: &Theme) -> Vec<Span<'a>> {
    // (key_text, desc_text, total width including spaces)
    let hints: [(&str, &str, usize); 4] = [
        (" q ", "quit ", 8), // highest priority
        (" ↵ ", "activate ", 12),
        (" Tab ", "focus ", 11),
        (" ↕ ", "scroll ", 10), // lowest priority
    ];

    let mut spans = Vec::new();
    let mut used_width = 0;

    for (key, desc, hint_width) in hints {
        if used_width + hint_width <= width {
            // Insert at the beginning so lower priority ends up on the left
            let insert_pos = spans.len();
            spans.insert(
                insert_pos,
                Span::styled(
                    key.to_string(),
                    Style::default().bg(theme.border_color).fg(theme.text_color),
                ),
            );
            spans.insert(
                insert_pos + 1,
                Span::styled(desc.to_string(), Style::default().fg(theme.dim_color)),
            );
            used_width += hint_width;
        }
    }

    spans
}

//! Page view - builds and renders the scrollable page
//!
//! `build_page` walks the page definition once per frame, producing the
//! full list of styled lines plus the section geometry derived from the
//! very same pass. Deriving `PageLayout` from the built lines (rather
//! than a separate measure pass) is what keeps scroll math and rendering
//! in agreement.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use brochure_core::form::ContactForm;
use brochure_core::page::{PageDef, PageLayout};
use brochure_core::reveal::RevealSet;

use crate::tui::app::Focus;
use crate::tui::components::contact_form::build_form_lines;
use crate::tui::themes::Theme;
use crate::tui::utils::wrap_text;

/// Horizontal slide distance (columns) at the start of a reveal
const REVEAL_SLIDE: f32 = 6.0;

/// Absolute line indices of the page's interactive rows
#[derive(Debug, Default)]
pub struct PageChrome {
    pub field_rows: Vec<usize>,
    pub submit_row: Option<usize>,
}

/// Build the whole page: styled lines, section bands, interactive rows
#[allow(clippy::too_many_arguments)]
pub fn build_page(
    page: &PageDef,
    form: Option<&ContactForm>,
    reveals: &RevealSet,
    now: Instant,
    width: u16,
    leading_pad: usize,
    theme: &Theme,
    focus: &Focus,
) -> (Vec<Line<'static>>, PageLayout, PageChrome) {
    // 2-col margins each side plus the scrollbar column
    let text_width = width.saturating_sub(5) as usize;

    let mut all: Vec<Line<'static>> = Vec::new();
    let mut heights: Vec<(String, usize)> = Vec::new();
    let mut chrome = PageChrome::default();

    for (si, section) in page.sections.iter().enumerate() {
        let section_top = all.len();
        let mut lines: Vec<Line<'static>> = Vec::new();

        if si == 0 {
            // Hero padding so the first heading clears the navbar overlay
            for _ in 0..leading_pad {
                lines.push(Line::default());
            }
            if let Some(tagline) = &page.tagline {
                for wrapped in wrap_text(tagline, text_width) {
                    lines.push(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(
                            wrapped,
                            Style::default()
                                .fg(theme.dim_color)
                                .add_modifier(Modifier::ITALIC),
                        ),
                    ]));
                }
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("▌ ", Style::default().fg(theme.accent_color)),
            Span::styled(
                section.title.clone(),
                Style::default()
                    .fg(theme.text_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::default());

        for para in &section.body {
            for wrapped in wrap_text(para, text_width) {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(wrapped, Style::default().fg(theme.text_color)),
                ]));
            }
            lines.push(Line::default());
        }

        if let Some(form) = form {
            if form.section_id == section.id {
                let base = lines.len();
                let (form_lines, rows) = build_form_lines(form, theme, focus);
                chrome.field_rows = rows
                    .field_rows
                    .iter()
                    .map(|row| section_top + base + row)
                    .collect();
                chrome.submit_row = Some(section_top + base + rows.submit_row);
                lines.extend(form_lines);
            }
        }

        if section.reveal {
            apply_reveal(&mut lines, reveals.progress(&section.id, now), theme);
        }

        heights.push((section.id.clone(), lines.len()));
        all.extend(lines);
    }

    (all, PageLayout::stack(heights), chrome)
}

/// Render the visible slice of the page
pub fn render_page(
    f: &mut Frame,
    area: Rect,
    lines: &[Line<'static>],
    offset: usize,
    theme: &Theme,
) {
    let start = offset.min(lines.len());
    let end = (offset + area.height as usize).min(lines.len());
    let visible: Vec<Line<'static>> = lines[start..end].to_vec();

    f.render_widget(
        Paragraph::new(visible).style(Style::default().bg(theme.bg_color)),
        area,
    );
}

/// Restyle a hidden or mid-transition section
///
/// Fully hidden content renders as blank rows of the same height, so the
/// page never reflows; mid-transition content slides in from the right
/// while fading from the background color to its final colors.
fn apply_reveal(lines: &mut [Line<'static>], progress: f32, theme: &Theme) {
    if progress >= 1.0 {
        return;
    }
    if progress <= 0.0 {
        for line in lines.iter_mut() {
            *line = Line::default();
        }
        return;
    }

    let indent = ((1.0 - progress) * REVEAL_SLIDE).round() as usize;
    for line in lines.iter_mut() {
        if line.spans.is_empty() {
            continue;
        }
        let mut spans: Vec<Span<'static>> = Vec::with_capacity(line.spans.len() + 1);
        spans.push(Span::raw(" ".repeat(indent)));
        for span in std::mem::take(&mut line.spans) {
            let style = match span.style.fg {
                Some(fg) => span.style.fg(fade_color(theme.bg_color, fg, progress)),
                None => span.style,
            };
            spans.push(Span::styled(span.content, style));
        }
        *line = Line::from(spans);
    }
}

/// Interpolate between two colors; non-RGB colors snap at the midpoint
fn fade_color(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let lerp = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t) as u8;
            Color::Rgb(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
        }
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

//! Contact form rendering
//!
//! Renders inside its host section: one row per field, then the submit
//! control. The submit control reflects the acknowledgment state: while
//! confirming it shows the confirmation label in the success color.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use brochure_core::form::ContactForm;

use crate::tui::app::Focus;
use crate::tui::themes::Theme;

/// Row offsets of interactive elements, relative to the form's first line
pub struct FormRows {
    pub field_rows: Vec<usize>,
    pub submit_row: usize,
}

/// Rows the form occupies: leading blank, fields, blank, submit, trailing blank
pub fn form_height(form: &ContactForm) -> usize {
    form.field_count() + 4
}

/// Build the form's lines. Length always equals `form_height`.
pub fn build_form_lines(
    form: &ContactForm,
    theme: &Theme,
    focus: &Focus,
) -> (Vec<Line<'static>>, FormRows) {
    let mut lines: Vec<Line<'static>> = Vec::with_capacity(form_height(form));
    let mut field_rows = Vec::with_capacity(form.field_count());

    let label_width = form
        .fields()
        .iter()
        .map(|f| f.label.width())
        .max()
        .unwrap_or(0);

    lines.push(Line::default());

    for (i, field) in form.fields().iter().enumerate() {
        let focused = *focus == Focus::Field(i);
        let label_style = if focused {
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim_color)
        };

        let mut spans = vec![
            Span::raw("  "),
            Span::styled(format!("{:<label_width$}", field.label), label_style),
            Span::styled(" ▏", Style::default().fg(theme.border_color)),
            Span::styled(field.value.clone(), Style::default().fg(theme.text_color)),
        ];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(theme.accent_color)));
        }

        field_rows.push(lines.len());
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());

    // Submit control
    let confirming = form.is_confirming();
    let mut submit_style = if confirming {
        Style::default()
            .fg(theme.success_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent_color)
    };
    if *focus == Focus::Submit {
        submit_style = submit_style.add_modifier(Modifier::REVERSED);
    }

    let submit_row = lines.len();
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("[ {} ]", form.submit_label()), submit_style),
    ]));

    lines.push(Line::default());

    (lines, FormRows {
        field_rows,
        submit_row,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use brochure_core::page::FormDef;

    fn form() -> ContactForm {
        ContactForm::from_def(&FormDef {
            section: "contact".into(),
            fields: vec!["Name".into(), "Email".into()],
            submit_label: "Send".into(),
            confirm_label: "Sent ✓".into(),
        })
    }

    #[test]
    fn test_line_count_matches_height() {
        let form = form();
        let theme = crate::tui::themes::THEME_REGISTRY.get_or_default("brochure");
        let (lines, rows) = build_form_lines(&form, theme, &Focus::Page);
        assert_eq!(lines.len(), form_height(&form));
        assert_eq!(rows.field_rows.len(), 2);
        assert!(rows.submit_row < lines.len());
    }
}

//! Keyboard event handling

use crossterm::event::{KeyCode, KeyModifiers};

use crate::tui::app::{App, Focus};

impl App {
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // Ctrl+C always quits, focus or not
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // A focused form field captures text input
        if let Focus::Field(index) = self.focus {
            if self.handle_field_key(index, code) {
                return;
            }
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.focus = Focus::Page,

            KeyCode::Up => self.scroll_up_by(1),
            KeyCode::Down => self.scroll_down_by(1),
            KeyCode::PageUp => self.scroll_up_by(self.page_step()),
            KeyCode::PageDown => self.scroll_down_by(self.page_step()),
            KeyCode::Home => {
                self.glide.cancel();
                self.scroll.scroll_to_top();
            }
            KeyCode::End => {
                self.glide.cancel();
                self.scroll.scroll_to_end();
            }

            KeyCode::Tab => self.cycle_focus(1),
            KeyCode::BackTab => self.cycle_focus(-1),

            KeyCode::Enter => match self.focus {
                Focus::NavLink(index) => self.activate_link(index),
                Focus::Submit => self.submit_form(),
                Focus::Page | Focus::Field(_) => {}
            },

            _ => {}
        }
    }

    /// Text editing for a focused field. Returns true if the key was
    /// consumed.
    fn handle_field_key(&mut self, index: usize, code: KeyCode) -> bool {
        let Some(form) = &mut self.form else {
            return false;
        };
        match code {
            KeyCode::Char(c) => {
                if let Some(value) = form.field_value_mut(index) {
                    value.push(c);
                }
                true
            }
            KeyCode::Backspace => {
                if let Some(value) = form.field_value_mut(index) {
                    value.pop();
                }
                true
            }
            KeyCode::Enter => {
                // Enter advances toward the submit control
                self.cycle_focus(1);
                true
            }
            _ => false,
        }
    }

    /// Rows a PageUp/PageDown covers: a viewport minus a little overlap
    fn page_step(&self) -> usize {
        self.scroll.viewport_height.saturating_sub(3).max(1)
    }

    /// Move focus through: page, nav links, form fields, submit
    fn cycle_focus(&mut self, direction: i32) {
        let order = self.focus_order();
        let current = order
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0) as i32;
        let len = order.len() as i32;
        let next = (current + direction).rem_euclid(len);
        self.focus = order[next as usize];
    }

    fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Page];
        for i in 0..self.nav.len() {
            order.push(Focus::NavLink(i));
        }
        if let Some(form) = &self.form {
            for i in 0..form.field_count() {
                order.push(Focus::Field(i));
            }
            order.push(Focus::Submit);
        }
        order
    }
}

//! Mouse event handling
//!
//! Hit testing runs against the rects cached during the last render, so
//! a click lands on whatever was actually on screen.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::tui::app::{App, Focus};

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_down_by(3),
            MouseEventKind::ScrollUp => self.scroll_up_by(3),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(Position::new(mouse.column, mouse.row));
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, pos: Position) {
        // Nav links first: they overlay everything beneath them
        let nav_hit = self
            .layout
            .nav_link_areas
            .iter()
            .position(|rect| rect.contains(pos));
        if let Some(index) = nav_hit {
            self.focus = Focus::NavLink(index);
            self.activate_link(index);
            return;
        }

        let field_hit = self
            .layout
            .field_areas
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(index, _)| *index);
        if let Some(index) = field_hit {
            self.focus = Focus::Field(index);
            return;
        }

        if self
            .layout
            .submit_area
            .is_some_and(|rect| rect.contains(pos))
        {
            self.focus = Focus::Submit;
            self.submit_form();
            return;
        }

        self.focus = Focus::Page;
    }
}

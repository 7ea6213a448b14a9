//! Main TUI application
//!
//! Core application state and event loop.
//! Input handlers and per-tick synchronization live in the handlers/ module.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};

use brochure_core::constants::{REVEAL_DURATION, REVEAL_VISIBILITY};
use brochure_core::form::ContactForm;
use brochure_core::nav::NavModel;
use brochure_core::page::{PageDef, PageLayout};
use brochure_core::reveal::RevealSet;
use brochure_core::scroll::{
    ActiveSectionTracker, AnchorNavigator, NavbarStyle, ScrollState, SmoothScroll,
};

use crate::tui::components::navbar::{render_navbar, NAVBAR_HEIGHT};
use crate::tui::components::page_view::{build_page, render_page, PageChrome};
use crate::tui::components::scrollbar::render_scrollbar;
use crate::tui::components::status_bar::render_status_bar;
use crate::tui::state::LayoutState;
use crate::tui::themes::Theme;

/// Navbar scroll threshold in rows (the web contract's 50 px, at cell
/// granularity: just past the hero padding)
pub(crate) const NAVBAR_SCROLL_THRESHOLD_ROWS: usize = 2;

/// Look-ahead margin of the section tracker, in rows
pub(crate) const LOOKAHEAD_ROWS: usize = 2;

/// Early-trigger margin for reveals, in rows
pub(crate) const REVEAL_MARGIN_ROWS: usize = 3;

/// Which control currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// No control focused; keys scroll the page
    Page,
    NavLink(usize),
    Field(usize),
    Submit,
}

/// Application state
pub struct App {
    pub theme: Arc<Theme>,
    pub page: PageDef,

    // Page-interaction state (brochure-core)
    pub nav: NavModel,
    pub scroll: ScrollState,
    pub navbar_style: NavbarStyle,
    pub tracker: ActiveSectionTracker,
    pub anchor: AnchorNavigator,
    pub glide: SmoothScroll,
    pub reveals: RevealSet,
    pub form: Option<ContactForm>,

    // Frame-cached geometry
    pub layout: LayoutState,
    pub page_layout: PageLayout,
    pub chrome: PageChrome,

    pub focus: Focus,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(page: PageDef, theme: Arc<Theme>) -> Self {
        let nav = NavModel::from_defs(&page.nav_links);
        let form = page.form.as_ref().map(ContactForm::from_def);

        let mut reveals = RevealSet::new(REVEAL_VISIBILITY, REVEAL_MARGIN_ROWS, REVEAL_DURATION);
        for section in page.sections.iter().filter(|s| s.reveal) {
            reveals.register(section.id.clone());
        }

        let navbar_rows = NAVBAR_HEIGHT as usize;
        Self {
            theme,
            page,
            nav,
            scroll: ScrollState::new(),
            navbar_style: NavbarStyle::new(NAVBAR_SCROLL_THRESHOLD_ROWS),
            tracker: ActiveSectionTracker::new(navbar_rows, LOOKAHEAD_ROWS),
            anchor: AnchorNavigator::new(navbar_rows),
            glide: SmoothScroll::new(),
            reveals,
            form,
            layout: LayoutState::new(),
            page_layout: PageLayout::default(),
            chrome: PageChrome::default(),
            focus: Focus::Page,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Set up the terminal, run the event loop, restore the terminal
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        // Async event stream so ticks keep flowing while no input arrives
        let mut event_stream = EventStream::new();

        loop {
            // Advance animations and scroll-driven UI state
            if self.tick_ui(Instant::now()) {
                self.needs_redraw = true;
            }

            // Only render when something changed
            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased; // Prefer input over the frame tick when both are ready

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) => {
                                self.handle_key(key.code, key.modifiers);
                                self.needs_redraw = true;
                            }
                            Event::Mouse(mouse) => {
                                self.handle_mouse_event(mouse);
                                self.needs_redraw = true;
                            }
                            Event::Resize(_, _) => {
                                self.needs_redraw = true;
                            }
                            _ => {}
                        }
                    }
                }

                // ~60fps tick for glide, reveal, and acknowledgment timers
                () = tokio::time::sleep(Duration::from_millis(16)) => {}
            }

            if self.should_quit {
                tracing::info!("Quit requested");
                return Ok(());
            }
        }
    }

    /// Render one frame
    fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        if area.height < 2 {
            return;
        }
        let content = Rect::new(area.x, area.y, area.width, area.height - 1);
        let status = Rect::new(area.x, area.y + content.height, area.width, 1);

        self.layout.clear_frame();
        self.layout.content_area = Some(content);

        let now = Instant::now();
        let (lines, page_layout, chrome) = build_page(
            &self.page,
            self.form.as_ref(),
            &self.reveals,
            now,
            content.width,
            NAVBAR_HEIGHT as usize,
            &self.theme,
            &self.focus,
        );
        self.page_layout = page_layout;
        self.chrome = chrome;
        self.scroll.update_bounds(lines.len(), content.height as usize);

        render_page(f, content, &lines, self.scroll.offset, &self.theme);

        self.cache_chrome_rects(content);

        render_navbar(
            f,
            content,
            &self.theme,
            self.navbar_style.mode(),
            &self.page.title,
            &self.nav,
            &self.focus,
            &mut self.layout,
        );

        // Scrollbar along the right edge, below the navbar
        if content.height > NAVBAR_HEIGHT && content.width > 0 {
            let bar = Rect::new(
                content.x + content.width - 1,
                content.y + NAVBAR_HEIGHT,
                1,
                content.height - NAVBAR_HEIGHT,
            );
            render_scrollbar(
                f.buffer_mut(),
                bar,
                self.scroll.offset,
                lines.len(),
                content.height as usize,
                self.theme.accent_color,
                self.theme.scrollbar_bg_color,
            );
            self.layout.scrollbar_area = Some(bar);
        }

        let current_title = self
            .tracker
            .current_section(&self.page_layout, self.scroll.offset)
            .and_then(|id| self.page.section(id))
            .map(|s| s.title.as_str());

        render_status_bar(
            f,
            status,
            &self.theme,
            &self.page.title,
            current_title,
            self.scroll_percent(),
        );
    }

    /// Convert interactive line indices into screen rects for hit testing
    fn cache_chrome_rects(&mut self, content: Rect) {
        let offset = self.scroll.offset;
        let viewport = content.height as usize;

        let row_to_rect = |row: usize| -> Option<Rect> {
            if row < offset || row >= offset + viewport {
                return None;
            }
            let y = content.y + (row - offset) as u16;
            // Rows under the navbar overlay aren't clickable
            if y < content.y + NAVBAR_HEIGHT {
                return None;
            }
            Some(Rect::new(
                content.x + 2,
                y,
                content.width.saturating_sub(4),
                1,
            ))
        };

        self.layout.field_areas = self
            .chrome
            .field_rows
            .iter()
            .enumerate()
            .filter_map(|(i, &row)| row_to_rect(row).map(|rect| (i, rect)))
            .collect();
        self.layout.submit_area = self.chrome.submit_row.and_then(row_to_rect);
    }

    /// How far down the page the viewport sits, 0-100
    pub fn scroll_percent(&self) -> u8 {
        if self.scroll.max_scroll == 0 {
            100
        } else {
            ((self.scroll.offset * 100) / self.scroll.max_scroll).min(100) as u8
        }
    }
}

//! Per-tick UI state synchronization
//!
//! One pass per frame: advance the glide, re-evaluate the navbar mode,
//! sweep the section tracker, feed reveal observations, expire the form
//! acknowledgment. Each piece reads the scroll position; none of them
//! talk to each other.

use std::time::Instant;

use brochure_core::nav::NavTarget;

use crate::tui::app::App;
use crate::tui::components::navbar::NAVBAR_HEIGHT;

impl App {
    /// Advance all scroll-driven state. Returns true if anything changed
    /// and a redraw is needed.
    pub(crate) fn tick_ui(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.glide.tick(&mut self.scroll) {
            changed = true;
        }

        if self.navbar_style.update(self.scroll.offset) {
            changed = true;
        }

        // Active-link sweep, every tick (the page may have scrolled or
        // reflowed since the last one)
        let before = self.nav.active_index();
        self.tracker
            .sync(&self.page_layout, self.scroll.offset, &mut self.nav);
        if self.nav.active_index() != before {
            changed = true;
        }

        // Viewport-intersection observations for revealables. The navbar
        // overlays the top rows, so the visible band starts below it.
        let navbar_rows = NAVBAR_HEIGHT as usize;
        let viewport_top = self.scroll.offset + navbar_rows;
        let viewport_height = self.scroll.viewport_height.saturating_sub(navbar_rows);
        for band in self.page_layout.bands() {
            self.reveals
                .observe(&band.id, band, viewport_top, viewport_height, now);
        }
        if self.reveals.tick(now) {
            changed = true;
        }

        if let Some(form) = &mut self.form {
            if form.tick(now) {
                changed = true;
            }
        }

        changed
    }

    /// Manual scroll input: cancels a pending glide first
    pub(crate) fn scroll_up_by(&mut self, amount: usize) {
        self.glide.cancel();
        self.scroll.scroll_up(amount);
    }

    /// Manual scroll input: cancels a pending glide first
    pub(crate) fn scroll_down_by(&mut self, amount: usize) {
        self.glide.cancel();
        self.scroll.scroll_down(amount);
    }

    /// Activate a nav link: fragments glide in-page, anything else goes
    /// to the environment's default handler
    pub(crate) fn activate_link(&mut self, index: usize) {
        let Some(link) = self.nav.get(index) else {
            return;
        };
        match link.target.clone() {
            NavTarget::Fragment(fragment) => {
                match self.anchor.destination(&self.page_layout, &fragment) {
                    Some(dest) => {
                        tracing::debug!(fragment, dest, "Gliding to section");
                        self.glide.glide_to(&self.scroll, dest);
                    }
                    // Unknown fragment: silent no-op by contract
                    None => {
                        tracing::debug!(fragment, "No section for fragment");
                    }
                }
            }
            NavTarget::External(url) => {
                tracing::info!(url, "Opening external link");
                if let Err(e) = open::that(&url) {
                    tracing::warn!(error = %e, url, "Failed to open external link");
                }
            }
        }
    }

    /// Submit the contact form, if the page has one
    pub(crate) fn submit_form(&mut self) {
        if let Some(form) = &mut self.form {
            form.submit(Instant::now());
        }
    }
}

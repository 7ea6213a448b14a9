//! Active section tracking
//!
//! On every scroll tick, a reference point just below the navbar decides
//! which section is "current"; the matching nav link gets the single
//! active highlight.

use crate::constants::SECTION_LOOKAHEAD;
use crate::nav::NavModel;
use crate::page::PageLayout;

/// Maps scroll position to the current section
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    navbar_height: usize,
    look_ahead: usize,
}

impl ActiveSectionTracker {
    pub fn new(navbar_height: usize, look_ahead: usize) -> Self {
        Self {
            navbar_height,
            look_ahead,
        }
    }

    /// Build with the default look-ahead margin
    pub fn with_navbar_height(navbar_height: usize) -> Self {
        Self::new(navbar_height, SECTION_LOOKAHEAD)
    }

    /// The reference point for the given scroll offset
    pub fn reference_point(&self, offset: usize) -> usize {
        offset + self.navbar_height + self.look_ahead
    }

    /// Id of the section containing the reference point, if any
    ///
    /// First band in document order wins; a reference point beyond the
    /// last section (or before the first) yields None.
    pub fn current_section<'a>(&self, layout: &'a PageLayout, offset: usize) -> Option<&'a str> {
        layout
            .band_at(self.reference_point(offset))
            .map(|band| band.id.as_str())
    }

    /// One full update pass: clear every link, then highlight the one
    /// matching the current section
    pub fn sync(&self, layout: &PageLayout, offset: usize, nav: &mut NavModel) {
        nav.set_active_fragment(self.current_section(layout, offset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::SectionBand;

    fn three_sections() -> PageLayout {
        PageLayout::new(vec![
            SectionBand {
                id: "home".into(),
                top: 0,
                height: 300,
            },
            SectionBand {
                id: "features".into(),
                top: 300,
                height: 400,
            },
            SectionBand {
                id: "contact".into(),
                top: 700,
                height: 500,
            },
        ])
    }

    fn nav() -> NavModel {
        use crate::page::NavLinkDef;
        NavModel::from_defs(&[
            NavLinkDef {
                label: "Home".into(),
                target: "#home".into(),
            },
            NavLinkDef {
                label: "Features".into(),
                target: "#features".into(),
            },
            NavLinkDef {
                label: "Contact".into(),
                target: "#contact".into(),
            },
        ])
    }

    #[test]
    fn test_reference_point_selects_section() {
        // Navbar 80 + look-ahead 100: offset 250 -> reference 430,
        // inside [300, 700)
        let tracker = ActiveSectionTracker::new(80, 100);
        let layout = three_sections();
        assert_eq!(tracker.reference_point(250), 430);
        assert_eq!(tracker.current_section(&layout, 250), Some("features"));
    }

    #[test]
    fn test_beyond_last_section_clears_links() {
        let tracker = ActiveSectionTracker::new(80, 100);
        let layout = three_sections();
        let mut nav = nav();

        tracker.sync(&layout, 250, &mut nav);
        assert_eq!(nav.active_index(), Some(1));

        // Reference point past the end of the page
        tracker.sync(&layout, 2000, &mut nav);
        assert_eq!(nav.active_index(), None);
    }

    #[test]
    fn test_never_more_than_one_active() {
        let tracker = ActiveSectionTracker::new(80, 100);
        let layout = three_sections();
        let mut nav = nav();

        for offset in (0..1500).step_by(37) {
            tracker.sync(&layout, offset, &mut nav);
            let active = nav.links().iter().filter(|l| l.active).count();
            assert!(active <= 1, "offset {} produced {} active", offset, active);
        }
    }

    #[test]
    fn test_band_boundaries_are_half_open() {
        let tracker = ActiveSectionTracker::new(0, 0);
        let layout = three_sections();
        assert_eq!(tracker.current_section(&layout, 299), Some("home"));
        assert_eq!(tracker.current_section(&layout, 300), Some("features"));
    }
}

//! Section geometry
//!
//! The renderer's measure pass produces a `PageLayout`: one vertical band
//! per section, stacked top to bottom. Bands built through `stack` are
//! non-overlapping by construction; lookups take the first match in
//! document order, so even a hand-built overlapping layout resolves
//! deterministically.

/// A contiguous vertical band occupied by one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBand {
    pub id: String,
    /// Offset of the band's first line
    pub top: usize,
    /// Number of lines the band occupies
    pub height: usize,
}

impl SectionBand {
    /// Whether a point falls inside `[top, top + height)`
    pub fn contains(&self, point: usize) -> bool {
        point >= self.top && point < self.top + self.height
    }

    /// One past the band's last line
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }
}

/// Computed geometry for the whole page
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    bands: Vec<SectionBand>,
    total_height: usize,
}

impl PageLayout {
    /// Build a layout from pre-positioned bands
    pub fn new(bands: Vec<SectionBand>) -> Self {
        let total_height = bands.iter().map(SectionBand::bottom).max().unwrap_or(0);
        Self {
            bands,
            total_height,
        }
    }

    /// Build a layout by stacking `(id, height)` pairs top to bottom
    pub fn stack(heights: impl IntoIterator<Item = (String, usize)>) -> Self {
        let mut bands = Vec::new();
        let mut top = 0;
        for (id, height) in heights {
            bands.push(SectionBand { id, top, height });
            top += height;
        }
        Self {
            bands,
            total_height: top,
        }
    }

    /// The band containing a point, first match in document order
    pub fn band_at(&self, point: usize) -> Option<&SectionBand> {
        self.bands.iter().find(|band| band.contains(point))
    }

    /// Top offset of the section with the given id
    pub fn section_top(&self, id: &str) -> Option<usize> {
        self.bands
            .iter()
            .find(|band| band.id == id)
            .map(|band| band.top)
    }

    /// All bands in document order
    pub fn bands(&self) -> &[SectionBand] {
        &self.bands
    }

    /// Total page height in lines
    pub fn total_height(&self) -> usize {
        self.total_height
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(id: &str, top: usize, height: usize) -> SectionBand {
        SectionBand {
            id: id.into(),
            top,
            height,
        }
    }

    #[test]
    fn test_stack_is_contiguous() {
        let layout = PageLayout::stack([
            ("a".to_string(), 10),
            ("b".to_string(), 20),
            ("c".to_string(), 5),
        ]);
        assert_eq!(layout.section_top("a"), Some(0));
        assert_eq!(layout.section_top("b"), Some(10));
        assert_eq!(layout.section_top("c"), Some(30));
        assert_eq!(layout.total_height(), 35);
    }

    #[test]
    fn test_band_membership_boundaries() {
        let layout = PageLayout::stack([("a".to_string(), 10), ("b".to_string(), 10)]);
        // Half-open intervals: 9 is in "a", 10 is in "b"
        assert_eq!(layout.band_at(9).unwrap().id, "a");
        assert_eq!(layout.band_at(10).unwrap().id, "b");
        assert_eq!(layout.band_at(19).unwrap().id, "b");
        assert!(layout.band_at(20).is_none());
    }

    #[test]
    fn test_point_before_and_after_page() {
        let layout = PageLayout::new(vec![band("a", 5, 10)]);
        assert!(layout.band_at(4).is_none());
        assert!(layout.band_at(15).is_none());
    }

    #[test]
    fn test_overlap_resolves_to_first_in_order() {
        // Overlap is a geometry-assumption violation; lookup is still
        // deterministic: first band in document order wins.
        let layout = PageLayout::new(vec![band("a", 0, 20), band("b", 10, 20)]);
        assert_eq!(layout.band_at(15).unwrap().id, "a");
        assert_eq!(layout.band_at(25).unwrap().id, "b");
    }

    #[test]
    fn test_unknown_section_top() {
        let layout = PageLayout::stack([("a".to_string(), 10)]);
        assert_eq!(layout.section_top("missing"), None);
    }

    #[test]
    fn test_empty_layout() {
        let layout = PageLayout::default();
        assert!(layout.is_empty());
        assert!(layout.band_at(0).is_none());
        assert_eq!(layout.total_height(), 0);
    }
}

//! Reveal-on-view transitions
//!
//! Revealable content starts hidden (transparent, offset) and transitions
//! in the first time enough of it intersects the viewport. The transition
//! is one-way: once revealed, an element never hides again, no matter
//! what later geometry reports.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::constants::{REVEAL_DURATION, REVEAL_MARGIN, REVEAL_VISIBILITY};
use crate::page::SectionBand;

/// Per-element reveal state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealPhase {
    Hidden,
    Revealing { started: Instant },
    Revealed,
}

/// One revealable element
#[derive(Debug, Clone)]
pub struct Reveal {
    phase: RevealPhase,
}

impl Reveal {
    fn new() -> Self {
        Self {
            phase: RevealPhase::Hidden,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.phase, RevealPhase::Revealed)
    }
}

/// All revealable elements on the page, keyed by section id
#[derive(Debug, Clone)]
pub struct RevealSet {
    visibility: f32,
    margin: usize,
    duration: Duration,
    items: HashMap<String, Reveal>,
}

impl RevealSet {
    pub fn new(visibility: f32, margin: usize, duration: Duration) -> Self {
        Self {
            visibility,
            margin,
            duration,
            items: HashMap::new(),
        }
    }

    /// Register an element in its initial hidden state
    pub fn register(&mut self, id: impl Into<String>) {
        self.items.entry(id.into()).or_insert_with(Reveal::new);
    }

    /// Feed a viewport-intersection observation for one element
    ///
    /// The viewport is `[viewport_top, viewport_top + viewport_height)`,
    /// expanded by the early-trigger margin on both edges. Crossing the
    /// visibility threshold starts the transition; anything after that is
    /// ignored (no un-reveal, ever).
    pub fn observe(
        &mut self,
        id: &str,
        band: &SectionBand,
        viewport_top: usize,
        viewport_height: usize,
        now: Instant,
    ) {
        let Some(item) = self.items.get_mut(id) else {
            return;
        };
        if item.phase != RevealPhase::Hidden {
            return;
        }
        if band.height == 0 {
            return;
        }

        let view_top = viewport_top.saturating_sub(self.margin);
        let view_bottom = viewport_top + viewport_height + self.margin;

        let overlap_top = band.top.max(view_top);
        let overlap_bottom = band.bottom().min(view_bottom);
        let overlap = overlap_bottom.saturating_sub(overlap_top);

        let fraction = overlap as f32 / band.height as f32;
        if fraction >= self.visibility {
            item.phase = RevealPhase::Revealing { started: now };
            tracing::debug!(id, fraction, "Reveal triggered");
        }
    }

    /// Advance running transitions. Returns true while any element is
    /// still mid-transition (the caller should keep redrawing).
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut animating = false;
        for item in self.items.values_mut() {
            if let RevealPhase::Revealing { started } = item.phase {
                if now.duration_since(started) >= self.duration {
                    item.phase = RevealPhase::Revealed;
                } else {
                    animating = true;
                }
            }
        }
        animating
    }

    /// Eased transition progress in [0, 1] for an element
    ///
    /// Unregistered ids report 1.0: content that never opted into the
    /// reveal group renders normally.
    pub fn progress(&self, id: &str, now: Instant) -> f32 {
        match self.items.get(id).map(|item| item.phase) {
            None => 1.0,
            Some(RevealPhase::Hidden) => 0.0,
            Some(RevealPhase::Revealed) => 1.0,
            Some(RevealPhase::Revealing { started }) => {
                let t = now.duration_since(started).as_secs_f32() / self.duration.as_secs_f32();
                ease_out_cubic(t.clamp(0.0, 1.0))
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Reveal> {
        self.items.get(id)
    }
}

impl Default for RevealSet {
    fn default() -> Self {
        Self::new(REVEAL_VISIBILITY, REVEAL_MARGIN, REVEAL_DURATION)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(top: usize, height: usize) -> SectionBand {
        SectionBand {
            id: "hero".into(),
            top,
            height,
        }
    }

    fn set() -> RevealSet {
        let mut set = RevealSet::new(0.10, 50, Duration::from_millis(600));
        set.register("hero");
        set
    }

    #[test]
    fn test_hidden_until_intersecting() {
        let mut set = set();
        let now = Instant::now();
        // Band starts 500 below the viewport bottom: no trigger even
        // with the 50-unit margin
        set.observe("hero", &band(600, 100), 0, 50, now);
        assert_eq!(set.progress("hero", now), 0.0);
    }

    #[test]
    fn test_margin_triggers_early() {
        let mut set = set();
        let now = Instant::now();
        // Viewport is [0, 50); band at 60 is outside geometrically but
        // within the 50-unit early margin, and 40 of its 100 lines fall
        // inside the expanded viewport
        set.observe("hero", &band(60, 100), 0, 50, now);
        assert!(matches!(
            set.get("hero").unwrap().phase(),
            RevealPhase::Revealing { .. }
        ));
    }

    #[test]
    fn test_below_visibility_threshold_stays_hidden() {
        let mut set = RevealSet::new(0.10, 0, Duration::from_millis(600));
        set.register("hero");
        let now = Instant::now();
        // 5 of 100 lines visible: under the 10% threshold
        set.observe("hero", &band(95, 100), 0, 100, now);
        assert_eq!(set.progress("hero", now), 0.0);
    }

    #[test]
    fn test_transition_completes() {
        let mut set = set();
        let start = Instant::now();
        set.observe("hero", &band(0, 100), 0, 50, start);
        assert!(set.tick(start));

        let later = start + Duration::from_millis(700);
        assert!(!set.tick(later));
        assert!(set.get("hero").unwrap().is_revealed());
        assert_eq!(set.progress("hero", later), 1.0);
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mut set = set();
        let start = Instant::now();
        set.observe("hero", &band(0, 100), 0, 50, start);
        set.tick(start + Duration::from_secs(1));
        assert!(set.get("hero").unwrap().is_revealed());

        // Element scrolls far out of view; it stays revealed
        set.observe("hero", &band(0, 100), 5000, 50, start + Duration::from_secs(2));
        assert!(set.get("hero").unwrap().is_revealed());
    }

    #[test]
    fn test_progress_eases_monotonically() {
        let mut set = set();
        let start = Instant::now();
        set.observe("hero", &band(0, 100), 0, 50, start);

        let early = set.progress("hero", start + Duration::from_millis(100));
        let late = set.progress("hero", start + Duration::from_millis(400));
        assert!(early > 0.0 && early < late && late < 1.0);
    }

    #[test]
    fn test_unregistered_id_renders_normally() {
        let set = set();
        assert_eq!(set.progress("not-revealable", Instant::now()), 1.0);
    }
}

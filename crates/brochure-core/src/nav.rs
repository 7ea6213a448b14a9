//! Navigation model
//!
//! Nav links carry either an in-page fragment target or an external URL.
//! The model owns the single "active" highlight and guarantees at most one
//! link is active after any update pass.

use crate::page::NavLinkDef;

/// Where a navigation link points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// In-page fragment (`#features` -> `features`)
    Fragment(String),
    /// Anything else, handed to the environment's default behavior
    External(String),
}

impl NavTarget {
    /// Parse a target string from the page definition
    pub fn parse(target: &str) -> Self {
        match target.strip_prefix('#') {
            Some(fragment) => NavTarget::Fragment(fragment.to_string()),
            None => NavTarget::External(target.to_string()),
        }
    }

    /// The fragment id, if this is an in-page target
    pub fn fragment(&self) -> Option<&str> {
        match self {
            NavTarget::Fragment(id) => Some(id),
            NavTarget::External(_) => None,
        }
    }
}

/// A navigation link with its activation state
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: String,
    pub target: NavTarget,
    pub active: bool,
}

/// Ordered set of navigation links
///
/// Invariant: at most one link is active at any time.
#[derive(Debug, Clone, Default)]
pub struct NavModel {
    links: Vec<NavLink>,
}

impl NavModel {
    /// Build the model from page-definition links
    pub fn from_defs(defs: &[NavLinkDef]) -> Self {
        let links = defs
            .iter()
            .map(|def| NavLink {
                label: def.label.clone(),
                target: NavTarget::parse(&def.target),
                active: false,
            })
            .collect();
        Self { links }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NavLink> {
        self.links.get(index)
    }

    /// Clear every active flag, then set it on the link whose fragment
    /// matches `section_id`. `None` leaves all links cleared, which is
    /// the accepted state when no section is current.
    pub fn set_active_fragment(&mut self, section_id: Option<&str>) {
        for link in &mut self.links {
            link.active = false;
        }
        let Some(id) = section_id else {
            return;
        };
        if let Some(link) = self
            .links
            .iter_mut()
            .find(|link| link.target.fragment() == Some(id))
        {
            link.active = true;
        }
    }

    /// Index of the currently active link, if any
    pub fn active_index(&self) -> Option<usize> {
        self.links.iter().position(|link| link.active)
    }
}

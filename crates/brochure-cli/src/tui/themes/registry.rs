//! Theme registry for discovering and accessing themes

use std::collections::HashMap;

use super::Theme;

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
        };

        use super::definitions::*;

        registry.register(brochure());
        registry.register(midnight());
        registry.register(paper());
        registry.register(terminal());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .unwrap_or_else(|| self.themes.get("brochure").expect("Default theme must exist"))
    }

    /// List all themes in registration order
    pub fn list(&self) -> Vec<(&String, &Theme)> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.themes.get(name).map(|theme| (name, theme)))
            .collect()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.get_or_default("nope").name, "brochure");
        assert_eq!(registry.get_or_default("paper").name, "paper");
    }

    #[test]
    fn test_list_preserves_registration_order() {
        let registry = ThemeRegistry::new();
        let names: Vec<_> = registry.list().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names[0], "brochure");
        assert_eq!(names.len(), 4);
    }
}

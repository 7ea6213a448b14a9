//! Page definition loading and validation
//!
//! The page content lives in a TOML file: site title, navigation links,
//! sections, and an optional contact form. Nothing about scroll behavior
//! is configured here; this is purely what the page says.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::PageError;

/// A navigation link as declared in the page file
///
/// `target` is either an in-page fragment (`#contact`) or an external URL;
/// it is not resolved at load time. A fragment that matches no section is
/// legal and simply does nothing when activated.
#[derive(Debug, Clone, Deserialize)]
pub struct NavLinkDef {
    pub label: String,
    pub target: String,
}

/// A page section: an id (fragment anchor), a heading, and body paragraphs
#[derive(Debug, Clone, Deserialize)]
pub struct SectionDef {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
    /// Whether the section's content participates in reveal-on-view
    #[serde(default)]
    pub reveal: bool,
}

/// Contact form declaration
#[derive(Debug, Clone, Deserialize)]
pub struct FormDef {
    /// Id of the section the form renders inside
    pub section: String,
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
    #[serde(default = "default_confirm_label")]
    pub confirm_label: String,
}

fn default_fields() -> Vec<String> {
    vec!["Name".into(), "Email".into(), "Message".into()]
}

fn default_submit_label() -> String {
    "Send Message".into()
}

fn default_confirm_label() -> String {
    "Message Sent! ✓".into()
}

/// A complete page definition
#[derive(Debug, Clone, Deserialize)]
pub struct PageDef {
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default, rename = "nav")]
    pub nav_links: Vec<NavLinkDef>,
    #[serde(default, rename = "section")]
    pub sections: Vec<SectionDef>,
    #[serde(default)]
    pub form: Option<FormDef>,
}

impl PageDef {
    /// Parse a page definition from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, PageError> {
        let page: PageDef = toml::from_str(text)?;
        page.validate()?;
        Ok(page)
    }

    /// Load a page definition from a file
    pub fn load(path: &Path) -> Result<Self, PageError> {
        let text = std::fs::read_to_string(path)?;
        let page = Self::from_toml_str(&text)?;
        tracing::info!(
            path = %path.display(),
            sections = page.sections.len(),
            "Loaded page definition"
        );
        Ok(page)
    }

    /// Look up a section by id
    pub fn section(&self, id: &str) -> Option<&SectionDef> {
        self.sections.iter().find(|s| s.id == id)
    }

    fn validate(&self) -> Result<(), PageError> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.is_empty() {
                return Err(PageError::Validation(format!(
                    "section \"{}\" has an empty id",
                    section.title
                )));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(PageError::Validation(format!(
                    "duplicate section id: {}",
                    section.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r##"
title = "Acme Cloud"
tagline = "Ship faster"

[[nav]]
label = "Home"
target = "#home"

[[nav]]
label = "Docs"
target = "https://docs.example.com"

[[section]]
id = "home"
title = "Welcome"
body = ["First paragraph.", "Second paragraph."]

[[section]]
id = "contact"
title = "Contact"
reveal = true

[form]
section = "contact"
"##;

    #[test]
    fn test_parse_sample_page() {
        let page = PageDef::from_toml_str(SAMPLE).unwrap();
        assert_eq!(page.title, "Acme Cloud");
        assert_eq!(page.nav_links.len(), 2);
        assert_eq!(page.sections.len(), 2);
        assert!(page.sections[1].reveal);

        let form = page.form.unwrap();
        assert_eq!(form.section, "contact");
        // Defaults fill in unspecified form settings
        assert_eq!(form.fields.len(), 3);
        assert_eq!(form.submit_label, "Send Message");
    }

    #[test]
    fn test_duplicate_section_ids_rejected() {
        let text = r#"
title = "T"

[[section]]
id = "a"
title = "A"

[[section]]
id = "a"
title = "Also A"
"#;
        let err = PageDef::from_toml_str(text).unwrap_err();
        assert!(matches!(err, PageError::Validation(_)));
    }

    #[test]
    fn test_empty_section_id_rejected() {
        let text = r#"
title = "T"

[[section]]
id = ""
title = "Nameless"
"#;
        assert!(PageDef::from_toml_str(text).is_err());
    }

    #[test]
    fn test_unresolved_nav_target_is_legal() {
        // A fragment pointing at no section is a runtime no-op, not a
        // load error.
        let text = r##"
title = "T"

[[nav]]
label = "Ghost"
target = "#nowhere"
"##;
        let page = PageDef::from_toml_str(text).unwrap();
        assert!(page.section("nowhere").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let page = PageDef::load(file.path()).unwrap();
        assert_eq!(page.title, "Acme Cloud");
    }

    #[test]
    fn test_load_missing_file() {
        let err = PageDef::load(Path::new("/nonexistent/page.toml")).unwrap_err();
        assert!(matches!(err, PageError::Io(_)));
    }
}

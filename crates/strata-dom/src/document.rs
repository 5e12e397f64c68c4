//! Document - the host style scope

use strata_cssom::{CssError, StyleSheet, StyleSheetSet};

/// The top-level document whose style sheets are the source of inherited
/// layers. Passed by reference into engine operations.
#[derive(Debug, Clone)]
pub struct Document {
    url: String,
    style_sheets: StyleSheetSet,
}

impl Document {
    /// Create a new empty document
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            style_sheets: StyleSheetSet::new(),
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The document's style sheets
    pub fn style_sheets(&self) -> &StyleSheetSet {
        &self.style_sheets
    }

    /// The document's style sheets, mutably
    pub fn style_sheets_mut(&mut self) -> &mut StyleSheetSet {
        &mut self.style_sheets
    }

    /// Attach an already-parsed stylesheet
    pub fn add_stylesheet(&mut self, sheet: StyleSheet) {
        self.style_sheets.add_sheet(sheet);
    }

    /// Parse `css` and attach it as a new sheet
    pub fn add_style(&mut self, css: &str) -> Result<(), CssError> {
        tracing::debug!("attaching stylesheet to {}", self.url);
        self.style_sheets.add_css(css)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

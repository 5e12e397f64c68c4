//! Shadow roots
//!
//! A shadow root is the encapsulated style scope of its host element.

use strata_cssom::{CssError, StyleSheetSet};

/// Shadow root mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowRootMode {
    #[default]
    Open,
    Closed,
}

/// Shadow root owning the scope's style sheets
#[derive(Debug, Clone)]
pub struct ShadowRoot {
    pub mode: ShadowRootMode,
    style_sheets: StyleSheetSet,
}

impl ShadowRoot {
    /// Create a new shadow root
    pub fn new(mode: ShadowRootMode) -> Self {
        Self {
            mode,
            style_sheets: StyleSheetSet::new(),
        }
    }

    /// The scope's style sheets
    pub fn style_sheets(&self) -> &StyleSheetSet {
        &self.style_sheets
    }

    /// The scope's style sheets, mutably
    pub fn style_sheets_mut(&mut self) -> &mut StyleSheetSet {
        &mut self.style_sheets
    }

    /// Parse `css` and attach it as a new scoped sheet
    pub fn add_style(&mut self, css: &str) -> Result<(), CssError> {
        self.style_sheets.add_css(css)
    }
}

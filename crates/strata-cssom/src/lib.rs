//! Strata CSSOM
//!
//! Owned CSS object model for layer manipulation: parsed rule variants,
//! mutable ordered style sheets, and per-scope sheet collections.

mod parser;
mod rules;
mod sheet;

pub use parser::CssParser;
pub use rules::{CssRule, ImportRule, LayerBlockRule, LayerName, LayerStatementRule};
pub use sheet::{RuleLocation, StyleSheet, StyleSheetSet};

/// Parse a CSS stylesheet
pub fn parse_stylesheet(css: &str) -> Result<StyleSheet, CssError> {
    CssParser::new().parse(css)
}

/// CSS object model error
#[derive(Debug, thiserror::Error)]
pub enum CssError {
    /// The source text failed to parse
    #[error("parse error: {message}")]
    Parse { message: String },
    /// A rule could not be serialized back to text
    #[error("serialize error: {message}")]
    Serialize { message: String },
    /// Inserted rule text must contain exactly one rule
    #[error("expected a single rule, found {count}")]
    NotOneRule { count: usize },
}

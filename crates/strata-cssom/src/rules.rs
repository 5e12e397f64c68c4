//! CSS rule representation
//!
//! Owned rule variants covering what layer manipulation needs: `@layer`
//! statements and blocks, layered imports, and everything else as text.

use std::fmt;

use crate::StyleSheet;

/// A cascade layer name; dotted sub-layer names are ordinary names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayerName(String);

impl LayerName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayerName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for LayerName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<&str> for LayerName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A parsed CSS rule
#[derive(Debug, Clone)]
pub enum CssRule {
    /// `@layer a, b;` — declares layer order without bodies
    LayerStatement(LayerStatementRule),
    /// `@layer name { ... }` — a named layer body
    LayerBlock(LayerBlockRule),
    /// `@import url(...) layer(name);` — an imported sheet, optionally layered
    Import(ImportRule),
    /// Any other rule, kept as serialized text
    Other(String),
}

/// `@layer` statement rule
#[derive(Debug, Clone)]
pub struct LayerStatementRule {
    pub names: Vec<LayerName>,
}

/// `@layer` block rule
#[derive(Debug, Clone)]
pub struct LayerBlockRule {
    pub name: LayerName,
    /// Serialized body: the rules between the braces
    pub body: String,
}

/// `@import` rule; the embedder resolves and attaches the imported sheet,
/// this model never fetches. An anonymous `layer` keyword counts as unnamed.
#[derive(Debug, Clone)]
pub struct ImportRule {
    pub url: String,
    pub layer: Option<LayerName>,
    pub sheet: StyleSheet,
}

impl CssRule {
    /// Serialized form of the rule
    pub fn css_text(&self) -> String {
        match self {
            CssRule::LayerStatement(statement) => statement.css_text(),
            CssRule::LayerBlock(block) => block.css_text(),
            CssRule::Import(import) => import.css_text(),
            CssRule::Other(text) => text.clone(),
        }
    }
}

impl LayerStatementRule {
    pub fn css_text(&self) -> String {
        let names: Vec<&str> = self.names.iter().map(LayerName::as_str).collect();
        format!("@layer {};", names.join(", "))
    }
}

impl LayerBlockRule {
    pub fn css_text(&self) -> String {
        format!("@layer {} {{\n{}\n}}", self.name, self.body)
    }
}

impl ImportRule {
    pub fn css_text(&self) -> String {
        match &self.layer {
            Some(layer) => format!("@import url(\"{}\") layer({});", self.url, layer),
            None => format!("@import url(\"{}\");", self.url),
        }
    }
}

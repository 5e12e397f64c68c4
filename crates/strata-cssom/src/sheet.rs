//! Mutable style sheets and per-scope collections
//!
//! Rules are addressed by index. Inserting or deleting a rule renumbers
//! every rule after it, so a captured index is only good until the next
//! mutation on the same sheet.

use crate::{CssError, CssParser, CssRule};

/// An ordered, mutable list of rules
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    rules: Vec<CssRule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole sheet from source text
    pub fn parse(css: &str) -> Result<Self, CssError> {
        CssParser::new().parse(css)
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Get rule by index
    pub fn rule(&self, index: usize) -> Option<&CssRule> {
        self.rules.get(index)
    }

    /// All rules in order
    pub fn rules(&self) -> &[CssRule] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<CssRule> {
        self.rules
    }

    /// Parse `text` as a single rule and insert it at `index`
    pub fn insert_rule(&mut self, text: &str, index: usize) -> Result<(), CssError> {
        let mut rules = CssParser::new().parse(text)?.into_rules();
        if rules.len() != 1 {
            return Err(CssError::NotOneRule { count: rules.len() });
        }
        self.insert(index, rules.remove(0));
        Ok(())
    }

    /// Insert an already-built rule at `index` (clamped to the end)
    pub fn insert(&mut self, index: usize, rule: CssRule) {
        let index = index.min(self.rules.len());
        self.rules.insert(index, rule);
    }

    /// Append an already-built rule
    pub fn append(&mut self, rule: CssRule) {
        self.rules.push(rule);
    }

    /// Delete the rule at `index`, renumbering later rules
    pub fn delete_rule(&mut self, index: usize) -> Option<CssRule> {
        if index < self.rules.len() {
            Some(self.rules.remove(index))
        } else {
            None
        }
    }

    /// Serialized form of the whole sheet
    pub fn css_text(&self) -> String {
        let texts: Vec<String> = self.rules.iter().map(CssRule::css_text).collect();
        texts.join("\n")
    }
}

/// Position of a rule inside a sheet collection. Single-use: any earlier
/// mutation in the same sheet invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleLocation {
    pub sheet: usize,
    pub rule: usize,
}

/// The ordered style sheets attached to one scope
#[derive(Debug, Clone, Default)]
pub struct StyleSheetSet {
    sheets: Vec<StyleSheet>,
}

impl StyleSheetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sheets
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Attach an already-parsed sheet at the end of the collection
    pub fn add_sheet(&mut self, sheet: StyleSheet) {
        self.sheets.push(sheet);
    }

    /// Parse `css` and attach it as a new sheet
    pub fn add_css(&mut self, css: &str) -> Result<(), CssError> {
        let sheet = CssParser::new().parse(css)?;
        self.sheets.push(sheet);
        Ok(())
    }

    /// Get sheet by index
    pub fn sheet(&self, index: usize) -> Option<&StyleSheet> {
        self.sheets.get(index)
    }

    /// Get sheet by index, mutably
    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut StyleSheet> {
        self.sheets.get_mut(index)
    }

    /// Iterate over sheets in collection order
    pub fn iter(&self) -> impl Iterator<Item = &StyleSheet> {
        self.sheets.iter()
    }

    /// Total rules across all sheets
    pub fn rule_count(&self) -> usize {
        self.sheets.iter().map(StyleSheet::len).sum()
    }
}

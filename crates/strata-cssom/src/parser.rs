//! CSS parser using lightningcss
//!
//! Parses stylesheet text into the owned rule representation, keeping only
//! the distinctions layer manipulation needs.

use lightningcss::printer::PrinterOptions;
use lightningcss::rules::CssRule as LcssRule;
use lightningcss::rules::layer::LayerName as LcssLayerName;
use lightningcss::stylesheet::{ParserOptions, StyleSheet as LcssStyleSheet};
use lightningcss::traits::ToCss;

use crate::{CssError, CssRule, ImportRule, LayerBlockRule, LayerName, LayerStatementRule, StyleSheet};

/// CSS parser
pub struct CssParser;

impl CssParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a CSS stylesheet
    pub fn parse(&self, css: &str) -> Result<StyleSheet, CssError> {
        let options = ParserOptions::default();
        let parsed = LcssStyleSheet::parse(css, options).map_err(|e| CssError::Parse {
            message: format!("{:?}", e),
        })?;

        let mut result = StyleSheet::new();
        for rule in parsed.rules.0.iter() {
            if let Some(converted) = self.convert_rule(rule)? {
                result.append(converted);
            }
        }
        tracing::debug!("parsed {} rules", result.len());
        Ok(result)
    }

    fn convert_rule(&self, rule: &LcssRule) -> Result<Option<CssRule>, CssError> {
        match rule {
            LcssRule::LayerStatement(statement) => {
                let mut names = Vec::with_capacity(statement.names.len());
                for name in &statement.names {
                    names.push(self.layer_name(name)?);
                }
                Ok(Some(CssRule::LayerStatement(LayerStatementRule { names })))
            }
            LcssRule::LayerBlock(block) => {
                let name = match &block.name {
                    Some(name) => self.layer_name(name)?,
                    // Anonymous layers have no name to match on
                    None => return Ok(Some(CssRule::Other(self.rule_text(rule)?))),
                };
                let mut body = String::new();
                for inner in block.rules.0.iter() {
                    if !body.is_empty() {
                        body.push('\n');
                    }
                    body.push_str(&self.rule_text(inner)?);
                }
                Ok(Some(CssRule::LayerBlock(LayerBlockRule { name, body })))
            }
            LcssRule::Import(import) => {
                let layer = match &import.layer {
                    Some(Some(name)) => Some(self.layer_name(name)?),
                    Some(None) | None => None,
                };
                Ok(Some(CssRule::Import(ImportRule {
                    url: import.url.to_string(),
                    layer,
                    sheet: StyleSheet::new(),
                })))
            }
            LcssRule::Ignored => Ok(None),
            _ => Ok(Some(CssRule::Other(self.rule_text(rule)?))),
        }
    }

    fn layer_name(&self, name: &LcssLayerName) -> Result<LayerName, CssError> {
        let text = name
            .to_css_string(PrinterOptions::default())
            .map_err(|e| CssError::Serialize {
                message: format!("{:?}", e),
            })?;
        Ok(LayerName::new(text))
    }

    fn rule_text(&self, rule: &LcssRule) -> Result<String, CssError> {
        rule.to_css_string(PrinterOptions::default())
            .map_err(|e| CssError::Serialize {
                message: format!("{:?}", e),
            })
    }
}

impl Default for CssParser {
    fn default() -> Self {
        Self::new()
    }
}

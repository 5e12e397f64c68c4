//! Dot-as-dot aliasing
//!
//! `inherit.<source>.as.<alias>` pulls a document layer (or one of the
//! synthetic `unlayered`/`layered` pseudo-layers) into a scope under a new
//! name.

use strata_cssom::{CssRule, LayerName};
use strata_dom::Document;

use crate::compose;

const INHERIT_PREFIX: &str = "inherit.";
const ALIAS_MARKER: &str = ".as.";

/// A parsed `inherit.<source>.as.<alias>` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerAlias {
    /// Document-side layer the content is pulled from
    pub source: LayerName,
    /// Name the content is installed under in the scope
    pub alias: LayerName,
}

impl LayerAlias {
    /// Parse an aliasing token. Ordinary layer names return `None`: the
    /// token must carry the `inherit.` prefix, exactly one `.as.`
    /// separator, and non-empty source and alias parts.
    pub fn parse(name: &LayerName) -> Option<Self> {
        let rest = name.as_str().strip_prefix(INHERIT_PREFIX)?;
        let parts: Vec<&str> = rest.split(ALIAS_MARKER).collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return None;
        }
        Some(Self {
            source: LayerName::new(parts[0]),
            alias: LayerName::new(parts[1]),
        })
    }
}

/// True for any name carrying the `.as.` aliasing marker, parseable or not
pub fn has_alias_marker(name: &LayerName) -> bool {
    name.as_str().contains(ALIAS_MARKER)
}

/// Resolve an alias against the document. The `unlayered` and `layered`
/// pseudo-sources short-circuit before the import and layer-block lookups;
/// an alias with no content source resolves to nothing.
pub fn resolve(alias: &LayerAlias, document: &Document) -> Option<CssRule> {
    match alias.source.as_str() {
        "unlayered" => Some(compose::unlayered_layer_block(document, &alias.alias)),
        "layered" => Some(compose::layered_layer_block(document, &alias.alias)),
        _ => compose::imported_layer_block(document, &alias.source, &alias.alias)
            .or_else(|| compose::renamed_layer_block(document, &alias.source, &alias.alias)),
    }
}

//! Style adoption facade
//!
//! Routes a scope to one of the supported inheritance sources. Pure
//! routing over the engine, no algorithm of its own.

use std::str::FromStr;

use strata_cssom::LayerName;
use strata_dom::{Document, Element};

use crate::{LayerEngine, LayerError};

/// Where a scope pulls its inherited layers from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdoptSource {
    /// A caller-supplied list of layer names
    #[default]
    StyleReferenceList,
    /// The host element's `shadowlayers` attribute
    AdoptStylesAttribute,
    /// The scope's own pre-authored `@layer` statement
    LayerStatementRules,
}

impl FromStr for AdoptSource {
    type Err = LayerError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "styleReferenceList" => Ok(Self::StyleReferenceList),
            "adoptStylesAttribute" => Ok(Self::AdoptStylesAttribute),
            "layerStatementRules" => Ok(Self::LayerStatementRules),
            other => Err(LayerError::UnknownAdoptSource(other.to_string())),
        }
    }
}

/// Adopt document layers into the element's shadow scope from an explicit
/// name list
pub fn adopt_styles(
    document: &Document,
    host: &mut Element,
    style_reference_list: &[LayerName],
) -> Result<(), LayerError> {
    LayerEngine::new(document).inherit(host, style_reference_list)
}

/// Adopt document layers named by the element's `shadowlayers` attribute
pub fn adopt_styles_from_attribute(
    document: &Document,
    host: &mut Element,
) -> Result<(), LayerError> {
    LayerEngine::new(document).inherit_from_attribute(host)
}

/// Adopt document layers named by the scope's own `@layer` statement
pub fn adopt_styles_from_layer_statement_rule(
    document: &Document,
    host: &mut Element,
) -> Result<(), LayerError> {
    LayerEngine::new(document).inherit_from_layer_statement(host)
}

/// Apply each selected adoption source to the scope, in order. Sources
/// applied before a failing one keep their mutations.
pub fn adopt_styles_from_sources(
    document: &Document,
    host: &mut Element,
    style_reference_list: &[LayerName],
    adopt_from: &[AdoptSource],
) -> Result<(), LayerError> {
    for source in adopt_from {
        match source {
            AdoptSource::StyleReferenceList => {
                adopt_styles(document, host, style_reference_list)?
            }
            AdoptSource::AdoptStylesAttribute => adopt_styles_from_attribute(document, host)?,
            AdoptSource::LayerStatementRules => {
                adopt_styles_from_layer_statement_rule(document, host)?
            }
        }
    }
    Ok(())
}

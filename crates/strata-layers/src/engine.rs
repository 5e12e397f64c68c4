//! Layer inheritance engine
//!
//! Reads a scope's declared layer order, merges in layers pulled from the
//! host document, regenerates inherited layer bodies, and rewrites the
//! scope's `@layer` statement. Nothing is cached between passes; every
//! operation re-derives its state from the live sheet collections.

use strata_cssom::{CssRule, LayerName, LayerStatementRule, StyleSheetSet};
use strata_dom::{Document, Element};

use crate::alias::{self, LayerAlias};
use crate::{compose, discovery, merge, LayerError};

/// Attribute naming the document layers a scope wants to inherit
pub const SHADOW_LAYERS_ATTRIBUTE: &str = "shadowlayers";

/// Layer inheritance engine, bound to the host document it inherits from
pub struct LayerEngine<'doc> {
    document: &'doc Document,
}

impl<'doc> LayerEngine<'doc> {
    /// Create an engine reading from `document`
    pub fn new(document: &'doc Document) -> Self {
        Self { document }
    }

    /// Inherit `new_layers` into the element's shadow scope, merged with
    /// the scope's own declared layers
    pub fn inherit(&self, host: &mut Element, new_layers: &[LayerName]) -> Result<(), LayerError> {
        let scope = shadow_scope_mut(host)?;
        self.inherit_into(scope, new_layers)
    }

    /// Inherit the layers named by the element's `shadowlayers` attribute,
    /// comma-and-space separated. An absent attribute is a successful
    /// no-op.
    pub fn inherit_from_attribute(&self, host: &mut Element) -> Result<(), LayerError> {
        let raw = match host.get_attribute(SHADOW_LAYERS_ATTRIBUTE) {
            Some(value) => value.to_string(),
            None => return Ok(()),
        };
        let new_layers: Vec<LayerName> = raw.split(", ").map(LayerName::new).collect();
        self.inherit(host, &new_layers)
    }

    /// Inherit the layers named by the scope's own pre-authored `@layer`
    /// statement. Every `inherit.<source>.as.<alias>` token is expanded
    /// into a materialized block first; the token itself is replaced by
    /// its alias name in the driving list, so only the alias can reach the
    /// final statement.
    pub fn inherit_from_layer_statement(&self, host: &mut Element) -> Result<(), LayerError> {
        let scope = shadow_scope_mut(host)?;
        let location =
            discovery::find_layer_statement_rule(scope).ok_or(LayerError::NoLayerStatement)?;
        let declared = discovery::layer_statement_names(scope, location)
            .ok_or(LayerError::NoLayerStatement)?;

        let mut driving = Vec::with_capacity(declared.len());
        for name in &declared {
            match LayerAlias::parse(name) {
                Some(parsed) => {
                    if let Some(rule) = alias::resolve(&parsed, self.document) {
                        append_rule(scope, rule)?;
                    }
                    driving.push(parsed.alias);
                }
                None => driving.push(name.clone()),
            }
        }

        self.inherit_into(scope, &driving)
    }

    /// Core merge-and-install pass over a scope's sheet collection
    pub fn inherit_into(
        &self,
        scope: &mut StyleSheetSet,
        new_layers: &[LayerName],
    ) -> Result<(), LayerError> {
        if scope.is_empty() {
            return Err(LayerError::NoStyleSheet);
        }

        // Alias tokens are resolved during statement expansion, never here
        let new_layers: Vec<LayerName> = new_layers
            .iter()
            .filter(|name| !alias::has_alias_marker(name))
            .cloned()
            .collect();

        let prior_names = discovery::find_layer_statement_rule(scope)
            .and_then(|location| discovery::layer_statement_names(scope, location))
            .unwrap_or_default();

        let retained = delete_inherited_layers(scope, &prior_names);
        let merged = merge::merge_layer_names(&new_layers, &retained);
        tracing::debug!("merged layer order: {:?}", merged);

        for name in &merged {
            if !merge::is_inherited_name(name) {
                continue;
            }
            if let Some(rule) = self.inherited_layer_rule(name) {
                append_rule(scope, rule)?;
            }
        }

        replace_layer_statement_rule(scope, &merged)
    }

    /// Materialized body for an inherited placeholder: the whole document
    /// for `inherit`, a single renamed document layer for
    /// `inherit.<name>`. `None` when the document has nothing to offer.
    fn inherited_layer_rule(&self, name: &LayerName) -> Option<CssRule> {
        if name.as_str() == "inherit" {
            return Some(compose::document_layer_block(self.document, name));
        }
        let source = LayerName::new(name.as_str().strip_prefix("inherit.")?);
        compose::renamed_layer_block(self.document, &source, name)
    }
}

/// Delete the materialized bodies of inherited placeholders in
/// `prior_names`, returning the scope's own names in order
fn delete_inherited_layers(scope: &mut StyleSheetSet, prior_names: &[LayerName]) -> Vec<LayerName> {
    let mut retained = Vec::new();
    for name in prior_names {
        if merge::is_inherited_name(name) {
            delete_layer(scope, name);
        } else {
            retained.push(name.clone());
        }
    }
    retained
}

/// Delete the layer block named `name` from the scope. Returns whether a
/// block was found and deleted.
pub fn delete_layer(scope: &mut StyleSheetSet, name: &LayerName) -> bool {
    let Some(location) = discovery::find_layer_block_rule(scope, name) else {
        return false;
    };
    match scope.sheet_mut(location.sheet) {
        Some(sheet) => sheet.delete_rule(location.rule).is_some(),
        None => false,
    }
}

/// Delete the scope's first `@layer` statement rule. Returns whether one
/// was found and deleted.
pub fn delete_layer_statement_rule(scope: &mut StyleSheetSet) -> bool {
    let Some(location) = discovery::find_layer_statement_rule(scope) else {
        return false;
    };
    match scope.sheet_mut(location.sheet) {
        Some(sheet) => sheet.delete_rule(location.rule).is_some(),
        None => false,
    }
}

/// Insert serialized rule text at the end of the sheet that hosts (or will
/// host) the scope's `@layer` statement. Blank text is accepted and
/// ignored.
pub fn insert_rule(scope: &mut StyleSheetSet, text: &str) -> Result<(), LayerError> {
    if text.trim().is_empty() {
        return Ok(());
    }
    let sheet_index = statement_sheet_index(scope);
    let sheet = scope.sheet_mut(sheet_index).ok_or(LayerError::NoStyleSheet)?;
    let end = sheet.len();
    sheet.insert_rule(text, end)?;
    Ok(())
}

/// Rewrite the scope's `@layer` statement to declare exactly `names`. The
/// first statement found is deleted and the replacement inserted at the
/// head of the same sheet, keeping at most one statement. With no names to
/// declare, nothing is reinserted.
pub fn replace_layer_statement_rule(
    scope: &mut StyleSheetSet,
    names: &[LayerName],
) -> Result<(), LayerError> {
    let sheet_index = match discovery::find_layer_statement_rule(scope) {
        Some(location) => {
            if let Some(sheet) = scope.sheet_mut(location.sheet) {
                sheet.delete_rule(location.rule);
            }
            location.sheet
        }
        None => 0,
    };
    if names.is_empty() {
        return Ok(());
    }
    let sheet = scope.sheet_mut(sheet_index).ok_or(LayerError::NoStyleSheet)?;
    sheet.insert(
        0,
        CssRule::LayerStatement(LayerStatementRule {
            names: names.to_vec(),
        }),
    );
    Ok(())
}

/// Append a materialized rule to the sheet that hosts (or will host) the
/// scope's `@layer` statement
fn append_rule(scope: &mut StyleSheetSet, rule: CssRule) -> Result<(), LayerError> {
    let sheet_index = statement_sheet_index(scope);
    let sheet = scope.sheet_mut(sheet_index).ok_or(LayerError::NoStyleSheet)?;
    sheet.append(rule);
    Ok(())
}

/// The sheet carrying the statement, or the first sheet when none does yet
fn statement_sheet_index(scope: &StyleSheetSet) -> usize {
    discovery::find_layer_statement_rule(scope)
        .map(|location| location.sheet)
        .unwrap_or(0)
}

fn shadow_scope_mut(host: &mut Element) -> Result<&mut StyleSheetSet, LayerError> {
    host.shadow_root_mut()
        .map(|shadow| shadow.style_sheets_mut())
        .ok_or(LayerError::NoShadowRoot)
}

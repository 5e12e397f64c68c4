//! Rule discovery
//!
//! Pure scans over a scope's sheet collection: sheets in collection order,
//! rules in sheet order, first match wins. Results are index handles; any
//! mutation invalidates them, so callers re-scan right before mutating.

use strata_cssom::{CssRule, LayerName, RuleLocation, StyleSheetSet};

/// Find the first `@layer` statement rule in the collection
pub fn find_layer_statement_rule(scope: &StyleSheetSet) -> Option<RuleLocation> {
    for (sheet_index, sheet) in scope.iter().enumerate() {
        for (rule_index, rule) in sheet.rules().iter().enumerate() {
            if matches!(rule, CssRule::LayerStatement(_)) {
                return Some(RuleLocation {
                    sheet: sheet_index,
                    rule: rule_index,
                });
            }
        }
    }
    None
}

/// Find the first `@layer` block rule named `name`
pub fn find_layer_block_rule(scope: &StyleSheetSet, name: &LayerName) -> Option<RuleLocation> {
    for (sheet_index, sheet) in scope.iter().enumerate() {
        for (rule_index, rule) in sheet.rules().iter().enumerate() {
            if let CssRule::LayerBlock(block) = rule {
                if block.name == *name {
                    return Some(RuleLocation {
                        sheet: sheet_index,
                        rule: rule_index,
                    });
                }
            }
        }
    }
    None
}

/// Read the declared name list of the statement at `location`
pub fn layer_statement_names(scope: &StyleSheetSet, location: RuleLocation) -> Option<Vec<LayerName>> {
    let sheet = scope.sheet(location.sheet)?;
    match sheet.rule(location.rule)? {
        CssRule::LayerStatement(statement) => Some(statement.names.clone()),
        _ => None,
    }
}

//! Host-content composition
//!
//! Builds the bodies of inherited and aliased layers from document rules:
//! the whole document, its unlayered remainder, its layered subset, a
//! layered import, or a single renamed layer block.

use strata_cssom::{CssRule, ImportRule, LayerBlockRule, LayerName};
use strata_dom::Document;

use crate::discovery;

/// Wrap the document's full content (unlayered and layered) as `name`.
/// Imports are flattened to their resolved sheets, layered ones re-wrapped
/// under their layer name.
pub fn document_layer_block(document: &Document, name: &LayerName) -> CssRule {
    let mut body = String::new();
    for sheet in document.style_sheets().iter() {
        for rule in sheet.rules() {
            match rule {
                CssRule::Import(import) => {
                    if let Some(text) = imported_rule_text(import) {
                        push_rule_text(&mut body, &text);
                    }
                }
                other => push_rule_text(&mut body, &other.css_text()),
            }
        }
    }
    layer_block(name, body)
}

/// Wrap the document's unlayered rules as `name`: plain rules verbatim,
/// unlayered imports flattened to their resolved sheets
pub fn unlayered_layer_block(document: &Document, name: &LayerName) -> CssRule {
    let mut body = String::new();
    for sheet in document.style_sheets().iter() {
        for rule in sheet.rules() {
            match rule {
                CssRule::Other(text) => push_rule_text(&mut body, text),
                CssRule::Import(import) if import.layer.is_none() => {
                    let css = import.sheet.css_text();
                    if !css.is_empty() {
                        push_rule_text(&mut body, &css);
                    }
                }
                _ => {}
            }
        }
    }
    layer_block(name, body)
}

/// Wrap the document's layered content as `name`: layered imports
/// re-wrapped under their layer name, `@layer` rules verbatim
pub fn layered_layer_block(document: &Document, name: &LayerName) -> CssRule {
    let mut body = String::new();
    for sheet in document.style_sheets().iter() {
        for rule in sheet.rules() {
            match rule {
                CssRule::Import(import) if import.layer.is_some() => {
                    if let Some(text) = imported_rule_text(import) {
                        push_rule_text(&mut body, &text);
                    }
                }
                CssRule::LayerBlock(_) | CssRule::LayerStatement(_) => {
                    push_rule_text(&mut body, &rule.css_text());
                }
                _ => {}
            }
        }
    }
    layer_block(name, body)
}

/// Concatenate every imported sheet assigned to layer `source`, wrapped as
/// `name`. `None` when no layered import matches or the matches are empty.
pub fn imported_layer_block(
    document: &Document,
    source: &LayerName,
    name: &LayerName,
) -> Option<CssRule> {
    let mut body = String::new();
    for sheet in document.style_sheets().iter() {
        for rule in sheet.rules() {
            if let CssRule::Import(import) = rule {
                if import.layer.as_ref() == Some(source) {
                    let css = import.sheet.css_text();
                    if !css.is_empty() {
                        push_rule_text(&mut body, &css);
                    }
                }
            }
        }
    }
    if body.is_empty() {
        None
    } else {
        Some(layer_block(name, body))
    }
}

/// Copy the first document layer block named `source` under `new_name`.
/// The rename rewrites the structured name field, never the rule text.
pub fn renamed_layer_block(
    document: &Document,
    source: &LayerName,
    new_name: &LayerName,
) -> Option<CssRule> {
    let location = discovery::find_layer_block_rule(document.style_sheets(), source)?;
    let sheet = document.style_sheets().sheet(location.sheet)?;
    match sheet.rule(location.rule)? {
        CssRule::LayerBlock(block) => Some(layer_block(new_name, block.body.clone())),
        _ => None,
    }
}

fn imported_rule_text(import: &ImportRule) -> Option<String> {
    let css = import.sheet.css_text();
    if css.is_empty() {
        return None;
    }
    match &import.layer {
        Some(layer) => Some(format!("@layer {} {{\n{}\n}}", layer, css)),
        None => Some(css),
    }
}

fn layer_block(name: &LayerName, body: String) -> CssRule {
    CssRule::LayerBlock(LayerBlockRule {
        name: name.clone(),
        body,
    })
}

fn push_rule_text(body: &mut String, text: &str) {
    if !body.is_empty() {
        body.push('\n');
    }
    body.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_cssom::StyleSheet;

    fn document_with(css: &str) -> Document {
        let mut document = Document::new("https://example.com");
        document.add_style(css).unwrap();
        document
    }

    #[test]
    fn test_unlayered_excludes_layer_rules() {
        let document = document_with(
            "p { color: red }\n@layer x { h1 { font-weight: bold } }\n@layer a, b;",
        );
        let rule = unlayered_layer_block(&document, &LayerName::new("base"));
        match rule {
            CssRule::LayerBlock(block) => {
                assert_eq!(block.name, "base");
                assert!(block.body.contains("color: red"));
                assert!(!block.body.contains("font-weight"));
                assert!(!block.body.contains("@layer"));
            }
            other => panic!("expected layer block, got {:?}", other),
        }
    }

    #[test]
    fn test_layered_excludes_plain_rules() {
        let document = document_with(
            "p { color: red }\n@layer x { h1 { font-weight: bold } }",
        );
        let rule = layered_layer_block(&document, &LayerName::new("page"));
        match rule {
            CssRule::LayerBlock(block) => {
                assert!(block.body.contains("@layer x"));
                assert!(block.body.contains("font-weight"));
                assert!(!block.body.contains("color: red"));
            }
            other => panic!("expected layer block, got {:?}", other),
        }
    }

    #[test]
    fn test_renamed_block_is_structural() {
        let document = document_with("@layer library { .library { color: green } }");
        let rule =
            renamed_layer_block(&document, &LayerName::new("library"), &LayerName::new("vendor"))
                .unwrap();
        match rule {
            CssRule::LayerBlock(block) => {
                assert_eq!(block.name, "vendor");
                // The body still mentions the old name in selector position
                assert!(block.body.contains(".library"));
            }
            other => panic!("expected layer block, got {:?}", other),
        }

        assert!(renamed_layer_block(
            &document,
            &LayerName::new("missing"),
            &LayerName::new("vendor")
        )
        .is_none());
    }

    #[test]
    fn test_imported_layer_concatenates_matches() {
        let mut document = Document::new("https://example.com");
        let mut sheet = StyleSheet::new();
        sheet.append(CssRule::Import(ImportRule {
            url: "a.css".to_string(),
            layer: Some(LayerName::new("vendor")),
            sheet: StyleSheet::parse("button { color: purple }").unwrap(),
        }));
        sheet.append(CssRule::Import(ImportRule {
            url: "b.css".to_string(),
            layer: Some(LayerName::new("vendor")),
            sheet: StyleSheet::parse("a { color: teal }").unwrap(),
        }));
        document.add_stylesheet(sheet);

        let rule =
            imported_layer_block(&document, &LayerName::new("vendor"), &LayerName::new("third"))
                .unwrap();
        match rule {
            CssRule::LayerBlock(block) => {
                assert_eq!(block.name, "third");
                assert!(block.body.contains("color: purple"));
                assert!(block.body.contains("color: teal"));
            }
            other => panic!("expected layer block, got {:?}", other),
        }

        assert!(imported_layer_block(
            &document,
            &LayerName::new("missing"),
            &LayerName::new("third")
        )
        .is_none());
    }
}

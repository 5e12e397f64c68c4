//! End-to-end inheritance scenarios
//!
//! Drives the public surface the way embedding components would: a host
//! document publishing layers, shadow scopes pulling them in through the
//! adoption facade.

use strata::{
    adopt_styles, adopt_styles_from_layer_statement_rule, cssom::CssRule, layers,
    Document, Element, LayerName, ShadowRootMode, StyleSheetSet,
};

fn names(list: &[&str]) -> Vec<LayerName> {
    list.iter().map(|name| LayerName::new(*name)).collect()
}

fn declared_names(scope: &StyleSheetSet) -> Vec<LayerName> {
    layers::find_layer_statement_rule(scope)
        .and_then(|location| layers::layer_statement_names(scope, location))
        .unwrap_or_default()
}

fn block_body(scope: &StyleSheetSet, name: &str) -> Option<String> {
    let location = layers::find_layer_block_rule(scope, &LayerName::new(name))?;
    match scope.sheet(location.sheet)?.rule(location.rule)? {
        CssRule::LayerBlock(block) => Some(block.body.clone()),
        _ => None,
    }
}

fn block_count(scope: &StyleSheetSet, name: &str) -> usize {
    scope
        .iter()
        .flat_map(|sheet| sheet.rules())
        .filter(|rule| matches!(rule, CssRule::LayerBlock(block) if block.name == name))
        .count()
}

fn scope(host: &Element) -> &StyleSheetSet {
    host.shadow_root().unwrap().style_sheets()
}

#[test]
fn test_library_user_scenario() {
    let mut document = Document::new("https://example.com");
    document
        .add_style("@layer library { button { color: green } }")
        .unwrap();

    let mut host = Element::new("md-block");
    host.attach_shadow(ShadowRootMode::Open)
        .add_style(
            "@layer library-user, library, inherit;\n\
             @layer library-user { button { color: blue } }",
        )
        .unwrap();

    adopt_styles_from_layer_statement_rule(&document, &mut host).unwrap();

    // Placeholders move ahead of re-asserted own names under the
    // last-occurrence merge, so the document content sits at the lowest
    // priority
    assert_eq!(
        declared_names(scope(&host)),
        names(&["inherit", "library-user", "library"])
    );

    let inherited = block_body(scope(&host), "inherit").unwrap();
    assert!(inherited.contains("@layer library"));
    assert!(inherited.contains("color: green"));

    assert_eq!(block_count(scope(&host), "library-user"), 1);
    assert!(block_body(scope(&host), "library-user").unwrap().contains("color: blue"));
}

#[test]
fn test_alias_and_placeholders_together() {
    let mut document = Document::new("https://example.com");
    document.add_style("p { color: red }").unwrap();
    document
        .add_style("@layer library { button { color: green } }")
        .unwrap();

    let mut host = Element::new("md-block");
    host.attach_shadow(ShadowRootMode::Open)
        .add_style(
            "@layer inherit.library.as.library, library-user, library, inherit;\n\
             @layer library-user { button { color: blue } }",
        )
        .unwrap();

    adopt_styles_from_layer_statement_rule(&document, &mut host).unwrap();

    let declared = declared_names(scope(&host));
    assert_eq!(declared, names(&["inherit", "library-user", "library"]));
    // The alias token never survives into the statement
    assert!(declared.iter().all(|name| !name.as_str().contains(".as.")));

    // The renamed copy of the document layer is materialized in the scope
    assert_eq!(block_count(scope(&host), "library"), 1);
    assert!(block_body(scope(&host), "library").unwrap().contains("color: green"));

    let inherited = block_body(scope(&host), "inherit").unwrap();
    assert!(inherited.contains("color: red"));
}

#[test]
fn test_page_styles_at_lowest_priority() {
    let mut document = Document::new("https://example.com");
    document.add_style("button { color: red }").unwrap();

    let mut host = Element::new("counter-button");
    host.attach_shadow(ShadowRootMode::Open)
        .add_style("@layer component;\n@layer component { button { color: blue } }")
        .unwrap();

    adopt_styles(&document, &mut host, &names(&["inherit"])).unwrap();

    // Own layers are declared after the inherited content and win
    assert_eq!(declared_names(scope(&host)), names(&["inherit", "component"]));
    assert!(block_body(scope(&host), "inherit").unwrap().contains("color: red"));
}

#[test]
fn test_scope_rejecting_page_styles() {
    let mut document = Document::new("https://example.com");
    document.add_style("button { color: red }").unwrap();

    let mut host = Element::new("counter-button");
    host.attach_shadow(ShadowRootMode::Open)
        .add_style("@layer component;\n@layer component { button { color: blue } }")
        .unwrap();
    let rules_before = scope(&host).rule_count();

    adopt_styles_from_layer_statement_rule(&document, &mut host).unwrap();

    // No inherit tokens declared, so nothing crosses the boundary
    assert_eq!(declared_names(scope(&host)), names(&["component"]));
    assert_eq!(scope(&host).rule_count(), rules_before);
    assert_eq!(block_count(scope(&host), "inherit"), 0);
}

#[test]
fn test_version_is_set() {
    assert!(!strata::VERSION.is_empty());
}

//! Strata
//!
//! Cascade-layer inheritance across shadow-tree boundaries: a shadow scope
//! selectively absorbs named `@layer`s from its host document, re-orders
//! them against its own layers, and can rename them on the way in.
//!
//! # Example
//! ```rust,ignore
//! use strata::{adopt_styles, Document, Element, ShadowRootMode};
//!
//! let mut document = Document::new("https://example.com");
//! document.add_style("@layer library { button { color: green } }")?;
//!
//! let mut host = Element::new("md-block");
//! host.attach_shadow(ShadowRootMode::Open)
//!     .add_style("@layer component { button { padding: 4px } }")?;
//!
//! adopt_styles(&document, &mut host, &["inherit.library".into()])?;
//! ```

pub use strata_cssom as cssom;
pub use strata_dom as dom;
pub use strata_layers as layers;

pub use strata_cssom::{CssError, CssRule, LayerName, StyleSheet, StyleSheetSet};
pub use strata_dom::{Document, Element, ShadowRoot, ShadowRootMode};
pub use strata_layers::{
    adopt_styles, adopt_styles_from_attribute, adopt_styles_from_layer_statement_rule,
    adopt_styles_from_sources, AdoptSource, LayerEngine, LayerError, SHADOW_LAYERS_ATTRIBUTE,
};

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

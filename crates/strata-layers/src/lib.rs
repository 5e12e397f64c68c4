//! Strata Layers
//!
//! Cascade-layer inheritance across shadow-tree boundaries: discover a
//! scope's ordering rules, merge incoming document layers with the scope's
//! own, materialize inherited and aliased layer bodies, and keep the
//! scope's single `@layer` statement consistent with them.

mod adopt;
mod alias;
mod compose;
mod discovery;
mod engine;
mod merge;

pub use adopt::{
    adopt_styles, adopt_styles_from_attribute, adopt_styles_from_layer_statement_rule,
    adopt_styles_from_sources, AdoptSource,
};
pub use alias::LayerAlias;
pub use discovery::{find_layer_block_rule, find_layer_statement_rule, layer_statement_names};
pub use engine::{
    delete_layer, delete_layer_statement_rule, insert_rule, replace_layer_statement_rule,
    LayerEngine, SHADOW_LAYERS_ATTRIBUTE,
};
pub use merge::{is_inherited_name, merge_layer_names};

use strata_cssom::CssError;

/// Layer inheritance error
#[derive(Debug, thiserror::Error)]
pub enum LayerError {
    /// The scope has no style sheet to host layer rules
    #[error("scope has no style sheet to host layer rules")]
    NoStyleSheet,
    /// The scope was expected to declare a `@layer` statement but has none
    #[error("no @layer statement rule found in scope")]
    NoLayerStatement,
    /// The element has no shadow root to scope styles to
    #[error("element has no shadow root")]
    NoShadowRoot,
    /// Unrecognized adoption-source token
    #[error("unknown adopt source: {0}")]
    UnknownAdoptSource(String),
    /// Rule text failed to parse or serialize
    #[error(transparent)]
    Css(#[from] CssError),
}

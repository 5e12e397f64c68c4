//! Strata DOM
//!
//! Just enough DOM for style scoping: elements with attributes, shadow
//! roots that own style sheets, and the host document.

mod attributes;
mod document;
mod element;
mod shadow;

pub use attributes::{Attr, NamedNodeMap};
pub use document::Document;
pub use element::Element;
pub use shadow::{ShadowRoot, ShadowRootMode};

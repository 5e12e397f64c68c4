//! Host elements
//!
//! An element that carries attributes and may host an encapsulated style
//! scope.

use crate::{NamedNodeMap, ShadowRoot, ShadowRootMode};

/// A DOM element that may host a shadow tree
#[derive(Debug, Clone)]
pub struct Element {
    tag_name: String,
    attributes: NamedNodeMap,
    shadow_root: Option<ShadowRoot>,
}

impl Element {
    /// Create an element with the given tag name
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: NamedNodeMap::new(),
            shadow_root: None,
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Read an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get_attribute(name)
    }

    /// Set an attribute value
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.set_attribute(name, value);
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.has_attribute(name)
    }

    /// The element's attribute map
    pub fn attributes(&self) -> &NamedNodeMap {
        &self.attributes
    }

    /// Attach a shadow root, or return the existing one
    pub fn attach_shadow(&mut self, mode: ShadowRootMode) -> &mut ShadowRoot {
        if self.shadow_root.is_none() {
            tracing::debug!("attaching {:?} shadow root to <{}>", mode, self.tag_name);
        }
        self.shadow_root.get_or_insert_with(|| ShadowRoot::new(mode))
    }

    /// Get shadow root
    pub fn shadow_root(&self) -> Option<&ShadowRoot> {
        self.shadow_root.as_ref()
    }

    /// Get shadow root mutably
    pub fn shadow_root_mut(&mut self) -> Option<&mut ShadowRoot> {
        self.shadow_root.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_shadow_once() {
        let mut element = Element::new("md-block");
        assert!(element.shadow_root().is_none());

        element.attach_shadow(ShadowRootMode::Open);
        element.attach_shadow(ShadowRootMode::Closed);

        // The first attachment wins
        assert_eq!(element.shadow_root().unwrap().mode, ShadowRootMode::Open);
    }

    #[test]
    fn test_attributes() {
        let mut element = Element::new("counter-button");
        element.set_attribute("shadowlayers", "library, inherit");

        assert!(element.has_attribute("shadowlayers"));
        assert_eq!(element.get_attribute("shadowlayers"), Some("library, inherit"));
        assert_eq!(element.get_attribute("missing"), None);
    }
}

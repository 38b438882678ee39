//! Gated tree construction from element events.

use std::collections::HashMap;

use crate::node::{NodeRef, XmlNode};
use crate::xml::ElementHandler;

/// Builds the subtree of the first element named `root`.
///
/// Events are ignored until that element opens and again once it has
/// closed. In between, every element becomes a node under the cursor,
/// including nested elements that happen to share the root's name.
/// Closing such an inner element does not end the subtree; only closing
/// the captured root does.
#[derive(Debug)]
pub(crate) struct TreeBuilder<'a> {
    root: &'a str,
    current: Option<NodeRef>,
    is_parsing: bool,
    captured: Option<NodeRef>,
}

impl<'a> TreeBuilder<'a> {
    pub(crate) fn new(root: &'a str) -> Self {
        TreeBuilder {
            root,
            current: None,
            is_parsing: false,
            captured: None,
        }
    }

    /// Returns true while the cursor is inside the captured subtree.
    pub(crate) fn is_parsing(&self) -> bool {
        self.is_parsing
    }

    /// Consumes the builder, returning the captured root if the element
    /// was seen.
    pub(crate) fn into_root(self) -> Option<NodeRef> {
        self.captured
    }
}

impl ElementHandler for TreeBuilder<'_> {
    fn start_element(&mut self, name: &str, attributes: HashMap<String, String>) {
        if !self.is_parsing && (name != self.root || self.captured.is_some()) {
            return;
        }
        self.is_parsing = true;
        let node = XmlNode::new_child(self.current.as_ref(), name, attributes);
        if self.captured.is_none() {
            self.captured = Some(node.clone());
        }
        self.current = Some(node);
    }

    fn end_element(&mut self, name: &str) {
        if !self.is_parsing {
            return;
        }
        let parent = match self.current.take() {
            Some(node) => {
                let parent = node.borrow().parent();
                parent
            }
            None => None,
        };
        // Leaving the captured root is the only way back to the top.
        debug_assert!(parent.is_some() || name == self.root);
        self.is_parsing = parent.is_some();
        self.current = parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn no_attrs() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn test_ignores_events_outside_root() {
        let mut builder = TreeBuilder::new("alpha");
        builder.start_element("wrapper", no_attrs());
        assert!(!builder.is_parsing());
        builder.end_element("wrapper");
        assert!(builder.into_root().is_none());
    }

    #[test]
    fn test_cursor_follows_nesting() {
        let mut builder = TreeBuilder::new("alpha");
        builder.start_element("alpha", no_attrs());
        builder.start_element("beta", no_attrs());
        builder.start_element("gamma", no_attrs());
        builder.end_element("gamma");
        builder.end_element("beta");
        builder.start_element("delta", no_attrs());
        builder.end_element("delta");
        assert!(builder.is_parsing());
        builder.end_element("alpha");
        assert!(!builder.is_parsing());

        let root = builder.into_root().expect("root captured");
        let root = root.borrow();
        assert_eq!(root.tag(), "alpha");
        let tags: Vec<String> = root
            .children()
            .iter()
            .map(|c| c.borrow().tag().to_string())
            .collect();
        assert_eq!(tags, vec!["beta", "delta"]);
        assert_eq!(root.children()[0].borrow().children()[0].borrow().tag(), "gamma");
    }

    #[test]
    fn test_nested_root_name_is_ordinary_child() {
        let mut builder = TreeBuilder::new("alpha");
        builder.start_element("alpha", no_attrs());
        builder.start_element("alpha", no_attrs());
        builder.end_element("alpha");
        assert!(builder.is_parsing());
        builder.start_element("beta", no_attrs());
        builder.end_element("beta");
        builder.end_element("alpha");
        assert!(!builder.is_parsing());

        let root = builder.into_root().expect("root captured");
        assert!(root.borrow().is_root());
        assert_eq!(root.borrow().child_count(), 2);
    }

    #[test]
    fn test_first_match_wins() {
        let mut builder = TreeBuilder::new("alpha");
        let mut first = no_attrs();
        first.insert("n".to_string(), "1".to_string());
        builder.start_element("alpha", first);
        builder.end_element("alpha");

        let mut second = no_attrs();
        second.insert("n".to_string(), "2".to_string());
        builder.start_element("alpha", second);
        assert!(!builder.is_parsing());
        builder.start_element("beta", no_attrs());
        builder.end_element("beta");
        builder.end_element("alpha");

        let root = builder.into_root().expect("root captured");
        assert_eq!(root.borrow().attribute("n"), Some("1"));
        assert_eq!(root.borrow().child_count(), 0);
        assert_eq!(Rc::strong_count(&root), 1);
    }
}

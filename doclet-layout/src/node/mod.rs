//! Node structures for layout trees.
//!
//! Each node owns its children. The parent link is weak and only used to
//! move the cursor back up while a tree is being built.

mod walk;

pub use walk::walk;

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::{Rc, Weak};

use quick_xml::escape::escape;

/// A reference-counted pointer to a node.
pub type NodeRef = Rc<RefCell<XmlNode>>;

/// Weak counterpart of [`NodeRef`].
pub type WeakNodeRef = Weak<RefCell<XmlNode>>;

/// One element of a layout document.
#[derive(Debug)]
pub struct XmlNode {
    /// Element name as written in the source.
    tag: String,
    /// Attribute local name to value.
    attributes: HashMap<String, String>,
    /// Weak reference to parent node.
    parent: WeakNodeRef,
    /// Child nodes, in document order.
    children: Vec<NodeRef>,
}

impl XmlNode {
    /// Creates a node and appends it to `parent`'s children, if any.
    pub fn new_child(
        parent: Option<&NodeRef>,
        tag: impl Into<String>,
        attributes: HashMap<String, String>,
    ) -> NodeRef {
        let node = Rc::new(RefCell::new(XmlNode {
            tag: tag.into(),
            attributes,
            parent: parent.map(Rc::downgrade).unwrap_or_default(),
            children: Vec::new(),
        }));
        if let Some(parent) = parent {
            parent.borrow_mut().children.push(Rc::clone(&node));
        }
        node
    }

    /// Returns the element name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the attributes.
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    /// Returns the value of a single attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns the children as a slice.
    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    /// Returns the number of children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns the first child with the given tag.
    pub fn find_child(&self, tag: &str) -> Option<NodeRef> {
        self.children
            .iter()
            .find(|child| child.borrow().tag == tag)
            .cloned()
    }

    /// Returns the parent, if it is still alive.
    pub fn parent(&self) -> Option<NodeRef> {
        self.parent.upgrade()
    }

    /// Returns true if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.strong_count() == 0
    }
}

impl fmt::Display for XmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        let sorted: BTreeMap<_, _> = self.attributes.iter().collect();
        for (name, value) in sorted {
            write!(f, " {}=\"{}\"", name, escape(value.as_str()))?;
        }
        if self.children.is_empty() {
            return f.write_str("/>");
        }
        f.write_str(">")?;
        for child in &self.children {
            write!(f, "{}", child.borrow())?;
        }
        write!(f, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_new_child_links_parent() {
        let parent = XmlNode::new_child(None, "ClassDoc", HashMap::new());
        let child = XmlNode::new_child(Some(&parent), "ClassTree", HashMap::new());

        assert_eq!(parent.borrow().child_count(), 1);
        assert!(Rc::ptr_eq(&parent.borrow().children()[0], &child));

        let back = child.borrow().parent().expect("should have parent");
        assert!(Rc::ptr_eq(&back, &parent));
        assert!(parent.borrow().is_root());
        assert!(!child.borrow().is_root());
    }

    #[test]
    fn test_attribute_lookup() {
        let node = XmlNode::new_child(None, "alpha", attrs(&[("x", "1")]));
        assert_eq!(node.borrow().attribute("x"), Some("1"));
        assert_eq!(node.borrow().attribute("y"), None);
    }

    #[test]
    fn test_find_child() {
        let root = XmlNode::new_child(None, "Summary", HashMap::new());
        XmlNode::new_child(Some(&root), "ClassSummary", HashMap::new());
        let second = XmlNode::new_child(Some(&root), "EnumSummary", HashMap::new());

        let found = root.borrow().find_child("EnumSummary").expect("child");
        assert!(Rc::ptr_eq(&found, &second));
        assert!(root.borrow().find_child("Missing").is_none());
    }

    #[test]
    fn test_display_empty_element() {
        let node = XmlNode::new_child(None, "beta", attrs(&[("y", "2")]));
        assert_eq!(node.borrow().to_string(), r#"<beta y="2"/>"#);
    }

    #[test]
    fn test_display_nested_sorted_escaped() {
        let root = XmlNode::new_child(None, "alpha", attrs(&[("z", "a&b"), ("x", "1")]));
        XmlNode::new_child(Some(&root), "beta", HashMap::new());
        assert_eq!(
            root.borrow().to_string(),
            r#"<alpha x="1" z="a&amp;b"><beta/></alpha>"#
        );
    }
}

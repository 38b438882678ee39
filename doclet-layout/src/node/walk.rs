//! Depth-first traversal of layout trees.

use super::{NodeRef, XmlNode};

/// Visits `node` and all its descendants in document order.
///
/// The callback receives each node together with its depth below `node`,
/// which is visited at depth 0. This is the order in which builders named
/// by a layout are run.
pub fn walk<F>(node: &NodeRef, visit: &mut F)
where
    F: FnMut(&XmlNode, usize),
{
    walk_at(node, 0, visit);
}

fn walk_at<F>(node: &NodeRef, depth: usize, visit: &mut F)
where
    F: FnMut(&XmlNode, usize),
{
    let borrowed = node.borrow();
    visit(&borrowed, depth);
    for child in borrowed.children() {
        walk_at(child, depth + 1, visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_walk_preorder_with_depth() {
        let root = XmlNode::new_child(None, "a", HashMap::new());
        let b = XmlNode::new_child(Some(&root), "b", HashMap::new());
        XmlNode::new_child(Some(&b), "c", HashMap::new());
        XmlNode::new_child(Some(&root), "d", HashMap::new());

        let mut seen = Vec::new();
        walk(&root, &mut |node: &XmlNode, depth: usize| {
            seen.push((node.tag().to_string(), depth))
        });

        assert_eq!(
            seen,
            vec![
                ("a".to_string(), 0),
                ("b".to_string(), 1),
                ("c".to_string(), 2),
                ("d".to_string(), 1),
            ]
        );
    }
}

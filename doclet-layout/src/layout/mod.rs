//! Cached layout loading.
//!
//! [`LayoutParser`] parses the layout document once per requested root
//! element and keeps the resulting trees for the lifetime of the parser.
//! The parser is single-threaded; callers sharing one across threads must
//! serialize access themselves.

mod builder;

use std::collections::HashMap;

use builder::TreeBuilder;

use crate::config::{LayoutConfiguration, LayoutSource};
use crate::constants::{DEFAULT_BUILDER_XML, MSG_READ_FILE, MSG_READ_RESOURCE};
use crate::error::{Error, ReadFailure, Result};
use crate::node::NodeRef;
use crate::xml::read_elements;

/// Loads layout trees from a configuration and caches them by root tag.
pub struct LayoutParser<C: LayoutConfiguration> {
    configuration: C,
    /// Parsed trees keyed by root tag.
    elements: HashMap<String, NodeRef>,
}

impl<C: LayoutConfiguration> LayoutParser<C> {
    /// Creates a parser with an empty cache.
    pub fn new(configuration: C) -> Self {
        LayoutParser {
            configuration,
            elements: HashMap::new(),
        }
    }

    /// Returns the configuration this parser reads from.
    pub fn configuration(&self) -> &C {
        &self.configuration
    }

    /// Returns true if the tree for `root` is already cached.
    pub fn is_cached(&self, root: &str) -> bool {
        self.elements.contains_key(root)
    }

    /// Returns the subtree rooted at the first element named `root`.
    ///
    /// A cached tree is returned as is, without touching the source. On a
    /// miss the whole layout document is read once. `Ok(None)` means the
    /// document was read successfully but has no such element.
    ///
    /// Nothing is cached when reading fails, so a later call reads the
    /// source again.
    pub fn fetch(&mut self, root: &str) -> Result<Option<NodeRef>> {
        if let Some(node) = self.elements.get(root) {
            tracing::trace!(root, "layout cache hit");
            return Ok(Some(node.clone()));
        }

        tracing::debug!(root, source = ?self.configuration.layout_source(), "parsing layout");
        let mut builder = TreeBuilder::new(root);
        self.configuration
            .open_layout()
            .map_err(ReadFailure::from)
            .and_then(|source| read_elements(source, &mut builder))
            .map_err(|cause| self.wrap_failure(cause))?;
        debug_assert!(!builder.is_parsing());

        match builder.into_root() {
            Some(node) => {
                tracing::debug!(root, children = node.borrow().child_count(), "layout parsed");
                self.elements.insert(root.to_string(), node.clone());
                Ok(Some(node))
            }
            None => {
                tracing::debug!(root, "layout has no such element");
                Ok(None)
            }
        }
    }

    /// Wraps a read failure into the error kind matching the layout source.
    fn wrap_failure(&self, cause: ReadFailure) -> Error {
        let resources = self.configuration.resources();
        match self.configuration.layout_source() {
            LayoutSource::File(path) => {
                let message = resources.text(MSG_READ_FILE, &[&path.display(), &cause]);
                Error::FileRead {
                    path,
                    message,
                    source: cause,
                }
            }
            LayoutSource::Default => {
                let message = resources.text(MSG_READ_RESOURCE, &[&DEFAULT_BUILDER_XML, &cause]);
                Error::ResourceRead {
                    resource: DEFAULT_BUILDER_XML.to_string(),
                    message,
                    source: cause,
                }
            }
        }
    }
}

//! Doclet layout loading.
//!
//! This library reads the XML document that describes the order in which
//! documentation builders run, and hands out the part of it rooted at a
//! requested element as a node tree.
//!
//! # Overview
//!
//! The layout is read with a streaming parser. Only the subtree of the
//! first element whose name matches the requested root is kept, and that
//! subtree is cached, so asking for the same root again does no I/O.
//!
//! The layout comes either from a user-supplied file or from the copy
//! bundled with this crate. Read failures are reported as
//! [`Error::FileRead`] or [`Error::ResourceRead`] accordingly.
//!
//! # Example
//!
//! ```
//! use doclet_layout::{DocletConfiguration, LayoutParser};
//!
//! let mut parser = LayoutParser::new(DocletConfiguration::new());
//! let class_doc = parser.fetch("ClassDoc")?.expect("bundled layout has ClassDoc");
//! assert_eq!(class_doc.borrow().children()[0].borrow().tag(), "ClassTree");
//! # Ok::<(), doclet_layout::Error>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod node;
pub mod resources;
pub mod xml;

// Re-export commonly used types
pub use config::{DocletConfiguration, LayoutConfiguration, LayoutSource, DEFAULT_LAYOUT};
pub use constants::*;
pub use error::{Error, ReadFailure, Result};
pub use layout::LayoutParser;
pub use node::{walk, NodeRef, WeakNodeRef, XmlNode};
pub use resources::Resources;
pub use xml::{read_elements, ElementHandler};

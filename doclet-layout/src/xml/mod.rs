//! Streaming XML input.
//!
//! Layout documents are consumed as a flat sequence of element start and end
//! events. Anything that wants to build structure from them implements
//! [`ElementHandler`].

mod parser;

pub use parser::read_elements;

use std::collections::HashMap;

/// Receiver of element events during a streaming read.
pub trait ElementHandler {
    /// Called when an element opens, with its attributes keyed by local name.
    fn start_element(&mut self, name: &str, attributes: HashMap<String, String>);

    /// Called when an element closes.
    fn end_element(&mut self, name: &str);
}

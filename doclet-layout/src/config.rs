//! Where layouts come from.
//!
//! A [`LayoutConfiguration`] hands the parser a fresh byte stream for each
//! parse, tells it whether that stream is a user file or the bundled
//! resource, and supplies the messages used when reading fails.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::resources::Resources;

/// The layout bundled with the library.
pub const DEFAULT_LAYOUT: &str = include_str!("../resources/doclet.xml");

/// Provenance of a layout stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSource {
    /// A layout file named by the user.
    File(PathBuf),
    /// The layout bundled with the library.
    Default,
}

/// Collaborator that provides layout input and messages.
pub trait LayoutConfiguration {
    /// Returns where [`open_layout`](Self::open_layout) reads from.
    fn layout_source(&self) -> LayoutSource;

    /// Opens a new stream over the layout document.
    ///
    /// The stream is owned by the caller and closed when dropped.
    fn open_layout(&self) -> io::Result<Box<dyn BufRead + '_>>;

    /// Returns the message table used for error reporting.
    fn resources(&self) -> &Resources;
}

/// Standard configuration: an optional user layout file, falling back to
/// the bundled layout.
#[derive(Debug, Clone, Default)]
pub struct DocletConfiguration {
    builder_xml_path: Option<PathBuf>,
    resources: Resources,
}

impl DocletConfiguration {
    /// Creates a configuration that reads the bundled layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the layout from `path` instead of the bundled resource.
    pub fn with_builder_xml<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.builder_xml_path = Some(path.into());
        self
    }

    /// Replaces the message table.
    pub fn with_resources(mut self, resources: Resources) -> Self {
        self.resources = resources;
        self
    }

    /// Returns the user layout path, if one was given.
    pub fn builder_xml_path(&self) -> Option<&Path> {
        self.builder_xml_path.as_deref()
    }
}

impl LayoutConfiguration for DocletConfiguration {
    fn layout_source(&self) -> LayoutSource {
        match &self.builder_xml_path {
            Some(path) => LayoutSource::File(path.clone()),
            None => LayoutSource::Default,
        }
    }

    fn open_layout(&self) -> io::Result<Box<dyn BufRead + '_>> {
        match &self.builder_xml_path {
            Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            None => Ok(Box::new(DEFAULT_LAYOUT.as_bytes())),
        }
    }

    fn resources(&self) -> &Resources {
        &self.resources
    }
}

//! Constants shared by the layout loader.

/// Identifier of the layout resource bundled with the library.
pub const DEFAULT_BUILDER_XML: &str = "resources/doclet.xml";

/// Message key used when a user-supplied layout file cannot be read.
pub const MSG_READ_FILE: &str = "doclet.exception.read.file";

/// Message key used when the bundled layout resource cannot be read.
pub const MSG_READ_RESOURCE: &str = "doclet.exception.read.resource";

/// Root element of the bundled layout.
pub const DOCLET_ROOT: &str = "Doclet";

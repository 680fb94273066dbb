//! XML writing and a minimal element tree for reading responses.

pub mod tree;
pub mod writer;

pub use tree::XmlNode;
pub use writer::XmlWriter;

//! Widget visibility mapping - schema scanning and document generation

pub mod mappings;
pub mod scanner;

// Re-export scanner types
pub use scanner::{scan_all_nodes, scan_registry, NodeVisibility, SelectorTable};

// Re-export mapping document types
pub use mappings::{generate_mappings, write_mappings, MappingDocument, MAPPINGS_VERSION};

//! Dynamic widgets core library
//!
//! Derives a declarative widget visibility mapping from metadata attached to
//! node input definitions. Node authors mark a widget with `visible_when`
//! ("show this widget only while the backend selector is set to
//! blender_voxel"); scanning the node registry collects those conditions into
//! a versioned document that a UI runtime consumes to toggle widget
//! visibility without any further logic.

// Node system: descriptor capability, registry, schema authoring
pub mod nodes;

// Visibility mapping: schema scanning and document generation
pub mod visibility;

// Re-export commonly used types
pub use nodes::{
    install_global_registry, InputSchema, NodeDescriptor, NodeRegistry, WidgetDefinition,
};
pub use visibility::{
    generate_mappings, scan_all_nodes, scan_registry, write_mappings, MappingDocument,
    NodeVisibility, SelectorTable, MAPPINGS_VERSION,
};

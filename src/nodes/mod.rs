//! Node system - descriptor capability, registry, and schema authoring

pub mod factory;
pub mod interface;

// Re-export factory types
pub use factory::{
    install_global_registry, with_global_registry, NodeDescriptor, NodeRegistry,
};

// Re-export interface types
pub use interface::{InputSchema, WidgetDefinition};

//! Node descriptor system with registry and a process-wide install point

use std::collections::BTreeMap;
use std::sync::RwLock;

use log::{debug, warn};
use once_cell::sync::Lazy;
use serde_json::Value;

/// Capability exposed by node types that declare input widgets.
///
/// The schema value is deliberately loose: hosts assemble it from
/// heterogeneous sources, so all shape checking happens at scan time.
pub trait NodeDescriptor: Send + Sync {
    /// Produce the `{required, optional}` input schema for this node.
    ///
    /// Returns `None` when the node declares no widget metadata at all (the
    /// common case for registry entries that are not visibility-aware), and
    /// `Some(Err(_))` when the schema exists but could not be produced.
    fn input_schema(&self) -> Option<Result<Value, String>> {
        None
    }
}

/// Registry mapping node type names to their descriptors.
pub struct NodeRegistry {
    descriptors: BTreeMap<String, Box<dyn NodeDescriptor>>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Register a descriptor under a node type name, replacing any
    /// earlier registration for the same name
    pub fn register(&mut self, node_type: &str, descriptor: Box<dyn NodeDescriptor>) {
        if self
            .descriptors
            .insert(node_type.to_string(), descriptor)
            .is_some()
        {
            debug!("Replacing descriptor for node type: {}", node_type);
        }
    }

    /// Get the descriptor for a node type
    pub fn get(&self, node_type: &str) -> Option<&dyn NodeDescriptor> {
        self.descriptors.get(node_type).map(|d| d.as_ref())
    }

    /// Iterate descriptors in node type name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn NodeDescriptor)> {
        self.descriptors
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide registry consumed by the convenience scan path
static GLOBAL_REGISTRY: Lazy<RwLock<Option<NodeRegistry>>> = Lazy::new(|| RwLock::new(None));

/// Install the process-wide registry used by `scan_all_nodes`.
pub fn install_global_registry(registry: NodeRegistry) {
    match GLOBAL_REGISTRY.write() {
        Ok(mut slot) => {
            if slot.is_some() {
                debug!("Replacing previously installed node registry");
            }
            *slot = Some(registry);
        }
        Err(_) => warn!("Failed to lock global node registry for install"),
    }
}

/// Run `f` against the installed registry, or return `None` when no
/// registry has been installed.
pub fn with_global_registry<R>(f: impl FnOnce(&NodeRegistry) -> R) -> Option<R> {
    match GLOBAL_REGISTRY.read() {
        Ok(slot) => slot.as_ref().map(f),
        Err(_) => {
            warn!("Failed to lock global node registry for read");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct StaticSchema(Value);

    impl NodeDescriptor for StaticSchema {
        fn input_schema(&self) -> Option<Result<Value, String>> {
            Some(Ok(self.0.clone()))
        }
    }

    struct NoSchema;

    impl NodeDescriptor for NoSchema {}

    #[test]
    fn test_register_and_get() {
        let mut registry = NodeRegistry::new();
        registry.register("Add", Box::new(NoSchema));
        registry.register("VoxelNode", Box::new(StaticSchema(json!({"required": {}}))));

        assert_eq!(registry.len(), 2);
        assert!(registry.get("Add").is_some());
        assert!(registry.get("Add").unwrap().input_schema().is_none());
        assert!(registry.get("Missing").is_none());
    }

    #[test]
    fn test_register_replaces_earlier_descriptor() {
        let mut registry = NodeRegistry::new();
        registry.register("VoxelNode", Box::new(StaticSchema(json!({"old": true}))));
        registry.register("VoxelNode", Box::new(StaticSchema(json!({"new": true}))));

        assert_eq!(registry.len(), 1);
        let schema = registry
            .get("VoxelNode")
            .unwrap()
            .input_schema()
            .unwrap()
            .unwrap();
        assert_eq!(schema, json!({"new": true}));
    }

    #[test]
    fn test_iter_is_name_ordered() {
        let mut registry = NodeRegistry::new();
        registry.register("Zeta", Box::new(NoSchema));
        registry.register("Alpha", Box::new(NoSchema));
        registry.register("Mid", Box::new(NoSchema));

        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
    }
}

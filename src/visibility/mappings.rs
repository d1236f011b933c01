//! Versioned visibility mapping document and file output

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::nodes::factory::NodeRegistry;
use crate::visibility::scanner::{self, NodeVisibility};

/// Document shape version consumed by the UI runtime. Bump only on a
/// breaking change to the mapping layout.
pub const MAPPINGS_VERSION: u32 = 1;

/// The persisted artifact: every node's visibility configuration under a
/// stable version tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingDocument {
    pub version: u32,
    pub nodes: BTreeMap<String, NodeVisibility>,
}

/// Wrap scan results in the versioned document shape.
pub fn generate_mappings(nodes: BTreeMap<String, NodeVisibility>) -> MappingDocument {
    MappingDocument {
        version: MAPPINGS_VERSION,
        nodes,
    }
}

/// Scan `registry` and write the resulting document to `path`.
///
/// Nothing is written when no node declares a visibility condition, so an
/// existing document at `path` is left untouched.
pub fn write_mappings(registry: &NodeRegistry, path: &Path) -> Result<(), String> {
    let nodes = scanner::scan_registry(registry);
    if nodes.is_empty() {
        return Ok(());
    }

    let document = generate_mappings(nodes);
    let json_content = serde_json::to_string_pretty(&document)
        .map_err(|e| format!("Failed to serialize visibility mappings: {}", e))?;

    std::fs::write(path, json_content)
        .map_err(|e| format!("Failed to write mappings file {}: {}", path.display(), e))
}

//! Schema traversal extracting `visible_when` conditions from node inputs

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::nodes::factory::{self, NodeDescriptor, NodeRegistry};

/// Selector table for one node: selector widget name → trigger value →
/// dependent widget names in first-seen order.
pub type SelectorTable = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// Visibility configuration contributed by one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeVisibility {
    pub selectors: SelectorTable,
}

// Schema sections scanned, in contribution order
const SCHEMA_SECTIONS: [&str; 2] = ["required", "optional"];

/// Scan every descriptor in `registry` and collect widget visibility
/// conditions per node.
///
/// Nodes without widget metadata, and nodes whose schema carries no
/// `visible_when` entries, are absent from the result. A descriptor whose
/// schema accessor fails is reported and skipped; it never affects the
/// scan of other nodes.
pub fn scan_registry(registry: &NodeRegistry) -> BTreeMap<String, NodeVisibility> {
    let mut results = BTreeMap::new();

    for (node_type, descriptor) in registry.iter() {
        if let Some(config) = scan_descriptor(node_type, descriptor) {
            results.insert(node_type.to_string(), config);
        }
    }

    results
}

/// Scan the process-wide registry installed via `install_global_registry`.
///
/// Returns an empty mapping when no registry has been installed.
pub fn scan_all_nodes() -> BTreeMap<String, NodeVisibility> {
    match factory::with_global_registry(scan_registry) {
        Some(results) => results,
        None => {
            warn!("No node registry installed; widget visibility scan skipped");
            BTreeMap::new()
        }
    }
}

/// Scan a single descriptor for `visible_when` metadata.
fn scan_descriptor(node_type: &str, descriptor: &dyn NodeDescriptor) -> Option<NodeVisibility> {
    let schema = match descriptor.input_schema() {
        None => return None,
        Some(Err(err)) => {
            warn!("Failed to read input schema for {}: {}", node_type, err);
            return None;
        }
        Some(Ok(schema)) => schema,
    };
    let schema = schema.as_object()?;

    let mut selectors = SelectorTable::new();

    for section in SCHEMA_SECTIONS {
        let widgets = match schema.get(section).and_then(Value::as_object) {
            Some(widgets) => widgets,
            None => continue,
        };

        for (widget_name, widget_def) in widgets {
            if let Some(condition) = extract_visible_when(widget_def) {
                record_condition(&mut selectors, widget_name, condition);
            }
        }
    }

    if selectors.is_empty() {
        None
    } else {
        Some(NodeVisibility { selectors })
    }
}

/// Pull the `visible_when` condition out of a widget definition, if any.
///
/// Definitions are `[type, options]` pairs with at least two elements; any
/// deviation from that shape simply carries no condition.
fn extract_visible_when(widget_def: &Value) -> Option<&Map<String, Value>> {
    let items = widget_def.as_array()?;
    if items.len() < 2 {
        return None;
    }
    let options = items[1].as_object()?;
    options.get("visible_when")?.as_object()
}

/// Fold one widget's condition into the node's selector table.
fn record_condition(selectors: &mut SelectorTable, widget_name: &str, condition: &Map<String, Value>) {
    for (selector_name, values) in condition {
        // A bare scalar means a single trigger value
        let values: Vec<&Value> = match values {
            Value::Array(items) => items.iter().collect(),
            single => vec![single],
        };

        let by_value = selectors.entry(selector_name.clone()).or_default();
        for value in values {
            let widgets = by_value.entry(trigger_value_string(value)).or_default();
            if !widgets.iter().any(|name| name == widget_name) {
                widgets.push(widget_name.to_string());
            }
        }
    }
}

/// Trigger values are stored by their string form: strings contribute their
/// text, everything else its JSON rendering.
fn trigger_value_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

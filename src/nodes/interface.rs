//! Widget definition authoring for node input schemas

use serde_json::{Map, Value};

/// A single input widget definition: a widget type tag plus an open options
/// record.
///
/// The rendered form is a `[type, options]` pair, e.g.
/// `["FLOAT", {"default": 0.1, "visible_when": {"backend": ["blender_voxel"]}}]`.
#[derive(Debug, Clone)]
pub struct WidgetDefinition {
    widget_type: String,
    options: Map<String, Value>,
}

impl WidgetDefinition {
    /// Create a widget definition with the given type tag
    pub fn new(widget_type: &str) -> Self {
        Self {
            widget_type: widget_type.to_string(),
            options: Map::new(),
        }
    }

    /// Builder pattern methods for fluent configuration
    pub fn with_option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }

    pub fn with_default(self, value: impl Into<Value>) -> Self {
        self.with_option("default", value)
    }

    /// Show this widget only while `selector` holds one of `values`.
    ///
    /// `values` may be a bare scalar or an array of scalars. Calling this
    /// again with another selector name extends the same condition.
    pub fn visible_when(mut self, selector: &str, values: impl Into<Value>) -> Self {
        let condition = self
            .options
            .entry("visible_when".to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = condition {
            map.insert(selector.to_string(), values.into());
        }
        self
    }

    /// Render the `[type, options]` pair consumed by schema scanning
    pub fn to_value(&self) -> Value {
        Value::Array(vec![
            Value::String(self.widget_type.clone()),
            Value::Object(self.options.clone()),
        ])
    }
}

/// Input schema for a node: required and optional widget sections, kept in
/// declaration order.
#[derive(Debug, Clone, Default)]
pub struct InputSchema {
    required: Map<String, Value>,
    optional: Map<String, Value>,
}

impl InputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a widget to the required section
    pub fn required(mut self, name: &str, definition: WidgetDefinition) -> Self {
        self.required.insert(name.to_string(), definition.to_value());
        self
    }

    /// Add a widget to the optional section
    pub fn optional(mut self, name: &str, definition: WidgetDefinition) -> Self {
        self.optional.insert(name.to_string(), definition.to_value());
        self
    }

    /// Render the `{required, optional}` object; empty sections are omitted
    pub fn to_value(&self) -> Value {
        let mut schema = Map::new();
        if !self.required.is_empty() {
            schema.insert("required".to_string(), Value::Object(self.required.clone()));
        }
        if !self.optional.is_empty() {
            schema.insert("optional".to_string(), Value::Object(self.optional.clone()));
        }
        Value::Object(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_widget_definition_rendered_shape() {
        let definition = WidgetDefinition::new("FLOAT")
            .with_default(0.1)
            .visible_when("backend", json!(["blender_voxel"]));

        assert_eq!(
            definition.to_value(),
            json!(["FLOAT", {
                "default": 0.1,
                "visible_when": {"backend": ["blender_voxel"]}
            }])
        );
    }

    #[test]
    fn test_visible_when_accepts_bare_scalar() {
        let definition = WidgetDefinition::new("INT").visible_when("mode", "advanced");

        assert_eq!(
            definition.to_value(),
            json!(["INT", {"visible_when": {"mode": "advanced"}}])
        );
    }

    #[test]
    fn test_visible_when_extends_condition_per_selector() {
        let definition = WidgetDefinition::new("STRING")
            .visible_when("backend", json!(["a"]))
            .visible_when("mode", json!(["x", "y"]));

        assert_eq!(
            definition.to_value(),
            json!(["STRING", {
                "visible_when": {"backend": ["a"], "mode": ["x", "y"]}
            }])
        );
    }

    #[test]
    fn test_schema_omits_empty_sections() {
        let schema = InputSchema::new().required("backend", WidgetDefinition::new("STRING"));

        assert_eq!(
            schema.to_value(),
            json!({"required": {"backend": ["STRING", {}]}})
        );
        assert_eq!(InputSchema::new().to_value(), json!({}));
    }

    #[test]
    fn test_schema_preserves_declaration_order() {
        let schema = InputSchema::new()
            .required("zoom", WidgetDefinition::new("FLOAT"))
            .required("backend", WidgetDefinition::new("STRING"))
            .optional("axis", WidgetDefinition::new("STRING"));

        let value = schema.to_value();
        let required = value["required"].as_object().unwrap();
        let names: Vec<&String> = required.keys().collect();
        assert_eq!(names, vec!["zoom", "backend"]);
        assert!(value["optional"].as_object().unwrap().contains_key("axis"));
    }
}

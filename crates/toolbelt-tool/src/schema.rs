use schemars::{JsonSchema, schema_for};
use serde_json::Value;

/// Generates JSON schema from a Rust type
pub fn generate_schema<T: JsonSchema>() -> Value {
    let schema = schema_for!(T);
    serde_json::to_value(schema).unwrap_or(Value::Null)
}

/// Tool schema builder for manual schema creation
#[derive(Debug, Clone)]
pub struct ToolSchema {
    pub type_: String,
    pub properties: serde_json::Map<String, Value>,
    pub required: Vec<String>,
}

impl ToolSchema {
    pub fn new() -> Self {
        Self {
            type_: "object".to_string(),
            properties: serde_json::Map::new(),
            required: Vec::new(),
        }
    }

    pub fn property(
        mut self,
        name: impl Into<String>,
        type_: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let mut prop = serde_json::Map::new();
        prop.insert("type".to_string(), Value::String(type_.into()));
        prop.insert("description".to_string(), Value::String(description.into()));

        self.properties.insert(name.into(), Value::Object(prop));
        self
    }

    /// Adds a string property restricted to a fixed set of values
    pub fn enum_property(
        mut self,
        name: impl Into<String>,
        values: &[&str],
        description: impl Into<String>,
    ) -> Self {
        let mut prop = serde_json::Map::new();
        prop.insert("type".to_string(), Value::String("string".to_string()));
        prop.insert(
            "enum".to_string(),
            Value::Array(values.iter().map(|v| Value::String(v.to_string())).collect()),
        );
        prop.insert("description".to_string(), Value::String(description.into()));

        self.properties.insert(name.into(), Value::Object(prop));
        self
    }

    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    pub fn build(self) -> Value {
        let mut schema = serde_json::Map::new();
        schema.insert("type".to_string(), Value::String(self.type_));
        schema.insert("properties".to_string(), Value::Object(self.properties));
        schema.insert(
            "required".to_string(),
            Value::Array(self.required.into_iter().map(Value::String).collect()),
        );

        Value::Object(schema)
    }
}

impl Default for ToolSchema {
    fn default() -> Self {
        Self::new()
    }
}

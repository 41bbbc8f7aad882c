//! JSON parse node

use base64::{engine::general_purpose::STANDARD, Engine as _};
use betasdk_core::{ParseNode, ParseOptions, SerializationError, SerializationResult};
use serde_json::Value;

/// A parsed JSON payload and the options its nodes read with.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    value: Value,
    options: ParseOptions,
}

impl JsonDocument {
    pub fn from_slice(bytes: &[u8]) -> SerializationResult<Self> {
        let value = serde_json::from_slice(bytes).map_err(|e| {
            tracing::debug!(len = bytes.len(), line = e.line(), column = e.column(), "malformed JSON payload");
            SerializationError::malformed(e)
        })?;
        Ok(Self::from_value(value))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> SerializationResult<Self> {
        Self::from_slice(text.as_bytes())
    }

    pub fn from_value(value: Value) -> Self {
        Self {
            value,
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn root(&self) -> JsonParseNode<'_> {
        JsonParseNode::new(&self.value, &self.options)
    }
}

/// Borrowed view over one JSON value.
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
    options: &'a ParseOptions,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value, options: &'a ParseOptions) -> Self {
        Self { value, options }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn child(&self, value: &'a Value) -> Box<dyn ParseNode + 'a> {
        Box::new(JsonParseNode::new(value, self.options))
    }

    fn mismatch(&self, expected: &'static str) -> SerializationError {
        SerializationError::type_mismatch(expected, kind_of(self.value))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl ParseNode for JsonParseNode<'_> {
    fn options(&self) -> &ParseOptions {
        self.options
    }

    fn child_node(&self, key: &str) -> SerializationResult<Option<Box<dyn ParseNode + '_>>> {
        match self.value {
            Value::Object(map) => Ok(map.get(key).map(|v| self.child(v))),
            _ => Ok(None),
        }
    }

    fn object_entries(&self) -> SerializationResult<Option<Vec<(String, Box<dyn ParseNode + '_>)>>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Object(map) => Ok(Some(
                map.iter().map(|(k, v)| (k.clone(), self.child(v))).collect(),
            )),
            _ => Err(self.mismatch("object")),
        }
    }

    fn collection_elements(&self) -> SerializationResult<Option<Vec<Box<dyn ParseNode + '_>>>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(items.iter().map(|v| self.child(v)).collect())),
            _ => Err(self.mismatch("array")),
        }
    }

    fn string_value(&self) -> SerializationResult<Option<String>> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            _ => Err(self.mismatch("string")),
        }
    }

    fn bool_value(&self) -> SerializationResult<Option<bool>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            _ => Err(self.mismatch("bool")),
        }
    }

    fn i32_value(&self) -> SerializationResult<Option<i32>> {
        match self.i64_value()? {
            Some(v) => i32::try_from(v)
                .map(Some)
                .map_err(|_| SerializationError::type_mismatch("int32", v.to_string())),
            None => Ok(None),
        }
    }

    fn i64_value(&self) -> SerializationResult<Option<i64>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| SerializationError::type_mismatch("int64", n.to_string())),
            _ => Err(self.mismatch("int64")),
        }
    }

    fn f64_value(&self) -> SerializationResult<Option<f64>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| SerializationError::type_mismatch("float64", n.to_string())),
            _ => Err(self.mismatch("float64")),
        }
    }

    fn byte_array_value(&self) -> SerializationResult<Option<Vec<u8>>> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => STANDARD
                .decode(s)
                .map(Some)
                .map_err(|e| SerializationError::invalid_format("base64", s.as_str(), e)),
            _ => Err(self.mismatch("base64 string")),
        }
    }

    fn untyped_value(&self) -> SerializationResult<Value> {
        Ok(self.value.clone())
    }
}

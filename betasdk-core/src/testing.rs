//! In-crate node and writer doubles for unit tests

use crate::config::{ParseOptions, WriterOptions};
use crate::error::{SerializationError, SerializationResult};
use crate::parse_node::ParseNode;
use crate::writer::SerializationWriter;
use serde_json::Value;

/// Read-only view over a `serde_json::Value`.
pub struct ValueNode<'a> {
    pub value: &'a Value,
    pub options: ParseOptions,
}

impl<'a> ValueNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            options: ParseOptions::default(),
        }
    }

    fn child(&self, value: &'a Value) -> Box<dyn ParseNode + 'a> {
        Box::new(ValueNode {
            value,
            options: self.options.clone(),
        })
    }
}

impl ParseNode for ValueNode<'_> {
    fn options(&self) -> &ParseOptions {
        &self.options
    }

    fn child_node(&self, key: &str) -> SerializationResult<Option<Box<dyn ParseNode + '_>>> {
        Ok(self.value.get(key).map(|v| self.child(v)))
    }

    fn object_entries(&self) -> SerializationResult<Option<Vec<(String, Box<dyn ParseNode + '_>)>>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Object(map) => Ok(Some(
                map.iter().map(|(k, v)| (k.clone(), self.child(v))).collect(),
            )),
            other => Err(SerializationError::type_mismatch("object", other.to_string())),
        }
    }

    fn collection_elements(&self) -> SerializationResult<Option<Vec<Box<dyn ParseNode + '_>>>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(items.iter().map(|v| self.child(v)).collect())),
            other => Err(SerializationError::type_mismatch("array", other.to_string())),
        }
    }

    fn string_value(&self) -> SerializationResult<Option<String>> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            other => Err(SerializationError::type_mismatch("string", other.to_string())),
        }
    }

    fn bool_value(&self) -> SerializationResult<Option<bool>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            other => Err(SerializationError::type_mismatch("bool", other.to_string())),
        }
    }

    fn i32_value(&self) -> SerializationResult<Option<i32>> {
        self.i64_value()?
            .map(|v| {
                i32::try_from(v).map_err(|_| SerializationError::type_mismatch("int32", v.to_string()))
            })
            .transpose()
    }

    fn i64_value(&self) -> SerializationResult<Option<i64>> {
        match self.value {
            Value::Null => Ok(None),
            other => other
                .as_i64()
                .map(Some)
                .ok_or_else(|| SerializationError::type_mismatch("int64", other.to_string())),
        }
    }

    fn f64_value(&self) -> SerializationResult<Option<f64>> {
        match self.value {
            Value::Null => Ok(None),
            other => other
                .as_f64()
                .map(Some)
                .ok_or_else(|| SerializationError::type_mismatch("float64", other.to_string())),
        }
    }

    fn byte_array_value(&self) -> SerializationResult<Option<Vec<u8>>> {
        Err(SerializationError::type_mismatch("bytes", "unsupported in ValueNode"))
    }

    fn untyped_value(&self) -> SerializationResult<Value> {
        Ok(self.value.clone())
    }
}

/// Records every call as a line of text.
#[derive(Default)]
pub struct EventWriter {
    pub options: WriterOptions,
    pub events: Vec<String>,
}

impl EventWriter {
    fn push(&mut self, key: &str, text: String) {
        self.events.push(format!("{}={}", key, text));
    }
}

impl SerializationWriter for EventWriter {
    fn options(&self) -> &WriterOptions {
        &self.options
    }

    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> SerializationResult<()> {
        if let Some(v) = value {
            self.push(key, format!("{:?}", v));
        }
        Ok(())
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> SerializationResult<()> {
        if let Some(v) = value {
            self.push(key, v.to_string());
        }
        Ok(())
    }

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> SerializationResult<()> {
        if let Some(v) = value {
            self.push(key, v.to_string());
        }
        Ok(())
    }

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> SerializationResult<()> {
        if let Some(v) = value {
            self.push(key, v.to_string());
        }
        Ok(())
    }

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> SerializationResult<()> {
        if let Some(v) = value {
            self.push(key, v.to_string());
        }
        Ok(())
    }

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> SerializationResult<()> {
        if let Some(v) = value {
            self.push(key, format!("{:?}", v));
        }
        Ok(())
    }

    fn write_untyped_value(&mut self, key: &str, value: Option<&Value>) -> SerializationResult<()> {
        if let Some(v) = value {
            self.push(key, v.to_string());
        }
        Ok(())
    }

    fn start_object(&mut self, key: &str) -> SerializationResult<()> {
        self.push(key, "{".to_string());
        Ok(())
    }

    fn end_object(&mut self) -> SerializationResult<()> {
        self.events.push("}".to_string());
        Ok(())
    }

    fn start_collection(&mut self, key: &str) -> SerializationResult<()> {
        self.push(key, "[".to_string());
        Ok(())
    }

    fn end_collection(&mut self) -> SerializationResult<()> {
        self.events.push("]".to_string());
        Ok(())
    }
}

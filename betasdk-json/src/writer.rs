//! JSON serialization writer

use base64::{engine::general_purpose::STANDARD, Engine as _};
use betasdk_core::{SerializationError, SerializationResult, SerializationWriter, WriterOptions};
use serde_json::{Map, Number, Value};

#[derive(Debug)]
enum Frame {
    Object { key: String, members: Map<String, Value> },
    Array { key: String, items: Vec<Value> },
}

/// Builds a `serde_json::Value` from writer calls.
///
/// A keyed write with no open object lands in an implicit root object, so a
/// model can be serialized straight into a fresh writer.
///
/// The key of a write is only ignored where the enclosing frame has no
/// member names: inside a collection, and for the first value written with
/// nothing open. Inside an object every key is a member name, the empty
/// string included.
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    options: WriterOptions,
    stack: Vec<Frame>,
    root: Option<Value>,
    implicit_root: bool,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: WriterOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The document written so far, or `Value::Null` if nothing was written.
    pub fn into_value(self) -> SerializationResult<Value> {
        if !self.stack.is_empty() {
            return Err(SerializationError::write(format!(
                "{} unclosed object or collection",
                self.stack.len()
            )));
        }
        Ok(self.root.unwrap_or(Value::Null))
    }

    /// Encoded bytes; indented when the writer options ask for it. Empty if
    /// nothing was written.
    pub fn serialized_content(&self) -> SerializationResult<Vec<u8>> {
        if !self.stack.is_empty() {
            return Err(SerializationError::write(format!(
                "{} unclosed object or collection",
                self.stack.len()
            )));
        }
        let Some(root) = &self.root else {
            return Ok(Vec::new());
        };
        let encoded = if self.options.pretty {
            serde_json::to_vec_pretty(root)
        } else {
            serde_json::to_vec(root)
        };
        encoded.map_err(SerializationError::write)
    }

    fn put(&mut self, key: &str, value: Value) -> SerializationResult<()> {
        match self.stack.last_mut() {
            Some(Frame::Object { members, .. }) => {
                members.insert(key.to_string(), value);
                Ok(())
            }
            Some(Frame::Array { items, .. }) => {
                items.push(value);
                Ok(())
            }
            None if key.is_empty() && !self.implicit_root => {
                if self.root.is_some() {
                    return Err(SerializationError::write("root value already written"));
                }
                self.root = Some(value);
                Ok(())
            }
            None => {
                if self.root.is_none() {
                    self.implicit_root = true;
                }
                match (self.implicit_root, self.root.get_or_insert_with(|| Value::Object(Map::new()))) {
                    (true, Value::Object(members)) => {
                        members.insert(key.to_string(), value);
                        Ok(())
                    }
                    _ => {
                        tracing::debug!(key = %key, "keyed write after an explicit root value");
                        Err(SerializationError::write(format!(
                            "cannot write {:?} next to an explicit root value",
                            key
                        )))
                    }
                }
            }
        }
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn options(&self) -> &WriterOptions {
        &self.options
    }

    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> SerializationResult<()> {
        match value {
            Some(v) => self.put(key, Value::String(v.to_string())),
            None => Ok(()),
        }
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> SerializationResult<()> {
        match value {
            Some(v) => self.put(key, Value::Bool(v)),
            None => Ok(()),
        }
    }

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> SerializationResult<()> {
        match value {
            Some(v) => self.put(key, Value::from(v)),
            None => Ok(()),
        }
    }

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> SerializationResult<()> {
        match value {
            Some(v) => self.put(key, Value::from(v)),
            None => Ok(()),
        }
    }

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> SerializationResult<()> {
        let Some(v) = value else {
            return Ok(());
        };
        let number = Number::from_f64(v).ok_or_else(|| {
            tracing::debug!(key = %key, value = %v, "refusing non-finite float");
            SerializationError::write(format!("{} is not representable in JSON", v))
        })?;
        self.put(key, Value::Number(number))
    }

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> SerializationResult<()> {
        match value {
            Some(bytes) => self.put(key, Value::String(STANDARD.encode(bytes))),
            None => Ok(()),
        }
    }

    fn write_untyped_value(&mut self, key: &str, value: Option<&Value>) -> SerializationResult<()> {
        match value {
            Some(v) => self.put(key, v.clone()),
            None => Ok(()),
        }
    }

    fn start_object(&mut self, key: &str) -> SerializationResult<()> {
        self.stack.push(Frame::Object {
            key: key.to_string(),
            members: Map::new(),
        });
        Ok(())
    }

    fn end_object(&mut self) -> SerializationResult<()> {
        match self.stack.pop() {
            Some(Frame::Object { key, members }) => self.put(&key, Value::Object(members)),
            Some(other) => {
                self.stack.push(other);
                Err(SerializationError::write("end_object while a collection is open"))
            }
            None => Err(SerializationError::write("end_object without start_object")),
        }
    }

    fn start_collection(&mut self, key: &str) -> SerializationResult<()> {
        self.stack.push(Frame::Array {
            key: key.to_string(),
            items: Vec::new(),
        });
        Ok(())
    }

    fn end_collection(&mut self) -> SerializationResult<()> {
        match self.stack.pop() {
            Some(Frame::Array { key, items }) => self.put(&key, Value::Array(items)),
            Some(other) => {
                self.stack.push(other);
                Err(SerializationError::write("end_collection while an object is open"))
            }
            None => Err(SerializationError::write("end_collection without start_collection")),
        }
    }
}

//! Write side of the serialization abstraction

use crate::config::WriterOptions;
use crate::duration::IsoDuration;
use crate::enums::WireEnum;
use crate::error::SerializationResult;
use crate::parsable::{AdditionalData, Parsable};
use crate::wire::WireValue;
use crate::{DateOnly, TimeOnly, Timestamp};
use chrono::SecondsFormat;
use uuid::Uuid;

/// An output sink with one typed write per scalar kind.
///
/// Every write takes an `Option`; `None` omits the key. An empty key writes
/// an array element (inside a collection) or the root value.
pub trait SerializationWriter {
    fn options(&self) -> &WriterOptions;

    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> SerializationResult<()>;

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> SerializationResult<()>;

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> SerializationResult<()>;

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> SerializationResult<()>;

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> SerializationResult<()>;

    /// Base64 content.
    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> SerializationResult<()>;

    fn write_untyped_value(
        &mut self,
        key: &str,
        value: Option<&serde_json::Value>,
    ) -> SerializationResult<()>;

    fn start_object(&mut self, key: &str) -> SerializationResult<()>;

    fn end_object(&mut self) -> SerializationResult<()>;

    fn start_collection(&mut self, key: &str) -> SerializationResult<()>;

    fn end_collection(&mut self) -> SerializationResult<()>;

    fn write_time_value(&mut self, key: &str, value: Option<&Timestamp>) -> SerializationResult<()> {
        let text = value.map(|ts| ts.to_rfc3339_opts(SecondsFormat::AutoSi, true));
        self.write_string_value(key, text.as_deref())
    }

    fn write_date_only_value(&mut self, key: &str, value: Option<&DateOnly>) -> SerializationResult<()> {
        let text = value.map(|d| d.format("%Y-%m-%d").to_string());
        self.write_string_value(key, text.as_deref())
    }

    fn write_time_only_value(&mut self, key: &str, value: Option<&TimeOnly>) -> SerializationResult<()> {
        let text = value.map(|t| t.format("%H:%M:%S%.f").to_string());
        self.write_string_value(key, text.as_deref())
    }

    fn write_iso_duration_value(
        &mut self,
        key: &str,
        value: Option<&IsoDuration>,
    ) -> SerializationResult<()> {
        let text = value.map(IsoDuration::to_string);
        self.write_string_value(key, text.as_deref())
    }

    fn write_uuid_value(&mut self, key: &str, value: Option<&Uuid>) -> SerializationResult<()> {
        let text = value.map(|id| id.hyphenated().to_string());
        self.write_string_value(key, text.as_deref())
    }

    /// Write every entry as an untyped value, in order.
    fn write_additional_data(&mut self, data: &AdditionalData) -> SerializationResult<()> {
        for (key, value) in data {
            self.write_untyped_value(key, Some(value))?;
        }
        Ok(())
    }
}

/// Generic writes layered over [`SerializationWriter`].
///
/// A `None` collection omits the key; `Some` of an empty slice writes `[]`.
pub trait SerializationWriterExt {
    fn write_enum_value<E: WireEnum>(&mut self, key: &str, value: Option<&E>) -> SerializationResult<()>;

    fn write_object_value(&mut self, key: &str, value: Option<&dyn Parsable>) -> SerializationResult<()>;

    fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> SerializationResult<()>;

    fn write_collection_of_primitive_values<T: WireValue>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> SerializationResult<()>;

    fn write_collection_of_enum_values<E: WireEnum>(
        &mut self,
        key: &str,
        values: Option<&[E]>,
    ) -> SerializationResult<()>;
}

impl SerializationWriterExt for dyn SerializationWriter + '_ {
    fn write_enum_value<E: WireEnum>(&mut self, key: &str, value: Option<&E>) -> SerializationResult<()> {
        self.write_string_value(key, value.map(|e| e.as_wire_str()))
    }

    fn write_object_value(&mut self, key: &str, value: Option<&dyn Parsable>) -> SerializationResult<()> {
        let Some(value) = value else {
            return Ok(());
        };
        self.start_object(key)?;
        value.serialize(self)?;
        self.end_object()
    }

    fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> SerializationResult<()> {
        let Some(values) = values else {
            return Ok(());
        };
        self.start_collection(key)?;
        for value in values {
            self.write_object_value("", Some(value))?;
        }
        self.end_collection()
    }

    fn write_collection_of_primitive_values<T: WireValue>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> SerializationResult<()> {
        let Some(values) = values else {
            return Ok(());
        };
        self.start_collection(key)?;
        for value in values {
            T::write(self, "", Some(value))?;
        }
        self.end_collection()
    }

    fn write_collection_of_enum_values<E: WireEnum>(
        &mut self,
        key: &str,
        values: Option<&[E]>,
    ) -> SerializationResult<()> {
        let Some(values) = values else {
            return Ok(());
        };
        self.start_collection(key)?;
        for value in values {
            self.write_string_value("", Some(value.as_wire_str()))?;
        }
        self.end_collection()
    }
}

/// Write the object entries of a boxed polymorphic collection.
pub fn write_collection_of_boxed_values(
    writer: &mut dyn SerializationWriter,
    key: &str,
    values: Option<&[Box<dyn Parsable>]>,
) -> SerializationResult<()> {
    let Some(values) = values else {
        return Ok(());
    };
    writer.start_collection(key)?;
    for value in values {
        writer.write_object_value("", Some(value.as_ref()))?;
    }
    writer.end_collection()
}

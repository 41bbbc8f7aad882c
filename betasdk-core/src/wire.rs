//! Per-type wire codecs
//!
//! `WireValue` is what lets a field table and a serializer treat every
//! field kind the same way: scalars, enums, models and collections all read
//! and write through it. Enums and models get their impls from the
//! declaration macros.

use crate::duration::IsoDuration;
use crate::error::SerializationResult;
use crate::parse_node::ParseNode;
use crate::writer::SerializationWriter;
use crate::{DateOnly, TimeOnly, Timestamp};
use uuid::Uuid;

/// Read or write one optional value of `Self`.
pub trait WireValue: Sized {
    fn read(node: &dyn ParseNode) -> SerializationResult<Option<Self>>;

    /// Write `value` under `key`. `None` omits the key.
    fn write(writer: &mut dyn SerializationWriter, key: &str, value: Option<&Self>)
        -> SerializationResult<()>;
}

/// A type that can appear as the element of an ordered collection.
pub trait WireElement: Sized {
    fn read_collection(node: &dyn ParseNode) -> SerializationResult<Option<Vec<Self>>>;

    fn write_collection(
        writer: &mut dyn SerializationWriter,
        key: &str,
        values: Option<&[Self]>,
    ) -> SerializationResult<()>;
}

impl<T: WireElement> WireValue for Vec<T> {
    fn read(node: &dyn ParseNode) -> SerializationResult<Option<Self>> {
        T::read_collection(node)
    }

    fn write(
        writer: &mut dyn SerializationWriter,
        key: &str,
        value: Option<&Self>,
    ) -> SerializationResult<()> {
        T::write_collection(writer, key, value.map(Vec::as_slice))
    }
}

macro_rules! primitive_wire {
    ($ty:ty, $read:ident, |$w:ident, $k:ident, $v:ident| $write:expr) => {
        impl WireValue for $ty {
            fn read(node: &dyn ParseNode) -> SerializationResult<Option<Self>> {
                node.$read()
            }

            fn write(
                $w: &mut dyn SerializationWriter,
                $k: &str,
                $v: Option<&Self>,
            ) -> SerializationResult<()> {
                $write
            }
        }

        impl WireElement for $ty {
            fn read_collection(node: &dyn ParseNode) -> SerializationResult<Option<Vec<Self>>> {
                crate::parse_node::ParseNodeExt::collection_of_primitive_values::<$ty>(node)
            }

            fn write_collection(
                writer: &mut dyn SerializationWriter,
                key: &str,
                values: Option<&[Self]>,
            ) -> SerializationResult<()> {
                crate::writer::SerializationWriterExt::write_collection_of_primitive_values(
                    writer, key, values,
                )
            }
        }
    };
}

primitive_wire!(String, string_value, |w, k, v| w.write_string_value(k, v.map(String::as_str)));
primitive_wire!(bool, bool_value, |w, k, v| w.write_bool_value(k, v.copied()));
primitive_wire!(i32, i32_value, |w, k, v| w.write_i32_value(k, v.copied()));
primitive_wire!(i64, i64_value, |w, k, v| w.write_i64_value(k, v.copied()));
primitive_wire!(f64, f64_value, |w, k, v| w.write_f64_value(k, v.copied()));
primitive_wire!(Timestamp, time_value, |w, k, v| w.write_time_value(k, v));
primitive_wire!(DateOnly, date_only_value, |w, k, v| w.write_date_only_value(k, v));
primitive_wire!(TimeOnly, time_only_value, |w, k, v| w.write_time_only_value(k, v));
primitive_wire!(IsoDuration, iso_duration_value, |w, k, v| w.write_iso_duration_value(k, v));
primitive_wire!(Uuid, uuid_value, |w, k, v| w.write_uuid_value(k, v));

/// Binary content travels as one base64 string, never as an array of numbers.
impl WireValue for Vec<u8> {
    fn read(node: &dyn ParseNode) -> SerializationResult<Option<Self>> {
        node.byte_array_value()
    }

    fn write(
        writer: &mut dyn SerializationWriter,
        key: &str,
        value: Option<&Self>,
    ) -> SerializationResult<()> {
        writer.write_byte_array_value(key, value.map(Vec::as_slice))
    }
}

//! betasdk-json - JSON Wire Format
//!
//! `JsonParseNode` and `JsonSerializationWriter` implement the core
//! abstractions over `serde_json`. The free functions are the usual entry
//! points: turn bytes into a model, or a model into bytes.

pub mod parse_node;
pub mod writer;

pub use parse_node::{JsonDocument, JsonParseNode};
pub use writer::JsonSerializationWriter;

use betasdk_core::{
    ParseNode, ParseNodeExt, ParseOptions, Parsable, ParsableFactory, SerializationResult,
    SerializationWriter, SerializationWriterExt, WriterOptions,
};
use serde_json::Value;

/// Serialize `model` as the root object of a fresh document.
pub fn serialize_to_value(model: &dyn Parsable) -> SerializationResult<Value> {
    let mut writer = JsonSerializationWriter::new();
    write_root(&mut writer, model)?;
    writer.into_value()
}

pub fn serialize_to_bytes(model: &dyn Parsable) -> SerializationResult<Vec<u8>> {
    serialize_to_bytes_with(model, WriterOptions::default())
}

pub fn serialize_to_bytes_with(
    model: &dyn Parsable,
    options: WriterOptions,
) -> SerializationResult<Vec<u8>> {
    let mut writer = JsonSerializationWriter::with_options(options);
    write_root(&mut writer, model)?;
    writer.serialized_content()
}

fn write_root(writer: &mut JsonSerializationWriter, model: &dyn Parsable) -> SerializationResult<()> {
    let writer: &mut dyn SerializationWriter = writer;
    writer.write_object_value("", Some(model))
}

/// Parse `bytes` and build the model `factory` picks. A `null` payload
/// yields `None`.
pub fn create_from_bytes(
    bytes: &[u8],
    factory: ParsableFactory,
) -> SerializationResult<Option<Box<dyn Parsable>>> {
    create_from_bytes_with(bytes, factory, ParseOptions::default())
}

pub fn create_from_bytes_with(
    bytes: &[u8],
    factory: ParsableFactory,
    options: ParseOptions,
) -> SerializationResult<Option<Box<dyn Parsable>>> {
    let doc = JsonDocument::from_slice(bytes)?.with_options(options);
    let root = doc.root();
    let node: &dyn ParseNode = &root;
    node.object_value(factory)
}

/// Typed form of [`create_from_bytes`].
pub fn create_from_bytes_as<T: Parsable>(bytes: &[u8]) -> SerializationResult<Option<T>> {
    create_from_bytes_as_with(bytes, ParseOptions::default())
}

pub fn create_from_bytes_as_with<T: Parsable>(
    bytes: &[u8],
    options: ParseOptions,
) -> SerializationResult<Option<T>> {
    let doc = JsonDocument::from_slice(bytes)?.with_options(options);
    let root = doc.root();
    let node: &dyn ParseNode = &root;
    node.object_value_as::<T>()
}

//! betasdk-core - Serialization Abstractions
//!
//! The contract every model in the SDK is written against: a `ParseNode`
//! to read from, a `SerializationWriter` to write to, and the `Parsable`
//! capability tying a model to both. No wire format lives here; see
//! `betasdk-json` for the JSON implementation.

pub mod config;
pub mod duration;
pub mod enums;
pub mod error;
pub mod model;
pub mod parsable;
pub mod parse_node;
pub mod registry;
pub mod wire;
pub mod writer;

#[cfg(test)]
mod testing;

pub use config::{ParseOptions, UnknownEnumPolicy, WriterOptions};
pub use duration::IsoDuration;
pub use enums::{WireEnum, UNKNOWN_FUTURE_VALUE};
pub use error::{ConfigError, SerializationError, SerializationResult};
pub use parsable::{
    factory_for, AdditionalData, FieldDeserializer, FieldDeserializers, Parsable, ParsableFactory,
};
pub use parse_node::{populate, ParseNode, ParseNodeExt};
pub use registry::{DiscriminatorRegistry, ODATA_TYPE_KEY};
pub use wire::{WireElement, WireValue};
pub use writer::{write_collection_of_boxed_values, SerializationWriter, SerializationWriterExt};

/// Timestamp with the offset it was written with.
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;

/// Calendar date without a time (`YYYY-MM-DD`).
pub type DateOnly = chrono::NaiveDate;

/// Wall-clock time without a date (`HH:MM:SS[.fff]`).
pub type TimeOnly = chrono::NaiveTime;

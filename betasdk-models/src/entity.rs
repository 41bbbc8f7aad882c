//! The root of the entity hierarchy
//!
//! `Entity` is written out by hand: it is the type every `model!` entity
//! eventually embeds, and the shape below is exactly what the macro expands
//! to for a root type.

use betasdk_core::{
    AdditionalData, FieldDeserializers, Parsable, ParseNode, ParseNodeExt, SerializationResult,
    SerializationWriter, SerializationWriterExt, WireElement, WireValue, ODATA_TYPE_KEY,
};
use std::any::Any;
use std::sync::LazyLock;

/// Identity shared by every entity type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    id: Option<String>,
    odata_type: Option<String>,
    additional_data: AdditionalData,
}

static ENTITY_FIELDS: LazyLock<FieldDeserializers<Entity>> =
    LazyLock::new(Entity::field_deserializers);

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    /// The unique identifier of the entity. Read-only on the service side.
    pub fn id(&self) -> Option<&String> {
        self.id.as_ref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn set_additional_data(&mut self, value: AdditionalData) {
        self.additional_data = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::new()
            .field::<String>("id", Self::set_id)
            .field::<String>(ODATA_TYPE_KEY, Self::set_odata_type)
    }
}

impl Parsable for Entity {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        writer.write_string_value("id", self.id.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn deserialize_field(&mut self, key: &str, node: &dyn ParseNode) -> SerializationResult<bool> {
        ENTITY_FIELDS.apply(self, key, node)
    }

    fn additional_data(&self) -> Option<&AdditionalData> {
        Some(&self.additional_data)
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }

    fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn clone_boxed(&self) -> Box<dyn Parsable> {
        Box::new(self.clone())
    }

    fn create_from_discriminator_value(_node: &dyn ParseNode) -> SerializationResult<Self> {
        Ok(Self::new())
    }
}

impl WireValue for Entity {
    fn read(node: &dyn ParseNode) -> SerializationResult<Option<Self>> {
        node.object_value_as::<Self>()
    }

    fn write(
        writer: &mut dyn SerializationWriter,
        key: &str,
        value: Option<&Self>,
    ) -> SerializationResult<()> {
        writer.write_object_value(key, value.map(|v| v as &dyn Parsable))
    }
}

impl WireElement for Entity {
    fn read_collection(node: &dyn ParseNode) -> SerializationResult<Option<Vec<Self>>> {
        node.collection_of_object_values_as::<Self>()
    }

    fn write_collection(
        writer: &mut dyn SerializationWriter,
        key: &str,
        values: Option<&[Self]>,
    ) -> SerializationResult<()> {
        writer.write_collection_of_object_values(key, values)
    }
}

/// `id` on every type that embeds an [`Entity`].
pub trait EntityDerived: AsRef<Entity> + AsMut<Entity> {
    fn id(&self) -> Option<&String> {
        AsRef::<Entity>::as_ref(self).id()
    }

    fn set_id(&mut self, value: Option<String>) {
        AsMut::<Entity>::as_mut(self).set_id(value)
    }
}

impl<T: AsRef<Entity> + AsMut<Entity>> EntityDerived for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use betasdk_json::{create_from_bytes_as, serialize_to_value};
    use serde_json::json;

    #[test]
    fn test_entity_writes_id_then_odata_type_then_extras() {
        let parsed: Entity =
            create_from_bytes_as(br##"{"x":1,"@odata.type":"#microsoft.graph.entity","id":"e1"}"##)
                .unwrap()
                .unwrap();
        assert_eq!(parsed.id(), Some(&"e1".to_string()));
        assert_eq!(parsed.odata_type(), Some("#microsoft.graph.entity"));

        let value = serialize_to_value(&parsed).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["id", "@odata.type", "x"]);
        assert_eq!(value["x"], json!(1));
    }

    #[test]
    fn test_table_has_identity_keys_only() {
        let keys: Vec<_> = Entity::field_deserializers().keys().collect();
        assert_eq!(keys, vec!["id", ODATA_TYPE_KEY]);
    }

    #[test]
    fn test_empty_entity_writes_empty_object() {
        assert_eq!(serialize_to_value(&Entity::new()).unwrap(), json!({}));
    }
}

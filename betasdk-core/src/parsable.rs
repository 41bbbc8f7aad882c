//! The `Parsable` capability and per-type field-deserializer tables

use crate::error::SerializationResult;
use crate::parse_node::ParseNode;
use crate::wire::WireValue;
use crate::writer::SerializationWriter;
use indexmap::IndexMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Keys present on the wire that the model has no field for, in arrival order.
pub type AdditionalData = IndexMap<String, serde_json::Value>;

/// A type that can be produced from a parse node and written to a
/// serialization writer.
///
/// Implementations are normally generated by [`model!`](crate::model).
pub trait Parsable: Any + fmt::Debug + Send + Sync {
    /// Write every set field. Derived types write their base first.
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()>;

    /// Read the value under `key` into the matching field.
    ///
    /// Returns `Ok(false)` when the type has no field for `key`.
    fn deserialize_field(&mut self, key: &str, node: &dyn ParseNode) -> SerializationResult<bool>;

    fn additional_data(&self) -> Option<&AdditionalData> {
        None
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        None
    }

    /// The `@odata.type` discriminator carried by this instance, if any.
    fn odata_type(&self) -> Option<&str> {
        None
    }

    /// Unqualified name of the concrete type, e.g. `BrowserSite`.
    fn type_name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn clone_boxed(&self) -> Box<dyn Parsable>;

    /// Typed factory. Leaf types ignore the node and return a fresh instance.
    fn create_from_discriminator_value(node: &dyn ParseNode) -> SerializationResult<Self>
    where
        Self: Sized;
}

impl dyn Parsable {
    pub fn is<T: Parsable>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Parsable>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Parsable>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    pub fn downcast<T: Parsable>(self: Box<Self>) -> Option<Box<T>> {
        self.into_any().downcast::<T>().ok()
    }
}

impl Clone for Box<dyn Parsable> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// Factory signature used wherever the concrete type is chosen at parse time.
pub type ParsableFactory = fn(&dyn ParseNode) -> SerializationResult<Box<dyn Parsable>>;

/// Lift a typed factory into a [`ParsableFactory`].
///
/// ```ignore
/// let factory: ParsableFactory = factory_for::<BrowserSite>;
/// ```
pub fn factory_for<T: Parsable>(node: &dyn ParseNode) -> SerializationResult<Box<dyn Parsable>> {
    Ok(Box::new(T::create_from_discriminator_value(node)?))
}

/// One entry of a field-deserializer table.
pub type FieldDeserializer<T> =
    Arc<dyn Fn(&mut T, &dyn ParseNode) -> SerializationResult<()> + Send + Sync>;

/// Ordered map from wire key to the closure that reads that key into `T`.
///
/// A derived type's table starts from its base table (see [`inherit`]) and
/// then adds its own keys.
///
/// [`inherit`]: FieldDeserializers::inherit
pub struct FieldDeserializers<T> {
    entries: IndexMap<&'static str, FieldDeserializer<T>>,
}

impl<T: 'static> FieldDeserializers<T> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Lift `B`'s table into a table for `T`, reaching the base through `AsMut`.
    pub fn inherit<B: 'static>(base: FieldDeserializers<B>) -> Self
    where
        T: AsMut<B>,
    {
        let entries = base
            .entries
            .into_iter()
            .map(|(key, read)| {
                let lifted: FieldDeserializer<T> =
                    Arc::new(move |target: &mut T, node: &dyn ParseNode| {
                        read(AsMut::<B>::as_mut(target), node)
                    });
                (key, lifted)
            })
            .collect();
        Self { entries }
    }

    pub fn insert<F>(&mut self, key: &'static str, read: F)
    where
        F: Fn(&mut T, &dyn ParseNode) -> SerializationResult<()> + Send + Sync + 'static,
    {
        self.entries.insert(key, Arc::new(read));
    }

    /// Register a field read through its wire codec. A null or absent value
    /// leaves the field untouched.
    pub fn field<V>(mut self, key: &'static str, set: fn(&mut T, Option<V>)) -> Self
    where
        V: WireValue + 'static,
    {
        self.insert(key, move |target: &mut T, node: &dyn ParseNode| {
            if let Some(value) = V::read(node)? {
                set(target, Some(value));
            }
            Ok(())
        });
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldDeserializer<T>> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run the entry for `key`, if there is one.
    pub fn apply(&self, target: &mut T, key: &str, node: &dyn ParseNode) -> SerializationResult<bool> {
        match self.entries.get(key) {
            Some(read) => {
                read(target, node)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<T: 'static> Default for FieldDeserializers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FieldDeserializers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDeserializers")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

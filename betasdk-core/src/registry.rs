//! Discriminator registry
//!
//! Maps a discriminator string (normally `@odata.type`) to the factory for
//! the concrete type it names. Unknown or missing discriminators fall back
//! to the base type's factory.

use crate::error::SerializationResult;
use crate::parsable::{Parsable, ParsableFactory};
use crate::parse_node::ParseNode;
use std::collections::HashMap;
use std::fmt;

/// Key the generated factories read the discriminator from.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

pub struct DiscriminatorRegistry {
    key: &'static str,
    default_factory: ParsableFactory,
    factories: HashMap<&'static str, ParsableFactory>,
}

impl DiscriminatorRegistry {
    /// An empty registry reading `@odata.type`.
    pub fn new(default_factory: ParsableFactory) -> Self {
        Self::with_key(ODATA_TYPE_KEY, default_factory)
    }

    pub fn with_key(key: &'static str, default_factory: ParsableFactory) -> Self {
        Self {
            key,
            default_factory,
            factories: HashMap::new(),
        }
    }

    pub fn register(&mut self, discriminator: &'static str, factory: ParsableFactory) -> &mut Self {
        self.factories.insert(discriminator, factory);
        self
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, discriminator: &'static str, factory: ParsableFactory) -> Self {
        self.register(discriminator, factory);
        self
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn contains(&self, discriminator: &str) -> bool {
        self.factories.contains_key(discriminator)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn discriminators(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    /// Pick the factory for `node` without constructing anything.
    pub fn resolve(&self, node: &dyn ParseNode) -> SerializationResult<ParsableFactory> {
        let discriminator = match node.child_node(self.key)? {
            Some(child) => child.string_value()?,
            None => None,
        };
        match discriminator {
            Some(value) => match self.factories.get(value.as_str()) {
                Some(factory) => Ok(*factory),
                None => {
                    tracing::debug!(
                        discriminator = %value,
                        key = self.key,
                        "unknown discriminator, using base type"
                    );
                    Ok(self.default_factory)
                }
            },
            None => {
                tracing::debug!(key = self.key, "no discriminator, using base type");
                Ok(self.default_factory)
            }
        }
    }

    /// Construct the (still unpopulated) instance `node` names.
    pub fn create(&self, node: &dyn ParseNode) -> SerializationResult<Box<dyn Parsable>> {
        let factory = self.resolve(node)?;
        factory(node)
    }
}

impl fmt::Debug for DiscriminatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.factories.keys().collect();
        keys.sort();
        f.debug_struct("DiscriminatorRegistry")
            .field("key", &self.key)
            .field("discriminators", &keys)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsable::factory_for;
    use crate::testing::ValueNode;
    use crate::ParseNodeExt;
    use serde_json::json;

    crate::model! {
        pub struct Animal {
            "name" => name / set_name: String,
        }
    }

    crate::model! {
        pub struct Dog: Animal
        [odata_type = "#zoo.dog"]
        {
            "goodBoy" => good_boy / set_good_boy: bool,
        }
    }

    fn registry() -> DiscriminatorRegistry {
        DiscriminatorRegistry::new(factory_for::<Animal>).with("#zoo.dog", factory_for::<Dog>)
    }

    #[test]
    fn test_known_discriminator_selects_subtype() {
        let payload = json!({ "@odata.type": "#zoo.dog", "name": "rex", "goodBoy": true });
        let node = ValueNode::new(&payload);
        let node: &dyn ParseNode = &node;

        let model = node.object_value(|n| registry().create(n)).unwrap().unwrap();
        let dog = model.downcast_ref::<Dog>().unwrap();
        assert_eq!(dog.good_boy(), Some(&true));
        assert_eq!(AsRef::<Animal>::as_ref(dog).name(), Some(&"rex".to_string()));
        assert_eq!(dog.odata_type(), Some("#zoo.dog"));
    }

    #[test]
    fn test_unknown_discriminator_falls_back_to_base() {
        let payload = json!({ "@odata.type": "#zoo.cat", "name": "tom", "purrs": true });
        let node = ValueNode::new(&payload);
        let node: &dyn ParseNode = &node;

        let model = node.object_value(|n| registry().create(n)).unwrap().unwrap();
        let animal = model.downcast_ref::<Animal>().unwrap();
        assert_eq!(animal.odata_type(), Some("#zoo.cat"));
        assert_eq!(animal.additional_data().unwrap()["purrs"], json!(true));
    }

    #[test]
    fn test_missing_discriminator_falls_back_to_base() {
        let payload = json!({ "name": "anon" });
        let node = ValueNode::new(&payload);
        assert!(registry().create(&node).unwrap().is::<Animal>());
    }

    #[test]
    fn test_registry_bookkeeping() {
        let mut registry = registry();
        assert_eq!(registry.key(), ODATA_TYPE_KEY);
        assert!(registry.contains("#zoo.dog"));
        assert!(!registry.contains("#zoo.cat"));
        registry.register("#zoo.puppy", factory_for::<Dog>);
        assert_eq!(registry.len(), 2);
        let mut discriminators: Vec<_> = registry.discriminators().collect();
        discriminators.sort();
        assert_eq!(discriminators, vec!["#zoo.dog", "#zoo.puppy"]);
    }
}

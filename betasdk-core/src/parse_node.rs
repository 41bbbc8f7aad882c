//! Read side of the serialization abstraction

use crate::config::ParseOptions;
use crate::duration::IsoDuration;
use crate::enums::WireEnum;
use crate::error::{SerializationError, SerializationResult};
use crate::parsable::{Parsable, ParsableFactory};
use crate::wire::WireValue;
use crate::{DateOnly, TimeOnly, Timestamp};
use uuid::Uuid;

/// One node of a parsed payload.
///
/// Every typed read returns `Ok(None)` for an explicit null. A value of the
/// wrong shape is an error; model code hands it back unchanged.
///
/// The string-encoded kinds (timestamps, dates, times, durations, UUIDs)
/// have default implementations on top of [`string_value`].
///
/// [`string_value`]: ParseNode::string_value
pub trait ParseNode {
    fn options(&self) -> &ParseOptions;

    /// The child under `key`, if this is an object that has one.
    fn child_node(&self, key: &str) -> SerializationResult<Option<Box<dyn ParseNode + '_>>>;

    /// Key/child pairs in payload order. `None` for a null node.
    fn object_entries(&self) -> SerializationResult<Option<Vec<(String, Box<dyn ParseNode + '_>)>>>;

    /// Array elements in payload order. `None` for a null node.
    fn collection_elements(&self) -> SerializationResult<Option<Vec<Box<dyn ParseNode + '_>>>>;

    fn string_value(&self) -> SerializationResult<Option<String>>;

    fn bool_value(&self) -> SerializationResult<Option<bool>>;

    fn i32_value(&self) -> SerializationResult<Option<i32>>;

    fn i64_value(&self) -> SerializationResult<Option<i64>>;

    fn f64_value(&self) -> SerializationResult<Option<f64>>;

    /// Base64 content.
    fn byte_array_value(&self) -> SerializationResult<Option<Vec<u8>>>;

    /// The node as raw data, for keys that land in additional data.
    fn untyped_value(&self) -> SerializationResult<serde_json::Value>;

    /// RFC 3339 timestamp with offset.
    fn time_value(&self) -> SerializationResult<Option<Timestamp>> {
        self.string_value()?
            .map(|raw| {
                Timestamp::parse_from_rfc3339(&raw)
                    .map_err(|e| SerializationError::invalid_format("timestamp", raw.as_str(), e))
            })
            .transpose()
    }

    /// `YYYY-MM-DD`.
    fn date_only_value(&self) -> SerializationResult<Option<DateOnly>> {
        self.string_value()?
            .map(|raw| {
                raw.parse::<DateOnly>()
                    .map_err(|e| SerializationError::invalid_format("date", raw.as_str(), e))
            })
            .transpose()
    }

    /// `HH:MM:SS` with optional fraction.
    fn time_only_value(&self) -> SerializationResult<Option<TimeOnly>> {
        self.string_value()?
            .map(|raw| {
                raw.parse::<TimeOnly>()
                    .map_err(|e| SerializationError::invalid_format("time", raw.as_str(), e))
            })
            .transpose()
    }

    fn iso_duration_value(&self) -> SerializationResult<Option<IsoDuration>> {
        self.string_value()?.map(|raw| raw.parse()).transpose()
    }

    fn uuid_value(&self) -> SerializationResult<Option<Uuid>> {
        self.string_value()?
            .map(|raw| {
                Uuid::parse_str(&raw)
                    .map_err(|e| SerializationError::invalid_format("uuid", raw.as_str(), e))
            })
            .transpose()
    }
}

/// Generic reads layered over [`ParseNode`].
pub trait ParseNodeExt {
    /// Read an enum token, applying the configured unknown-value policy.
    fn enum_value<E: WireEnum>(&self) -> SerializationResult<Option<E>>;

    /// Read an object, choosing its concrete type with `factory`.
    fn object_value(&self, factory: ParsableFactory) -> SerializationResult<Option<Box<dyn Parsable>>>;

    /// Read an object whose type is known statically.
    fn object_value_as<T: Parsable>(&self) -> SerializationResult<Option<T>>;

    fn collection_of_object_values(
        &self,
        factory: ParsableFactory,
    ) -> SerializationResult<Option<Vec<Box<dyn Parsable>>>>;

    fn collection_of_object_values_as<T: Parsable>(&self) -> SerializationResult<Option<Vec<T>>>;

    fn collection_of_primitive_values<T: WireValue>(&self) -> SerializationResult<Option<Vec<T>>>;

    fn collection_of_enum_values<E: WireEnum>(&self) -> SerializationResult<Option<Vec<E>>>;
}

impl ParseNodeExt for dyn ParseNode + '_ {
    fn enum_value<E: WireEnum>(&self) -> SerializationResult<Option<E>> {
        match self.string_value()? {
            Some(raw) => E::parse_with_policy(&raw, self.options().unknown_enum_policy).map(Some),
            None => Ok(None),
        }
    }

    fn object_value(&self, factory: ParsableFactory) -> SerializationResult<Option<Box<dyn Parsable>>> {
        if self.object_entries()?.is_none() {
            return Ok(None);
        }
        let mut model = factory(self)?;
        populate(model.as_mut(), self)?;
        Ok(Some(model))
    }

    fn object_value_as<T: Parsable>(&self) -> SerializationResult<Option<T>> {
        if self.object_entries()?.is_none() {
            return Ok(None);
        }
        let mut model = T::create_from_discriminator_value(self)?;
        populate(&mut model, self)?;
        Ok(Some(model))
    }

    fn collection_of_object_values(
        &self,
        factory: ParsableFactory,
    ) -> SerializationResult<Option<Vec<Box<dyn Parsable>>>> {
        read_elements(self, |element| element.object_value(factory))
    }

    fn collection_of_object_values_as<T: Parsable>(&self) -> SerializationResult<Option<Vec<T>>> {
        read_elements(self, |element| element.object_value_as::<T>())
    }

    fn collection_of_primitive_values<T: WireValue>(&self) -> SerializationResult<Option<Vec<T>>> {
        read_elements(self, |element| T::read(element))
    }

    fn collection_of_enum_values<E: WireEnum>(&self) -> SerializationResult<Option<Vec<E>>> {
        read_elements(self, |element| element.enum_value::<E>())
    }
}

/// Null elements carry nothing a typed collection can hold and are dropped.
fn read_elements<T>(
    node: &dyn ParseNode,
    mut read: impl FnMut(&dyn ParseNode) -> SerializationResult<Option<T>>,
) -> SerializationResult<Option<Vec<T>>> {
    let Some(elements) = node.collection_elements()? else {
        return Ok(None);
    };
    let mut out = Vec::with_capacity(elements.len());
    for element in &elements {
        match read(element.as_ref())? {
            Some(value) => out.push(value),
            None => tracing::trace!("dropping null collection element"),
        }
    }
    Ok(Some(out))
}

/// Drive `target`'s field table over the entries of an object node.
///
/// Keys without a field go to additional data when the model keeps it and
/// the options allow it; otherwise they are skipped.
pub fn populate(target: &mut dyn Parsable, node: &dyn ParseNode) -> SerializationResult<()> {
    let Some(entries) = node.object_entries()? else {
        return Ok(());
    };
    let preserve = node.options().preserve_additional_data;
    for (key, child) in entries {
        if target.deserialize_field(&key, child.as_ref())? {
            continue;
        }
        if !preserve {
            continue;
        }
        if let Some(additional) = target.additional_data_mut() {
            tracing::trace!(key = %key, "routing unknown key to additional data");
            additional.insert(key, child.untyped_value()?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnknownEnumPolicy;
    use crate::testing::ValueNode;
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::json;

    crate::wire_enum! {
        enum Level {
            Low => "low",
            High => "high",
            UnknownFutureValue => "unknownFutureValue",
        }
    }

    #[test]
    fn test_string_encoded_scalars() {
        let payload = json!({
            "at": "2024-03-01T10:15:30.5+02:00",
            "on": "2024-03-01",
            "time": "10:15:30",
            "span": "PT1H30M",
            "id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff",
        });
        let root = ValueNode::new(&payload);
        let child = |key: &str| root.child_node(key).unwrap().unwrap();

        let at = child("at").time_value().unwrap().unwrap();
        assert_eq!(at.offset().local_minus_utc(), 7200);
        assert_eq!(at.timestamp_subsec_millis(), 500);
        assert_eq!(
            child("on").date_only_value().unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(
            child("time").time_only_value().unwrap(),
            NaiveTime::from_hms_opt(10, 15, 30)
        );
        assert_eq!(
            child("span").iso_duration_value().unwrap(),
            Some(IsoDuration::from_hms(1, 30, 0))
        );
        assert!(child("id").uuid_value().unwrap().is_some());
    }

    #[test]
    fn test_malformed_scalars_are_invalid_format() {
        let payload = json!({ "at": "yesterday", "on": "2024-13-01", "id": "nope" });
        let root = ValueNode::new(&payload);
        let child = |key: &str| root.child_node(key).unwrap().unwrap();

        assert!(matches!(
            child("at").time_value(),
            Err(SerializationError::InvalidFormat { kind: "timestamp", .. })
        ));
        assert!(matches!(
            child("on").date_only_value(),
            Err(SerializationError::InvalidFormat { kind: "date", .. })
        ));
        assert!(matches!(
            child("id").uuid_value(),
            Err(SerializationError::InvalidFormat { kind: "uuid", .. })
        ));
    }

    #[test]
    fn test_out_of_range_int32_is_a_type_mismatch() {
        let payload = json!({ "fits": -2147483648i64, "big": 2147483648i64, "none": null });
        let root = ValueNode::new(&payload);
        let child = |key: &str| root.child_node(key).unwrap().unwrap();

        assert_eq!(child("fits").i32_value().unwrap(), Some(i32::MIN));
        assert_eq!(child("none").i32_value().unwrap(), None);
        assert!(matches!(
            child("big").i32_value(),
            Err(SerializationError::TypeMismatch { expected: "int32", ref found }) if found == "2147483648"
        ));
        assert_eq!(child("big").i64_value().unwrap(), Some(2_147_483_648));
    }

    #[test]
    fn test_enum_value_follows_policy() {
        let payload = json!("medium");
        let mut node = ValueNode::new(&payload);
        {
            let strict: &dyn ParseNode = &node;
            assert!(strict.enum_value::<Level>().is_err());
        }
        node.options.unknown_enum_policy = UnknownEnumPolicy::FallbackToSentinel;
        let lenient: &dyn ParseNode = &node;
        assert_eq!(lenient.enum_value::<Level>().unwrap(), Some(Level::UnknownFutureValue));
    }

    #[test]
    fn test_collections_keep_order_and_distinguish_null() {
        let payload = json!({ "levels": ["high", "low", "high"], "names": [], "none": null });
        let root = ValueNode::new(&payload);

        let levels = root.child_node("levels").unwrap().unwrap();
        assert_eq!(
            levels.collection_of_enum_values::<Level>().unwrap(),
            Some(vec![Level::High, Level::Low, Level::High])
        );

        let names = root.child_node("names").unwrap().unwrap();
        assert_eq!(
            names.collection_of_primitive_values::<String>().unwrap(),
            Some(vec![])
        );

        let none = root.child_node("none").unwrap().unwrap();
        assert_eq!(none.collection_of_primitive_values::<String>().unwrap(), None);
    }

    #[test]
    fn test_null_elements_are_dropped() {
        let payload = json!([1, null, 3]);
        let node = ValueNode::new(&payload);
        let node: &dyn ParseNode = &node;
        assert_eq!(
            node.collection_of_primitive_values::<i64>().unwrap(),
            Some(vec![1, 3])
        );
    }

    #[test]
    fn test_populate_on_null_is_a_no_op() {
        crate::model! {
            struct Empty {}
        }
        let payload = json!(null);
        let node = ValueNode::new(&payload);
        let mut empty = Empty::new();
        populate(&mut empty, &node).unwrap();
        assert_eq!(empty, Empty::new());
    }
}

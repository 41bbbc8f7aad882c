//! The `model!` declaration macro
//!
//! Two shapes are supported.
//!
//! A root complex type owns its `@odata.type` and additional data:
//!
//! ```ignore
//! model! {
//!     /// An identity of an actor.
//!     pub struct Identity {
//!         "displayName" => display_name / set_display_name: String,
//!         "id" => id / set_id: String,
//!     }
//! }
//! ```
//!
//! A derived type embeds its base by value. Every ancestor beyond the
//! direct base is listed so `AsRef`/`AsMut` reach it. The optional
//! `[odata_type = ..]` clause sets the discriminator `new()` writes, and
//! `[accessors = ..]` declares a trait that gives every type embedding this
//! one its getters and setters by delegation.
//!
//! ```ignore
//! model! {
//!     pub struct SitePage: BaseItem, Entity
//!     [odata_type = "#microsoft.graph.sitePage"]
//!     {
//!         "pageLayout" => page_layout / set_page_layout: PageLayoutType,
//!     }
//! }
//! ```
//!
//! Fields are stored as `Option<T>` for any `T: WireValue`. Serialization
//! writes the base first, then the own fields in declaration order; root
//! types finish with `@odata.type` and their additional data.

#[macro_export]
macro_rules! model {
    (@derived
        [$($meta:tt)*] [$vis:vis] $name:ident $base:ident [$($ancestor:ident)*]
        [$($odata:literal)?] [$($acc:ident)?]
        $fields:tt
    ) => {
        $crate::model!(@derived_struct [$($meta)*] [$vis] $name $base [$($odata)?] $fields);
        $crate::model!(@wire $name);

        impl AsRef<$base> for $name {
            fn as_ref(&self) -> &$base {
                &self.base
            }
        }

        impl AsMut<$base> for $name {
            fn as_mut(&mut self) -> &mut $base {
                &mut self.base
            }
        }

        $(
            impl AsRef<$ancestor> for $name {
                fn as_ref(&self) -> &$ancestor {
                    AsRef::<$ancestor>::as_ref(&self.base)
                }
            }

            impl AsMut<$ancestor> for $name {
                fn as_mut(&mut self) -> &mut $ancestor {
                    AsMut::<$ancestor>::as_mut(&mut self.base)
                }
            }
        )*

        $( $crate::model!(@accessors [$vis] $name $acc $fields); )?
    };

    (@derived_struct
        [$($meta:tt)*] [$vis:vis] $name:ident $base:ident [$($odata:literal)?]
        {
            $(
                $(#[$fmeta:meta])*
                $key:literal => $field:ident / $setter:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        $($meta)*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            base: $base,
            $(
                $(#[$fmeta])*
                $field: Option<$fty>,
            )*
        }

        impl $name {
            pub fn new() -> Self {
                #[allow(unused_mut)]
                let mut model = Self {
                    base: $base::new(),
                    ..Default::default()
                };
                $( model.set_odata_type(Some(String::from($odata))); )?
                model
            }

            pub fn odata_type(&self) -> Option<&str> {
                self.base.odata_type()
            }

            pub fn set_odata_type(&mut self, value: Option<String>) {
                self.base.set_odata_type(value);
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> Option<&$fty> {
                    self.$field.as_ref()
                }

                pub fn $setter(&mut self, value: Option<$fty>) {
                    self.$field = value;
                }
            )*

            /// The base table followed by this type's own keys.
            pub fn field_deserializers() -> $crate::FieldDeserializers<Self> {
                $crate::FieldDeserializers::<Self>::inherit($base::field_deserializers())
                    $( .field::<$fty>($key, Self::$setter) )*
            }

            fn cached_field_deserializers() -> &'static $crate::FieldDeserializers<Self> {
                static TABLE: ::std::sync::LazyLock<$crate::FieldDeserializers<$name>> =
                    ::std::sync::LazyLock::new($name::field_deserializers);
                &TABLE
            }
        }

        impl $crate::Parsable for $name {
            fn serialize(
                &self,
                writer: &mut dyn $crate::SerializationWriter,
            ) -> $crate::SerializationResult<()> {
                $crate::Parsable::serialize(&self.base, writer)?;
                $( <$fty as $crate::WireValue>::write(writer, $key, self.$field.as_ref())?; )*
                Ok(())
            }

            fn deserialize_field(
                &mut self,
                key: &str,
                node: &dyn $crate::ParseNode,
            ) -> $crate::SerializationResult<bool> {
                Self::cached_field_deserializers().apply(self, key, node)
            }

            fn additional_data(&self) -> Option<&$crate::AdditionalData> {
                $crate::Parsable::additional_data(&self.base)
            }

            fn additional_data_mut(&mut self) -> Option<&mut $crate::AdditionalData> {
                $crate::Parsable::additional_data_mut(&mut self.base)
            }

            fn odata_type(&self) -> Option<&str> {
                $crate::Parsable::odata_type(&self.base)
            }

            $crate::model!(@any);

            fn create_from_discriminator_value(
                _node: &dyn $crate::ParseNode,
            ) -> $crate::SerializationResult<Self> {
                Ok(Self::new())
            }
        }
    };

    (@root
        [$($meta:tt)*] [$vis:vis] $name:ident [$($odata:literal)?]
        {
            $(
                $(#[$fmeta:meta])*
                $key:literal => $field:ident / $setter:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        $($meta)*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $field: Option<$fty>,
            )*
            odata_type: Option<String>,
            additional_data: $crate::AdditionalData,
        }

        impl $name {
            pub fn new() -> Self {
                #[allow(unused_mut)]
                let mut model = Self::default();
                $( model.odata_type = Some(String::from($odata)); )?
                model
            }

            pub fn odata_type(&self) -> Option<&str> {
                self.odata_type.as_deref()
            }

            pub fn set_odata_type(&mut self, value: Option<String>) {
                self.odata_type = value;
            }

            pub fn set_additional_data(&mut self, value: $crate::AdditionalData) {
                self.additional_data = value;
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> Option<&$fty> {
                    self.$field.as_ref()
                }

                pub fn $setter(&mut self, value: Option<$fty>) {
                    self.$field = value;
                }
            )*

            pub fn field_deserializers() -> $crate::FieldDeserializers<Self> {
                $crate::FieldDeserializers::<Self>::new()
                    $( .field::<$fty>($key, Self::$setter) )*
                    .field::<String>($crate::ODATA_TYPE_KEY, Self::set_odata_type)
            }

            fn cached_field_deserializers() -> &'static $crate::FieldDeserializers<Self> {
                static TABLE: ::std::sync::LazyLock<$crate::FieldDeserializers<$name>> =
                    ::std::sync::LazyLock::new($name::field_deserializers);
                &TABLE
            }
        }

        impl $crate::Parsable for $name {
            fn serialize(
                &self,
                writer: &mut dyn $crate::SerializationWriter,
            ) -> $crate::SerializationResult<()> {
                $( <$fty as $crate::WireValue>::write(writer, $key, self.$field.as_ref())?; )*
                $crate::SerializationWriter::write_string_value(
                    writer,
                    $crate::ODATA_TYPE_KEY,
                    self.odata_type.as_deref(),
                )?;
                $crate::SerializationWriter::write_additional_data(writer, &self.additional_data)
            }

            fn deserialize_field(
                &mut self,
                key: &str,
                node: &dyn $crate::ParseNode,
            ) -> $crate::SerializationResult<bool> {
                Self::cached_field_deserializers().apply(self, key, node)
            }

            fn additional_data(&self) -> Option<&$crate::AdditionalData> {
                Some(&self.additional_data)
            }

            fn additional_data_mut(&mut self) -> Option<&mut $crate::AdditionalData> {
                Some(&mut self.additional_data)
            }

            fn odata_type(&self) -> Option<&str> {
                self.odata_type.as_deref()
            }

            $crate::model!(@any);

            fn create_from_discriminator_value(
                _node: &dyn $crate::ParseNode,
            ) -> $crate::SerializationResult<Self> {
                Ok(Self::new())
            }
        }
    };

    (@any) => {
        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }

        fn into_any(self: Box<Self>) -> Box<dyn ::std::any::Any> {
            self
        }

        fn clone_boxed(&self) -> Box<dyn $crate::Parsable> {
            Box::new(self.clone())
        }
    };

    (@wire $name:ident) => {
        impl $crate::WireValue for $name {
            fn read(node: &dyn $crate::ParseNode) -> $crate::SerializationResult<Option<Self>> {
                $crate::ParseNodeExt::object_value_as::<Self>(node)
            }

            fn write(
                writer: &mut dyn $crate::SerializationWriter,
                key: &str,
                value: Option<&Self>,
            ) -> $crate::SerializationResult<()> {
                $crate::SerializationWriterExt::write_object_value(
                    writer,
                    key,
                    value.map(|v| v as &dyn $crate::Parsable),
                )
            }
        }

        impl $crate::WireElement for $name {
            fn read_collection(
                node: &dyn $crate::ParseNode,
            ) -> $crate::SerializationResult<Option<Vec<Self>>> {
                $crate::ParseNodeExt::collection_of_object_values_as::<Self>(node)
            }

            fn write_collection(
                writer: &mut dyn $crate::SerializationWriter,
                key: &str,
                values: Option<&[Self]>,
            ) -> $crate::SerializationResult<()> {
                $crate::SerializationWriterExt::write_collection_of_object_values(writer, key, values)
            }
        }
    };

    (@accessors [$vis:vis] $name:ident $acc:ident
        {
            $(
                $(#[$fmeta:meta])*
                $key:literal => $field:ident / $setter:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        #[doc = concat!("Getters and setters of [`", stringify!($name), "`] for every type that embeds it.")]
        $vis trait $acc: AsRef<$name> + AsMut<$name> {
            $(
                $(#[$fmeta])*
                fn $field(&self) -> Option<&$fty> {
                    AsRef::<$name>::as_ref(self).$field()
                }

                fn $setter(&mut self, value: Option<$fty>) {
                    AsMut::<$name>::as_mut(self).$setter(value)
                }
            )*
        }

        impl<T: AsRef<$name> + AsMut<$name>> $acc for T {}
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $base:ident $(, $ancestor:ident)*
        $([odata_type = $odata:literal])?
        $([accessors = $acc:ident])?
        { $($body:tt)* }
    ) => {
        $crate::model!(@derived
            [$(#[$meta])*] [$vis] $name $base [$($ancestor)*] [$($odata)?] [$($acc)?]
            { $($body)* }
        );
    };

    (@root_decl
        [$($meta:tt)*] [$vis:vis] $name:ident [$($odata:literal)?] [$($acc:ident)?]
        $fields:tt
    ) => {
        $crate::model!(@root [$($meta)*] [$vis] $name [$($odata)?] $fields);
        $crate::model!(@wire $name);
        $( $crate::model!(@accessors [$vis] $name $acc $fields); )?
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident
        $([odata_type = $odata:literal])?
        $([accessors = $acc:ident])?
        { $($body:tt)* }
    ) => {
        $crate::model!(@root_decl
            [$(#[$meta])*] [$vis] $name [$($odata)?] [$($acc)?]
            { $($body)* }
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::testing::{EventWriter, ValueNode};
    use crate::{populate, Parsable, ParseNode, ParseNodeExt, SerializationWriter};
    use serde_json::json;

    crate::wire_enum! {
        pub enum Finish {
            Matte => "matte",
            Gloss => "gloss",
        }
    }

    crate::model! {
        pub struct Thing {
            "name" => name / set_name: String,
            "count" => count / set_count: i32,
        }
    }

    crate::model! {
        pub struct Part
        [accessors = PartDerived]
        {
            "label" => label / set_label: String,
        }
    }

    crate::model! {
        pub struct Bolt: Part [odata_type = "#test.bolt"] {
            "gauge" => gauge / set_gauge: i32,
        }
    }

    crate::model! {
        /// A thing with parts.
        pub struct Widget: Thing
        [odata_type = "#test.widget"]
        [accessors = WidgetDerived]
        {
            "finish" => finish / set_finish: Finish,
            "tags" => tags / set_tags: Vec<String>,
            "parts" => parts / set_parts: Vec<Part>,
            "main" => main / set_main: Part,
        }
    }

    crate::model! {
        pub struct Gadget: Widget, Thing {
            "serial" => serial / set_serial: i64,
        }
    }

    fn events(model: &dyn Parsable) -> Vec<String> {
        let mut writer = EventWriter::default();
        model.serialize(&mut writer).unwrap();
        writer.events
    }

    #[test]
    fn test_new_sets_declared_odata_type() {
        assert_eq!(Widget::new().odata_type(), Some("#test.widget"));
        assert_eq!(Thing::new().odata_type(), None);
        assert_eq!(Gadget::new().odata_type(), Some("#test.widget"));
    }

    #[test]
    fn test_type_name_is_unqualified_through_a_trait_object() {
        let boxed: Box<dyn Parsable> = Box::new(Gadget::new());
        assert_eq!(boxed.type_name(), "Gadget");
        assert_eq!(Thing::new().type_name(), "Thing");
    }

    #[test]
    fn test_root_writes_fields_then_odata_type_then_additional_data() {
        let mut thing = Thing::new();
        thing.set_name(Some("a".to_string()));
        thing.set_odata_type(Some("#test.thing".to_string()));
        let mut extra = crate::AdditionalData::new();
        extra.insert("x".to_string(), json!(1));
        thing.set_additional_data(extra);

        assert_eq!(
            events(&thing),
            vec![
                "name=\"a\"".to_string(),
                "@odata.type=\"#test.thing\"".to_string(),
                "x=1".to_string(),
            ]
        );
    }

    #[test]
    fn test_derived_writes_base_first() {
        let mut widget = Widget::new();
        widget.set_finish(Some(Finish::Gloss));
        AsMut::<Thing>::as_mut(&mut widget).set_count(Some(3));
        assert_eq!(
            events(&widget),
            vec![
                "count=3".to_string(),
                "@odata.type=\"#test.widget\"".to_string(),
                "finish=\"gloss\"".to_string(),
            ]
        );
    }

    #[test]
    fn test_unset_collection_is_omitted_and_empty_is_written() {
        let mut widget = Widget::default();
        assert!(events(&widget).is_empty());

        widget.set_tags(Some(vec![]));
        assert_eq!(events(&widget), vec!["tags=[".to_string(), "]".to_string()]);
    }

    #[test]
    fn test_nested_objects_are_framed() {
        let mut part = Part::new();
        part.set_label(Some("p".to_string()));
        let mut widget = Widget::default();
        widget.set_main(Some(part.clone()));
        widget.set_parts(Some(vec![part]));
        assert_eq!(
            events(&widget),
            vec![
                "parts=[", "={", "label=\"p\"", "}", "]", "main={", "label=\"p\"", "}",
            ]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_field_table_lists_base_keys_first() {
        let keys: Vec<_> = Widget::field_deserializers().keys().collect();
        assert_eq!(
            keys,
            vec!["name", "count", "@odata.type", "finish", "tags", "parts", "main"]
        );
        assert!(Gadget::field_deserializers().contains_key("finish"));
        assert!(Gadget::field_deserializers().contains_key("serial"));
    }

    #[test]
    fn test_populate_reads_known_keys_and_keeps_unknown_ones() {
        let payload = json!({
            "name": "w",
            "finish": "matte",
            "tags": ["a", "b"],
            "parts": [{"label": "x"}, {"label": "y", "weight": 2}],
            "colour": "red",
        });
        let node = ValueNode::new(&payload);
        let mut widget = Widget::default();
        populate(&mut widget, &node).unwrap();

        assert_eq!(AsRef::<Thing>::as_ref(&widget).name(), Some(&"w".to_string()));
        assert_eq!(widget.finish(), Some(&Finish::Matte));
        assert_eq!(widget.tags(), Some(&vec!["a".to_string(), "b".to_string()]));
        let parts = widget.parts().unwrap();
        assert_eq!(parts[1].label(), Some(&"y".to_string()));
        assert_eq!(parts[1].additional_data().unwrap()["weight"], json!(2));
        assert_eq!(widget.additional_data().unwrap()["colour"], json!("red"));
        assert_eq!(widget.main(), None);
    }

    #[test]
    fn test_populate_skips_unknown_keys_when_not_preserving() {
        let payload = json!({ "colour": "red" });
        let mut node = ValueNode::new(&payload);
        node.options.preserve_additional_data = false;
        let mut thing = Thing::default();
        populate(&mut thing, &node).unwrap();
        assert!(thing.additional_data().unwrap().is_empty());
    }

    #[test]
    fn test_null_leaves_field_unset() {
        let payload = json!({ "name": null, "tags": null });
        let node = ValueNode::new(&payload);
        let mut widget = Widget::default();
        populate(&mut widget, &node).unwrap();
        assert_eq!(widget, Widget::default());
    }

    #[test]
    fn test_read_errors_propagate_unchanged() {
        let payload = json!({ "finish": "satin" });
        let node = ValueNode::new(&payload);
        let mut widget = Widget::default();
        let err = populate(&mut widget, &node).unwrap_err();
        assert_eq!(err.to_string(), "Unknown Finish value: satin");

        let payload = json!({ "count": "three" });
        let node = ValueNode::new(&payload);
        assert!(matches!(
            populate(&mut widget, &node),
            Err(crate::SerializationError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_accessor_trait_reaches_through_embedding() {
        let mut gadget = Gadget::new();
        WidgetDerived::set_finish(&mut gadget, Some(Finish::Gloss));
        gadget.set_serial(Some(7));
        assert_eq!(WidgetDerived::finish(&gadget), Some(&Finish::Gloss));
        assert_eq!(AsRef::<Thing>::as_ref(&gadget).name(), None);
    }

    #[test]
    fn test_root_accessor_trait_and_root_base() {
        let mut bolt = Bolt::new();
        PartDerived::set_label(&mut bolt, Some("m6".to_string()));
        bolt.set_gauge(Some(6));
        assert_eq!(PartDerived::label(&bolt), Some(&"m6".to_string()));
        assert_eq!(
            events(&bolt),
            vec!["label=\"m6\"", "@odata.type=\"#test.bolt\"", "gauge=6"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_object_value_as_returns_none_for_null() {
        let payload = json!(null);
        let node = ValueNode::new(&payload);
        let node: &dyn ParseNode = &node;
        assert_eq!(node.object_value_as::<Part>().unwrap(), None);
    }

    #[test]
    fn test_write_object_value_skips_none() {
        let mut writer = EventWriter::default();
        let w: &mut dyn SerializationWriter = &mut writer;
        crate::SerializationWriterExt::write_object_value(w, "x", None).unwrap();
        assert!(writer.events.is_empty());
    }
}

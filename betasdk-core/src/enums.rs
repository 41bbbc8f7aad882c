//! Enum codec and the `wire_enum!` declaration macro

use crate::config::UnknownEnumPolicy;
use crate::error::{SerializationError, SerializationResult};

/// Token for the sentinel that absorbs values added after the client was built.
pub const UNKNOWN_FUTURE_VALUE: &str = "unknownFutureValue";

/// A closed set of named constants with a canonical wire token each.
pub trait WireEnum: Copy + Sized + 'static {
    /// Type name used in error messages.
    const TYPE_NAME: &'static str;

    /// Every constant, in declaration order.
    const VARIANTS: &'static [Self];

    fn as_wire_str(&self) -> &'static str;

    /// Strict parse: any token outside the table is an error.
    fn parse(value: &str) -> SerializationResult<Self>;

    /// The `unknownFutureValue` constant, when the type declares one.
    fn unknown_future_value() -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.as_wire_str() == UNKNOWN_FUTURE_VALUE)
    }

    fn parse_with_policy(value: &str, policy: UnknownEnumPolicy) -> SerializationResult<Self> {
        match Self::parse(value) {
            Ok(parsed) => Ok(parsed),
            Err(err) => match (policy, Self::unknown_future_value()) {
                (UnknownEnumPolicy::FallbackToSentinel, Some(sentinel)) => {
                    tracing::warn!(
                        enum_type = Self::TYPE_NAME,
                        value = %value,
                        "unrecognised enum token mapped to unknownFutureValue"
                    );
                    Ok(sentinel)
                }
                _ => Err(err),
            },
        }
    }
}

/// The error every generated `parse` returns for an unrecognised token.
pub fn unknown_value<E: WireEnum>(value: &str) -> SerializationError {
    SerializationError::unknown_enum_value(E::TYPE_NAME, value)
}

/// Declare a wire enum with an explicit token for every variant.
///
/// Both directions are generated as `match` tables, so reordering variants
/// never changes a token.
///
/// # Example
/// ```ignore
/// wire_enum! {
///     /// Type of a system extension.
///     pub enum MacOSSystemExtensionType {
///         DriverExtensionsAllowed => "driverExtensionsAllowed",
///         NetworkExtensionsAllowed => "networkExtensionsAllowed",
///         EndpointSecurityExtensionsAllowed => "endpointSecurityExtensionsAllowed",
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::WireEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            fn as_wire_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }

            fn parse(value: &str) -> $crate::SerializationResult<Self> {
                match value {
                    $($token => Ok($name::$variant),)+
                    other => Err($crate::enums::unknown_value::<Self>(other)),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::WireEnum::as_wire_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::SerializationError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::WireEnum>::parse(s)
            }
        }

        impl $crate::WireValue for $name {
            fn read(
                node: &dyn $crate::ParseNode,
            ) -> $crate::SerializationResult<::std::option::Option<Self>> {
                $crate::ParseNodeExt::enum_value::<Self>(node)
            }

            fn write(
                writer: &mut dyn $crate::SerializationWriter,
                key: &str,
                value: ::std::option::Option<&Self>,
            ) -> $crate::SerializationResult<()> {
                $crate::SerializationWriterExt::write_enum_value(writer, key, value)
            }
        }

        impl $crate::WireElement for $name {
            fn read_collection(
                node: &dyn $crate::ParseNode,
            ) -> $crate::SerializationResult<::std::option::Option<::std::vec::Vec<Self>>> {
                $crate::ParseNodeExt::collection_of_enum_values::<Self>(node)
            }

            fn write_collection(
                writer: &mut dyn $crate::SerializationWriter,
                key: &str,
                values: ::std::option::Option<&[Self]>,
            ) -> $crate::SerializationResult<()> {
                $crate::SerializationWriterExt::write_collection_of_enum_values(writer, key, values)
            }
        }
    };
}

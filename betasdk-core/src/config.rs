//! Parse and writer configuration
//!
//! Both option sets are plain values with defaults that match the behaviour
//! of the generated client. They can also be loaded from environment
//! variables:
//!
//! - `BETASDK_UNKNOWN_ENUM_POLICY`: "reject" or "fallback" (default: reject)
//! - `BETASDK_PRESERVE_ADDITIONAL_DATA`: "true" or "false" (default: true)
//! - `BETASDK_PRETTY_JSON`: "true" or "false" (default: false)
//!
//! Booleans also accept 1/0 and yes/no. `from_env` falls back to the default
//! for a value it cannot parse; `try_from_env` reports it.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ENV_UNKNOWN_ENUM_POLICY: &str = "BETASDK_UNKNOWN_ENUM_POLICY";
const ENV_PRESERVE_ADDITIONAL_DATA: &str = "BETASDK_PRESERVE_ADDITIONAL_DATA";
const ENV_PRETTY_JSON: &str = "BETASDK_PRETTY_JSON";

/// What to do with an enum token the client does not recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnknownEnumPolicy {
    /// Fail the read with `SerializationError::UnknownEnumValue`.
    #[default]
    Reject,
    /// Map the token to `unknownFutureValue` when the enum declares it.
    /// Enums without the sentinel still reject.
    FallbackToSentinel,
}

impl fmt::Display for UnknownEnumPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            UnknownEnumPolicy::Reject => "reject",
            UnknownEnumPolicy::FallbackToSentinel => "fallback",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for UnknownEnumPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" | "strict" => Ok(UnknownEnumPolicy::Reject),
            "fallback" | "sentinel" => Ok(UnknownEnumPolicy::FallbackToSentinel),
            _ => Err(format!("Invalid UnknownEnumPolicy: {}", s)),
        }
    }
}

/// Options consulted by parse nodes while reading a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    pub unknown_enum_policy: UnknownEnumPolicy,
    /// Keep keys without a field deserializer in the model's additional data.
    pub preserve_additional_data: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            unknown_enum_policy: UnknownEnumPolicy::Reject,
            preserve_additional_data: true,
        }
    }
}

impl ParseOptions {
    /// Load options from the environment, falling back to defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        Self::from_vars(env_var)
    }

    /// Load options from the environment, rejecting values that do not parse.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::try_from_vars(env_var)
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let unknown_enum_policy = var(ENV_UNKNOWN_ENUM_POLICY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.unknown_enum_policy);

        let preserve_additional_data = var(ENV_PRESERVE_ADDITIONAL_DATA)
            .and_then(|raw| parse_bool(ENV_PRESERVE_ADDITIONAL_DATA, &raw).ok())
            .unwrap_or(defaults.preserve_additional_data);

        Self {
            unknown_enum_policy,
            preserve_additional_data,
        }
    }

    fn try_from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut options = Self::default();

        if let Some(raw) = var(ENV_UNKNOWN_ENUM_POLICY) {
            options.unknown_enum_policy =
                raw.parse().map_err(|reason| ConfigError::InvalidValue {
                    field: ENV_UNKNOWN_ENUM_POLICY.to_string(),
                    value: raw.clone(),
                    reason,
                })?;
        }

        if let Some(raw) = var(ENV_PRESERVE_ADDITIONAL_DATA) {
            options.preserve_additional_data = parse_bool(ENV_PRESERVE_ADDITIONAL_DATA, &raw)?;
        }

        Ok(options)
    }

    pub fn with_unknown_enum_policy(mut self, policy: UnknownEnumPolicy) -> Self {
        self.unknown_enum_policy = policy;
        self
    }

    pub fn with_preserve_additional_data(mut self, preserve: bool) -> Self {
        self.preserve_additional_data = preserve;
        self
    }
}

/// Options consulted by serialization writers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterOptions {
    /// Emit indented output from `serialized_content`.
    pub pretty: bool,
}

impl WriterOptions {
    /// Load options from the environment, falling back to defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        Self::from_vars(env_var)
    }

    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::try_from_vars(env_var)
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let pretty = var(ENV_PRETTY_JSON)
            .and_then(|raw| parse_bool(ENV_PRETTY_JSON, &raw).ok())
            .unwrap_or(false);

        Self { pretty }
    }

    fn try_from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match var(ENV_PRETTY_JSON) {
            Some(raw) => Ok(Self {
                pretty: parse_bool(ENV_PRETTY_JSON, &raw)?,
            }),
            None => Ok(Self::default()),
        }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Accepts true/false, 1/0 and yes/no in any case.
fn parse_bool(field: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_default_rejects_unknown_enums() {
        let options = ParseOptions::default();
        assert_eq!(options.unknown_enum_policy, UnknownEnumPolicy::Reject);
        assert!(options.preserve_additional_data);
    }

    #[test]
    fn test_unknown_enum_policy_from_str() {
        assert_eq!(
            "fallback".parse::<UnknownEnumPolicy>(),
            Ok(UnknownEnumPolicy::FallbackToSentinel)
        );
        assert_eq!(" Reject ".parse::<UnknownEnumPolicy>(), Ok(UnknownEnumPolicy::Reject));
        assert!("maybe".parse::<UnknownEnumPolicy>().is_err());
    }

    #[test]
    fn test_unknown_enum_policy_display_round_trips() {
        for policy in [UnknownEnumPolicy::Reject, UnknownEnumPolicy::FallbackToSentinel] {
            assert_eq!(policy.to_string().parse::<UnknownEnumPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_builder_methods() {
        let options = ParseOptions::default()
            .with_unknown_enum_policy(UnknownEnumPolicy::FallbackToSentinel)
            .with_preserve_additional_data(false);
        assert_eq!(options.unknown_enum_policy, UnknownEnumPolicy::FallbackToSentinel);
        assert!(!options.preserve_additional_data);
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn test_parse_options_env_bools_agree_between_lenient_and_strict() {
        for (raw, expected) in [("0", false), ("no", false), ("FALSE", false), ("1", true), ("yes", true)] {
            let env = vars(&[(ENV_PRESERVE_ADDITIONAL_DATA, raw)]);
            assert_eq!(ParseOptions::from_vars(&env).preserve_additional_data, expected, "{}", raw);
            assert_eq!(
                ParseOptions::try_from_vars(&env).unwrap().preserve_additional_data,
                expected,
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_options_env_garbage() {
        let env = vars(&[
            (ENV_PRESERVE_ADDITIONAL_DATA, "garbage"),
            (ENV_UNKNOWN_ENUM_POLICY, "fallback"),
        ]);
        let lenient = ParseOptions::from_vars(&env);
        assert!(lenient.preserve_additional_data);
        assert_eq!(lenient.unknown_enum_policy, UnknownEnumPolicy::FallbackToSentinel);
        assert!(matches!(
            ParseOptions::try_from_vars(&env),
            Err(ConfigError::InvalidValue { .. })
        ));

        let env = vars(&[(ENV_UNKNOWN_ENUM_POLICY, "garbage")]);
        assert_eq!(ParseOptions::from_vars(&env), ParseOptions::default());
        assert!(ParseOptions::try_from_vars(&env).is_err());
    }

    #[test]
    fn test_parse_options_env_unset_uses_defaults() {
        let env = vars(&[]);
        assert_eq!(ParseOptions::from_vars(&env), ParseOptions::default());
        assert_eq!(ParseOptions::try_from_vars(&env).unwrap(), ParseOptions::default());
    }

    #[test]
    fn test_writer_options_env() {
        for (raw, expected) in [("1", true), ("yes", true), ("true", true), ("0", false), ("no", false)] {
            let env = vars(&[(ENV_PRETTY_JSON, raw)]);
            assert_eq!(WriterOptions::from_vars(&env).pretty, expected, "{}", raw);
            assert_eq!(WriterOptions::try_from_vars(&env).unwrap().pretty, expected, "{}", raw);
        }

        let env = vars(&[(ENV_PRETTY_JSON, "garbage")]);
        assert!(!WriterOptions::from_vars(&env).pretty);
        assert!(WriterOptions::try_from_vars(&env).is_err());
        assert_eq!(WriterOptions::from_vars(vars(&[])), WriterOptions::default());
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        assert_eq!(parse_bool("X", "TRUE"), Ok(true));
        assert_eq!(parse_bool("X", "0"), Ok(false));
        assert!(matches!(
            parse_bool("X", "perhaps"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}

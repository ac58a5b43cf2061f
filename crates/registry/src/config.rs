use serde::{Deserialize, Serialize};

use crate::EnvironmentKey;

/// Dispatch behaviour switches, usually loaded from TOML and placed in the
/// environment under [`DispatchConfigKey`].
///
/// ```toml
/// self-describing-fallback = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct DispatchConfig {
	/// Consult [`crate::Rendering::default_factory`] when the registry has no
	/// entry for a rendering type.
	pub self_describing_fallback: bool,
}

impl Default for DispatchConfig {
	fn default() -> Self {
		Self {
			self_describing_fallback: true,
		}
	}
}

impl DispatchConfig {
	pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("invalid dispatch config: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Environment slot for [`DispatchConfig`].
pub struct DispatchConfigKey;

impl EnvironmentKey for DispatchConfigKey {
	type Value = DispatchConfig;

	fn default_value() -> DispatchConfig {
		DispatchConfig::default()
	}
}

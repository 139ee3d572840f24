// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Care plan service connection section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Generation can take a while, so this is generous by default
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Where printable care plans are written
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_secs, 60);
        assert_eq!(config.output.dir, None);
    }

    #[test]
    fn test_full_config_parses() {
        let config: Config = toml::from_str(
            r#"
[api]
base_url = "https://careplans.example.org"
timeout_secs = 90

[output]
dir = "/tmp/plans"
"#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://careplans.example.org");
        assert_eq!(config.api.timeout_secs, 90);
        assert_eq!(config.output.dir, Some(PathBuf::from("/tmp/plans")));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[api]\ntimeout_secs = \"soon\"\n");
        assert!(result.is_err());
    }

    // For any subset of present api fields, missing ones fall back to defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_api_section in prop::bool::ANY,
            include_url in prop::bool::ANY,
            include_timeout in prop::bool::ANY,
            timeout in 1u64..600u64,
        ) {
            let mut toml_content = String::new();
            if include_api_section {
                toml_content.push_str("[api]\n");
                if include_url {
                    toml_content.push_str("base_url = \"http://10.0.0.5:9000\"\n");
                }
                if include_timeout {
                    toml_content.push_str(&format!("timeout_secs = {}\n", timeout));
                }
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse: {}", toml_content);
            let config = config.unwrap();

            if include_api_section && include_url {
                prop_assert_eq!(config.api.base_url.as_str(), "http://10.0.0.5:9000");
            } else {
                prop_assert_eq!(config.api.base_url.as_str(), DEFAULT_BASE_URL);
            }

            if include_api_section && include_timeout {
                prop_assert_eq!(config.api.timeout_secs, timeout);
            } else {
                prop_assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
            }
        }
    }
}

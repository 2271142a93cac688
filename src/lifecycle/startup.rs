//! Startup orchestration.
//!
//! Configuration comes from an optional TOML file, then command-line
//! overrides, and is validated last so overrides are checked too. Any error
//! here is fatal.

use std::path::PathBuf;

use crate::config::loader::{read_config, ConfigError};
use crate::config::{validate_config, ScriptProxyConfig};

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub bind_address: Option<String>,
    pub script_url: Option<String>,
}

/// Build the effective configuration.
pub fn resolve_config(overrides: &ConfigOverrides) -> Result<ScriptProxyConfig, ConfigError> {
    let mut config = match &overrides.config_path {
        Some(path) => read_config(path)?,
        None => ScriptProxyConfig::default(),
    };

    if let Some(bind) = &overrides.bind_address {
        config.listener.bind_address = bind.clone();
    }
    if let Some(url) = &overrides.script_url {
        config.upstream.script_url = url.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DEFAULT_SCRIPT_URL;

    #[test]
    fn test_defaults_without_file() {
        let config = resolve_config(&ConfigOverrides::default()).unwrap();
        assert_eq!(config.upstream.script_url, DEFAULT_SCRIPT_URL);
    }

    #[test]
    fn test_overrides_applied() {
        let overrides = ConfigOverrides {
            bind_address: Some("127.0.0.1:4000".into()),
            script_url: Some("http://127.0.0.1:9000/s.sh".into()),
            ..ConfigOverrides::default()
        };
        let config = resolve_config(&overrides).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:4000");
        assert_eq!(config.upstream.script_url, "http://127.0.0.1:9000/s.sh");
    }

    #[test]
    fn test_overrides_are_validated() {
        let overrides = ConfigOverrides {
            script_url: Some("setup.sh".into()),
            ..ConfigOverrides::default()
        };
        assert!(matches!(
            resolve_config(&overrides),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_override_beats_file() {
        let path = std::env::temp_dir().join(format!(
            "script-proxy-startup-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[listener]\nbind_address = \"127.0.0.1:3001\"\nroute_path = \"/setup\"\n",
        )
        .unwrap();

        let overrides = ConfigOverrides {
            config_path: Some(path.clone()),
            bind_address: Some("127.0.0.1:3002".into()),
            ..ConfigOverrides::default()
        };
        let config = resolve_config(&overrides).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:3002");
        assert_eq!(config.listener.route_path, "/setup");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_invalid_file_values_reported_together() {
        let path = std::env::temp_dir().join(format!(
            "script-proxy-startup-invalid-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[upstream]\nscript_url = \"not a url\"\ntimeout_secs = 0\n",
        )
        .unwrap();

        let overrides = ConfigOverrides {
            config_path: Some(path.clone()),
            ..ConfigOverrides::default()
        };
        match resolve_config(&overrides).unwrap_err() {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other}"),
        }
        let _ = std::fs::remove_file(path);
    }
}

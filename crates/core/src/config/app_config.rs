use crate::config::{parse_bool, validate_package, ConfigError, ConfigSource};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

/// Configuration file looked up in the current directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "enumgen.yaml";

/// Output directory used when nothing else is configured
pub const DEFAULT_OUTPUT_DIR: &str = "gen_code";

/// Extension of generated source files
pub const DEFAULT_EXTENSION: &str = "java";

pub const ENV_OUTPUT_DIR: &str = "ENUMGEN_OUTPUT_DIR";
pub const ENV_PACKAGE: &str = "ENUMGEN_PACKAGE";
pub const ENV_STRICT: &str = "ENUMGEN_STRICT";

/// On-disk shape of `enumgen.yaml`; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    output_dir: Option<PathBuf>,
    extension: Option<String>,
    package: Option<String>,
    strict: Option<bool>,
}

/// Settings for one generator run.
///
/// Values are layered: built-in defaults, then the YAML file, then
/// `ENUMGEN_*` environment variables, then command line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumGenConfig {
    pub output_dir: PathBuf,
    pub extension: String,
    pub package: Option<String>,
    pub strict: bool,
    sources: HashMap<&'static str, ConfigSource>,
}

impl EnumGenConfig {
    /// Create a configuration holding only built-in defaults
    pub fn new() -> Self {
        let sources = ["output_dir", "extension", "package", "strict"]
            .into_iter()
            .map(|field| (field, ConfigSource::Default))
            .collect();

        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            package: None,
            strict: false,
            sources,
        }
    }

    /// Load defaults, the config file and the environment, then validate.
    ///
    /// An explicit `path` must exist. Without one, `enumgen.yaml` in the
    /// current directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::new();

        match path {
            Some(path) => config.merge_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    config.merge_file(default_path)?;
                }
            }
        }

        config.merge_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Merge values from a YAML configuration file
    pub fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.merge_yaml(&content, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(())
    }

    /// Merge values from YAML text; `origin` is recorded as the source
    pub fn merge_yaml(&mut self, content: &str, origin: &str) -> Result<(), ConfigError> {
        // An empty document deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(());
        }

        let file: ConfigFile = serde_yaml::from_str(content)?;
        let source = ConfigSource::File(origin.to_string());

        if let Some(output_dir) = file.output_dir {
            self.output_dir = output_dir;
            self.sources.insert("output_dir", source.clone());
        }
        if let Some(extension) = file.extension {
            self.extension = extension;
            self.sources.insert("extension", source.clone());
        }
        if let Some(package) = file.package {
            self.package = Some(package);
            self.sources.insert("package", source.clone());
        }
        if let Some(strict) = file.strict {
            self.strict = strict;
            self.sources.insert("strict", source);
        }

        Ok(())
    }

    /// Merge `ENUMGEN_*` environment variables
    pub fn merge_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(dir) = env::var(ENV_OUTPUT_DIR) {
            if !dir.trim().is_empty() {
                self.output_dir = PathBuf::from(dir);
                self.sources
                    .insert("output_dir", ConfigSource::EnvVar(ENV_OUTPUT_DIR.to_string()));
            }
        }

        if let Ok(package) = env::var(ENV_PACKAGE) {
            if !package.trim().is_empty() {
                self.package = Some(package.trim().to_string());
                self.sources
                    .insert("package", ConfigSource::EnvVar(ENV_PACKAGE.to_string()));
            }
        }

        if let Ok(strict) = env::var(ENV_STRICT) {
            self.strict = parse_bool("strict", &strict)?;
            self.sources
                .insert("strict", ConfigSource::EnvVar(ENV_STRICT.to_string()));
        }

        Ok(())
    }

    /// Override the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self.sources.insert("output_dir", ConfigSource::Programmatic);
        self
    }

    /// Override the Java package
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self.sources.insert("package", ConfigSource::Programmatic);
        self
    }

    /// Turn on duplicate detection
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self.sources.insert("strict", ConfigSource::Programmatic);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::invalid_value(
                "output_dir",
                "",
                "non-empty directory path",
            ));
        }

        if self.extension.is_empty() || !self.extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::invalid_value(
                "extension",
                &self.extension,
                "alphanumeric file extension without a leading dot (e.g. java)",
            ));
        }

        if let Some(package) = &self.package {
            validate_package(package)?;
        }

        Ok(())
    }

    /// Where each field's current value came from
    pub fn config_sources(&self) -> &HashMap<&'static str, ConfigSource> {
        &self.sources
    }
}

impl Default for EnumGenConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn clean_test_env() {
        env::remove_var(ENV_OUTPUT_DIR);
        env::remove_var(ENV_PACKAGE);
        env::remove_var(ENV_STRICT);
    }

    #[test]
    fn test_defaults() {
        let config = EnumGenConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("gen_code"));
        assert_eq!(config.extension, "java");
        assert_eq!(config.package, None);
        assert!(!config.strict);
        assert!(config.config_sources()["output_dir"].is_default());
    }

    #[test]
    fn test_merge_yaml() {
        let mut config = EnumGenConfig::new();
        config
            .merge_yaml("output_dir: src/gen\npackage: com.example\nstrict: true\n", "enumgen.yaml")
            .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("src/gen"));
        assert_eq!(config.package.as_deref(), Some("com.example"));
        assert!(config.strict);
        assert!(config.config_sources()["package"].is_file());
        assert!(config.config_sources()["extension"].is_default());
    }

    #[test]
    fn test_merge_yaml_rejects_unknown_keys() {
        let mut config = EnumGenConfig::new();
        let result = config.merge_yaml("outputdir: src/gen\n", "enumgen.yaml");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_merge_empty_yaml() {
        let mut config = EnumGenConfig::new();
        config.merge_yaml("  \n", "enumgen.yaml").unwrap();
        assert_eq!(config, EnumGenConfig::new());
    }

    #[test]
    fn test_missing_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = EnumGenConfig::load(Some(&temp_dir.path().join("missing.yaml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clean_test_env();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("enumgen.yaml");
        std::fs::write(&path, "output_dir: from_file\nstrict: false\n").unwrap();

        env::set_var(ENV_OUTPUT_DIR, "from_env");
        env::set_var(ENV_STRICT, "true");

        let config = EnumGenConfig::load(Some(&path)).unwrap();
        clean_test_env();

        assert_eq!(config.output_dir, PathBuf::from("from_env"));
        assert!(config.strict);
        assert!(config.config_sources()["output_dir"].is_env_var());
    }

    #[test]
    #[serial]
    fn test_invalid_env_value() {
        clean_test_env();
        env::set_var(ENV_STRICT, "sometimes");

        let result = EnumGenConfig::new().merge_env();
        clean_test_env();

        assert!(matches!(result, Err(ConfigError::InvalidValue { ref field, .. }) if field == "strict"));
    }

    #[test]
    fn test_overrides_win() {
        let config = EnumGenConfig::new()
            .with_output_dir("out")
            .with_package("com.example.model")
            .with_strict(true);

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.config_sources()["strict"], ConfigSource::Programmatic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = EnumGenConfig::new();
        config.extension = ".java".to_string();
        assert!(config.validate().is_err());

        let config = EnumGenConfig::new().with_package("com..bad");
        assert!(config.validate().is_err());

        let config = EnumGenConfig::new().with_output_dir("");
        assert!(config.validate().is_err());
    }
}

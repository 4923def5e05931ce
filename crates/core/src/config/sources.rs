/// Where a configuration value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in default value
    Default,
    /// Value loaded from a configuration file
    File(String),
    /// Value loaded from an environment variable
    EnvVar(String),
    /// Value provided on the command line or programmatically
    Programmatic,
}

impl ConfigSource {
    pub fn is_default(&self) -> bool {
        matches!(self, ConfigSource::Default)
    }

    pub fn is_env_var(&self) -> bool {
        matches!(self, ConfigSource::EnvVar(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, ConfigSource::File(_))
    }

    /// Get source description
    pub fn description(&self) -> String {
        match self {
            ConfigSource::Default => "Default value".to_string(),
            ConfigSource::File(path) => format!("Configuration file: {}", path),
            ConfigSource::EnvVar(var) => format!("Environment variable: {}", var),
            ConfigSource::Programmatic => "Command line".to_string(),
        }
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

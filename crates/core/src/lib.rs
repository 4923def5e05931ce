pub mod config;
pub mod error;

pub use config::{ConfigError, ConfigSource, EnumGenConfig};
pub use error::{EnumGenError, Result};

pub mod generator;
pub mod parser;
pub mod request;
pub mod templates;
pub mod writer;

pub use generator::*;
pub use parser::{member_identifier, parse, trim_input, EnumEntry};
pub use request::GenerationRequest;
pub use writer::*;

use enumgen_core::{EnumGenConfig, Result};
use std::path::PathBuf;

/// Enum source produced for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEnum {
    pub request: GenerationRequest,
    pub content: String,
}

/// Result of a generate-and-write run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenEnum {
    pub generated: GeneratedEnum,
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Validates input, renders the enum and persists it under the configured
/// output directory.
pub struct CodeGenerator {
    config: EnumGenConfig,
    writer: CodeWriter,
}

impl CodeGenerator {
    pub fn new(config: EnumGenConfig) -> Self {
        Self {
            config,
            writer: CodeWriter::new(),
        }
    }

    pub fn config(&self) -> &EnumGenConfig {
        &self.config
    }

    /// Validate and render without touching the file system
    pub fn generate(&self, type_name: &str, raw_input: &str) -> Result<GeneratedEnum> {
        let request = GenerationRequest::new(type_name, raw_input)?;
        let content = request.render(&GeneratorOptions::from(&self.config))?;
        Ok(GeneratedEnum { request, content })
    }

    /// Persist an already generated enum under the configured output directory
    pub fn write(&self, generated: GeneratedEnum) -> Result<WrittenEnum> {
        let (path, outcome) = self.writer.write_enum(
            &self.config.output_dir,
            generated.request.type_name(),
            &self.config.extension,
            &generated.content,
        )?;

        Ok(WrittenEnum {
            generated,
            path,
            outcome,
        })
    }

    /// Validate, render and write. Nothing is written when validation fails.
    pub fn generate_and_write(&self, type_name: &str, raw_input: &str) -> Result<WrittenEnum> {
        let generated = self.generate(type_name, raw_input)?;
        self.write(generated)
    }

    /// Path the enum named `type_name` would be written to
    pub fn target_path(&self, type_name: &str) -> PathBuf {
        self.config
            .output_dir
            .join(format!("{}.{}", type_name, self.config.extension))
    }
}

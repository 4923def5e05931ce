use crate::generator::{generate_with, GeneratorOptions};
use crate::parser::{parse, trim_input, EnumEntry};
use enumgen_core::{EnumGenError, Result};

/// A validated unit of work: the enum name plus its parsed entries.
///
/// Built fresh for each invocation. Construction either succeeds with the
/// complete entry list or fails; there is no partially parsed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    type_name: String,
    raw_input: String,
    entries: Vec<EnumEntry>,
}

impl GenerationRequest {
    /// Validate the inputs in order: type name, entry text, then each entry
    pub fn new(type_name: &str, raw_input: &str) -> Result<Self> {
        let type_name = trim_input(type_name);
        if type_name.is_empty() {
            return Err(EnumGenError::EmptyTypeName);
        }
        if !is_java_identifier(type_name) {
            return Err(EnumGenError::InvalidTypeName {
                name: type_name.to_string(),
            });
        }

        if trim_input(raw_input).is_empty() {
            return Err(EnumGenError::EmptyInput);
        }

        let entries = parse(raw_input)?;

        Ok(Self {
            type_name: type_name.to_string(),
            raw_input: raw_input.to_string(),
            entries,
        })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn entries(&self) -> &[EnumEntry] {
        &self.entries
    }

    /// Generate the enum source for this request
    pub fn render(&self, options: &GeneratorOptions) -> Result<String> {
        generate_with(&self.type_name, &self.entries, options)
    }
}

/// Check that `name` can be used both as a Java type name and a file stem
pub fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

use crate::parser::EnumEntry;
use crate::templates::{render_template, ENUM_TEMPLATE};
use enumgen_core::{EnumGenConfig, EnumGenError, Result};
use std::collections::{HashMap, HashSet};

/// Knobs that change the generated text beyond the entries themselves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Emit a `package` declaration ahead of the type
    pub package: Option<String>,
    /// Reject repeated codes and member identifiers
    pub strict: bool,
}

impl From<&EnumGenConfig> for GeneratorOptions {
    fn from(config: &EnumGenConfig) -> Self {
        Self {
            package: config.package.clone(),
            strict: config.strict,
        }
    }
}

/// Render a Java enum with default options
pub fn generate(type_name: &str, entries: &[EnumEntry]) -> Result<String> {
    EnumGenerator::new(type_name, entries).render(&GeneratorOptions::default())
}

/// Render a Java enum
pub fn generate_with(
    type_name: &str,
    entries: &[EnumEntry],
    options: &GeneratorOptions,
) -> Result<String> {
    EnumGenerator::new(type_name, entries).render(options)
}

/// Renders parsed entries into Java enum source.
///
/// Entries are trusted to come from a successful parse; the grammar is not
/// checked again. Output depends only on the inputs.
pub struct EnumGenerator<'a> {
    type_name: &'a str,
    entries: &'a [EnumEntry],
}

impl<'a> EnumGenerator<'a> {
    pub fn new(type_name: &'a str, entries: &'a [EnumEntry]) -> Self {
        Self { type_name, entries }
    }

    pub fn render(&self, options: &GeneratorOptions) -> Result<String> {
        if self.entries.is_empty() {
            return Err(EnumGenError::EmptyEntryList);
        }

        if options.strict {
            self.check_duplicates()?;
        }

        let mut context = HashMap::new();
        context.insert("package", self.format_package(options));
        context.insert("name", self.type_name.to_string());
        context.insert("members", self.format_members());

        let content = render_template(ENUM_TEMPLATE, &context);

        tracing::debug!(
            type_name = self.type_name,
            members = self.entries.len(),
            bytes = content.len(),
            "rendered enum"
        );

        Ok(content)
    }

    fn check_duplicates(&self) -> Result<()> {
        let mut codes = HashSet::new();
        let mut identifiers = HashSet::new();

        for entry in self.entries {
            if !codes.insert(entry.code) {
                return Err(EnumGenError::DuplicateCode { code: entry.code });
            }

            let identifier = entry.member_identifier();
            if !identifiers.insert(identifier.clone()) {
                return Err(EnumGenError::DuplicateIdentifier { identifier });
            }
        }

        Ok(())
    }

    fn format_package(&self, options: &GeneratorOptions) -> String {
        options
            .package
            .as_ref()
            .map(|package| format!("package {};\n\n", package))
            .unwrap_or_default()
    }

    fn format_members(&self) -> String {
        self.entries
            .iter()
            .map(|entry| self.format_member(entry))
            .collect()
    }

    // Every member, the last one included, ends with a comma; the template
    // closes the list with `;` on its own line.
    fn format_member(&self, entry: &EnumEntry) -> String {
        format!(
            "    {}({}, \"{}\"),\n",
            entry.member_identifier(),
            entry.code,
            escape_java_string(&entry.raw_name)
        )
    }
}

fn escape_java_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

use console::style;
use enumgen_codegen::{parse, request::is_java_identifier, trim_input, CodeGenerator};
use enumgen_core::{EnumGenConfig, EnumGenError};
use inquire::error::InquireResult;
use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, Editor, InquireError, Text};

pub fn run(config: EnumGenConfig) -> Result<(), EnumGenError> {
    println!();
    println!("{}", style("Generate Enum").cyan().bold());
    println!();

    let name = Text::new("Enum name:")
        .with_placeholder("TaskStatus")
        .with_validator(validate_type_name)
        .prompt();
    let Some(name) = answer(name)? else {
        cancelled();
        return Ok(());
    };

    // Multi-line lists go through $EDITOR.
    let entries = Editor::new("Enum codes:")
        .with_help_message("code: Name pairs separated by commas, one or more lines, e.g. 1: Waiting, 2: Processing, 3: Done")
        .with_file_extension(".txt")
        .with_validator(validate_entries)
        .prompt();
    let Some(entries) = answer(entries)? else {
        cancelled();
        return Ok(());
    };

    let generator = CodeGenerator::new(config);
    let generated = generator.generate(&name, &entries)?;
    let target = generator.target_path(generated.request.type_name());

    println!();
    println!("{}", style("Summary:").bold());
    println!("  Enum: {}", style(generated.request.type_name()).cyan());
    for entry in generated.request.entries() {
        println!(
            "    {}({}, \"{}\")",
            entry.member_identifier(),
            entry.code,
            entry.raw_name
        );
    }
    println!("  File: {}", style(target.display()).cyan());
    println!();

    let confirmed = Confirm::new("Generate enum file?")
        .with_default(true)
        .prompt();
    if answer(confirmed)? != Some(true) {
        cancelled();
        return Ok(());
    }

    let written = generator.write(generated)?;

    println!(
        "{} Generated enum file saved to {} ({})",
        style("✓").green(),
        written.path.display(),
        written.outcome
    );
    Ok(())
}

fn cancelled() {
    tracing::info!("interactive generation cancelled");
    println!("{} Enum generation cancelled, nothing written", style("!").yellow());
}

fn validate_type_name(input: &str) -> Result<Validation, CustomUserError> {
    let name = trim_input(input);
    if name.is_empty() {
        return Ok(Validation::Invalid("Enum name cannot be empty".into()));
    }
    if !is_java_identifier(name) {
        return Ok(Validation::Invalid(
            "Enum name must be a Java identifier, e.g. TaskStatus".into(),
        ));
    }
    Ok(Validation::Valid)
}

fn validate_entries(input: &str) -> Result<Validation, CustomUserError> {
    if trim_input(input).is_empty() {
        return Ok(Validation::Invalid("Enum codes cannot be empty".into()));
    }
    match parse(input) {
        Ok(_) => Ok(Validation::Valid),
        Err(e) => Ok(Validation::Invalid(e.to_string().into())),
    }
}

/// `None` when the user backed out of the prompt
fn answer<T>(result: InquireResult<T>) -> Result<Option<T>, EnumGenError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(other) => Err(EnumGenError::prompt(format!("Failed to read input: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid(result: Result<Validation, CustomUserError>) -> bool {
        matches!(result, Ok(Validation::Valid))
    }

    #[test]
    fn test_validate_type_name() {
        assert!(is_valid(validate_type_name("TaskStatus")));
        assert!(!is_valid(validate_type_name("")));
        assert!(!is_valid(validate_type_name("Task Status")));
    }

    #[test]
    fn test_validate_entries() {
        assert!(is_valid(validate_entries("1: Waiting, 2: Processing, 3: Done")));
        assert!(!is_valid(validate_entries("   ")));
        assert!(!is_valid(validate_entries("1: Waiting, two: Processing")));
    }

    #[test]
    fn test_validate_multi_line_entries() {
        assert!(is_valid(validate_entries("1: Waiting,\n2: Processing,\n3: Done\n")));
        assert!(!is_valid(validate_entries("1: Waiting\n2: Processing\n")));
    }

    #[test]
    fn test_cancel_is_not_an_error() {
        assert_eq!(answer::<String>(Err(InquireError::OperationCanceled)).unwrap(), None);
        assert_eq!(answer::<bool>(Err(InquireError::OperationInterrupted)).unwrap(), None);
        assert_eq!(answer(Ok(true)).unwrap(), Some(true));
    }

    #[test]
    fn test_prompt_failure_is_an_error() {
        let err = answer::<String>(Err(InquireError::NotTTY)).unwrap_err();
        assert!(err.to_string().starts_with("Prompt error: Failed to read input"));
    }
}

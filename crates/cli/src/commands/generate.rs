use console::style;
use enumgen_codegen::CodeGenerator;
use enumgen_core::{EnumGenConfig, EnumGenError};

pub fn run(config: EnumGenConfig, name: &str, entries: &str, stdout: bool) -> Result<(), EnumGenError> {
    let generator = CodeGenerator::new(config);

    if stdout {
        let generated = generator.generate(name, entries)?;
        print!("{}", generated.content);
        return Ok(());
    }

    let written = generator.generate_and_write(name, entries)?;

    println!(
        "{} Generated enum {} with {} members, saved to {} ({})",
        style("✓").green(),
        style(written.generated.request.type_name()).cyan(),
        written.generated.request.entries().len(),
        written.path.display(),
        written.outcome
    );
    Ok(())
}

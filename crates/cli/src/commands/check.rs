use console::style;
use enumgen_codegen::{parse, trim_input, EnumEntry};
use enumgen_core::EnumGenError;

pub fn run(entries: &str) -> Result<(), EnumGenError> {
    if trim_input(entries).is_empty() {
        return Err(EnumGenError::EmptyInput);
    }

    let parsed = parse(entries)?;

    println!("{}", style(format!("{} entries", parsed.len())).bold());
    print!("{}", format_table(&parsed));
    Ok(())
}

fn format_table(entries: &[EnumEntry]) -> String {
    let rows: Vec<(String, String, &str)> = entries
        .iter()
        .map(|entry| (entry.code.to_string(), entry.member_identifier(), entry.raw_name.as_str()))
        .collect();

    let code_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).max("CODE".len());
    let ident_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0).max("MEMBER".len());

    let mut table = format!(
        "  {:<code_width$}  {:<ident_width$}  {}\n",
        "CODE", "MEMBER", "DESCRIPTION"
    );
    for (code, identifier, description) in &rows {
        table.push_str(&format!(
            "  {:<code_width$}  {:<ident_width$}  {}\n",
            code, identifier, description
        ));
    }
    table
}

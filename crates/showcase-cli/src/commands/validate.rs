use anyhow::Result;
use colored::Colorize;
use showcase_validation::{validate_form, Field, FormInput, FormValidation};

pub fn execute(name: &str, email: &str, password: &str, json: bool) -> Result<()> {
    let result = validate_form(&FormInput::new(name, email, password));

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for line in summary_lines(&result) {
        println!("{}", line);
    }
    println!();

    match result.first_invalid() {
        None => println!("{}", "Form would be accepted".green().bold()),
        Some(field) => println!(
            "{} (focus moves to {})",
            "Form would be rejected".red().bold(),
            field.to_string().cyan()
        ),
    }

    Ok(())
}

/// One line per field, without color
fn summary_lines(result: &FormValidation) -> Vec<String> {
    Field::ORDER
        .into_iter()
        .map(|field| {
            let status = if result.is_field_valid(field) { "ok" } else { "invalid" };
            let detail = match field {
                Field::Name => result.name.error_text().to_string(),
                Field::Email => result.email.error_text().to_string(),
                Field::Password => format!(
                    "{} ({}/4)",
                    result.password.strength.label(),
                    result.password.strength.score()
                ),
            };
            format!("{:<9} {:<8} {}", field.id(), status, detail)
                .trim_end()
                .to_string()
        })
        .collect()
}

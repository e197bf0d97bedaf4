use anyhow::Result;
use colored::Colorize;
use showcase::{Showcase, ShowcaseConfig, SubmitOutcome};
use std::path::Path;

use crate::script::{self, ReplayReport};
use crate::OutputFormat;

pub fn execute(config: &ShowcaseConfig, path: &Path, format: OutputFormat) -> Result<()> {
    let steps = script::load(path)?;
    let mut page = Showcase::new(config)?;
    let report = script::replay(&mut page, &steps)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Summary => print_summary(&report),
    }

    Ok(())
}

fn print_summary(report: &ReplayReport) {
    let display = &report.display;

    println!(
        "{} {} steps, clock at {} ms",
        "Replayed".green().bold(),
        report.steps,
        display.now_ms
    );
    println!();

    for (index, outcome) in report.submits.iter().enumerate() {
        match outcome {
            SubmitOutcome::Accepted => {
                println!("  submit #{}: {}", index + 1, "accepted".green())
            }
            SubmitOutcome::Rejected { focus } => println!(
                "  submit #{}: {} (focus {})",
                index + 1,
                "rejected".red(),
                focus.to_string().cyan()
            ),
        }
    }

    let form = &display.form;
    println!("  name:     {:?} {}", form.name.value, form.name.error.red());
    println!("  email:    {:?} {}", form.email.value, form.email.error.red());
    println!(
        "  strength: {} ({}%)",
        form.strength.label.yellow(),
        form.strength.percent
    );
    if let Some(notice) = &form.notice {
        println!("  notice:   {}", notice.green());
    }
    println!();

    println!("  click:    {}", display.click.text);
    println!("  keypress: {}", display.keypress.text);
    if display.secret.visible {
        println!("  secret:   {}", display.secret.message.magenta());
    }
    println!(
        "  color:    {} {}",
        display.color.label,
        display.color.background.as_deref().unwrap_or("-")
    );
    println!(
        "  gallery:  {} ({}/{})",
        display.gallery.active_image(),
        display.gallery.active + 1,
        display.gallery.images.len()
    );
    match display.accordion.open() {
        Some(index) => println!(
            "  accordion: {} open",
            display.accordion.sections[index].title.cyan()
        ),
        None => println!("  accordion: all closed"),
    }
}

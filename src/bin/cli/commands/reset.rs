use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, yes: bool, format: &OutputFormat) -> Result<()> {
    if !yes {
        if !io::stdin().is_terminal() {
            bail!("Refusing to reset progress without --yes");
        }
        // Stdout stays reserved for the result document.
        let mut prompt = io::stderr();
        if !confirm(&mut prompt, &mut io::stdin().lock(), app.progress.path())? {
            writeln!(prompt, "Cancelled.")?;
            return Ok(());
        }
    }

    let removed = app.progress.reset().context("Failed to reset progress")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": app.progress.path().to_string_lossy(),
                "removed": removed,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if removed {
                println!("Progress cleared. The next run starts from the full word list.");
            } else {
                println!("No progress to clear.");
            }
        }
    }

    Ok(())
}

fn confirm(prompt: &mut dyn Write, input: &mut dyn BufRead, path: &Path) -> Result<bool> {
    write!(prompt, "Forget all progress in {}? [y/N] ", path.display())?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

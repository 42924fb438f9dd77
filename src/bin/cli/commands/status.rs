use anyhow::Result;

use kalimat_lib::daily;

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let corpus = app.load_corpus()?;
    let progress = app.load_progress()?;
    let status = daily::status(&corpus, &progress);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        OutputFormat::Plain => {
            println!("Corpus:    {} ({} words)", app.corpus_path.display(), status.total);
            println!("Progress:  {}", app.progress.path().display());
            println!("Seen:      {}", status.seen);
            println!("Remaining: {}", status.remaining);
            match status.last_run {
                Some(at) => println!(
                    "Last run:  {} ({} runs)",
                    at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"),
                    status.runs
                ),
                None => println!("Last run:  never"),
            }
            if status.total > 0 && status.remaining == 0 {
                println!("{}", paint("All words have been introduced!", Color::GREEN, use_color));
            }
        }
    }

    Ok(())
}

use anyhow::Result;

use kalimat_lib::daily;

use crate::app::App;
use crate::render::terminal::{entry_json, render_entry, rule};
use crate::OutputFormat;

pub fn run(
    app: &App,
    count: Option<i64>,
    seed: Option<u64>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let corpus = app.load_corpus()?;
    let progress = app.load_progress()?;
    let mut rng = app.rng(seed);

    let batch = daily::plan(&corpus, &progress, app.count(count), &mut rng)?;
    let remaining = corpus.unseen_count(&progress.seen);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "selected": batch.iter().map(entry_json).collect::<Vec<_>>(),
                "remaining": remaining,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if batch.is_empty() {
                println!("Nothing to pick ({} words remaining).", remaining);
                return Ok(());
            }
            println!("Would pick {} of {} remaining words (nothing saved)", batch.len(), remaining);
            println!("{}", rule(50));
            for entry in &batch {
                println!("  {}", render_entry(entry, use_color));
            }
        }
    }

    Ok(())
}

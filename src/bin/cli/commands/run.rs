use std::io::{self, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use kalimat_lib::daily::{self, RunReport};
use kalimat_lib::sink::{BatchSink, JsonFileSink, JsonSink};

use crate::app::App;
use crate::render::terminal::{entry_json, paint, render_entry, rule, Color};
use crate::OutputFormat;

pub fn run(
    app: &App,
    count: Option<i64>,
    seed: Option<u64>,
    out: Option<&Path>,
    format: &OutputFormat,
    no_color: bool,
) -> Result<()> {
    let corpus = app.load_corpus()?;
    let count = app.count(count);
    let mut rng = app.rng(seed);

    let mut sink: Box<dyn BatchSink> = match out {
        Some(path) => Box::new(JsonFileSink::new(path.to_path_buf(), app.handoff_options())),
        None => Box::new(JsonSink::new(io::stdout(), app.handoff_options())),
    };
    let target = ReportTarget::for_output(out);
    let use_color = target.use_color(no_color);
    let mut report_out = target.writer();

    let report = daily::run(&corpus, &app.progress, sink.as_mut(), count, &mut rng, Utc::now())
        .context("Daily run failed")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "selected": report.selected.iter().map(entry_json).collect::<Vec<_>>(),
                "accepted": report.accepted,
                "failed": report.failed.iter()
                    .map(|(id, reason)| serde_json::json!({ "index": id, "reason": reason }))
                    .collect::<Vec<_>>(),
                "remaining": report.remaining,
                "complete": report.complete,
            });
            writeln!(report_out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Plain => {
            write_plain(&mut report_out, app, &report, use_color)?;
        }
    }

    Ok(())
}

/// Stream the human-readable report goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportTarget {
    Stdout,
    /// The hand-off document owns stdout
    Stderr,
}

impl ReportTarget {
    fn for_output(out: Option<&Path>) -> Self {
        match out {
            Some(_) => Self::Stdout,
            None => Self::Stderr,
        }
    }

    fn is_terminal(self) -> bool {
        match self {
            Self::Stdout => io::stdout().is_terminal(),
            Self::Stderr => io::stderr().is_terminal(),
        }
    }

    fn use_color(self, no_color: bool) -> bool {
        !no_color && self.is_terminal()
    }

    fn writer(self) -> Box<dyn Write> {
        match self {
            Self::Stdout => Box::new(io::stdout()),
            Self::Stderr => Box::new(io::stderr()),
        }
    }
}

fn write_plain(w: &mut dyn Write, app: &App, report: &RunReport, use_color: bool) -> Result<()> {
    if report.selected.is_empty() {
        if report.complete {
            writeln!(w, "{}", paint("All words have been introduced!", Color::GREEN, use_color))?;
            writeln!(w, "To start over, run `kalimat reset`.")?;
        } else {
            writeln!(w, "No words requested.")?;
        }
        return Ok(());
    }

    writeln!(w, "Selected {} words", report.selected.len())?;
    writeln!(w, "{}", rule(50))?;
    for entry in &report.selected {
        let mark = if report.accepted.contains(&entry.id) {
            paint("\u{2713}", Color::GREEN, use_color)
        } else {
            paint("\u{2717}", Color::RED, use_color)
        };
        writeln!(w, "{} {}", mark, render_entry(entry, use_color))?;
    }
    writeln!(w, "{}", rule(50))?;

    for (id, reason) in &report.failed {
        writeln!(w, "{} entry {}: {}", paint("Not delivered", Color::YELLOW, use_color), id, reason)?;
    }
    writeln!(w, "Recorded {} words, {} remaining", report.accepted.len(), report.remaining)?;

    if report.complete {
        writeln!(w, "{}", paint("All words have been introduced!", Color::GREEN, use_color))?;
    } else {
        let next = report.remaining.min(app.config.words_per_day as usize);
        writeln!(w, "Next run will add {} more words", next)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_follows_handoff_destination() {
        assert_eq!(ReportTarget::for_output(None), ReportTarget::Stderr);
        assert_eq!(ReportTarget::for_output(Some(Path::new("today.json"))), ReportTarget::Stdout);
    }

    #[test]
    fn test_color_tracks_report_stream() {
        for target in [ReportTarget::Stdout, ReportTarget::Stderr] {
            assert!(!target.use_color(true));
            assert_eq!(target.use_color(false), target.is_terminal());
        }
    }
}

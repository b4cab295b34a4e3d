use name_sorter::config::{OutputConfig, OutputFormat};
use name_sorter::error::AppError;
use name_sorter::lines::{FileLineSink, FileLineSource, LineSink, LineSource};
use name_sorter::sort_names;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
pub(crate) struct SortArgs {
    pub(crate) input: PathBuf,
}

#[derive(Debug, Serialize)]
struct SortReport<'a> {
    input: String,
    output: String,
    count: usize,
    names: &'a [String],
}

/// Reads, sorts, echoes and persists the names in `args.input`.
pub(crate) fn run<W: Write>(
    args: SortArgs,
    output: &OutputConfig,
    console: &mut W,
) -> Result<Vec<String>, AppError> {
    let source = FileLineSource::new(&args.input);
    info!(input = %source.path().display(), "reading names");

    let names = source.read_lines()?;
    if names.is_empty() {
        return Err(AppError::NoNames { path: args.input });
    }
    info!(count = names.len(), "found names to sort");

    let sorted = sort_names(&names)?;

    let report = SortReport {
        input: source.path().display().to_string(),
        output: output.path.display().to_string(),
        count: sorted.len(),
        names: &sorted,
    };
    render(&report, output.format, console)?;

    let sink = FileLineSink::new(&output.path);
    sink.write_lines(&sorted)?;
    info!(output = %sink.path().display(), "sorted names written");

    Ok(sorted)
}

fn render<W: Write>(
    report: &SortReport<'_>,
    format: OutputFormat,
    console: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => {
            for name in report.names {
                writeln!(console, "{name}")?;
            }
        }
        OutputFormat::Json => {
            // Serialized up front so a failure leaves the console untouched.
            let mut body = serde_json::to_vec_pretty(report)?;
            body.push(b'\n');
            console.write_all(&body)?;
        }
    }
    console.flush()
}

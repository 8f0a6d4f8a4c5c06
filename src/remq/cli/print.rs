use remq::error::{RemError, Result};
use remq::export::{self, ExportFormat, ExportRecord};
use serde::Serialize;
use serde_json::json;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub(super) fn render_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

/// Writes one JSON document and a newline. A closed reader surfaces as
/// [`RemError::Io`].
pub(super) fn write_json<W: Write, T: Serialize + ?Sized>(
    mut out: W,
    value: &T,
    pretty: bool,
) -> Result<()> {
    writeln!(out, "{}", render_json(value, pretty)?)?;
    out.flush()?;
    Ok(())
}

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    write_json(io::stdout().lock(), value, pretty)
}

pub(super) fn print_export(
    records: &[ExportRecord],
    format: ExportFormat,
    output_file: Option<&Path>,
) -> Result<()> {
    match output_file {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            export::write(&mut out, records, format)?;
            out.flush()?;
            log::info!("exported {} reminders to {}", records.len(), path.display());
            Ok(())
        }
        None => export::write(io::stdout().lock(), records, format),
    }
}

pub(super) fn render_error(err: &RemError) -> String {
    json!({ "error": err.to_string() }).to_string()
}

pub fn print_error(err: &RemError) {
    // Nowhere left to report a failing stderr.
    let _ = writeln!(io::stderr().lock(), "{}", render_error(err));
}

//! CSV export of batch results.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::batch::BatchOutcome;
use crate::selection::FormatSelection;

pub const MAC_COLUMN: &str = "MAC Address";

/// Column names for `selection`.
///
/// Single-format selections use bare labels; combined selections prefix each
/// label with the format tag (`W26 Facility Code`).
pub fn csv_header(selection: FormatSelection) -> Vec<String> {
    let mut header = vec![MAC_COLUMN.to_string()];
    for format in selection.formats() {
        for label in format.labels() {
            if selection.is_combined() {
                header.push(format!("{} {}", format.tag(), label));
            } else {
                header.push(label.to_string());
            }
        }
    }
    header
}

/// Writes the header and one row per successful outcome.
///
/// Returns the number of data rows written.
pub fn write_csv<W: Write>(
    writer: W,
    selection: FormatSelection,
    outcomes: &[BatchOutcome],
) -> std::io::Result<usize> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "{}", csv_header(selection).join(","))?;

    let mut rows: usize = 0;
    for conversion in outcomes.iter().filter_map(|o| o.result.as_ref().ok()) {
        let mut values: Vec<String> = vec![conversion.mac.to_string()];
        for credential in &conversion.credentials {
            values.extend(credential.fields().iter().map(|f| f.value.to_string()));
        }
        writeln!(writer, "{}", values.join(","))?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}

/// Creates (or truncates) `path` and writes the CSV into it.
pub fn export_csv(
    path: &Path,
    selection: FormatSelection,
    outcomes: &[BatchOutcome],
) -> std::io::Result<usize> {
    let file = File::create(path)?;
    write_csv(file, selection, outcomes)
}

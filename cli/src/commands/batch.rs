use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use colored::*;
use maccred_common::config::Config;
use maccred_common::success;
use maccred_core::batch::{self, BatchOutcome};
use maccred_core::credential::FacilityCode;
use maccred_core::export;
use maccred_core::selection::FormatSelection;
use tracing::{error, info, warn};

use crate::mprint;
use crate::terminal::{colors, format, print};

/// Converts every MAC listed in `input`.
///
/// Bad lines are reported and skipped; only a missing or unreadable input
/// file (or an unwritable output file) fails the run.
pub fn batch(
    input: &Path,
    output: Option<&Path>,
    selection: FormatSelection,
    facility_code: FacilityCode,
    cfg: &Config,
) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();
    let entries: Vec<String> = batch::read_mac_list(input)?;
    if entries.is_empty() {
        warn!("No MAC addresses found in {}", input.display());
    } else {
        info!("Loaded {} MAC addresses from {}", entries.len(), input.display());
    }

    let outcomes: Vec<BatchOutcome> = batch::convert_all(&entries, selection, facility_code);

    match output {
        Some(path) => {
            report_failures(&outcomes);
            let rows: usize = export::export_csv(path, selection, &outcomes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            success!("CSV file generated: {} ({rows} rows)", path.display());
        }
        None => print_results(&outcomes, cfg),
    }

    print_summary(&outcomes, start_time.elapsed().as_secs_f64(), cfg);
    Ok(())
}

fn report_failures(outcomes: &[BatchOutcome]) {
    for outcome in outcomes {
        if let Err(e) = &outcome.result {
            error!("Error processing {}: {}", outcome.input, e);
        }
    }
}

fn print_results(outcomes: &[BatchOutcome], cfg: &Config) {
    print::header("batch conversion results", cfg.quiet);
    for (idx, outcome) in outcomes.iter().enumerate() {
        match &outcome.result {
            Ok(conversion) => format::print_conversion_summary(conversion),
            Err(e) => error!("Error processing {}: {}", outcome.input, e),
        }
        if idx + 1 != outcomes.len() {
            mprint!();
        }
    }
}

fn skipped_message(skipped: usize) -> String {
    match skipped {
        1 => "1 entry skipped".to_string(),
        n => format!("{n} entries skipped"),
    }
}

fn print_summary(outcomes: &[BatchOutcome], seconds: f64, cfg: &Config) {
    let converted: usize = outcomes.iter().filter(|o| o.is_ok()).count();
    let skipped: usize = outcomes.len() - converted;

    let converted_str: ColoredString = format!("{converted}/{}", outcomes.len()).bold().green();
    let time_str: ColoredString = format!("{seconds:.2}s").bold().yellow();
    let output: String = format!("Conversion Complete: {converted_str} converted in {time_str}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => success!("{}", output),
    }

    if skipped > 0 {
        warn!("{}", skipped_message(skipped));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_count_is_pluralized() {
        assert_eq!(skipped_message(1), "1 entry skipped");
        assert_eq!(skipped_message(3), "3 entries skipped");
    }
}

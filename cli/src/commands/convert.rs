use std::path::Path;

use anyhow::Context;
use maccred_common::config::Config;
use maccred_common::success;
use maccred_core::batch::{self, BatchOutcome};
use maccred_core::credential::FacilityCode;
use maccred_core::export;
use maccred_core::selection::FormatSelection;
use tracing::debug;

use crate::terminal::format;

/// Converts a single MAC address. Any conversion error aborts the run.
pub fn convert(
    raw: &str,
    selection: FormatSelection,
    facility_code: FacilityCode,
    output: Option<&Path>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let conversion = batch::convert(raw, selection, facility_code)?;
    debug!("Normalized {raw} to {}", conversion.mac);

    if let Some(path) = output {
        let outcome = BatchOutcome {
            input: raw.to_string(),
            result: Ok(conversion),
        };
        export::export_csv(path, selection, std::slice::from_ref(&outcome))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        success!("CSV file generated: {}", path.display());
        return Ok(());
    }

    format::print_device(&conversion.mac, cfg);
    for credential in &conversion.credentials {
        format::print_credential(credential, cfg);
    }
    Ok(())
}

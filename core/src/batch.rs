//! Conversion of one or many MAC addresses.
//!
//! A batch never aborts on a bad line: every input line yields a
//! [`BatchOutcome`], and the caller decides how to report failures.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use maccred_common::error::CredentialError;
use maccred_common::network::mac::MacAddress;

use crate::credential::{Credential, FacilityCode};
use crate::selection::FormatSelection;

/// Every selected credential derived from one MAC address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    pub mac: MacAddress,
    pub credentials: Vec<Credential>,
}

/// The result of converting one line of a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchOutcome {
    pub input: String,
    pub result: Result<Conversion, CredentialError>,
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Normalizes `raw` once and derives every format in `selection`, in order.
pub fn convert(
    raw: &str,
    selection: FormatSelection,
    facility_code: FacilityCode,
) -> Result<Conversion, CredentialError> {
    let mac = MacAddress::parse(raw)?;
    let credentials: Vec<Credential> = selection
        .formats()
        .iter()
        .map(|format| Credential::derive(*format, &mac, facility_code))
        .collect();

    Ok(Conversion { mac, credentials })
}

/// Converts every entry, keeping input order.
pub fn convert_all<S: AsRef<str>>(
    lines: &[S],
    selection: FormatSelection,
    facility_code: FacilityCode,
) -> Vec<BatchOutcome> {
    lines
        .iter()
        .map(|line| {
            let input = line.as_ref().to_string();
            let result = convert(&input, selection, facility_code);
            if let Err(e) = &result {
                debug!("Skipping {input}: {e}");
            }
            BatchOutcome { input, result }
        })
        .collect()
}

/// Splits a MAC list into entries, dropping blank lines and `#` comments.
pub fn parse_mac_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Reads a MAC list file.
pub fn read_mac_list(path: &Path) -> anyhow::Result<Vec<String>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            anyhow::bail!("File not found: {}", path.display())
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let entries = parse_mac_list(&contents);
    debug!("Read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

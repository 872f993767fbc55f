#![cfg(test)]
use std::io::Write;
use std::path::PathBuf;

use maccred_common::error::CredentialError;
use maccred_core::batch::{self, BatchOutcome, Conversion};
use maccred_core::credential::{Credential, Em4100, FacilityCode, Wiegand26, Wiegand34};
use maccred_core::export;
use maccred_core::selection::FormatSelection;
use tempfile::{NamedTempFile, TempDir};

fn mac_list(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create mac list");
    for line in lines {
        writeln!(file, "{line}").expect("write mac list");
    }
    file
}

/// A malformed line in the middle of a file must not stop the lines around it.
#[test]
fn batch_continues_past_malformed_line() {
    let file = mac_list(&["AA:BB:CC:DD:EE:FF", "AA:BB:CC:DD:EE", "11-22-33-44-55-66"]);

    let entries: Vec<String> = batch::read_mac_list(file.path()).unwrap();
    let outcomes: Vec<BatchOutcome> =
        batch::convert_all(&entries, FormatSelection::All, FacilityCode::default());

    assert_eq!(outcomes.len(), 3);

    let first: &Conversion = outcomes[0].result.as_ref().unwrap();
    assert_eq!(
        first.credentials,
        vec![
            Credential::Wiegand26(Wiegand26 {
                mac: first.mac,
                facility_code: 123,
                card_number: 61183,
            }),
            Credential::Wiegand34(Wiegand34 {
                mac: first.mac,
                facility_code: 52445,
                card_number: 61183,
            }),
            Credential::Em4100(Em4100 {
                mac: first.mac,
                version: 170,
                card_id: 3150765550,
            }),
        ]
    );

    assert!(matches!(
        outcomes[1].result,
        Err(CredentialError::InvalidFormat { .. })
    ));
    assert_eq!(outcomes[1].input, "AA:BB:CC:DD:EE");

    let third: &Conversion = outcomes[2].result.as_ref().unwrap();
    assert_eq!(third.mac.to_string(), "11:22:33:44:55:66");
    assert_eq!(third.credentials[0].summary(), "W26: FC=123, CN=21862");
}

#[test]
fn csv_for_all_formats_keeps_input_order() -> anyhow::Result<()> {
    let file = mac_list(&[
        "# site A",
        "ffeeddccbbaa",
        "",
        "GG:HH:II:JJ:KK:LL",
        "00.11.22.33.44.55",
        "AA:BB:CC:DD:EE:FF",
    ]);
    let dir: TempDir = tempfile::tempdir()?;
    let csv_path: PathBuf = dir.path().join("credentials.csv");

    let entries = batch::read_mac_list(file.path())?;
    assert_eq!(entries.len(), 4);

    let outcomes = batch::convert_all(&entries, FormatSelection::All, FacilityCode::from(10));
    let rows = export::export_csv(&csv_path, FormatSelection::All, &outcomes)?;
    assert_eq!(rows, 3);

    let content = std::fs::read_to_string(&csv_path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines.iter().filter(|l| l.starts_with("MAC Address")).count(),
        1
    );
    assert_eq!(lines[1], "FF:EE:DD:CC:BB:AA,10,48042,56780,48042,255,4007513275");
    assert_eq!(lines[2], "00:11:22:33:44:55,10,17493,8755,17493,0,287454020");
    assert_eq!(lines[3], "AA:BB:CC:DD:EE:FF,10,61183,52445,61183,170,3150765550");
    Ok(())
}

#[test]
fn csv_for_wiegand_pair_has_five_columns() {
    let outcomes = batch::convert_all(
        &["A4:C1:38:AB:CD:EF"],
        FormatSelection::Both,
        FacilityCode::default(),
    );
    let mut buffer: Vec<u8> = Vec::new();
    export::write_csv(&mut buffer, FormatSelection::Both, &outcomes).unwrap();

    let content = String::from_utf8(buffer).unwrap();
    assert_eq!(
        content,
        "MAC Address,W26 Facility Code,W26 Card Number,W34 Facility Code,W34 Card Number\n\
         A4:C1:38:AB:CD:EF,123,52719,14507,52719\n"
    );
}

#[test]
fn missing_input_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let err = batch::read_mac_list(&missing).unwrap_err();
    assert_eq!(err.to_string(), format!("File not found: {}", missing.display()));
}

#[test]
fn invalid_facility_code_is_rejected_before_conversion() {
    assert_eq!(
        FacilityCode::try_from(256_i64),
        Err(CredentialError::InvalidFacilityCode(256))
    );
    assert_eq!(
        FacilityCode::try_from(-1_i64),
        Err(CredentialError::InvalidFacilityCode(-1))
    );
}

use colored::*;
use maccred_common::config::Config;
use maccred_common::network::mac::{MacAddress, get_vendor};
use maccred_core::batch::Conversion;
use maccred_core::credential::Credential;

use crate::mprint;
use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

pub fn device_details(mac: &MacAddress, vendor: Option<&str>) -> Vec<Detail> {
    vec![
        ("MAC Address".to_string(), mac.to_string().color(colors::MAC_ADDR)),
        (
            "Vendor".to_string(),
            vendor.unwrap_or("Unknown").color(colors::TEXT_DEFAULT),
        ),
    ]
}

/// Key/value lines of a credential block: MAC, both fields as `dec (hex)`, frame.
pub fn credential_details(credential: &Credential) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![(
        "MAC Address".to_string(),
        credential.mac().to_string().color(colors::MAC_ADDR),
    )];

    for field in credential.fields() {
        let value: ColoredString = format!(
            "{} {}",
            field.value.to_string().color(colors::DECIMAL),
            format!("({})", field.hex()).color(colors::HEX)
        )
        .normal();
        details.push((field.label.to_string(), value));
    }

    details.push((
        "Frame".to_string(),
        credential.frame().to_string().color(colors::FRAME),
    ));
    details
}

pub fn print_device(mac: &MacAddress, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    print::header("device", cfg.quiet);
    let vendor: Option<String> = get_vendor(mac);
    for (key, value) in device_details(mac, vendor.as_deref()) {
        print::aligned_line(&key, value);
    }
}

pub fn print_credential(credential: &Credential, cfg: &Config) {
    if cfg.quiet > 1 {
        print::print_status(credential.summary());
        return;
    }

    print::header(&format!("{} conversion", credential.format().title()), cfg.quiet);
    for (key, value) in credential_details(credential) {
        print::aligned_line(&key, value);
    }
}

/// Compact listing used by batch mode.
pub fn print_conversion_summary(conversion: &Conversion) {
    let mac: ColoredString = conversion.mac.to_string().color(colors::MAC_ADDR);
    mprint!(&format!("{} {}", "MAC:".color(colors::PRIMARY), mac));
    for credential in &conversion.credentials {
        mprint!(&format!(
            "  {}",
            credential.summary().color(colors::TEXT_DEFAULT)
        ));
    }
}

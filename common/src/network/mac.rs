//! # MAC Address Model
//!
//! Parses the loosely formatted addresses people copy out of BLE scanner apps
//! (`aa:bb:cc:dd:ee:ff`, `AA-BB-CC-DD-EE-FF`, `aabb.ccdd.eeff`, `AABBCCDDEEFF`)
//! into a single validated [`MacAddress`].

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use mac_oui::Oui;
use pnet::util::MacAddr;
use tracing::debug;

use crate::error::{CredentialError, FormatIssue};

const SEPARATORS: [char; 3] = [':', '-', '.'];
const HEX_DIGITS: usize = 12;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// A validated 48-bit MAC address.
///
/// Displays in canonical form: six uppercase hex pairs joined by colons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MacAddress(MacAddr);

impl MacAddress {
    pub fn new(octets: [u8; 6]) -> Self {
        let [a, b, c, d, e, f] = octets;
        Self(MacAddr::new(a, b, c, d, e, f))
    }

    /// Normalizes a raw address string.
    ///
    /// `:`, `-` and `.` separators are stripped, the rest must be exactly
    /// twelve hex digits (any case).
    pub fn parse(raw: &str) -> Result<Self, CredentialError> {
        let stripped: String = raw
            .trim()
            .chars()
            .filter(|c| !SEPARATORS.contains(c))
            .collect();

        if stripped.chars().count() != HEX_DIGITS {
            return Err(CredentialError::InvalidFormat {
                input: raw.to_string(),
                reason: FormatIssue::Length,
            });
        }

        let nibbles: Vec<u8> = stripped
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| CredentialError::InvalidFormat {
                input: raw.to_string(),
                reason: FormatIssue::Characters,
            })?;

        let mut octets = [0u8; 6];
        for (octet, pair) in octets.iter_mut().zip(nibbles.chunks_exact(2)) {
            *octet = (pair[0] << 4) | pair[1];
        }

        Ok(Self::new(octets))
    }

    pub fn octets(&self) -> [u8; 6] {
        let MacAddr(a, b, c, d, e, f) = self.0;
        [a, b, c, d, e, f]
    }
}

impl FromStr for MacAddress {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<MacAddress> for MacAddr {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, octet) in self.octets().iter().enumerate() {
            if idx > 0 {
                write!(f, ":")?;
            }
            write!(f, "{octet:02X}")?;
        }
        Ok(())
    }
}

/// Retrieves or initializes the **Organizationally unique identifier** database.
fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB
        .get_or_init(|| {
            let db = Oui::default().ok();
            if db.is_none() {
                debug!("OUI database could not be loaded, vendor lookups disabled");
            }
            db
        })
        .as_ref()
}

/// Identify the vendor of a MAC address.
///
/// BLE devices frequently advertise random addresses, so `None` is common.
pub fn get_vendor(mac: &MacAddress) -> Option<String> {
    let db = get_oui_db()?;
    match db.lookup_by_mac(&mac.to_string()) {
        Ok(Some(entry)) => Some(entry.company_name.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "AA:BB:CC:DD:EE:FF";

    #[test]
    fn parse_accepts_every_separator_style() {
        for raw in [
            "AA:BB:CC:DD:EE:FF",
            "aa:bb:cc:dd:ee:ff",
            "AA-BB-CC-DD-EE-FF",
            "aabb.ccdd.eeff",
            "AABBCCDDEEFF",
            "  aA:bB:cC:dD:eE:fF\n",
        ] {
            let mac = MacAddress::parse(raw).unwrap();
            assert_eq!(mac.to_string(), CANONICAL, "input: {raw:?}");
        }
    }

    #[test]
    fn parse_exposes_octets_in_order() {
        let mac: MacAddress = "a4:c1:38:ab:cd:ef".parse().unwrap();
        assert_eq!(mac.octets(), [0xA4, 0xC1, 0x38, 0xAB, 0xCD, 0xEF]);
        assert_eq!(mac.to_string(), "A4:C1:38:AB:CD:EF");
    }

    #[test]
    fn parse_should_fail_on_wrong_length() {
        for raw in ["", "AA:BB:CC:DD:EE", "AA:BB:CC:DD:EE:FF:00", "AABBCCDDEEF"] {
            let result = MacAddress::parse(raw);
            assert_eq!(
                result,
                Err(CredentialError::InvalidFormat {
                    input: raw.to_string(),
                    reason: FormatIssue::Length,
                }),
                "input: {raw:?}"
            );
        }
    }

    #[test]
    fn parse_should_fail_on_non_hex_characters() {
        for raw in ["GG:HH:II:JJ:KK:LL", "AA:BB:CC:DD:EE:FG", "AA BB CC DD EE"] {
            assert!(
                matches!(
                    MacAddress::parse(raw),
                    Err(CredentialError::InvalidFormat { .. })
                ),
                "input: {raw:?}"
            );
        }
        assert_eq!(
            MacAddress::parse("GG:HH:II:JJ:KK:LL"),
            Err(CredentialError::InvalidFormat {
                input: "GG:HH:II:JJ:KK:LL".to_string(),
                reason: FormatIssue::Characters,
            })
        );
    }

    #[test]
    fn display_round_trips_through_pnet() {
        let mac = MacAddress::new([0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]);
        let pnet_mac: MacAddr = mac.into();
        assert_eq!(pnet_mac, MacAddr::new(0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E));
        assert_eq!(mac.to_string(), "00:1A:2B:3C:4D:5E");
    }

    #[test]
    fn get_vendor_resolves_registered_prefix() {
        let cisco = MacAddress::parse("00:00:0C:12:34:56").unwrap();
        let vendor = get_vendor(&cisco).map(|v| v.to_lowercase());
        assert!(vendor.is_some_and(|v| v.contains("cisco")));
    }
}

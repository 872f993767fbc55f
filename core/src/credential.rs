//! Derivation of access-control credentials from a MAC address.
//!
//! Every format is a fixed re-slicing of the six MAC octets:
//!
//! ```text
//!   octet:      1    2    3    4    5    6
//!   MAC:       AA : BB : CC : DD : EE : FF
//!   W26:                          [ card  ]   facility code is supplied
//!   W34:                [facility][ card  ]
//!   EM4100:    [ver][       card id      ]
//! ```
//!
//! No collision resistance is claimed; the MAC is simply truncated into the
//! target field widths.

use std::fmt;

use maccred_common::error::CredentialError;
use maccred_common::network::mac::MacAddress;

use crate::frame::Frame;

pub const DEFAULT_FACILITY_CODE: u8 = 123;

/// A facility code that fits the 8-bit field of the Wiegand 26-bit format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FacilityCode(u8);

impl FacilityCode {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for FacilityCode {
    fn default() -> Self {
        Self(DEFAULT_FACILITY_CODE)
    }
}

impl From<u8> for FacilityCode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl TryFrom<i64> for FacilityCode {
    type Error = CredentialError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        u8::try_from(code)
            .map(Self)
            .map_err(|_| CredentialError::InvalidFacilityCode(code))
    }
}

/// The card formats a MAC address can be projected onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CredentialFormat {
    Wiegand26,
    Wiegand34,
    Em4100,
}

impl CredentialFormat {
    pub fn title(self) -> &'static str {
        match self {
            CredentialFormat::Wiegand26 => "Wiegand 26-bit",
            CredentialFormat::Wiegand34 => "Wiegand 34-bit",
            CredentialFormat::Em4100 => "EM4100 40-bit",
        }
    }

    /// Short tag used in batch listings and combined CSV headers.
    pub fn tag(self) -> &'static str {
        match self {
            CredentialFormat::Wiegand26 => "W26",
            CredentialFormat::Wiegand34 => "W34",
            CredentialFormat::Em4100 => "EM4100",
        }
    }

    pub fn labels(self) -> [&'static str; 2] {
        match self {
            CredentialFormat::Wiegand26 | CredentialFormat::Wiegand34 => {
                ["Facility Code", "Card Number"]
            }
            CredentialFormat::Em4100 => ["Version", "Card ID"],
        }
    }

    pub fn bit_len(self) -> u8 {
        match self {
            CredentialFormat::Wiegand26 => 26,
            CredentialFormat::Wiegand34 => 34,
            CredentialFormat::Em4100 => 40,
        }
    }
}

impl fmt::Display for CredentialFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wiegand26 {
    pub mac: MacAddress,
    pub facility_code: u8,
    pub card_number: u16,
}

impl Wiegand26 {
    /// Validates `facility_code` and takes the card number from the last two octets.
    pub fn derive(mac: &MacAddress, facility_code: i64) -> Result<Self, CredentialError> {
        let facility_code = FacilityCode::try_from(facility_code)?;
        Ok(Self::with_facility(mac, facility_code))
    }

    pub fn with_facility(mac: &MacAddress, facility_code: FacilityCode) -> Self {
        let [.., e, f] = mac.octets();
        Self {
            mac: *mac,
            facility_code: facility_code.value(),
            card_number: u16::from_be_bytes([e, f]),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wiegand34 {
    pub mac: MacAddress,
    pub facility_code: u16,
    pub card_number: u16,
}

impl Wiegand34 {
    pub fn derive(mac: &MacAddress) -> Self {
        let [_, _, c, d, e, f] = mac.octets();
        Self {
            mac: *mac,
            facility_code: u16::from_be_bytes([c, d]),
            card_number: u16::from_be_bytes([e, f]),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Em4100 {
    pub mac: MacAddress,
    pub version: u8,
    pub card_id: u32,
}

impl Em4100 {
    pub fn derive(mac: &MacAddress) -> Self {
        let [a, b, c, d, e, _] = mac.octets();
        Self {
            mac: *mac,
            version: a,
            card_id: u32::from_be_bytes([b, c, d, e]),
        }
    }
}

/// One named field of a credential with the hex width of its bit field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldValue {
    pub label: &'static str,
    pub short: &'static str,
    pub value: u32,
    pub hex_digits: usize,
}

impl FieldValue {
    pub fn hex(&self) -> String {
        format!("0x{:0width$X}", self.value, width = self.hex_digits)
    }
}

/// A credential record of any supported format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credential {
    Wiegand26(Wiegand26),
    Wiegand34(Wiegand34),
    Em4100(Em4100),
}

impl Credential {
    pub fn derive(format: CredentialFormat, mac: &MacAddress, facility_code: FacilityCode) -> Self {
        match format {
            CredentialFormat::Wiegand26 => {
                Credential::Wiegand26(Wiegand26::with_facility(mac, facility_code))
            }
            CredentialFormat::Wiegand34 => Credential::Wiegand34(Wiegand34::derive(mac)),
            CredentialFormat::Em4100 => Credential::Em4100(Em4100::derive(mac)),
        }
    }

    pub fn format(&self) -> CredentialFormat {
        match self {
            Credential::Wiegand26(_) => CredentialFormat::Wiegand26,
            Credential::Wiegand34(_) => CredentialFormat::Wiegand34,
            Credential::Em4100(_) => CredentialFormat::Em4100,
        }
    }

    pub fn mac(&self) -> &MacAddress {
        match self {
            Credential::Wiegand26(w) => &w.mac,
            Credential::Wiegand34(w) => &w.mac,
            Credential::Em4100(em) => &em.mac,
        }
    }

    pub fn fields(&self) -> [FieldValue; 2] {
        match self {
            Credential::Wiegand26(w) => [
                facility_field(w.facility_code as u32, 2),
                card_field(w.card_number),
            ],
            Credential::Wiegand34(w) => [
                facility_field(w.facility_code as u32, 4),
                card_field(w.card_number),
            ],
            Credential::Em4100(em) => [
                FieldValue {
                    label: "Version",
                    short: "Ver",
                    value: em.version as u32,
                    hex_digits: 2,
                },
                FieldValue {
                    label: "Card ID",
                    short: "ID",
                    value: em.card_id,
                    hex_digits: 8,
                },
            ],
        }
    }

    /// The bit sequence a reader would emit for this credential.
    pub fn frame(&self) -> Frame {
        match self {
            Credential::Wiegand26(w) => Frame::wiegand26(w.facility_code, w.card_number),
            Credential::Wiegand34(w) => Frame::wiegand34(w.facility_code, w.card_number),
            Credential::Em4100(em) => Frame::em4100(em.version, em.card_id),
        }
    }

    /// One-line listing, e.g. `W26: FC=123, CN=61183`.
    pub fn summary(&self) -> String {
        let [first, second] = self.fields();
        format!(
            "{}: {}={}, {}={}",
            self.format().tag(),
            first.short,
            first.value,
            second.short,
            second.value
        )
    }
}

fn facility_field(value: u32, hex_digits: usize) -> FieldValue {
    FieldValue {
        label: "Facility Code",
        short: "FC",
        value,
        hex_digits,
    }
}

fn card_field(card_number: u16) -> FieldValue {
    FieldValue {
        label: "Card Number",
        short: "CN",
        value: card_number as u32,
        hex_digits: 4,
    }
}

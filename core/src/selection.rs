use std::fmt;
use std::str::FromStr;

use crate::credential::CredentialFormat;

/// Which credential formats a run produces.
///
/// Covers both the combined converter (`26`, `34`, `40`, `all`) and the
/// Wiegand-only selector (`both`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatSelection {
    Wiegand26,
    Wiegand34,
    Em4100,
    /// Wiegand 26-bit and 34-bit.
    Both,
    #[default]
    All,
}

impl FormatSelection {
    /// Selected formats, always in W26, W34, EM4100 order.
    pub fn formats(self) -> &'static [CredentialFormat] {
        use CredentialFormat::*;
        match self {
            FormatSelection::Wiegand26 => &[Wiegand26],
            FormatSelection::Wiegand34 => &[Wiegand34],
            FormatSelection::Em4100 => &[Em4100],
            FormatSelection::Both => &[Wiegand26, Wiegand34],
            FormatSelection::All => &[Wiegand26, Wiegand34, Em4100],
        }
    }

    pub fn is_combined(self) -> bool {
        self.formats().len() > 1
    }

    pub fn includes(self, format: CredentialFormat) -> bool {
        self.formats().contains(&format)
    }
}

impl FromStr for FormatSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "26" => Ok(FormatSelection::Wiegand26),
            "34" => Ok(FormatSelection::Wiegand34),
            "40" => Ok(FormatSelection::Em4100),
            "both" => Ok(FormatSelection::Both),
            "all" => Ok(FormatSelection::All),
            _ => Err(format!(
                "invalid format '{s}' (expected 26, 34, 40, both or all)"
            )),
        }
    }
}

impl fmt::Display for FormatSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatSelection::Wiegand26 => "26",
            FormatSelection::Wiegand34 => "34",
            FormatSelection::Em4100 => "40",
            FormatSelection::Both => "both",
            FormatSelection::All => "all",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_accepts_every_selector() {
        assert_eq!("26".parse::<FormatSelection>(), Ok(FormatSelection::Wiegand26));
        assert_eq!("34".parse::<FormatSelection>(), Ok(FormatSelection::Wiegand34));
        assert_eq!("40".parse::<FormatSelection>(), Ok(FormatSelection::Em4100));
        assert_eq!("both".parse::<FormatSelection>(), Ok(FormatSelection::Both));
        assert_eq!("ALL".parse::<FormatSelection>(), Ok(FormatSelection::All));
        assert!("32".parse::<FormatSelection>().is_err());
        assert!("".parse::<FormatSelection>().is_err());
    }

    #[test]
    fn display_matches_the_parsed_name() {
        for name in ["26", "34", "40", "both", "all"] {
            let selection: FormatSelection = name.parse().unwrap();
            assert_eq!(selection.to_string(), name);
        }
    }

    #[test]
    fn formats_keep_a_fixed_order() {
        assert_eq!(
            FormatSelection::All.formats(),
            &[
                CredentialFormat::Wiegand26,
                CredentialFormat::Wiegand34,
                CredentialFormat::Em4100
            ]
        );
        assert_eq!(
            FormatSelection::Both.formats(),
            &[CredentialFormat::Wiegand26, CredentialFormat::Wiegand34]
        );
        assert!(!FormatSelection::Both.includes(CredentialFormat::Em4100));
        assert!(FormatSelection::Em4100.includes(CredentialFormat::Em4100));
    }

    #[test]
    fn only_multi_format_selections_are_combined() {
        assert!(FormatSelection::All.is_combined());
        assert!(FormatSelection::Both.is_combined());
        assert!(!FormatSelection::Wiegand34.is_combined());
        assert_eq!(FormatSelection::default(), FormatSelection::All);
    }
}

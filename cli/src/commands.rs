pub mod batch;
pub mod convert;

use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};
use maccred_core::credential::DEFAULT_FACILITY_CODE;
use maccred_core::selection::FormatSelection;

const EXAMPLES: &str = "\
Examples:
  # Convert a single MAC to every format
  maccred -m AA:BB:CC:DD:EE:FF

  # Convert a single MAC to EM4100 only
  maccred -m AA:BB:CC:DD:EE:FF -f 40

  # Wiegand 26-bit with facility code 42
  maccred -m aa-bb-cc-dd-ee-ff -f 26 -c 42

  # Batch convert from a file
  maccred -i mac_list.txt -f both

  # Generate CSV output
  maccred -i mac_list.txt -o credentials.csv";

#[derive(Parser, Debug)]
#[command(name = "maccred")]
#[command(version, about = "Convert BLE MAC addresses to access control credentials.")]
#[command(after_help = EXAMPLES)]
pub struct CommandLine {
    /// Single MAC address to convert
    #[arg(short = 'm', long = "mac", value_name = "MAC", conflicts_with = "input")]
    pub mac: Option<String>,

    /// Input file with MAC addresses (one per line, '#' starts a comment)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write results to a CSV file instead of the terminal
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format: 26, 34, 40 (EM4100), both (26 and 34) or all
    #[arg(short = 'f', long = "format", value_name = "FORMAT", default_value = "all")]
    pub format: FormatSelection,

    /// Facility code for the Wiegand 26-bit format (0-255)
    #[arg(
        short = 'c',
        long = "facility-code",
        value_name = "CODE",
        default_value_t = i64::from(DEFAULT_FACILITY_CODE),
        allow_negative_numbers = true
    )]
    pub facility_code: i64,

    /// Hide the banner and section headers (-qq also hides record details)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Hide the banner
    #[arg(long = "no-banner")]
    pub no_banner: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// What a run has been asked to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Single(String),
    Batch(PathBuf),
    Help,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn mode(&self) -> Mode {
        match (&self.mac, &self.input) {
            (Some(mac), _) => Mode::Single(mac.clone()),
            (None, Some(input)) => Mode::Batch(input.clone()),
            (None, None) => Mode::Help,
        }
    }

    pub fn print_help() -> std::io::Result<()> {
        Self::command().print_help()
    }
}

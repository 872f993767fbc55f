mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Mode, batch, convert};
use maccred_common::config::Config;
use maccred_core::credential::FacilityCode;
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    match run(commands) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(commands: CommandLine) -> anyhow::Result<ExitCode> {
    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    let facility_code = FacilityCode::try_from(commands.facility_code)?;
    let selection = commands.format;
    let output = commands.output.as_deref();

    match commands.mode() {
        Mode::Single(mac) => {
            print::banner(&cfg);
            convert::convert(&mac, selection, facility_code, output, &cfg)?;
        }
        Mode::Batch(input) => {
            print::banner(&cfg);
            batch::batch(&input, output, selection, facility_code, &cfg)?;
        }
        Mode::Help => {
            CommandLine::print_help()?;
            return Ok(ExitCode::FAILURE);
        }
    }

    print::end_of_program(&cfg);
    Ok(ExitCode::SUCCESS)
}

use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Target of report lines; the formatter writes their `raw_msg` verbatim.
pub const PRINT_TARGET: &str = "maccred::print";

pub struct MaccredFormatter;

#[derive(Default)]
struct EventFields {
    message: String,
    raw_msg: Option<String>,
    success: bool,
    extra: Vec<String>,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "raw_msg" => self.raw_msg = Some(value.to_string()),
            name => self.extra.push(format!("{name}={value}")),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "success" => self.success = value,
            name => self.extra.push(format!("{name}={value}")),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "raw_msg" => self.raw_msg = Some(format!("{value:?}")),
            name => self.extra.push(format!("{name}={value:?}")),
        }
    }
}

impl<S, N> FormatEvent<S, N> for MaccredFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let mut fields = EventFields::default();
        event.record(&mut fields);

        if meta.target() == PRINT_TARGET {
            if let Some(raw) = fields.raw_msg {
                return writeln!(writer, "{raw}");
            }
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = if fields.success {
            ("[✓]", |s| s.green().bold())
        } else {
            match *meta.level() {
                Level::TRACE => ("[ ]", |s| s.dimmed()),
                Level::DEBUG => ("[?]", |s| s.blue()),
                Level::INFO => ("[+]", |s| s.green().bold()),
                Level::WARN => ("[*]", |s| s.yellow().bold()),
                Level::ERROR => ("[-]", |s| s.red().bold()),
            }
        };

        write!(writer, "{} {}", color_func(symbol.into()), fields.message)?;
        for extra in &fields.extra {
            write!(writer, " {}", extra.dimmed())?;
        }
        writeln!(writer)
    }
}

fn filter(verbose: u8) -> EnvFilter {
    let level: &str = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    if let Ok(directive) = format!("{PRINT_TARGET}=info").parse() {
        filter = filter.add_directive(directive);
    }
    filter
}

pub fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .event_format(MaccredFormatter)
        .init();
}

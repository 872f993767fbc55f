#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Hides the banner (`-q` also implies this).
    pub no_banner: bool,
    /// Quiet level.
    ///
    /// `1` drops banner and section headers, `2` also drops per-record detail.
    pub quiet: u8,
}

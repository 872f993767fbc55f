//! Logging shortcuts shared by every crate in the workspace.

/// Logs an `INFO` event flagged as a success.
///
/// The terminal formatter renders these with a distinct status symbol.
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::__tracing::info!(success = true, $($arg)+)
    };
}

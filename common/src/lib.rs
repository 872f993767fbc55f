//! Shared building blocks for the `maccred` workspace.
//!
//! * [`network::mac`]: the validated [`MacAddress`](network::mac::MacAddress) type and OUI lookup.
//! * [`error`]: errors raised while normalizing addresses or validating credential inputs.
//! * [`config`]: presentation options resolved from the command line.

pub mod config;
pub mod error;
pub mod macros;
pub mod network;

#[doc(hidden)]
pub use tracing as __tracing;

//! Credential derivation for the `maccred` tool.
//!
//! * [`credential`]: the Wiegand 26/34-bit and EM4100 projections of a MAC address.
//! * [`frame`]: the bit frames those credentials are transmitted as.
//! * [`selection`]: which formats a run produces.
//! * [`batch`]: per-line conversion of MAC lists.
//! * [`export`]: CSV output.

pub mod batch;
pub mod credential;
pub mod export;
pub mod frame;
pub mod selection;

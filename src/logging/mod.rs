//! Tracing setup for the labeler: bracketed event formatting and dual
//! stdout + file output.

mod formatter;
mod setup;

pub use setup::setup_logging;

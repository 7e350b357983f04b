//! Signal derivation from the most recent indicator frame.

pub mod signal_generator;

pub use signal_generator::*;

//! Alert workflow: the shared pipeline, its application context and the
//! text command layer that calls into it.

pub mod commands;
pub mod context;
pub mod pipeline;

pub use commands::{Command, CommandHandler};
pub use context::AppContext;
pub use pipeline::AlertPipeline;

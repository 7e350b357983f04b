//! Core application primitives (bootstrap, scheduler, runtime)

pub mod bootstrap;
pub mod runtime;
pub mod scheduler;

pub use bootstrap::*;
pub use runtime::*;
pub use scheduler::*;

//! Problem and solution representation.
//!
//! - [`Instance`]: immutable task durations and server count
//! - [`Assignment`]: per-server task lists with cached loads
//! - [`Move`]: single-task relocation used by tabu search

mod assignment;
mod instance;

pub use assignment::{Assignment, Move};
pub use instance::Instance;

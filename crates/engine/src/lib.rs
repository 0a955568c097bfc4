//! tetrofit-engine - exhaustive tiling search over the tetromino catalog.
//!
//! Builds orientation sets once, walks every (piece, orientation, offset)
//! assignment and hands each exact cover to a [`SolutionSink`].

pub mod config;
pub mod report;
pub mod search;
pub mod sink;
pub mod solution;

pub use config::{ConfigError, SearchConfig};
pub use report::{render, ReportError, SolutionReporter, SEPARATOR, SLOT_GLYPHS};
pub use search::{SearchEngine, SearchStats};
pub use sink::{SolutionCollector, SolutionCounter, SolutionSink};
pub use solution::{Placement, Solution, MAX_PIECES};

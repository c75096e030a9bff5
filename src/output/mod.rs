//! Console output module
//!
//! Provides the spec-style printer and its style tables.

mod printer;
mod style;

pub use printer::{
    stack_excerpt, PendingFailure, Reporter, ResultPrinter, RunCounters, STACK_EXCERPT_LINES,
    SUITE_PATH_SEPARATOR,
};
pub use style::{paint, Style, Symbol};

//! Backtracking interpreter for Trellis rule trees.
//!
//! This crate executes a validated [`trellis_core::Grammar`] against a source
//! string, producing a [`trellis_core::Node`] parse tree. Construction
//! compiles every pattern symbol into an anchored regex automaton and refuses
//! structurally defective grammars; parsing itself is pure recursive descent
//! with ordered-choice backtracking, greedy/optional quantifiers, named
//! captures, throw short-circuits, and single-symbol error recovery.

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    CompileError, Limits, NoopTracer, ParseError, Parser, PrintTracer, Tracer, Verbosity,
};

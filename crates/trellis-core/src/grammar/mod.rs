//! Grammar types for Trellis rule trees.
//!
//! This module provides types for representing rule trees, with support for
//! JSON deserialization, compact binary serialization, and structural
//! validation.

mod binary;
mod json;
mod types;
mod validate;

#[cfg(test)]
mod binary_tests;
#[cfg(test)]
mod json_tests;

pub use json::GrammarError;
pub use types::{Grammar, Rule, RuleSet, Symbol, SymbolKind, SymbolSet};
pub use validate::ValidationError;

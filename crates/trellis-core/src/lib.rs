//! Core data structures for Trellis.
//!
//! Two shapes define the system's entire boundary:
//! - **Rule tree** ([`Grammar`]): a named table of rule sets, each an ordered
//!   list of alternative rules over quantified symbol sets. Produced by any
//!   grammar-authoring tool, loaded from JSON or a compact binary encoding.
//! - **Parse tree** ([`Node`]): the output of interpreting a rule tree against
//!   a source string - raw matched text, named capture buckets, and a source
//!   span.
//!
//! Both are plain serde-serializable data. The interpreter lives in the
//! `trellis-engine` crate; this crate also carries the structural validation
//! that must pass before a grammar is ever interpreted.

pub mod grammar;
pub mod node;


pub use grammar::{
    Grammar, GrammarError, Rule, RuleSet, Symbol, SymbolKind, SymbolSet, ValidationError,
};
pub use node::{Children, Node, NodeKind, Span};

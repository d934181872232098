//! The public parse entry point.

use trellis_core::{Grammar, Node};

use super::compile::{self, CompiledGrammar};
use super::error::{CompileError, ParseError};
use super::limits::Limits;
use super::matcher::Matcher;
use super::outcome::Failure;
use super::trace::{NoopTracer, Tracer};

/// A compiled, reusable parser for one grammar.
///
/// Construction validates the grammar and pre-builds every pattern's regex
/// automaton; an invalid grammar never becomes a `Parser`. The value is
/// immutable afterwards - parse calls own their cursor state and node trees,
/// so one `Parser` serves any number of concurrent parses.
#[derive(Debug)]
pub struct Parser {
    grammar: CompiledGrammar,
}

impl Parser {
    /// Validate and compile `grammar`.
    pub fn new(grammar: &Grammar) -> Result<Self, CompileError> {
        Ok(Self {
            grammar: compile::compile(grammar)?,
        })
    }

    /// Parse `source` against the rule set named `rule_set`, from position 0.
    pub fn parse(&self, source: &str, rule_set: &str) -> Result<Node, ParseError> {
        self.parse_with(source, rule_set, None, Limits::default(), &mut NoopTracer)
    }

    /// Parse starting where `preceding` ended (or 0 without one), so a
    /// sequence of sibling parses can share one source string.
    pub fn parse_after(
        &self,
        source: &str,
        rule_set: &str,
        preceding: Option<&Node>,
    ) -> Result<Node, ParseError> {
        self.parse_with(source, rule_set, preceding, Limits::default(), &mut NoopTracer)
    }

    /// Parse with explicit limits and a tracer.
    ///
    /// The caller only ever observes a node or a hard [`ParseError`]: a soft
    /// mismatch escaping the entry rule set hardens here into
    /// [`ParseError::Failed`] with the mismatch's message and index.
    pub fn parse_with<T: Tracer>(
        &self,
        source: &str,
        rule_set: &str,
        preceding: Option<&Node>,
        limits: Limits,
        tracer: &mut T,
    ) -> Result<Node, ParseError> {
        let at = preceding.map(|node| node.span.end).unwrap_or(0);
        assert!(
            at <= source.len(),
            "preceding node ends beyond the source string"
        );

        let mut matcher = Matcher::new(&self.grammar, source, limits, tracer);
        match matcher.parse_rule_set(rule_set, at) {
            Ok(node) => Ok(node),
            Err(Failure::Fatal(error)) => Err(error),
            Err(Failure::Mismatch(mismatch)) => {
                let error = mismatch.into_fatal();
                tracer.trace_hard_failure(&error);
                Err(error)
            }
        }
    }
}

//! Tracing infrastructure for debugging parse execution.
//!
//! The tracer is a zero-cost abstraction: with [`NoopTracer`] every call is
//! an `#[inline(always)]` empty function and the compiler eliminates the
//! instrumentation entirely. Tracing-only state (like indentation depth)
//! lives in the tracer itself, never in the matcher.

use trellis_core::Span;

use super::error::ParseError;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Rule-set entries, matches, recoveries, hard failures.
    #[default]
    Default,
    /// Also rule alternatives and recovery scans.
    Verbose,
    /// Also every soft mismatch.
    VeryVerbose,
}

/// Tracer trait for parse instrumentation.
///
/// Each method is called at a defined extension point:
/// - `trace_enter` - a rule set is entered
/// - `trace_match` - a rule set produced a node
/// - `trace_exhausted` - a rule set ran out of alternatives
/// - `trace_rule` - before a rule alternative is attempted
/// - `trace_mismatch` - a rule alternative failed softly
/// - `trace_recovery_scan` - a rule starts scanning for its recovery symbol
/// - `trace_recovery` - recovery resynchronized
/// - `trace_hard_failure` - a hard failure is raised
pub trait Tracer {
    /// Called when a rule set is entered.
    fn trace_enter(&mut self, rule_set: &str, at: usize);

    /// Called when a rule set produces a node.
    fn trace_match(&mut self, rule_set: &str, span: Span);

    /// Called when a rule set exhausts its alternatives without a match.
    fn trace_exhausted(&mut self, rule_set: &str, at: usize);

    /// Called before a rule alternative is attempted.
    fn trace_rule(&mut self, rule_set: &str, rule: usize, at: usize);

    /// Called when a rule alternative fails softly.
    fn trace_mismatch(&mut self, expected: &str, at: usize);

    /// Called when a rule starts scanning for its recovery symbol.
    fn trace_recovery_scan(&mut self, rule_set: &str, at: usize);

    /// Called when recovery resynchronizes after skipping `skipped` bytes.
    fn trace_recovery(&mut self, rule_set: &str, skipped: usize, span: Span);

    /// Called when a hard failure is raised.
    fn trace_hard_failure(&mut self, error: &ParseError);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _rule_set: &str, _at: usize) {}

    #[inline(always)]
    fn trace_match(&mut self, _rule_set: &str, _span: Span) {}

    #[inline(always)]
    fn trace_exhausted(&mut self, _rule_set: &str, _at: usize) {}

    #[inline(always)]
    fn trace_rule(&mut self, _rule_set: &str, _rule: usize, _at: usize) {}

    #[inline(always)]
    fn trace_mismatch(&mut self, _expected: &str, _at: usize) {}

    #[inline(always)]
    fn trace_recovery_scan(&mut self, _rule_set: &str, _at: usize) {}

    #[inline(always)]
    fn trace_recovery(&mut self, _rule_set: &str, _skipped: usize, _span: Span) {}

    #[inline(always)]
    fn trace_hard_failure(&mut self, _error: &ParseError) {}
}

/// Tracer that prints execution to stderr.
pub struct PrintTracer {
    verbosity: Verbosity,
    /// Current rule-set nesting depth, for indentation.
    depth: usize,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            depth: 0,
        }
    }

    fn line(&self, text: &str) {
        eprintln!("{:indent$}{text}", "", indent = self.depth * 2);
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, rule_set: &str, at: usize) {
        self.line(&format!("{rule_set} @ {at}"));
        self.depth += 1;
    }

    fn trace_match(&mut self, rule_set: &str, span: Span) {
        self.depth = self.depth.saturating_sub(1);
        self.line(&format!("{rule_set} => [{}, {})", span.start, span.end));
    }

    fn trace_exhausted(&mut self, rule_set: &str, at: usize) {
        self.depth = self.depth.saturating_sub(1);
        self.line(&format!("{rule_set}: no rule matched @ {at}"));
    }

    fn trace_rule(&mut self, rule_set: &str, rule: usize, at: usize) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        self.line(&format!("{rule_set}#{rule} @ {at}"));
    }

    fn trace_mismatch(&mut self, expected: &str, at: usize) {
        if self.verbosity != Verbosity::VeryVerbose {
            return;
        }
        self.line(&format!("mismatch: {expected} @ {at}"));
    }

    fn trace_recovery_scan(&mut self, rule_set: &str, at: usize) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        self.line(&format!("{rule_set}: recovery scan @ {at}"));
    }

    fn trace_recovery(&mut self, rule_set: &str, skipped: usize, span: Span) {
        self.line(&format!(
            "{rule_set}: recovered after {skipped} skipped, [{}, {})",
            span.start, span.end
        ));
    }

    fn trace_hard_failure(&mut self, error: &ParseError) {
        self.line(&format!("hard failure: {error}"));
    }
}

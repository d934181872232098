//! The recursive-descent matcher.
//!
//! One `Matcher` exists per parse call and owns all mutable state: the fuel
//! counters and the recursion depth. Positions are absolute byte offsets into
//! the full source; every matching function takes the position it starts at
//! and reports the position it ended at through the node it returns, so
//! backtracking is nothing more than re-using the original position.
//!
//! Failure travels on two channels (see `outcome`): soft mismatches feed
//! ordered choice, hard failures cross every boundary untouched.

use regex_automata::{Anchored, Input};

use trellis_core::{Children, Node, Span};

use super::compile::{CompiledGrammar, CompiledRule, CompiledSet, CompiledSymbol, SymbolMatcher};
use super::error::ParseError;
use super::limits::Limits;
use super::outcome::{Failure, Mismatch};
use super::trace::Tracer;

pub(crate) struct Matcher<'a, T: Tracer> {
    grammar: &'a CompiledGrammar,
    source: &'a str,
    tracer: &'a mut T,
    limits: Limits,
    exec_fuel: u32,
    depth: u32,
}

impl<'a, T: Tracer> Matcher<'a, T> {
    pub fn new(
        grammar: &'a CompiledGrammar,
        source: &'a str,
        limits: Limits,
        tracer: &'a mut T,
    ) -> Self {
        Self {
            grammar,
            source,
            tracer,
            limits,
            exec_fuel: limits.exec_fuel,
            depth: 0,
        }
    }

    /// Resolve `name` and try its rules in order, first match wins.
    ///
    /// A soft mismatch from a rule means "try the next one"; a hard failure
    /// stops the alternation immediately. Exhausting every rule is itself a
    /// soft mismatch, so an enclosing alternation can still try its own
    /// siblings - the entry rule set's caller hardens an escaping mismatch.
    pub fn parse_rule_set(&mut self, name: &str, at: usize) -> Result<Node, Failure> {
        let Some(rule_set) = self.grammar.rule_sets.get(name) else {
            return Err(Failure::Fatal(ParseError::UnknownRuleSet(name.to_string())));
        };

        if self.depth >= self.limits.recursion_limit {
            return Err(Failure::Fatal(ParseError::RecursionLimitExceeded(
                self.limits.recursion_limit,
            )));
        }
        self.depth += 1;
        self.tracer.trace_enter(name, at);

        let mut outcome = None;
        for (index, rule) in rule_set.rules.iter().enumerate() {
            self.tracer.trace_rule(name, index, at);
            match self.parse_rule(name, rule, at) {
                Ok(node) => {
                    self.tracer.trace_match(name, node.span);
                    outcome = Some(Ok(node));
                    break;
                }
                Err(Failure::Mismatch(mismatch)) => {
                    self.tracer.trace_mismatch(&mismatch.expected, mismatch.at);
                }
                Err(fatal) => {
                    outcome = Some(Err(fatal));
                    break;
                }
            }
        }

        self.depth -= 1;
        outcome.unwrap_or_else(|| {
            self.tracer.trace_exhausted(name, at);
            Err(Failure::mismatch(format!("no rule of `{name}` matched"), at))
        })
    }

    /// Match one rule: throw short-circuit, then the symbol-set sequence,
    /// then recovery if the sequence mismatched and the rule carries a
    /// recovery symbol.
    fn parse_rule(
        &mut self,
        rule_set: &str,
        rule: &CompiledRule,
        at: usize,
    ) -> Result<Node, Failure> {
        if let Some(message) = &rule.throw {
            let error = ParseError::Failed {
                message: message.clone(),
                at,
            };
            self.tracer.trace_hard_failure(&error);
            return Err(Failure::Fatal(error));
        }

        match self.match_sequence(rule, at) {
            Ok((end, children)) => Ok(Node::matched(
                &self.source[at..end],
                children,
                Span::new(at, end),
            )),
            Err(Failure::Mismatch(mismatch)) => match &rule.recover {
                Some(symbol) => self.resynchronize(rule_set, symbol, at, mismatch),
                None => Err(Failure::Mismatch(mismatch)),
            },
            Err(fatal) => Err(fatal),
        }
    }

    /// Match every symbol set of `rule` in order, threading the cursor and
    /// merging capture buckets.
    fn match_sequence(
        &mut self,
        rule: &CompiledRule,
        at: usize,
    ) -> Result<(usize, Children), Failure> {
        let mut cursor = at;
        let mut children = Children::new();
        for set in &rule.sets {
            let (end, captures) = self.match_set(set, cursor)?;
            Node::merge_children(&mut children, captures);
            cursor = end;
        }
        Ok((cursor, children))
    }

    /// Apply a set's quantifiers around [`Self::attempt_set`].
    ///
    /// An optional set whose first attempt mismatches contributes nothing and
    /// succeeds. A greedy set keeps re-attempting from each new cursor,
    /// merging captures per repetition, until an attempt mismatches - that
    /// attempt is discarded wholesale. A repetition that consumes nothing
    /// ends the loop: leaf symbols can never match empty, but a variant whose
    /// body is all-optional can, and repeating it would never advance.
    fn match_set(&mut self, set: &CompiledSet, at: usize) -> Result<(usize, Children), Failure> {
        let (mut cursor, mut children) = match self.attempt_set(set, at) {
            Ok(first) => first,
            Err(Failure::Mismatch(_)) if set.optional => return Ok((at, Children::new())),
            Err(failure) => return Err(failure),
        };

        if set.greedy && cursor > at {
            loop {
                match self.attempt_set(set, cursor) {
                    Ok((end, captures)) if end > cursor => {
                        Node::merge_children(&mut children, captures);
                        cursor = end;
                    }
                    Ok(_) => break,
                    Err(Failure::Mismatch(_)) => break,
                    Err(fatal) => return Err(fatal),
                }
            }
        }

        Ok((cursor, children))
    }

    /// One attempt at a set: every symbol in order, concatenatively.
    fn attempt_set(&mut self, set: &CompiledSet, at: usize) -> Result<(usize, Children), Failure> {
        if self.exec_fuel == 0 {
            return Err(Failure::Fatal(ParseError::FuelExhausted(
                self.limits.exec_fuel,
            )));
        }
        self.exec_fuel -= 1;

        let mut cursor = at;
        let mut children = Children::new();
        for symbol in &set.symbols {
            let node = self.match_symbol(symbol, cursor)?;
            cursor = node.span.end;
            if let Some(name) = &symbol.capture {
                children.entry(name.clone()).or_default().push(node);
            }
        }
        Ok((cursor, children))
    }

    /// Match a single symbol at `at`.
    ///
    /// Literals and patterns are pure string tests; a variant delegates to
    /// [`Self::parse_rule_set`] and propagates its outcome verbatim,
    /// including the soft/hard classification. A zero-length pattern match
    /// counts as a mismatch so greedy repetition stays finite.
    fn match_symbol(&mut self, symbol: &CompiledSymbol, at: usize) -> Result<Node, Failure> {
        let rest = &self.source[at..];
        match &symbol.matcher {
            SymbolMatcher::Literal(value) => {
                if rest.starts_with(value.as_str()) {
                    Ok(Node::leaf(value.clone(), Span::new(at, at + value.len())))
                } else {
                    Err(Failure::mismatch(symbol.matcher.expected(), at))
                }
            }
            SymbolMatcher::Pattern { regex, .. } => {
                let input = Input::new(rest).anchored(Anchored::Yes);
                match regex.find(input) {
                    Some(found) if found.end() > 0 => {
                        let end = at + found.end();
                        Ok(Node::leaf(&rest[..found.end()], Span::new(at, end)))
                    }
                    _ => Err(Failure::mismatch(symbol.matcher.expected(), at)),
                }
            }
            SymbolMatcher::Variant(name) => self.parse_rule_set(name, at),
        }
    }

    /// Scan forward from the rule's starting position, one character at a
    /// time, until the recovery symbol matches; the skipped prefix is
    /// reflected in the produced node's span. Exhausting the input hardens
    /// the original mismatch.
    fn resynchronize(
        &mut self,
        rule_set: &str,
        symbol: &CompiledSymbol,
        at: usize,
        original: Mismatch,
    ) -> Result<Node, Failure> {
        self.tracer.trace_recovery_scan(rule_set, at);

        let mut offset = at;
        loop {
            match self.match_symbol(symbol, offset) {
                Ok(node) => {
                    self.tracer.trace_recovery(rule_set, offset - at, node.span);
                    return Ok(Node::recovered(node.raw, node.span));
                }
                Err(Failure::Mismatch(_)) => match self.source[offset..].chars().next() {
                    Some(skipped) => offset += skipped.len_utf8(),
                    None => {
                        let error = original.into_fatal();
                        self.tracer.trace_hard_failure(&error);
                        return Err(Failure::Fatal(error));
                    }
                },
                Err(fatal) => return Err(fatal),
            }
        }
    }
}

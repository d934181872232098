//! Compilation of a validated grammar into its executable form.
//!
//! Compilation happens once, at [`Parser`] construction: the grammar is
//! validated, and every pattern symbol gets a pre-built regex automaton.
//! Parsing never compiles a pattern and never encounters a dangling
//! reference.
//!
//! [`Parser`]: super::Parser

use indexmap::IndexMap;
use regex_automata::meta::Regex;

use trellis_core::{Grammar, Rule, RuleSet, Symbol, SymbolKind, SymbolSet};

use super::error::CompileError;

/// Executable mirror of [`Grammar`]. Immutable and shareable.
#[derive(Debug)]
pub(crate) struct CompiledGrammar {
    pub rule_sets: IndexMap<String, CompiledRuleSet>,
}

#[derive(Debug)]
pub(crate) struct CompiledRuleSet {
    pub rules: Vec<CompiledRule>,
}

#[derive(Debug)]
pub(crate) struct CompiledRule {
    pub sets: Vec<CompiledSet>,
    pub throw: Option<String>,
    pub recover: Option<CompiledSymbol>,
}

#[derive(Debug)]
pub(crate) struct CompiledSet {
    pub symbols: Vec<CompiledSymbol>,
    pub optional: bool,
    pub greedy: bool,
}

#[derive(Debug)]
pub(crate) struct CompiledSymbol {
    pub matcher: SymbolMatcher,
    pub capture: Option<String>,
}

#[derive(Debug)]
pub(crate) enum SymbolMatcher {
    Literal(String),
    Pattern { pattern: String, regex: Regex },
    Variant(String),
}

impl SymbolMatcher {
    /// Expectation message for a mismatch at this symbol.
    pub fn expected(&self) -> String {
        match self {
            Self::Literal(value) => format!("expected `{value}`"),
            Self::Pattern { pattern, .. } => format!("expected pattern `{pattern}`"),
            Self::Variant(name) => format!("expected `{name}`"),
        }
    }
}

/// Validate `grammar` and build its executable form.
pub(crate) fn compile(grammar: &Grammar) -> Result<CompiledGrammar, CompileError> {
    let defects = grammar.validate();
    if !defects.is_empty() {
        return Err(CompileError::Invalid(defects));
    }

    let mut rule_sets = IndexMap::with_capacity(grammar.rule_sets.len());
    for (name, rule_set) in &grammar.rule_sets {
        rule_sets.insert(name.clone(), compile_rule_set(name, rule_set)?);
    }
    Ok(CompiledGrammar { rule_sets })
}

fn compile_rule_set(name: &str, rule_set: &RuleSet) -> Result<CompiledRuleSet, CompileError> {
    let rules = rule_set
        .rules
        .iter()
        .map(|rule| compile_rule(name, rule))
        .collect::<Result<_, _>>()?;
    Ok(CompiledRuleSet { rules })
}

fn compile_rule(name: &str, rule: &Rule) -> Result<CompiledRule, CompileError> {
    let sets = rule
        .sets
        .iter()
        .map(|set| compile_set(name, set))
        .collect::<Result<_, _>>()?;
    let recover = rule
        .recover
        .as_ref()
        .map(|symbol| compile_symbol(name, symbol))
        .transpose()?;
    Ok(CompiledRule {
        sets,
        throw: rule.throw.clone(),
        recover,
    })
}

fn compile_set(name: &str, set: &SymbolSet) -> Result<CompiledSet, CompileError> {
    let symbols = set
        .symbols
        .iter()
        .map(|symbol| compile_symbol(name, symbol))
        .collect::<Result<_, _>>()?;
    Ok(CompiledSet {
        symbols,
        optional: set.optional,
        greedy: set.greedy,
    })
}

fn compile_symbol(name: &str, symbol: &Symbol) -> Result<CompiledSymbol, CompileError> {
    let matcher = match &symbol.kind {
        SymbolKind::Literal(value) => SymbolMatcher::Literal(value.clone()),
        SymbolKind::Pattern(pattern) => {
            let regex = Regex::new(pattern).map_err(|source| CompileError::Pattern {
                rule_set: name.to_string(),
                pattern: pattern.clone(),
                source,
            })?;
            SymbolMatcher::Pattern {
                pattern: pattern.clone(),
                regex,
            }
        }
        SymbolKind::Variant(target) => SymbolMatcher::Variant(target.clone()),
    };
    Ok(CompiledSymbol {
        matcher,
        capture: symbol.capture.clone(),
    })
}

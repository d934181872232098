//! Grammar type definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The smallest matchable unit of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    /// Literal token. Matches iff the remaining input starts with it.
    Literal(String),
    /// Regex token, anchored at the current position. A zero-length match
    /// counts as a non-match.
    Pattern(String),
    /// Reference to another rule set, resolved by name at parse time.
    Variant(String),
}

/// A single matchable unit plus an optional capture name.
///
/// A captured symbol contributes its resulting node to the enclosing rule's
/// capture bucket under that name; an uncaptured symbol only consumes input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub capture: Option<String>,
}

impl Symbol {
    /// Literal symbol.
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            kind: SymbolKind::Literal(value.into()),
            capture: None,
        }
    }

    /// Anchored regex symbol.
    pub fn pattern(value: impl Into<String>) -> Self {
        Self {
            kind: SymbolKind::Pattern(value.into()),
            capture: None,
        }
    }

    /// Reference to another rule set.
    pub fn variant(name: impl Into<String>) -> Self {
        Self {
            kind: SymbolKind::Variant(name.into()),
            capture: None,
        }
    }

    /// Attach a capture name.
    pub fn capture(mut self, name: impl Into<String>) -> Self {
        self.capture = Some(name.into());
        self
    }
}

/// An ordered group of symbols matched in sequence as one quantified unit.
///
/// Quantifier semantics:
/// - `optional=false, greedy=false` - match exactly once; failure fails the
///   enclosing rule.
/// - `optional=true, greedy=false` - zero or one; never fails.
/// - `optional=false, greedy=true` - one or more.
/// - `optional=true, greedy=true` - zero or more.
///
/// Under `greedy`, every full repetition appends its captures to the same
/// buckets; a failed repetition attempt is discarded wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSet {
    pub symbols: Vec<Symbol>,
    pub optional: bool,
    pub greedy: bool,
}

impl SymbolSet {
    /// Mandatory, match-once set.
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self {
            symbols,
            optional: false,
            greedy: false,
        }
    }

    /// Mandatory, match-once set of a single symbol.
    pub fn single(symbol: Symbol) -> Self {
        Self::new(vec![symbol])
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn greedy(mut self) -> Self {
        self.greedy = true;
        self
    }
}

/// One alternative production: a sequence of symbol sets, plus an optional
/// unconditional-failure message and an optional recovery symbol.
///
/// A rule with `throw` set fails hard with that message before touching the
/// source - used as the catch-all last alternative of a rule set. The
/// recovery symbol is unquantified by construction; the wire format's
/// quantifier flags on a recover component are rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub sets: Vec<SymbolSet>,
    pub throw: Option<String>,
    pub recover: Option<Symbol>,
}

impl Rule {
    pub fn new(sets: Vec<SymbolSet>) -> Self {
        Self {
            sets,
            throw: None,
            recover: None,
        }
    }

    /// Rule that unconditionally fails hard with `message`.
    pub fn throw(message: impl Into<String>) -> Self {
        Self {
            sets: Vec::new(),
            throw: Some(message.into()),
            recover: None,
        }
    }

    /// Attach a recovery symbol.
    pub fn recover(mut self, symbol: Symbol) -> Self {
        self.recover = Some(symbol);
        self
    }
}

/// A named grammar production: ordered alternatives, first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

/// A complete rule tree: rule sets keyed by name, preserving definition order.
///
/// Variant symbols resolve against this table by name at parse time, so
/// direct and mutual recursion are plain lookups rather than cyclic object
/// graphs. Immutable once constructed; safe to share across parse calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    pub rule_sets: IndexMap<String, RuleSet>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule set under `name`, replacing any previous definition.
    pub fn define(&mut self, name: impl Into<String>, rule_set: RuleSet) -> &mut Self {
        self.rule_sets.insert(name.into(), rule_set);
        self
    }

    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.rule_sets.get(name)
    }

    pub fn len(&self) -> usize {
        self.rule_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rule_sets.is_empty()
    }
}

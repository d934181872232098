//! Structural validation of rule trees.
//!
//! A grammar is validated once, before any parsing. The engine refuses to
//! build from a grammar with defects, so the interpreter never discovers a
//! dangling reference or an empty production mid-parse.

use super::types::{Grammar, Rule, SymbolKind};

/// A structural defect in a grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A variant symbol names a rule set absent from the table.
    #[error("rule set `{rule_set}` references undefined rule set `{target}`")]
    UndefinedReference { rule_set: String, target: String },

    /// A rule set with no rules can never match anything.
    #[error("rule set `{0}` has no rules")]
    EmptyRuleSet(String),

    /// A rule with neither symbol sets nor a throw message is meaningless.
    #[error("rule {rule} of rule set `{rule_set}` has no symbol sets and no throw message")]
    EmptyRule { rule_set: String, rule: usize },
}

impl Grammar {
    /// Check the whole rule tree, collecting every defect.
    ///
    /// An empty result means the grammar is well-formed: every variant
    /// reference (including recovery symbols) resolves, every rule set has at
    /// least one rule, and every rule either matches something or throws.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (name, rule_set) in &self.rule_sets {
            if rule_set.rules.is_empty() {
                errors.push(ValidationError::EmptyRuleSet(name.clone()));
            }

            for (index, rule) in rule_set.rules.iter().enumerate() {
                if rule.sets.is_empty() && rule.throw.is_none() {
                    errors.push(ValidationError::EmptyRule {
                        rule_set: name.clone(),
                        rule: index,
                    });
                }
                self.check_references(name, rule, &mut errors);
            }
        }

        errors
    }

    fn check_references(&self, rule_set: &str, rule: &Rule, errors: &mut Vec<ValidationError>) {
        let referenced = rule
            .sets
            .iter()
            .flat_map(|set| set.symbols.iter())
            .chain(rule.recover.iter());

        for symbol in referenced {
            if let SymbolKind::Variant(target) = &symbol.kind
                && !self.rule_sets.contains_key(target)
            {
                errors.push(ValidationError::UndefinedReference {
                    rule_set: rule_set.to_string(),
                    target: target.clone(),
                });
            }
        }
    }
}

//! JSON deserialization for rule trees.
//!
//! The wire format carries quantifier flags on every component; the typed
//! model carries them on symbol sets. Each wire component therefore loads as
//! a one-symbol [`SymbolSet`] with that component's flags. Multi-symbol sets
//! exist only in hand-built grammars.

use indexmap::IndexMap;
use serde::Deserialize;

use super::types::{Grammar, Rule, RuleSet, Symbol, SymbolKind, SymbolSet};

/// Error during grammar decoding.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary decode error: {0}")]
    Binary(postcard::Error),

    /// The wire format can express a quantified recovery component; the
    /// typed model cannot, and the semantics forbid it.
    #[error("recovery component of rule {rule} in `{variant}` must not be greedy or optional")]
    QuantifiedRecovery { variant: String, rule: usize },
}

impl Grammar {
    /// Parse a grammar from its JSON interchange form.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawGrammar = serde_json::from_str(json)?;
        raw.try_into()
    }
}

/// Raw grammar structure matching the interchange format: a mapping from
/// variant name to an ordered list of rules.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawGrammar {
    variants: IndexMap<String, Vec<RawRule>>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(default)]
    components: Vec<RawComponent>,
    #[serde(default, rename = "throwMessage")]
    throw_message: Option<String>,
    #[serde(default, rename = "recoverComponent")]
    recover_component: Option<RawComponent>,
}

#[derive(Debug, Deserialize)]
struct RawComponent {
    #[serde(rename = "type")]
    kind: RawComponentKind,
    value: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    greedy: bool,
    #[serde(default)]
    optional: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
enum RawComponentKind {
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "REGEXP")]
    Regexp,
    #[serde(rename = "VARIANT")]
    Variant,
}

impl RawComponent {
    fn into_symbol(self) -> Symbol {
        let kind = match self.kind {
            RawComponentKind::String => SymbolKind::Literal(self.value),
            RawComponentKind::Regexp => SymbolKind::Pattern(self.value),
            RawComponentKind::Variant => SymbolKind::Variant(self.value),
        };
        Symbol {
            kind,
            capture: self.name,
        }
    }
}

impl TryFrom<RawGrammar> for Grammar {
    type Error = GrammarError;

    fn try_from(raw: RawGrammar) -> Result<Self, GrammarError> {
        let mut rule_sets = IndexMap::with_capacity(raw.variants.len());
        for (variant, rules) in raw.variants {
            let mut converted = Vec::with_capacity(rules.len());
            for (index, rule) in rules.into_iter().enumerate() {
                converted.push(convert_rule(rule, &variant, index)?);
            }
            rule_sets.insert(variant, RuleSet::new(converted));
        }
        Ok(Grammar { rule_sets })
    }
}

fn convert_rule(raw: RawRule, variant: &str, index: usize) -> Result<Rule, GrammarError> {
    let recover = match raw.recover_component {
        Some(component) if component.greedy || component.optional => {
            return Err(GrammarError::QuantifiedRecovery {
                variant: variant.to_string(),
                rule: index,
            });
        }
        Some(component) => Some(component.into_symbol()),
        None => None,
    };

    let sets = raw
        .components
        .into_iter()
        .map(|component| SymbolSet {
            optional: component.optional,
            greedy: component.greedy,
            symbols: vec![component.into_symbol()],
        })
        .collect();

    Ok(Rule {
        sets,
        throw: raw.throw_message,
        recover,
    })
}

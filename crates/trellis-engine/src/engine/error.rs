//! Errors raised when building a parser or running a parse.

use trellis_core::ValidationError;

/// Error during parser construction.
///
/// Construction is the only place grammar defects surface; a built [`Parser`]
/// never discovers one mid-parse.
///
/// [`Parser`]: super::Parser
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The grammar failed structural validation. Never empty.
    #[error("grammar has {} structural defect(s), first: {}", .0.len(), first(.0))]
    Invalid(Vec<ValidationError>),

    /// A pattern symbol did not compile.
    #[error("invalid pattern `{pattern}` in rule set `{rule_set}`: {source}")]
    Pattern {
        rule_set: String,
        pattern: String,
        #[source]
        source: regex_automata::meta::BuildError,
    },
}

fn first(defects: &[ValidationError]) -> &ValidationError {
    &defects[0]
}

/// The structured outcome of a failed parse.
///
/// Soft mismatches never reach the caller: alternation consumes them, and one
/// escaping the entry rule set hardens into [`ParseError::Failed`]. The
/// payload is serializable so hosts can forward it as data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize)]
pub enum ParseError {
    /// Parsing of this input is definitively wrong: an explicit throw, an
    /// exhausted recovery scan, or an entry rule set with no matching rule.
    #[error("{message} at index {at}")]
    Failed { message: String, at: usize },

    /// The requested entry rule set does not exist.
    #[error("unknown rule set `{0}`")]
    UnknownRuleSet(String),

    /// Execution fuel exhausted (too many symbol-set attempts).
    #[error("execution fuel exhausted after {0} symbol-set attempts")]
    FuelExhausted(u32),

    /// Nested rule-set entries exceeded the recursion ceiling. The usual
    /// cause is a left-recursive rule, which recursive descent cannot
    /// terminate on.
    #[error("recursion limit of {0} exceeded")]
    RecursionLimitExceeded(u32),
}

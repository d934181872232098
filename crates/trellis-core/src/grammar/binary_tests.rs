use super::*;

fn sample_grammar() -> Grammar {
    let mut grammar = Grammar::new();
    grammar.define(
        "pair",
        RuleSet::new(vec![
            Rule::new(vec![
                SymbolSet::single(Symbol::pattern("[a-z]+").capture("key")),
                SymbolSet::single(Symbol::literal("=")),
                SymbolSet::single(Symbol::variant("value").capture("value")),
            ])
            .recover(Symbol::literal(";")),
            Rule::throw("expected a key/value pair"),
        ]),
    );
    grammar.define(
        "value",
        RuleSet::new(vec![Rule::new(vec![
            SymbolSet::single(Symbol::pattern("[0-9]")).greedy(),
        ])]),
    );
    grammar
}

#[test]
fn binary_round_trip() {
    let grammar = sample_grammar();
    let bytes = grammar.to_binary();
    let decoded = Grammar::from_binary(&bytes).unwrap();
    assert_eq!(decoded, grammar);
}

#[test]
fn binary_round_trip_preserves_order() {
    let grammar = sample_grammar();
    let decoded = Grammar::from_binary(&grammar.to_binary()).unwrap();
    let names: Vec<_> = decoded.rule_sets.keys().map(String::as_str).collect();
    assert_eq!(names, ["pair", "value"]);
}

#[test]
fn truncated_input_is_an_error() {
    let bytes = sample_grammar().to_binary();
    let err = Grammar::from_binary(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err, GrammarError::Binary(_)));
}

use indoc::indoc;

use super::*;

#[test]
fn parse_minimal_grammar() {
    let json = indoc! {r#"
        {
            "greeting": [
                {
                    "components": [
                        { "type": "STRING", "value": "hello", "name": null, "greedy": false, "optional": false }
                    ],
                    "throwMessage": null,
                    "recoverComponent": null
                }
            ]
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(grammar.len(), 1);

    let rule = &grammar.get("greeting").unwrap().rules[0];
    assert_eq!(rule.sets.len(), 1);
    assert_eq!(
        rule.sets[0].symbols[0].kind,
        SymbolKind::Literal("hello".to_string())
    );
    assert!(rule.throw.is_none());
    assert!(rule.recover.is_none());
}

#[test]
fn component_flags_become_set_quantifiers() {
    let json = indoc! {r#"
        {
            "digits": [
                {
                    "components": [
                        { "type": "REGEXP", "value": "[0-9]", "name": "digit", "greedy": true, "optional": true }
                    ]
                }
            ]
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    let set = &grammar.get("digits").unwrap().rules[0].sets[0];
    assert!(set.greedy);
    assert!(set.optional);
    assert_eq!(set.symbols.len(), 1);
    assert_eq!(set.symbols[0].capture.as_deref(), Some("digit"));
}

#[test]
fn omitted_fields_default() {
    // name/greedy/optional/throwMessage/recoverComponent may all be absent.
    let json = indoc! {r#"
        {
            "word": [
                { "components": [ { "type": "REGEXP", "value": "[a-z]+" } ] }
            ]
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    let set = &grammar.get("word").unwrap().rules[0].sets[0];
    assert!(!set.greedy);
    assert!(!set.optional);
    assert!(set.symbols[0].capture.is_none());
}

#[test]
fn parse_throw_rule() {
    let json = indoc! {r#"
        {
            "statement": [
                {
                    "components": [ { "type": "VARIANT", "value": "assignment", "name": "stmt" } ]
                },
                {
                    "components": [],
                    "throwMessage": "expected a statement"
                }
            ],
            "assignment": [
                { "components": [ { "type": "STRING", "value": "x=1" } ] }
            ]
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    let rules = &grammar.get("statement").unwrap().rules;
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[1].throw.as_deref(), Some("expected a statement"));
    assert!(rules[1].sets.is_empty());
}

#[test]
fn parse_recover_component() {
    let json = indoc! {r#"
        {
            "terminated": [
                {
                    "components": [ { "type": "STRING", "value": ";" } ],
                    "recoverComponent": { "type": "STRING", "value": ";", "greedy": false, "optional": false }
                }
            ]
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    let rule = &grammar.get("terminated").unwrap().rules[0];
    let recover = rule.recover.as_ref().unwrap();
    assert_eq!(recover.kind, SymbolKind::Literal(";".to_string()));
}

#[test]
fn quantified_recover_component_is_rejected() {
    let json = indoc! {r#"
        {
            "terminated": [
                {
                    "components": [ { "type": "STRING", "value": ";" } ],
                    "recoverComponent": { "type": "STRING", "value": ";", "greedy": true }
                }
            ]
        }
    "#};

    let err = Grammar::from_json(json).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"recovery component of rule 0 in `terminated` must not be greedy or optional"
    );
}

#[test]
fn preserves_definition_order() {
    let json = indoc! {r#"
        {
            "program": [ { "components": [ { "type": "VARIANT", "value": "statement" } ] } ],
            "statement": [ { "components": [ { "type": "VARIANT", "value": "word" } ] } ],
            "word": [ { "components": [ { "type": "REGEXP", "value": "[a-z]+" } ] } ]
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();

    // Entry rule set stays first, not alphabetically sorted.
    let names: Vec<_> = grammar.rule_sets.keys().map(String::as_str).collect();
    assert_eq!(names, ["program", "statement", "word"]);
}

#[test]
fn unknown_component_type_is_a_json_error() {
    let json = r#"{ "x": [ { "components": [ { "type": "TOKEN", "value": "a" } ] } ] }"#;
    assert!(matches!(
        Grammar::from_json(json),
        Err(GrammarError::Json(_))
    ));
}

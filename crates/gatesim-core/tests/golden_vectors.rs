//! Golden vector integration tests.
//!
//! These tests drive the complete pipeline from definition to evaluation
//! and truth-table enumeration.

use std::collections::HashSet;

use gatesim_core::{
    evaluate, tokenize, Bindings, Circuit, DefineError, EvalError, Registry, RegistryError, Row,
};

/// Bindings from `(name, value)` pairs.
fn bind(pairs: &[(&str, bool)]) -> Bindings {
    pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
}

/// Collect every row of a circuit's truth table.
fn table(circuit: &Circuit) -> Vec<Row> {
    circuit
        .truth_table()
        .expect("table should be enumerable")
        .collect::<Result<_, _>>()
        .expect("every row should evaluate")
}

#[test]
fn test_and_binds_tighter_than_or() {
    let bindings = bind(&[("a", false), ("b", true), ("c", false)]);
    assert_eq!(evaluate("a | b & c", &bindings), Ok(false));
}

#[test]
fn test_not_binds_tightest() {
    let bindings = bind(&[("a", false), ("b", true)]);
    assert_eq!(evaluate("!a & b", &bindings), Ok(true));
}

#[test]
fn test_parentheses_override_precedence() {
    let bindings = bind(&[("a", true), ("b", false), ("c", false)]);
    assert_eq!(evaluate("(a | b) & c", &bindings), Ok(false));
    assert_eq!(evaluate("a | b & c", &bindings), Ok(true));
}

#[test]
fn test_arity_mismatch() {
    let mut registry = Registry::new();
    registry.define("ic1", ["a", "b"], "a & b").unwrap();

    let result = registry.run("ic1", &[true]);
    assert_eq!(
        result,
        Err(RegistryError::Eval(EvalError::ArityMismatch {
            expected: 2,
            provided: 1
        }))
    );
}

#[test]
fn test_undefined_token_names_offender() {
    let bindings = bind(&[("a", true)]);
    let err = evaluate("a & x", &bindings).unwrap_err();
    assert_eq!(err, EvalError::UndefinedToken("x".into()));
    assert!(err.to_string().ends_with(": x"));
}

#[test]
fn test_definition_requires_inputs_in_text() {
    let result = Circuit::define("ic2", ["a", "c"], "a & b");
    assert_eq!(result, Err(DefineError::UnusedInput("c".into())));
}

/// Test case: majority of three
///
/// Output is true when at least two inputs are true.
#[test]
fn test_majority_table() {
    let circuit = Circuit::define("maj", ["a", "b", "c"], "a & b | a & c | b & c").unwrap();
    let rows = table(&circuit);

    assert_eq!(rows.len(), 8);
    for row in &rows {
        let ones = row.inputs.iter().filter(|&&v| v).count();
        assert_eq!(row.output, ones >= 2, "Failed for inputs={:?}", row.inputs);
    }
}

/// Test case: XOR built from the three primitive operators
#[test]
fn test_xor_from_primitives() {
    let circuit = Circuit::define("xor", ["a", "b"], "(a & !b) | (!a & b)").unwrap();

    let test_cases = [
        ((false, false), false),
        ((false, true), true),
        ((true, false), true),
        ((true, true), false),
    ];

    for ((a, b), expected) in test_cases {
        assert_eq!(
            circuit.evaluate(&[a, b]),
            Ok(expected),
            "Failed for a={}, b={}",
            a,
            b
        );
    }
}

/// Truth tables have `2^n` distinct rows in binary-counter order.
#[test]
fn test_table_completeness_and_order() {
    for width in 0..=5usize {
        let names: Vec<String> = (0..width).map(|i| format!("in{i}")).collect();
        let expression = if names.is_empty() {
            "k".to_string()
        } else {
            names.join(" | ")
        };
        let circuit = Circuit::define("t", names, expression).unwrap();

        if width == 0 {
            // `k` is not bound, so the single row fails.
            let rows: Vec<_> = circuit.truth_table().unwrap().collect();
            assert_eq!(rows, vec![Err(EvalError::UndefinedToken("k".into()))]);
            continue;
        }

        let rows = table(&circuit);
        assert_eq!(rows.len(), 1 << width);
        assert!(rows[0].inputs.iter().all(|&v| !v), "row 0 should be all-false");

        let distinct: HashSet<&Vec<bool>> = rows.iter().map(|row| &row.inputs).collect();
        assert_eq!(distinct.len(), rows.len());

        for (index, row) in rows.iter().enumerate() {
            for (bit, &value) in row.inputs.iter().enumerate() {
                assert_eq!(value, (index >> bit) & 1 == 1);
            }
            assert_eq!(row.output, index != 0);
        }
    }
}

/// Repeated evaluation of the same inputs gives the same answer.
#[test]
fn test_evaluation_is_pure() {
    let circuit = Circuit::define("mix", ["p", "q", "r"], "!(p & q) | r & !p").unwrap();
    let first = table(&circuit);
    let second = table(&circuit);
    assert_eq!(first, second);
}

#[test]
fn test_malformed_inputs_never_panic() {
    let bindings = bind(&[("a", true), ("b", false)]);
    let cases = [
        "", "&", "!", "(", ")", "()", "a &", "& a", "a | b |", "((a)", "(a))", ")a(", "a | | b",
        "!!a", "a (b)",
    ];

    for case in cases {
        let result = evaluate(case, &bindings);
        assert!(
            matches!(result, Err(EvalError::MalformedExpression { .. })),
            "expected malformed for {:?}, got {:?}",
            case,
            result
        );
    }
}

#[test]
fn test_tokenize_matches_evaluate_inputs() {
    let tokens = tokenize("sel & in1 | !sel & in0");
    let names: Vec<&str> = tokens.iter().filter_map(|t| t.as_var()).collect();
    assert_eq!(names, vec!["sel", "in1", "sel", "in0"]);

    let mux = Circuit::define("mux", ["sel", "in0", "in1"], "sel & in1 | !sel & in0").unwrap();
    assert_eq!(mux.evaluate(&[false, true, false]), Ok(true));
    assert_eq!(mux.evaluate(&[true, true, false]), Ok(false));
}

use roman_adder::{add, RomanAdder, RomanError, Strategy};
use serde_json::json;

#[test]
fn test_adding_ones() {
    assert_eq!(add("I", "I").unwrap(), "II");
    assert_eq!(add("I", "II").unwrap(), "III");
    assert_eq!(add("II", "I").unwrap(), "III");
}

#[test]
fn test_four_and_five() {
    assert_eq!(add("II", "II").unwrap(), "IV");
    assert_eq!(add("II", "III").unwrap(), "V");
    assert_eq!(add("III", "II").unwrap(), "V");
    assert_eq!(add("III", "I").unwrap(), "IV");
    assert_eq!(add("IV", "I").unwrap(), "V");
    assert_eq!(add("V", "I").unwrap(), "VI");
    assert_eq!(add("I", "V").unwrap(), "VI");
}

#[test]
fn test_nine_and_ten() {
    let cases = [
        ("V", "V", "X"),
        ("V", "IV", "IX"),
        ("VIII", "I", "IX"),
        ("IX", "I", "X"),
        ("X", "I", "XI"),
        ("I", "X", "XI"),
        ("X", "V", "XV"),
        ("V", "X", "XV"),
        ("X", "X", "XX"),
        ("X", "VI", "XVI"),
        ("XI", "V", "XVI"),
        ("IX", "VI", "XV"),
        ("IX", "V", "XIV"),
        ("X", "IV", "XIV"),
        ("IX", "IX", "XVIII"),
    ];

    for (augend, addend, expected) in cases {
        assert_eq!(add(augend, addend).unwrap(), expected, "{} + {}", augend, addend);
    }
}

#[test]
fn test_both_strategies_agree_on_small_sums() {
    let single_pass = RomanAdder::new(Strategy::SinglePass);
    let convergent = RomanAdder::new(Strategy::Convergent);

    for (augend, addend) in [("IX", "V"), ("IX", "VI"), ("V", "IX"), ("X", "IV"), ("IX", "IX")] {
        assert_eq!(
            single_pass.add(augend, addend).unwrap(),
            convergent.add(augend, addend).unwrap()
        );
    }
}

#[test]
fn test_inputs_out_of_scope_raise_errors() {
    for bad in ["Z", "L", "C", "D", "M", "A", "IL", "MM", "iv", "X I"] {
        let err = add("I", bad).unwrap_err();
        assert!(matches!(err, RomanError::InvalidInput { .. }), "{} as addend", bad);

        let err = add(bad, "I").unwrap_err();
        assert!(matches!(err, RomanError::InvalidInput { .. }), "{} as augend", bad);
    }
}

#[test]
fn test_non_string_inputs_raise_errors() {
    let adder = RomanAdder::default();
    for bad in [json!(2), json!(null), json!(true), json!(["I"])] {
        assert!(adder.add_values(&json!("I"), &bad).unwrap_err().is_invalid_input());
        assert!(adder.add_values(&bad, &json!("I")).unwrap_err().is_invalid_input());
    }
}

#[test]
fn test_empty_operand_is_identity() {
    assert_eq!(add("", "XIV").unwrap(), "XIV");
    assert_eq!(add("", "").unwrap(), "");
}

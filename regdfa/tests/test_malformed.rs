use regdfa::ErrorKind;

include!("macros.rs");

#[test]
fn test_malformed() {
    let exprs = [
        "", "()", "(())", "()()", "*", "+", "|", "*a", "**", "a|", "|a", "a||b", "a.", ".a",
        "(*a)", "a(|b)",
    ];
    run_invalid_tests!(&exprs, ErrorKind::MalformedPattern);
}

#[test]
fn test_unbalanced() {
    let exprs = ["(", ")", "a(", "(()", "(ab", "a)", "a)*", "(a))", ")a("];
    run_invalid_tests!(&exprs, ErrorKind::UnbalancedParentheses);
}

#[test]
fn test_unknown_symbol() {
    let exprs = ["c", "a b", "a?", "[ab]", "a\\*", "ab\n", "a-b"];
    run_invalid_tests!(&exprs, ErrorKind::UnknownSymbol);
}

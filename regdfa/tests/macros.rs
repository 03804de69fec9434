#[allow(unused_macros)]

macro_rules! run_tests {
    ($exprs:expr, $valids:expr, $invalids:expr) => {{
        let config = regdfa::Config::new()
            .alphabet(regdfa::Alphabet::new("ab".chars()).unwrap());
        $exprs.iter().for_each(|&expr| {
            let nfa_re = regdfa::RegExp::nfa_with_config(expr, &config).unwrap();
            let dfa_re = regdfa::RegExp::with_config(expr, &config).unwrap();
            $valids.iter().for_each(|s| {
                assert!(
                    nfa_re.is_match(s),
                    r#""{}" failed to match "{}" using nfa"#,
                    expr,
                    s
                );

                assert!(
                    dfa_re.is_match(s),
                    r#""{}" failed to match "{}" using dfa"#,
                    expr,
                    s
                );
            });
            $invalids.iter().for_each(|s| {
                assert_eq!(
                    nfa_re.is_match(s),
                    false,
                    r#""{}" matched "{}" using nfa"#,
                    expr,
                    s
                );
                assert_eq!(
                    dfa_re.is_match(s),
                    false,
                    r#""{}" matched "{}" using dfa"#,
                    expr,
                    s
                );
            });
        })
    }};
}

#[allow(unused_macros)]
macro_rules! run_invalid_tests {
    ($exprs:expr, $kind:expr) => {{
        let config = regdfa::Config::new()
            .alphabet(regdfa::Alphabet::new("ab".chars()).unwrap());
        $exprs.iter().for_each(|&expr| {
            let err = regdfa::RegExp::with_config(expr, &config).unwrap_err();
            assert_eq!($kind, err.kind(), r#""{}" failed with {}"#, expr, err);
        });
    }};
}

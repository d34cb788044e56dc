use clausal::parser::{ParseOptions, Recovery, SyntaxErrorKind, parse, parse_threaded};

#[test]
fn synchronize_skips_to_next_dot_and_keeps_parsing() {
    let source = "a. Bad(x). b(. c :- d.";
    let (program, diagnostics) = parse("input", source, ParseOptions::default());

    let names: Vec<&str> = program.iter().map(|clause| clause.head.name.as_str()).collect();
    assert_eq!(names, vec!["a", "c"]);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].context, "clause head");
    assert_eq!(diagnostics[1].context, "term");
}

#[test]
fn error_at_a_dot_does_not_swallow_the_next_clause() {
    let (program, diagnostics) = parse("input", "p(X. q.", ParseOptions::default());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(program.len(), 1);
    assert_eq!(program.clauses[0].head.name, "q");
}

#[test]
fn abort_returns_clauses_before_first_error() {
    let options = ParseOptions {
        recovery: Recovery::Abort,
        ..ParseOptions::default()
    };
    let (program, diagnostics) = parse("input", "a. b. C. d. E.", options);

    assert_eq!(program.len(), 2);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn abort_with_threaded_source_terminates() {
    let options = ParseOptions {
        recovery: Recovery::Abort,
        ..ParseOptions::default()
    };
    let source = format!("Oops. {}", "fact(a). ".repeat(2000));
    let (program, diagnostics) = parse_threaded("input", &source, options);

    assert!(program.is_empty());
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn error_limit_stops_parsing_with_a_final_diagnostic() {
    let options = ParseOptions {
        max_errors: 3,
        ..ParseOptions::default()
    };
    let (program, diagnostics) = parse("input", "A. B. C. D. E. ok.", options);

    assert!(program.is_empty());
    assert_eq!(diagnostics.len(), 4);
    assert_eq!(diagnostics[3].kind, SyntaxErrorKind::TooManyErrors);
    assert_eq!(diagnostics[3].message, "too many errors (3), giving up");
    assert_eq!(diagnostics[3].location, "input:1:10");
}

#[test]
fn threaded_parse_matches_pull_parse() {
    let source = "a(X) :- b(X).\nBad.\nc :- # d.\ne(f(G), h).\nfoo(X";
    let pulled = parse("kb", source, ParseOptions::default());
    let threaded = parse_threaded("kb", source, ParseOptions::default());
    assert_eq!(pulled, threaded);
}

#[test]
fn error_limit_holds_for_lexical_errors_inside_one_clause() {
    let options = ParseOptions {
        max_errors: 3,
        ..ParseOptions::default()
    };
    let source = format!("a {}. b.", "# ".repeat(1000));
    let (program, diagnostics) = parse("input", &source, options);

    assert!(program.is_empty());
    assert_eq!(diagnostics.len(), 4);
    assert!(
        diagnostics[..3]
            .iter()
            .all(|diagnostic| diagnostic.kind == SyntaxErrorKind::Lexical)
    );
    assert_eq!(diagnostics[3].kind, SyntaxErrorKind::TooManyErrors);
    assert_eq!(diagnostics[3].location, "input:1:9");
}

#[test]
fn error_limit_holds_for_lexical_errors_skipped_while_synchronizing() {
    let options = ParseOptions {
        max_errors: 3,
        ..ParseOptions::default()
    };
    let source = format!("A {}. b.", "# ".repeat(500));
    let (program, diagnostics) = parse("input", &source, options);

    assert!(program.is_empty());
    let kinds: Vec<_> = diagnostics.iter().map(|diagnostic| diagnostic.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxErrorKind::UnexpectedToken,
            SyntaxErrorKind::Lexical,
            SyntaxErrorKind::Lexical,
            SyntaxErrorKind::TooManyErrors,
        ]
    );
}

#[test]
fn error_limit_with_threaded_source_drains_the_producer() {
    let options = ParseOptions {
        max_errors: 2,
        ..ParseOptions::default()
    };
    let source = format!("a {}. {}", "# ".repeat(200), "fact(a). ".repeat(2000));
    let (program, diagnostics) = parse_threaded("input", &source, options);

    assert!(program.is_empty());
    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics[2].kind, SyntaxErrorKind::TooManyErrors);
}

#[test]
fn zero_error_limit_accepts_clean_input() {
    let options = ParseOptions {
        max_errors: 0,
        ..ParseOptions::default()
    };
    let (program, diagnostics) = parse("input", "a. b(c).", options);

    assert_eq!(program.len(), 2);
    assert!(diagnostics.is_empty());
}

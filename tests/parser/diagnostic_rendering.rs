use clausal::diagnostics::render;
use clausal::parser::{ParseOptions, parse};

fn first_rendered(name: &str, source: &str) -> String {
    let (_, diagnostics) = parse(name, source, ParseOptions::default());
    diagnostics
        .first()
        .expect("at least one diagnostic")
        .render()
}

#[test]
fn renders_three_lines_with_underline_at_token() {
    assert_eq!(
        first_rendered("kb.pl", "a.\nfoo(X Y).\n"),
        "kb.pl:2:7: expected `,` or `)` when parsing argument list, got variable Y\n\
         foo(X Y).\n      ~\n"
    );
}

#[test]
fn underline_width_follows_rune_count() {
    assert_eq!(
        first_rendered("input", "p Größe."),
        "input:1:3: expected `.` or `:-` when parsing clause body, got variable Größe\n\
         p Größe.\n  ~~~~~\n"
    );
}

#[test]
fn end_of_input_on_unterminated_last_line_gets_one_tilde() {
    assert_eq!(
        first_rendered("input", "foo(X"),
        "input:1:6: expected `,` or `)` when parsing argument list, got end of input\n\
         foo(X\n     ~\n"
    );
}

#[test]
fn columns_after_multibyte_runes_are_counted_in_runes() {
    assert_eq!(
        first_rendered("input", "p(é, Q R)."),
        "input:1:8: expected `,` or `)` when parsing argument list, got variable R\n\
         p(é, Q R).\n       ~\n"
    );
}

#[test]
fn rendering_is_idempotent() {
    let (_, diagnostics) = parse("input", "x :- .\nY.\n", ParseOptions::default());
    assert_eq!(diagnostics.len(), 2);
    for diagnostic in &diagnostics {
        assert_eq!(render(diagnostic), render(diagnostic));
        assert_eq!(diagnostic.render(), render(&diagnostic.clone()));
    }
}

#[test]
fn display_is_the_first_rendered_line() {
    let (_, diagnostics) = parse("input", "Foo.", ParseOptions::default());
    let rendered = diagnostics[0].render();
    let first_line = rendered.lines().next().expect("first line");
    assert_eq!(diagnostics[0].to_string(), first_line);
}

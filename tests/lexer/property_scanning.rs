use clausal::lexer::{TokenKind, tokenize};
use proptest::prelude::*;

const MAX_INPUT_BYTES: usize = 256;

fn clause_like_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9_(),.:\\- \n\t#é→]{0,80}")
        .expect("valid regex")
}

proptest! {
    #[test]
    fn tokenizing_lossy_utf8_ends_with_exactly_one_end_of_input(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INPUT_BYTES)
    ) {
        let input = String::from_utf8_lossy(&bytes).into_owned();
        let tokens = tokenize(&input);

        let ends = tokens.iter().filter(|token| token.kind == TokenKind::EndOfInput).count();
        prop_assert_eq!(ends, 1);
        prop_assert!(tokens.last().is_some_and(|token| token.is_end_of_input()));
    }

    #[test]
    fn token_text_is_the_source_slice_at_its_offset(input in clause_like_text()) {
        for token in tokenize(&input) {
            if token.kind == TokenKind::EndOfInput {
                prop_assert!(token.lexeme.is_empty());
                continue;
            }
            prop_assert!(!token.lexeme.is_empty());
            prop_assert_eq!(&input[token.span.as_range()], token.lexeme.as_str());
        }
    }

    #[test]
    fn offsets_are_non_decreasing_and_spans_do_not_overlap(input in clause_like_text()) {
        let tokens = tokenize(&input);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].offset() <= pair[1].offset());
            prop_assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    #[test]
    fn concatenated_tokens_equal_source_without_whitespace(input in clause_like_text()) {
        let joined: String = tokenize(&input)
            .into_iter()
            .map(|token| token.lexeme)
            .collect();
        let expected: String = input.chars().filter(|ch| !ch.is_whitespace()).collect();
        prop_assert_eq!(joined, expected);
    }
}

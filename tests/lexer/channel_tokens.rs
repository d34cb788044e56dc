use clausal::lexer::{ChannelTokens, TokenKind, TokenSource, tokenize};

fn drain(channel: &mut ChannelTokens) -> Vec<clausal::lexer::Token> {
    let mut tokens = Vec::new();
    loop {
        let token = channel.next_token();
        let last = token.is_end_of_input();
        tokens.push(token);
        if last {
            return tokens;
        }
    }
}

#[test]
fn producer_thread_matches_pull_lexer_including_errors() {
    let source = "likes(mary, Wine) :- good(Wine). ?bad: ok.";
    let mut channel = ChannelTokens::spawn(source);
    assert_eq!(drain(&mut channel), tokenize(source));
}

#[test]
fn receiving_after_end_of_input_saturates() {
    let mut channel = ChannelTokens::spawn(String::from("x"));
    let _ = drain(&mut channel);
    assert!(channel.is_finished());
    for _ in 0..3 {
        let token = channel.next_token();
        assert_eq!(token.kind, TokenKind::EndOfInput);
        assert_eq!(token.offset().as_usize(), 1);
    }
}

#[test]
fn abandoning_the_stream_mid_scan_does_not_hang() {
    for _ in 0..16 {
        let mut channel = ChannelTokens::spawn("p(X). ".repeat(500));
        assert_eq!(channel.next_token().lexeme, "p");
        assert_eq!(channel.next_token().kind, TokenKind::OpenParen);
    }
}

#[test]
fn dropping_before_first_receive_does_not_hang() {
    let channel = ChannelTokens::spawn("a. b. c.");
    drop(channel);
}

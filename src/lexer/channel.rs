//! Producer-thread tokenizer behind a rendezvous channel.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, SyncSender, sync_channel};
use std::thread::{self, JoinHandle};

use crate::lexer::span::ByteOffset;
use crate::lexer::token::Token;
use crate::lexer::{Lexer, MAX_SOURCE_LEN, TokenSource, scannable_prefix};

/// Tokens scanned on a dedicated thread and handed over one at a time.
///
/// The channel has zero capacity, so the producer blocks on every token until
/// the consumer receives it. Dropping the value cancels the producer and joins
/// its thread, whether or not end of input was reached.
#[derive(Debug)]
pub struct ChannelTokens {
    receiver: Option<Receiver<Token>>,
    producer: Option<JoinHandle<()>>,
    end_offset: ByteOffset,
    finished: bool,
}

impl ChannelTokens {
    /// Starts a producer thread scanning `source`.
    pub fn spawn(source: impl Into<Arc<str>>) -> Self {
        let source: Arc<str> = source.into();
        let end_offset = ByteOffset::from_usize(scannable_prefix(&source, MAX_SOURCE_LEN).len());
        let (sender, receiver) = sync_channel(0);
        let producer = thread::spawn(move || produce(&source, &sender));

        Self {
            receiver: Some(receiver),
            producer: Some(producer),
            end_offset,
            finished: false,
        }
    }

    /// Returns `true` once the end-of-input token has been received.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

fn produce(source: &str, sender: &SyncSender<Token>) {
    let mut lexer = Lexer::new(source);
    loop {
        let token = lexer.next_token();
        let last = token.is_end_of_input();
        if sender.send(token).is_err() {
            tracing::trace!("token consumer went away; producer cancelled");
            return;
        }
        if last {
            return;
        }
    }
}

impl TokenSource for ChannelTokens {
    fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::end_of_input(self.end_offset);
        }

        let received = self
            .receiver
            .as_ref()
            .and_then(|receiver| receiver.recv().ok());

        match received {
            Some(token) => {
                self.finished = token.is_end_of_input();
                token
            }
            None => {
                self.finished = true;
                Token::end_of_input(self.end_offset)
            }
        }
    }
}

impl Drop for ChannelTokens {
    fn drop(&mut self) {
        // Closing the receiver first unblocks a producer parked in `send`.
        drop(self.receiver.take());
        if let Some(producer) = self.producer.take() {
            let _ = producer.join();
        }
    }
}

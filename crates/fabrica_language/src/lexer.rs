//! Lexer for query commands.
//!
//! Converts one raw command string into a stream of tokens. Words are
//! lowercased so keyword matching and entity resolution are caseless.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Returns true if `c` can appear inside a word.
///
/// Dots and stars are included so regex-ish entity spans like `iron.*` lex
/// as words; colons and hyphens so canonical variables like
/// `item:iron-ingot` do.
const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '*' | ':' | '-' | '_' | '\'')
}

/// Lexer for query command text.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Current byte offset in source.
    position: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Tokenizes the whole source, ending with an `Eof` token.
    #[must_use]
    pub fn tokenize(source: &'src str) -> Vec<Token> {
        let mut lexer = Self::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, Span::new(start, start));
        };

        let kind = match c {
            '?' => {
                self.advance(c);
                TokenKind::Question
            }
            '+' => {
                self.advance(c);
                TokenKind::Plus
            }
            c if is_word_char(c) => self.scan_word(),
            c => {
                self.advance(c);
                TokenKind::Error(c)
            }
        };

        Token::new(kind, Span::new(start, self.position))
    }

    /// Scans a run of word characters and classifies it.
    fn scan_word(&mut self) -> TokenKind {
        let start = self.position;
        while let Some(c) = self.peek_char() {
            if !is_word_char(c) {
                break;
            }
            self.advance(c);
        }
        let text = &self.source[start..self.position];

        if text == "_" {
            return TokenKind::Underscore;
        }
        if text.bytes().all(|b| b.is_ascii_digit()) {
            // A run of digits too long for u64 falls through as a word and
            // fails entity resolution later.
            if let Ok(value) = text.parse::<u64>() {
                return TokenKind::Int(value);
            }
        }
        TokenKind::Word(text.to_lowercase())
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }
            self.advance(c);
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn advance(&mut self, c: char) {
        self.position += c.len_utf8();
    }
}

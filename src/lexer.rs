//! papr tokenization.
//!
//! The tokenizer makes a single left-to-right pass over the input and produces
//! a flat list of [`Token`]s, each tagged with the 1-based line and column of
//! its first significant character. Columns count Unicode scalar values, not
//! bytes, so alignment works the same for non-ASCII text.
//!
//! Only two token kinds exist:
//!
//! - [`TokenKind::Text`]: a trimmed run of characters between delimiters
//! - [`TokenKind::Colon`]: an unquoted, uncommented `:`
//!
//! Delimiters are `:`, newline, `#` and end of input. A token starting with `"`
//! is scanned in quote mode, where delimiters are ordinary characters until a
//! closing `"` that is not preceded by `\`. Outside quote mode `#` starts a
//! comment that runs to the end of the line.
//!
//! ```rust
//! use papr::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("name: John # the name\n");
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, vec![TokenKind::Text, TokenKind::Colon, TokenKind::Text]);
//! assert_eq!(tokens[2].text, "John");
//! assert_eq!((tokens[2].line, tokens[2].column), (1, 7));
//! ```

use crate::{Error, PaprOptions, Result};
use std::iter::Peekable;
use std::str::Chars;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    Colon,
}

/// A single lexical token with its source position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Trimmed and unquoted content. Empty for colons.
    pub text: String,
    /// 1-based line of the first significant character.
    pub line: usize,
    /// 1-based column of the first significant character.
    pub column: usize,
}

impl Token {
    pub fn text(text: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind: TokenKind::Text,
            text: text.into(),
            line,
            column,
        }
    }

    pub fn colon(line: usize, column: usize) -> Self {
        Token {
            kind: TokenKind::Colon,
            text: String::new(),
            line,
            column,
        }
    }
}

/// Tokenizes `input` with lenient quote handling.
///
/// A quoted token that is still open at end of input takes the rest of the
/// input as its content.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    tokenize_with_options(input, &PaprOptions::default()).unwrap_or_default()
}

/// Tokenizes `input`, applying the quote policy from `options`.
///
/// # Errors
///
/// Returns [`Error::UnterminatedQuote`] when `options.strict_quotes` is set and
/// a quoted token is never closed.
pub fn tokenize_with_options(input: &str, options: &PaprOptions) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    lexer.scan();

    if let Some((line, column)) = lexer.open_quote() {
        if options.strict_quotes {
            log::error!("unterminated quote starting at line {line}, column {column}");
            return Err(Error::unterminated_quote(line, column));
        }
        log::warn!(
            "unterminated quote starting at line {line}, column {column}; \
             taking the rest of the input as its content"
        );
    }

    let tokens = lexer.into_tokens();
    log::debug!("tokenized {} tokens", tokens.len());
    Ok(tokens)
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    tokens: Vec<Token>,
    partial: String,
    line: usize,
    column: usize,
    start_line: usize,
    start_column: usize,
    has_content: bool,
    in_quotes: bool,
    in_comment: bool,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.chars().peekable(),
            tokens: Vec::new(),
            partial: String::new(),
            line: 1,
            column: 0,
            start_line: 0,
            start_column: 0,
            has_content: false,
            in_quotes: false,
            in_comment: false,
        }
    }

    fn scan(&mut self) {
        let mut prev = None;

        while let Some(ch) = self.chars.next() {
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }

            let is_first = !self.has_content && !is_blank(ch) && ch != '\n';
            if is_first {
                self.has_content = true;
                self.start_line = self.line;
                self.start_column = self.column;
            }

            if is_first && ch == '"' {
                self.in_quotes = true;
            } else if self.in_quotes && ch == '"' && prev != Some('\\') {
                self.in_quotes = false;
            }

            if !self.in_quotes && ch == '#' {
                self.in_comment = true;
            }

            if self.in_comment {
                if ch == '\n' {
                    self.in_comment = false;
                    self.reset();
                }
            } else if self.in_quotes || !is_delimiter(ch) {
                self.partial.push(ch);

                let at_boundary = self.chars.peek().map_or(true, |&next| is_delimiter(next));
                if !self.in_quotes && self.has_content && at_boundary {
                    self.push_text(true);
                }
            } else if ch == ':' {
                self.tokens.push(Token::colon(self.line, self.column));
                self.reset();
            }

            prev = Some(ch);
        }
    }

    /// Position of a quoted token still open at end of input.
    fn open_quote(&self) -> Option<(usize, usize)> {
        (self.in_quotes && self.has_content).then_some((self.start_line, self.start_column))
    }

    fn into_tokens(mut self) -> Vec<Token> {
        if self.open_quote().is_some() {
            self.push_text(false);
        }
        self.tokens
    }

    fn push_text(&mut self, closed: bool) {
        let text = unquote(&self.partial, self.start_column, closed);
        self.tokens
            .push(Token::text(text, self.start_line, self.start_column));
        self.reset();
    }

    fn reset(&mut self) {
        self.partial.clear();
        self.has_content = false;
    }
}

#[inline]
fn is_delimiter(ch: char) -> bool {
    matches!(ch, ':' | '\n' | '#')
}

/// Characters that separate tokens without being part of them.
#[inline]
pub(crate) fn is_blank(ch: char) -> bool {
    ch == ' ' || ch == '\r'
}

/// Trims a raw token and, if it is quoted, strips the quotes, resolves `\"`
/// and removes the alignment padding from continuation lines.
fn unquote(raw: &str, column: usize, closed: bool) -> String {
    let trimmed = raw.trim_matches(is_blank);

    let Some(inner) = trimmed.strip_prefix('"') else {
        return trimmed.to_string();
    };

    let inner = if closed {
        inner.strip_suffix('"').unwrap_or(inner)
    } else {
        inner
    };

    dedent(&inner.replace("\\\"", "\""), column)
}

/// Removes up to `column` leading spaces from every line after the first.
fn dedent(content: &str, column: usize) -> String {
    let mut lines = content.split('\n');
    let mut out = String::with_capacity(content.len());

    if let Some(first) = lines.next() {
        out.push_str(first);
    }

    for line in lines {
        out.push('\n');
        let padding = line
            .chars()
            .take(column)
            .take_while(|&ch| ch == ' ')
            .count();
        out.push_str(&line[padding..]);
    }

    out
}

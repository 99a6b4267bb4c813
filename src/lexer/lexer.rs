use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type PatternHandler = fn(&mut Lexer, &str) -> Result<Token, Error>;

#[derive(Clone)]
pub struct TokenPattern {
    regex: Regex,
    handler: PatternHandler,
}

/// A pull-based scanner over one source string.
///
/// `next_token` performs a single forward scan: the ordered pattern table is
/// matched against the remaining input and the first pattern anchored at the
/// current position wins. There is no backtracking, and once the end of
/// input is reached every further call returns the EOF sentinel.
#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<TokenPattern>,
    skip: Regex,
    source: String,
    pos: i32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            // Longer operators sit above their one-character prefixes so
            // `==`, `!=`, `<=` and `>=` win the anchored match.
            patterns: vec![
                TokenPattern { regex: Regex::new("[a-zA-Z][a-zA-Z0-9]*").unwrap(), handler: symbol_handler },
                TokenPattern { regex: Regex::new("[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
                TokenPattern { regex: Regex::new("\"[^\"]*\"").unwrap(), handler: string_handler },
                TokenPattern { regex: Regex::new("\n").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Newline, "\n") },
                TokenPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
                TokenPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
                TokenPattern { regex: Regex::new("!").unwrap(), handler: bang_handler },
                TokenPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
                TokenPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
                TokenPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
                TokenPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
                TokenPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
                TokenPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                TokenPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
                TokenPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                TokenPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
            ],
            skip: Regex::new("[ \t\r]+").unwrap(),
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: i32) {
        self.pos += n;
    }

    pub fn at(&self) -> char {
        self.source.as_bytes()[self.pos as usize] as char
    }

    pub fn remainder(&self) -> &str {
        &self.source[(self.pos as usize)..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    fn position_here(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Scans the next token from the source.
    ///
    /// Spaces, tabs and carriage returns before the token are consumed;
    /// newlines are significant and produce their own token. At the end of
    /// input an EOF sentinel is returned, repeatedly if called again.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        let skipped = match self.skip.find(self.remainder()) {
            Some(matched) if matched.start() == 0 => matched.end(),
            _ => 0,
        };
        self.advance_n(skipped as i32);

        if self.at_eof() {
            return Ok(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: self.position_here(),
                    end: self.position_here(),
                }
            ));
        }

        let mut found: Option<(PatternHandler, String)> = None;
        for pattern in self.patterns.iter() {
            if let Some(matched) = pattern.regex.find(self.remainder()) {
                if matched.start() == 0 {
                    found = Some((pattern.handler, matched.as_str().to_string()));
                    break;
                }
            }
        }

        match found {
            Some((handler, matched)) => handler(self, &matched),
            None => Err(Error::new(
                ErrorImpl::UnrecognisedCharacter {
                    character: self.at().to_string(),
                },
                self.position_here(),
            )),
        }
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<Token, Error> {
    let span = Span {
        start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
        end: Position((lexer.pos + matched.len() as i32) as u32, Rc::clone(&lexer.file)),
    };
    lexer.advance_n(matched.len() as i32);

    Ok(MK_TOKEN!(TokenKind::Number, matched.to_string(), span))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<Token, Error> {
    let span = Span {
        start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
        end: Position((lexer.pos + matched.len() as i32) as u32, Rc::clone(&lexer.file)),
    };
    lexer.advance_n(matched.len() as i32);

    if let Some(kind) = RESERVED_LOOKUP.get(matched.to_lowercase().as_str()) {
        Ok(MK_TOKEN!(*kind, matched.to_string(), span))
    } else {
        Ok(MK_TOKEN!(TokenKind::Identifier, matched.to_string(), span))
    }
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<Token, Error> {
    // The matched text includes both quotes.
    let contents = &matched[1..matched.len() - 1];

    // No escape sequences exist, so characters that would corrupt the
    // emitted string template are rejected outright.
    for (index, character) in contents.char_indices() {
        if matches!(character, '\r' | '\n' | '\t' | '\\' | '%') {
            return Err(Error::new(
                ErrorImpl::IllegalStringCharacter { character },
                Position(
                    (lexer.pos as usize + 1 + index) as u32,
                    Rc::clone(&lexer.file),
                ),
            ));
        }
    }

    let span = Span {
        start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
        end: Position((lexer.pos + matched.len() as i32) as u32, Rc::clone(&lexer.file)),
    };
    lexer.advance_n(matched.len() as i32);

    Ok(MK_TOKEN!(TokenKind::String, contents.to_string(), span))
}

fn bang_handler(lexer: &mut Lexer, _matched: &str) -> Result<Token, Error> {
    // A lone `!` is only legal as the start of `!=`, which the pattern
    // table already matched above this handler.
    Err(Error::new(
        ErrorImpl::MalformedNotEquals,
        Position(lexer.pos as u32, Rc::clone(&lexer.file)),
    ))
}

/// Drains the token stream into a vector, EOF sentinel included.
///
/// A convenience for tests and tooling; the parser pulls its tokens lazily
/// through `Lexer::next_token` instead.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token()?;
        let at_end = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_end {
            return Ok(tokens);
        }
    }
}

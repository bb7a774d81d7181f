#![deny(warnings)]

use crate::scanner::Scanner;

const SYMBOLS: &[char] = &['+', '-', '*', '/', '%', '(', ')'];

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ArithToken {
    /// A run of ASCII digits, kept as text so the caller decides the width.
    Integer(String),
    /// One of `+ - * / % ( )`.
    Symbol(char),
    Unknown(char),
}

/// Splits integer arithmetic into tokens tagged with their char offset.
pub struct ArithTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> ArithTokenizer<I> {
    pub fn new(source: I) -> Self {
        ArithTokenizer{src: Scanner::new(source)}
    }

    fn get_token(&mut self) -> Option<(usize, ArithToken)> {
        self.src.ignore_ws();
        let start = self.src.start();
        if self.src.skip_all_if(|c| c.is_ascii_digit()) {
            return Some((start, ArithToken::Integer(self.src.extract_string())));
        }
        let c = self.src.next()?;
        self.src.ignore();
        if SYMBOLS.contains(&c) {
            Some((start, ArithToken::Symbol(c)))
        } else {
            Some((start, ArithToken::Unknown(c)))
        }
    }
}

impl<'a> ArithTokenizer<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Self::new(source.chars())
    }
}

impl<I: Iterator<Item=char>> Iterator for ArithTokenizer<I> {
    type Item = (usize, ArithToken);
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////

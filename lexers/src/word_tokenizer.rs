#![deny(warnings)]

use crate::scanner::Scanner;

// Splits input on whitespace, each word tagged with the char offset it starts at
pub struct WordTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> WordTokenizer<I> {
    pub fn new(source: I) -> Self {
        WordTokenizer{src: Scanner::new(source)}
    }
}

impl<'a> WordTokenizer<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Self::new(source.chars())
    }
}

impl<I: Iterator<Item=char>> Iterator for WordTokenizer<I> {
    type Item = (usize, String);
    fn next(&mut self) -> Option<Self::Item> {
        self.src.ignore_ws();
        let start = self.src.start();
        if self.src.skip_all_if(|c| !c.is_whitespace()) {
            return Some((start, self.src.extract_string()));
        }
        None
    }
}

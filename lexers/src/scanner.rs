#![deny(warnings)]

/// Backtracking scanner over any iterator.
///
/// Items are buffered from the source as the cursor advances. `ignore` and
/// `extract` drop everything up to the cursor, while `start` keeps reporting
/// absolute offsets into the original source so callers can point at the
/// exact place a lexeme began.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
    dropped: usize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.fill_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: -1, dropped: 0}
    }

    /// Absolute offset (in items) of the first element of the current lexeme.
    pub fn start(&self) -> usize { self.dropped }

    pub fn curr(&self) -> Option<I::Item> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).cloned()
    }

    // pull from the source until self.pos is backed by the buffer
    fn fill_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
    }

    fn consumed(&self) -> usize {
        ((self.pos + 1).max(0) as usize).min(self.buf.len())
    }

    pub fn view(&self) -> &[I::Item] {
        &self.buf[..self.consumed()]
    }

    pub fn ignore(&mut self) {
        let n = self.consumed();
        self.buf.drain(..n);
        self.dropped += n;
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let items = self.view().to_vec();
        self.ignore();
        items
    }

    // Advance only if the next item satisfies 'pred',
    // self.curr() returns the accepted item afterwards
    pub fn accept_if<F>(&mut self, pred: F) -> Option<I::Item>
        where F: Fn(&I::Item) -> bool
    {
        let backtrack = self.pos;
        if let Some(next) = self.next() {
            if pred(&next) { return Some(next); }
        }
        self.pos = backtrack;
        None
    }

    // Result is whether the scanner advanced at all
    pub fn skip_all_if<F>(&mut self, pred: F) -> bool
        where F: Fn(&I::Item) -> bool
    {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() { advanced = true; }
        advanced
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    /// Skip and discard whitespace so the next lexeme starts clean.
    pub fn ignore_ws(&mut self) {
        self.skip_all_if(|c| c.is_whitespace());
        self.ignore();
    }
}

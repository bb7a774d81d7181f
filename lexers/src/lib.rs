mod scanner;
mod arith_tokenizer;
mod word_tokenizer;

pub use scanner::Scanner;
pub use arith_tokenizer::{ArithTokenizer, ArithToken};
pub use word_tokenizer::WordTokenizer;

pub mod heuristic;
pub mod lexicon;
pub mod tokenizer;

pub use heuristic::{label, HeuristicLabeler, LabelerConfig};
pub use lexicon::Lexicon;
pub use tokenizer::{tokenize, Token, Tokenizer};

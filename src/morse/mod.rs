// src/morse/mod.rs  —  Alphabet, Translator, Timing, operator reference
pub mod alphabet;
pub mod reference;
pub mod timing;
pub mod translator;

pub use alphabet::NotFound;
pub use timing::Timing;
pub use translator::{translate, EncodedMessage, LetterGroup, Symbol, Word};

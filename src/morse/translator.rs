// src/morse/translator.rs  —  Text → words of letter groups of dits/dahs
use super::alphabet;
use crate::error::TranslationError;
use std::fmt;

/// Separator rendered between letter groups of one word
pub const LETTER_SEPARATOR: char = '/';
/// Separator rendered between words
pub const WORD_SEPARATOR: char = ' ';

const PROSIGN_START: char = '<';
const PROSIGN_END:   char = '>';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Dot,
    Dash,
}

impl Symbol {
    /// Key-down length in units
    pub fn units(self) -> u64 {
        match self {
            Symbol::Dot  => 1,
            Symbol::Dash => 3,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Dot  => '.',
            Symbol::Dash => '-',
        }
    }
}

/// One keyed character, or a whole prosign fused into one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGroup(Vec<Symbol>);

impl LetterGroup {
    fn from_codes<'a>(codes: impl IntoIterator<Item = &'a str>) -> Self {
        let symbols = codes
            .into_iter()
            .flat_map(str::chars)
            .map(|c| if c == '-' { Symbol::Dash } else { Symbol::Dot })
            .collect();
        Self(symbols)
    }

    pub fn symbols(&self) -> &[Symbol] { &self.0 }
}

pub type Word = Vec<LetterGroup>;

/// Result of [`translate`]. Renders as e.g. `-.-./--.- ...-.-`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedMessage {
    words: Vec<Word>,
}

impl EncodedMessage {
    pub fn words(&self) -> &[Word] { &self.words }
    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Total key-down plus spacing length in units (no trailing gap)
    pub fn units(&self) -> u64 {
        let mut total = 0;
        for (wi, word) in self.words.iter().enumerate() {
            if wi > 0 { total += 7; }
            for (gi, group) in word.iter().enumerate() {
                if gi > 0 { total += 3; }
                for (si, sym) in group.symbols().iter().enumerate() {
                    if si > 0 { total += 1; }
                    total += sym.units();
                }
            }
        }
        total
    }
}

impl fmt::Display for EncodedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (wi, word) in self.words.iter().enumerate() {
            if wi > 0 { write!(f, "{WORD_SEPARATOR}")?; }
            for (gi, group) in word.iter().enumerate() {
                if gi > 0 { write!(f, "{LETTER_SEPARATOR}")?; }
                for sym in group.symbols() {
                    write!(f, "{}", sym.as_char())?;
                }
            }
        }
        Ok(())
    }
}

impl PartialEq<&str> for EncodedMessage {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

/// Translate a plain-text message. Case-insensitive; tokens written as
/// `<XY>` become a single prosign group with no letter gap between X and Y.
/// Repeated delimiters (`<<XY>>`) are stripped like single ones.
pub fn translate(message: &str) -> Result<EncodedMessage, TranslationError> {
    let upper = message.to_ascii_uppercase();
    let invalid = |character| TranslationError::InvalidCharacter {
        message: message.to_string(),
        character,
    };

    let mut words = Vec::new();
    for token in upper.split_whitespace() {
        let word = if is_prosign(token) {
            let inner = token
                .trim_start_matches(PROSIGN_START)
                .trim_end_matches(PROSIGN_END);
            if inner.is_empty() {
                return Err(invalid(PROSIGN_START));
            }
            let codes = lookup_all(inner).map_err(|e| invalid(e.0))?;
            vec![LetterGroup::from_codes(codes)]
        } else {
            let codes = lookup_all(token).map_err(|e| invalid(e.0))?;
            codes.into_iter().map(|c| LetterGroup::from_codes([c])).collect()
        };
        words.push(word);
    }

    log::trace!("[translator] {:?} → {} word(s)", message, words.len());
    Ok(EncodedMessage { words })
}

fn is_prosign(token: &str) -> bool {
    token.len() >= 2 && token.starts_with(PROSIGN_START) && token.ends_with(PROSIGN_END)
}

fn lookup_all(chars: &str) -> Result<Vec<&'static str>, alphabet::NotFound> {
    chars.chars().map(alphabet::lookup).collect()
}

// src/error.rs  —  Error types for translation and synthesis

use thiserror::Error;

/// Errors raised while translating text to Morse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// The message contains a character outside the alphabet.
    #[error("the message contains invalid characters: {character:?} in {message:?}")]
    InvalidCharacter {
        /// The message as given by the caller.
        message: String,
        /// The first character that has no Morse code.
        character: char,
    },
}

/// Errors raised while building a sample stream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthesisError {
    /// The message contains a character outside the alphabet.
    #[error("the message contains invalid characters: {character:?} in {message:?}")]
    InvalidCharacter {
        /// The message as given by the caller.
        message: String,
        /// The first character that has no Morse code.
        character: char,
    },

    /// A synthesis parameter is out of range.
    #[error("invalid configuration '{name}' = {value}: {reason}")]
    InvalidConfiguration {
        /// Parameter name.
        name: &'static str,
        /// The rejected value, rendered for diagnostics.
        value: String,
        /// What the valid range is.
        reason: &'static str,
    },
}

impl SynthesisError {
    pub(crate) fn config(name: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Self::InvalidConfiguration { name, value: value.to_string(), reason }
    }
}

impl From<TranslationError> for SynthesisError {
    fn from(e: TranslationError) -> Self {
        match e {
            TranslationError::InvalidCharacter { message, character } => {
                Self::InvalidCharacter { message, character }
            }
        }
    }
}

// src/lib.rs  —  morse-keyer: text → Morse → PCM sample stream
pub mod audio;
pub mod config;
pub mod error;
pub mod morse;
pub mod synth;
pub mod template;

pub use error::{SynthesisError, TranslationError};
pub use morse::{translate, EncodedMessage};
pub use synth::{build, build_at, SampleStream, SynthConfig};

// src/morse/alphabet.rs  —  Character → dit/dah code table
use std::fmt;

/// Lookup miss: the character has no Morse code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound(pub char);

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no Morse code for {:?}", self.0)
    }
}

/// Every character the table knows, in table order
pub const CHARACTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.,?'!/()&:;=+-_\"$@";

/// ITU Morse code table. Keys are uppercase only; callers normalise case.
pub fn lookup(c: char) -> Result<&'static str, NotFound> {
    let code = match c {
        'A' => ".-",     'B' => "-...",   'C' => "-.-.",
        'D' => "-..",    'E' => ".",      'F' => "..-.",
        'G' => "--.",    'H' => "....",   'I' => "..",
        'J' => ".---",   'K' => "-.-",    'L' => ".-..",
        'M' => "--",     'N' => "-.",     'O' => "---",
        'P' => ".--.",   'Q' => "--.-",   'R' => ".-.",
        'S' => "...",    'T' => "-",      'U' => "..-",
        'V' => "...-",   'W' => ".--",    'X' => "-..-",
        'Y' => "-.--",   'Z' => "--..",
        '0' => "-----",  '1' => ".----",  '2' => "..---",
        '3' => "...--",  '4' => "....-",  '5' => ".....",
        '6' => "-....",  '7' => "--...",  '8' => "---..",
        '9' => "----.",
        '.' => ".-.-.-", ',' => "--..--", '?' => "..--..",
        '\'' => ".----.",'!' => "-.-.--", '/' => "-..-.",
        '(' => "-.--.",  ')' => "-.--.-", '&' => ".-...",
        ':' => "---...", ';' => "-.-.-.", '=' => "-...-",
        '+' => "-.-.-",  '-' => "-....-", '_' => "..--.-",
        '"' => ".-..-.", '$' => "...-..-",'@' => ".--.-.",
        _   => return Err(NotFound(c)),
    };
    Ok(code)
}

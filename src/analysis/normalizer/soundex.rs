//! Phonetic normalizer based on American Soundex.
//!
//! Each token is replaced by a four-character code: its first letter
//! followed by three digits describing the consonants that follow. Words
//! that sound alike share a code, so a dictionary entry such as
//! `Benedikt Richardson` also matches `Benedict Richards`.

use super::Normalizer;
use crate::error::Result;

/// A normalizer that maps tokens to their Soundex code.
///
/// Tokens without any ASCII letter have no code and are lowercased instead.
#[derive(Clone, Debug, Default)]
pub struct SoundexNormalizer;

impl SoundexNormalizer {
    /// Create a new Soundex normalizer.
    pub fn new() -> Self {
        SoundexNormalizer
    }

    fn digit(letter: char) -> Option<char> {
        match letter {
            'B' | 'F' | 'P' | 'V' => Some('1'),
            'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
            'D' | 'T' => Some('3'),
            'L' => Some('4'),
            'M' | 'N' => Some('5'),
            'R' => Some('6'),
            _ => None,
        }
    }

    /// Compute the Soundex code of a word, or `None` if it has no ASCII letters.
    pub fn encode(word: &str) -> Option<String> {
        let mut letters = word
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase());

        let first = letters.next()?;
        let mut code = String::with_capacity(4);
        code.push(first);

        let mut last = Self::digit(first);
        for letter in letters {
            if code.len() == 4 {
                break;
            }
            // H and W do not separate consonants with the same code.
            if letter == 'H' || letter == 'W' {
                continue;
            }
            match Self::digit(letter) {
                Some(digit) => {
                    if last != Some(digit) {
                        code.push(digit);
                    }
                    last = Some(digit);
                }
                None => last = None,
            }
        }

        while code.len() < 4 {
            code.push('0');
        }

        Some(code)
    }
}

impl Normalizer for SoundexNormalizer {
    fn canonicalize(&self, buffer: &str) -> Result<String> {
        Ok(buffer.to_string())
    }

    fn normalize(&self, token: &str) -> Result<String> {
        Ok(Self::encode(token).unwrap_or_else(|| token.to_lowercase()))
    }

    fn name(&self) -> &'static str {
        "soundex"
    }
}

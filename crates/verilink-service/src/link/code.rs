//! Short-code generation.

use rand::RngExt;

/// Characters a short code is drawn from.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates and recognizes fixed-length alphanumeric short codes.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator for codes of `length` characters.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Draws a fresh random code.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| {
                let idx = rng.random_range(0..ALPHABET.len());
                ALPHABET[idx] as char
            })
            .collect()
    }

    /// Whether `code` could have been produced by this generator.
    pub fn is_well_formed(&self, code: &str) -> bool {
        code.len() == self.length && code.bytes().all(|b| b.is_ascii_alphanumeric())
    }
}

//! Room code generation and normalization.

use rand::Rng;

/// Alphabet for generated room codes.
///
/// Excludes visually confusable glyphs (0/O, 1/I).
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of generated room codes.
pub const CODE_LEN: usize = 6;

/// Generate a fresh room code.
pub fn generate() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| {
            let i = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[i] as char
        })
        .collect()
}

/// Normalize a room id received from either transport.
///
/// Room codes are case-insensitive; uppercase is canonical. Inputs are not
/// restricted to the generation alphabet, so codes minted elsewhere keep
/// working.
pub fn normalize(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}

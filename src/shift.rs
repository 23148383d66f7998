//! Caesar rotation over the 26-letter Latin alphabet.
//!
//! Only ASCII letters are rotated. Every other character, including Polish
//! diacritic letters, digits and punctuation, is copied through unchanged so
//! the output always has the same number of characters as the input.

/// Number of distinct shifts (and letters per case).
pub const SHIFT_SPACE: u8 = 26;

/// Reduce any integer shift to its canonical residue in `0..26`.
pub fn normalize_shift(shift: i64) -> u8 {
    shift.rem_euclid(SHIFT_SPACE as i64) as u8
}

/// Undo a Caesar shift: every letter moves `shift` positions back.
pub fn decrypt(text: &str, shift: i64) -> String {
    rotate(text, SHIFT_SPACE - normalize_shift(shift))
}

/// Apply a Caesar shift: every letter moves `shift` positions forward.
pub fn encrypt(text: &str, shift: i64) -> String {
    rotate(text, normalize_shift(shift))
}

fn rotate(text: &str, forward: u8) -> String {
    let forward = forward % SHIFT_SPACE;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
                ((c as u8 - base + forward) % SHIFT_SPACE + base) as char
            } else {
                c
            }
        })
        .collect()
}

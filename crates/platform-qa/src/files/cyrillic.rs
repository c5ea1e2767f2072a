//! Random Ukrainian Cyrillic strings for form inputs.

use rand::seq::SliceRandom;
use rand::Rng;

/// Lowercase Ukrainian alphabet without the apostrophe and `ґ`.
pub const UA_CYRILLIC_CHARSET: &str = "абвгдеєжзиіїйклмнопрстуфхцчшщьюя";

/// Generates a random Ukrainian string of `length` characters.
pub fn generate(length: usize) -> String {
    generate_with(&mut rand::thread_rng(), length)
}

pub fn generate_with<R: Rng>(rng: &mut R, length: usize) -> String {
    let charset: Vec<char> = UA_CYRILLIC_CHARSET.chars().collect();
    (0..length)
        .filter_map(|_| charset.choose(&mut *rng).copied())
        .collect()
}

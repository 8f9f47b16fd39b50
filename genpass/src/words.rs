use crate::dictionary::{strip_possessive, Dictionary};
use crate::error::{Error, Result};
use crate::random::RandomSource;

/// Words drawn per password.
pub const WORDS_PER_PASSWORD: usize = 3;
/// The trailing number is drawn from `[0, NUMBER_BOUND)`.
pub const NUMBER_BOUND: usize = 1000;

/// Three capitalized dictionary words followed by a number, e.g. `AppleDogZebra42`.
pub fn word_password<R: RandomSource>(dictionary: &Dictionary, rng: &mut R) -> Result<String> {
    if dictionary.is_empty() {
        return Err(Error::NoWords);
    }
    let mut password = String::new();
    for _ in 0..WORDS_PER_PASSWORD {
        let word = dictionary
            .get(rng.index(dictionary.len()))
            .ok_or(Error::NoWords)?;
        password.push_str(&capitalize(strip_possessive(word)));
    }
    password.push_str(&rng.index(NUMBER_BOUND).to_string());
    Ok(password)
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

use crate::error::{Error, Result};
use crate::random::RandomSource;
use crate::MAX_LENGTH;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }

    /// Classes a password must draw from, in seeding order.
    pub fn required(symbols: bool) -> &'static [CharClass] {
        const WITH: &[CharClass] = &[
            CharClass::Lowercase,
            CharClass::Uppercase,
            CharClass::Digit,
            CharClass::Symbol,
        ];
        if symbols {
            WITH
        } else {
            &WITH[..3]
        }
    }
}

/// Random password of exactly `length` characters.
///
/// One character is seeded from every required class, the remainder is
/// filled uniformly from their union, then the whole thing is shuffled so the
/// seeded characters land anywhere.
pub fn char_password<R: RandomSource>(length: usize, symbols: bool, rng: &mut R) -> Result<String> {
    let classes = CharClass::required(symbols);
    if length > MAX_LENGTH {
        return Err(Error::TooLong {
            length,
            max: MAX_LENGTH,
        });
    }
    if length < classes.len() {
        return Err(Error::TooShort {
            length,
            required: classes.len(),
        });
    }
    let pool: Vec<u8> = classes.iter().flat_map(|c| c.chars()).copied().collect();

    let mut password: Vec<u8> = Vec::with_capacity(length);
    for class in classes {
        let set = class.chars();
        password.push(set[rng.index(set.len())]);
    }
    while password.len() < length {
        password.push(pool[rng.index(pool.len())]);
    }
    rng.shuffle(&mut password);

    Ok(password.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedSequence, RngSource};

    fn has(pw: &str, class: CharClass) -> bool {
        pw.chars().any(|c| class.contains(c))
    }

    #[test]
    fn test_exact_length() {
        let mut rng = RngSource::seeded(5);
        for length in [4, 8, 15, 16, 64, 200] {
            assert_eq!(char_password(length, true, &mut rng).unwrap().len(), length);
            assert_eq!(char_password(length, false, &mut rng).unwrap().len(), length);
        }
    }

    #[test]
    fn test_every_class_present() {
        let mut rng = RngSource::seeded(21);
        for _ in 0..500 {
            let pw = char_password(8, true, &mut rng).unwrap();
            assert!(has(&pw, CharClass::Lowercase), "{pw}");
            assert!(has(&pw, CharClass::Uppercase), "{pw}");
            assert!(has(&pw, CharClass::Digit), "{pw}");
            assert!(has(&pw, CharClass::Symbol), "{pw}");
        }
    }

    #[test]
    fn test_no_symbols() {
        let mut rng = RngSource::seeded(8);
        for _ in 0..500 {
            let pw = char_password(12, false, &mut rng).unwrap();
            assert!(!has(&pw, CharClass::Symbol), "{pw}");
            assert!(has(&pw, CharClass::Lowercase), "{pw}");
            assert!(has(&pw, CharClass::Uppercase), "{pw}");
            assert!(has(&pw, CharClass::Digit), "{pw}");
        }
    }

    #[test]
    fn test_too_short() {
        let mut rng = RngSource::seeded(0);
        assert!(matches!(
            char_password(3, true, &mut rng),
            Err(Error::TooShort { length: 3, required: 4 })
        ));
        assert_eq!(char_password(3, false, &mut rng).unwrap().len(), 3);
    }

    #[test]
    fn test_too_long() {
        let mut rng = RngSource::seeded(0);
        assert_eq!(char_password(MAX_LENGTH, true, &mut rng).unwrap().len(), MAX_LENGTH);
        assert!(matches!(
            char_password(MAX_LENGTH + 1, true, &mut rng),
            Err(Error::TooLong { .. })
        ));
        assert!(matches!(
            char_password(usize::MAX, false, &mut rng),
            Err(Error::TooLong { .. })
        ));
    }

    #[test]
    fn test_scripted_seeding() {
        // all zeros: seeds "aA0!", fills with 'a', shuffle rotates left
        let mut rng = FixedSequence::new(vec![0]);
        assert_eq!(char_password(6, true, &mut rng).unwrap(), "A0!aaa");
    }

    #[test]
    fn test_classes_disjoint() {
        for c in SYMBOLS.iter().map(|&b| b as char) {
            assert!(!c.is_ascii_alphanumeric(), "{c}");
        }
        assert_eq!(CharClass::required(false).len(), 3);
    }
}

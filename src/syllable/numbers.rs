//! Syllable counts of numerals read out in German.

/// Maps a number to the syllables of its spoken form, `None` if unsupported.
pub type NumberSyllables = fn(u64) -> Option<usize>;

/// Counts the syllables of a number spelled out in German.
///
/// Follows the morphology of the number words: "sie-ben" is the only
/// two-syllable digit, "elf" and "zwölf" are irregular, tens above twenty
/// take "und" between ones and tens ("ein-und-zwan-zig"), and "hun-dert" and
/// "tau-send" add two syllables each. Numbers from one million upwards are
/// not supported.
///
/// # Example
/// ```
/// use haikufy::syllable::german_number_syllables;
///
/// assert_eq!(german_number_syllables(21), Some(4));
/// assert_eq!(german_number_syllables(1_000_000), None);
/// ```
pub fn german_number_syllables(number: u64) -> Option<usize> {
    match number {
        7 => Some(2),
        0..=12 => Some(1),
        13..=99 => {
            let ones = number % 10;
            let mut result = 0;
            if ones != 0 {
                result += german_number_syllables(ones)?;
                if number > 20 {
                    result += 1;
                }
            }
            result += if number / 10 == 1 { 1 } else { 2 };
            Some(result)
        }
        100..=999 => with_remainder(number, 100),
        1_000..=999_999 => with_remainder(number, 1_000),
        _ => None,
    }
}

/// "<head> hundert <rest>" and "<head> tausend <rest>".
fn with_remainder(number: u64, unit: u64) -> Option<usize> {
    let mut result = german_number_syllables(number / unit)? + 2;
    let rest = number % unit;
    if rest != 0 {
        result += german_number_syllables(rest)?;
    }
    Some(result)
}

//! Per-word syllable counting.

use super::cascade::CorrectionCascade;
use super::numbers::{german_number_syllables, NumberSyllables};
use super::oracle::SyllableOracle;
use crate::config::{CorrectionTables, SyllableConfig};
use crate::error::Result;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Counts the syllables of single words.
///
/// A word is classified in a fixed order, first match wins:
///
/// 1. emoticons count zero;
/// 2. characters that are neither letters nor digits are trimmed from both
///    ends, and nothing left counts zero;
/// 3. numerals are read out in German;
/// 4. consonant-only abbreviations are spelled letter by letter; they, and
///    overrides spelled letter by letter like "c-d-u", reject mixed case;
/// 5. split characters break the word into subwords, then ignore characters
///    are dropped;
/// 6. overrides of the whole word win;
/// 7. anything but letters rejects the word;
/// 8. single-letter subwords must have an override;
/// 9. remaining subwords go through the dictionary and the correction
///    cascade.
///
/// `None` means the word cannot be counted, which rejects any text it is in.
pub struct SyllableCounter<O> {
    letters: HashSet<char>,
    ignore_chars: Vec<char>,
    split_chars: Vec<char>,
    abbreviation: Regex,
    emoticons: HashSet<String>,
    overrides: HashMap<String, usize>,
    acronyms: HashSet<String>,
    numbers: Option<NumberSyllables>,
    cascade: CorrectionCascade,
    oracle: O,
}

impl<O: SyllableOracle> SyllableCounter<O> {
    /// Creates a counter reading German numerals.
    ///
    /// Fails on invalid character sets or tables, so counting never panics.
    pub fn new(config: &SyllableConfig, tables: &CorrectionTables, oracle: O) -> Result<Self> {
        let cascade = CorrectionCascade::new(config, tables)?;
        let abbreviation = Regex::new(&config.abbreviation_pattern)?;

        let overrides = config
            .overrides
            .iter()
            .map(|(word, syllables)| (word.to_lowercase(), syllables.split('-').count()))
            .collect();

        let acronyms = config
            .overrides
            .iter()
            .filter(|(word, syllables)| is_spelled_out(word, syllables))
            .map(|(word, _)| word.to_lowercase())
            .collect();

        Ok(Self {
            letters: config.letters.chars().collect(),
            ignore_chars: config.ignore_chars.chars().collect(),
            split_chars: config.split_chars.chars().collect(),
            abbreviation,
            emoticons: config.emoticons.iter().map(|e| e.to_lowercase()).collect(),
            overrides,
            acronyms,
            numbers: Some(german_number_syllables),
            cascade,
            oracle,
        })
    }

    /// Replaces the numeral reader. `None` rejects every numeral.
    pub fn with_number_syllables(mut self, numbers: Option<NumberSyllables>) -> Self {
        self.numbers = numbers;
        self
    }

    /// Counts the syllables of one whitespace-free token.
    pub fn count(&self, word: &str) -> Option<usize> {
        if self.emoticons.contains(&word.to_lowercase()) {
            return Some(0);
        }

        let word = word.trim_matches(|c: char| !self.is_letter(c) && !c.is_ascii_digit());
        if word.is_empty() {
            return Some(0);
        }

        if let Some(numbers) = self.numbers {
            if word.chars().all(|c| c.is_ascii_digit()) {
                return word.parse::<u64>().ok().and_then(numbers);
            }
        }

        let lower = word.to_lowercase();
        let is_abbreviation = self.abbreviation.is_match(&lower);
        if (is_abbreviation || self.acronyms.contains(&lower)) && !has_uniform_case(word) {
            return None;
        }

        let spelled;
        let word = if is_abbreviation {
            spelled = spell_out(word);
            spelled.as_str()
        } else {
            word
        };

        let word: String = word
            .chars()
            .map(|c| if self.split_chars.contains(&c) { ' ' } else { c })
            .filter(|c| !self.ignore_chars.contains(c))
            .collect();

        if let Some(&count) = self.overrides.get(&word.to_lowercase()) {
            return Some(count);
        }

        if !word.chars().all(|c| c == ' ' || self.is_letter(c)) {
            return None;
        }

        let subwords: Vec<&str> = word.split_whitespace().collect();
        if subwords
            .iter()
            .any(|s| s.chars().count() == 1 && !self.overrides.contains_key(&s.to_lowercase()))
        {
            return None;
        }

        Some(subwords.iter().map(|s| self.count_subword(s)).sum())
    }

    fn count_subword(&self, subword: &str) -> usize {
        let lower = subword.to_lowercase();
        if let Some(&count) = self.overrides.get(&lower) {
            return count;
        }

        let syllables = self.oracle.syllables(&lower);
        self.cascade.count(&syllables)
    }

    #[inline]
    fn is_letter(&self, c: char) -> bool {
        self.letters.contains(&c)
    }
}

/// All cased characters upper, or all lower, and at least one of them.
fn has_uniform_case(word: &str) -> bool {
    let mut upper = false;
    let mut lower = false;
    for c in word.chars() {
        upper |= c.is_uppercase();
        lower |= c.is_lowercase();
    }
    upper != lower
}

/// An override such as `cdu` → `c-d-u`: one syllable per letter.
fn is_spelled_out(word: &str, syllables: &str) -> bool {
    word.chars().count() >= 2
        && word.chars().all(char::is_alphabetic)
        && syllables.split('-').count() == word.chars().count()
        && syllables.split('-').all(|s| s.chars().count() == 1)
}

/// "CDU" becomes "C D U".
fn spell_out(word: &str) -> String {
    let mut spelled = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            spelled.push(' ');
        }
        spelled.push(c);
    }
    spelled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllable::IdentityOracle;

    fn counter() -> SyllableCounter<IdentityOracle> {
        SyllableCounter::new(
            &SyllableConfig::default(),
            &CorrectionTables::default(),
            IdentityOracle,
        )
        .unwrap()
    }

    #[test]
    fn test_emoticons_count_zero() {
        let counter = counter();
        assert_eq!(counter.count(":D"), Some(0));
        assert_eq!(counter.count(":d"), Some(0));
        assert_eq!(counter.count("XD"), Some(0));
        assert_eq!(counter.count("\\o/"), Some(0));
        assert_eq!(counter.count("<3"), Some(0));
    }

    #[test]
    fn test_punctuation_only_counts_zero() {
        let counter = counter();
        assert_eq!(counter.count("..."), Some(0));
        assert_eq!(counter.count("–"), Some(0));
        assert_eq!(counter.count("🙂"), Some(0));
    }

    #[test]
    fn test_surrounding_punctuation_is_trimmed() {
        let counter = counter();
        assert_eq!(counter.count("(Idee!)"), Some(2));
        assert_eq!(counter.count("\"home\","), Some(1));
    }

    #[test]
    fn test_numerals() {
        let counter = counter();
        assert_eq!(counter.count("7"), Some(2));
        assert_eq!(counter.count("21."), Some(4));
        assert_eq!(counter.count("1000000"), None);
        assert_eq!(counter.count("99999999999999999999999"), None);
    }

    #[test]
    fn test_numerals_disabled() {
        let counter = counter().with_number_syllables(None);
        assert_eq!(counter.count("7"), None);
    }

    #[test]
    fn test_digits_next_to_letters_reject() {
        let counter = counter();
        assert_eq!(counter.count("abc123"), None);
        assert_eq!(counter.count("3D"), None);
    }

    #[test]
    fn test_digit_words_with_override() {
        let counter = counter();
        assert_eq!(counter.count("IPv6"), Some(4));
        assert_eq!(counter.count("34C3"), Some(6));
    }

    #[test]
    fn test_abbreviations() {
        let counter = counter();
        assert_eq!(counter.count("CDU"), Some(3));
        assert_eq!(counter.count("cdu"), Some(3));
        assert_eq!(counter.count("CDu"), None);
        assert_eq!(counter.count("NRW"), Some(3));
        assert_eq!(counter.count("Hmm"), None);
        assert_eq!(counter.count("CSU"), Some(3));
        assert_eq!(counter.count("cSU"), None);
    }

    #[test]
    fn test_spelled_out_overrides_need_uniform_case() {
        let counter = counter();
        assert_eq!(counter.count("AFD"), Some(3));
        assert_eq!(counter.count("afd"), Some(3));
        // the party's own spelling falls under the same rule as "CDu"
        assert_eq!(counter.count("AfD"), None);
    }

    #[test]
    fn test_trailing_foreign_letter_is_trimmed() {
        let counter = counter();
        // 'é' is not a letter here, so it is trimmed like punctuation
        assert_eq!(counter.count("Café"), Some(1));
    }

    #[test]
    fn test_overrides() {
        let counter = counter();
        assert_eq!(counter.count("Idee"), Some(2));
        assert_eq!(counter.count("Homeoffice"), Some(3));
        assert_eq!(counter.count("where"), Some(2));
    }

    #[test]
    fn test_single_letters() {
        let counter = counter();
        assert_eq!(counter.count("a"), Some(1));
        assert_eq!(counter.count("Y"), Some(3));
        assert_eq!(counter.count("ß"), Some(1));
    }

    #[test]
    fn test_split_and_ignore_chars() {
        let counter = counter();
        assert_eq!(counter.count("home-office"), Some(3));
        assert_eq!(counter.count("home/office"), Some(3));
        assert_eq!(counter.count("Hom'e"), Some(1));
        assert_eq!(counter.count("i*dee"), Some(2));
    }

    #[test]
    fn test_split_wins_over_ignore() {
        let config = SyllableConfig {
            ignore_chars: "'*-".to_string(),
            ..SyllableConfig::default()
        };
        let counter =
            SyllableCounter::new(&config, &CorrectionTables::default(), IdentityOracle).unwrap();
        assert_eq!(counter.count("a-a"), Some(2));
        assert_eq!(counter.count("a'a"), Some(1));
    }

    #[test]
    fn test_single_letter_subword_needs_override() {
        let mut config = SyllableConfig::default();
        config.overrides.remove("x");
        let counter =
            SyllableCounter::new(&config, &CorrectionTables::default(), IdentityOracle).unwrap();
        assert_eq!(counter.count("home-x"), None);
        assert_eq!(counter.count("home-a"), Some(2));
    }

    #[test]
    fn test_foreign_letters_reject() {
        let counter = counter();
        assert_eq!(counter.count("Cafés"), None);
        assert_eq!(counter.count("na+ja"), None);
    }

    #[test]
    fn test_dictionary_path() {
        let counter = counter();
        assert_eq!(counter.count("Kante"), Some(2));
        assert_eq!(counter.count("Nation"), Some(2));
        assert_eq!(counter.count("Stuhl"), Some(1));
        assert_eq!(counter.count("Fenster-Kante"), Some(4));
    }

    #[test]
    fn test_oracle_is_bypassed_by_overrides() {
        let oracle = |word: &str| word.chars().map(|c| c.to_string()).collect::<Vec<_>>();
        let counter =
            SyllableCounter::new(&SyllableConfig::default(), &CorrectionTables::default(), oracle)
                .unwrap();
        assert_eq!(counter.count("stripe"), Some(1));
        assert_eq!(counter.count("office"), Some(2));
    }

    #[test]
    fn test_spelled_out() {
        assert!(is_spelled_out("cdu", "c-d-u"));
        assert!(!is_spelled_out("ipv4", "i-p-v-4"));
        assert!(!is_spelled_out("a", "a"));
        assert!(!is_spelled_out("ios", "i-os"));
    }

    #[test]
    fn test_uniform_case() {
        assert!(has_uniform_case("CDU"));
        assert!(has_uniform_case("cdu"));
        assert!(!has_uniform_case("CDu"));
        assert!(!has_uniform_case("123"));
    }

    #[test]
    fn test_invalid_tables_fail_construction() {
        let tables = CorrectionTables {
            no_syllable_start: vec![String::new()],
            ..CorrectionTables::default()
        };
        let result = SyllableCounter::new(&SyllableConfig::default(), &tables, IdentityOracle);
        assert!(matches!(result, Err(crate::HaikuError::Config(_))));

        let config = SyllableConfig {
            consonants: "bcdk".to_string(),
            vowels: "aek".to_string(),
            ..SyllableConfig::default()
        };
        let result = SyllableCounter::new(&config, &CorrectionTables::default(), IdentityOracle);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_pattern_fails_construction() {
        let config = SyllableConfig {
            abbreviation_pattern: "[".to_string(),
            ..Default::default()
        };
        let result = SyllableCounter::new(&config, &CorrectionTables::default(), IdentityOracle);
        assert!(result.is_err());
    }
}

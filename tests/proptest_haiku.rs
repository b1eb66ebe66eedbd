//! Property-based tests for the haikufy engine.
//!
//! 1. **Numeral totality**: every number below one million can be read out
//! 2. **Total**: a text whose counts do not sum to 17 is never a haiku
//! 3. **Preservation**: a haiku holds exactly the input words, in order

use haikufy::{german_number_syllables, Config, Haikufy, IdentityOracle};
use proptest::prelude::*;

/// Words with a known count under the default overrides.
const WORDS: &[(&str, usize)] = &[
    ("idee", 2),
    ("office", 2),
    ("home", 1),
    ("where", 2),
    ("nope", 1),
    ("stripe", 1),
    ("yeah", 1),
    ("a", 1),
    (":D", 0),
    ("<3", 0),
];

fn engine() -> Haikufy<IdentityOracle> {
    Haikufy::new(Config::default(), IdentityOracle).unwrap()
}

fn arb_words(max: usize) -> impl Strategy<Value = Vec<(&'static str, usize)>> {
    prop::collection::vec(prop::sample::select(WORDS), 1..max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn numerals_below_one_million(number in 0u64..1_000_000) {
        let count = german_number_syllables(number);
        prop_assert!(matches!(count, Some(n) if n >= 1), "{} -> {:?}", number, count);
    }

    #[test]
    fn numerals_from_one_million(number in 1_000_000u64..) {
        prop_assert_eq!(german_number_syllables(number), None);
    }

    #[test]
    fn wrong_total_is_rejected(words in arb_words(20)) {
        let total: usize = words.iter().map(|(_, count)| count).sum();
        prop_assume!(total != 17);

        let text: Vec<&str> = words.iter().map(|(word, _)| *word).collect();
        prop_assert_eq!(engine().haikufy(&text.join(" ")), None);
    }

    #[test]
    fn haiku_keeps_the_input_words(
        words in prop::collection::vec(prop::sample::select(&WORDS[4..]), 17..30)
    ) {
        // one and zero syllable words always lay out once the total fits
        let total: usize = words.iter().map(|(_, count)| count).sum();
        let text: Vec<&str> = words.iter().map(|(word, _)| *word).collect();
        let result = engine().haikufy(&text.join(" "));

        if total == 17 {
            let haiku = result.expect("17 single syllables form a haiku");
            prop_assert_eq!(haiku.words().collect::<Vec<_>>(), text);
        } else {
            prop_assert_eq!(result, None);
        }
    }

    #[test]
    fn lines_match_their_targets(words in arb_words(20)) {
        let engine = engine();
        let text: Vec<&str> = words.iter().map(|(word, _)| *word).collect();

        if let Some(haiku) = engine.haikufy(&text.join(" ")) {
            for (line, target) in haiku.lines().iter().zip([5, 7, 5]) {
                let count: usize = line
                    .split(' ')
                    .map(|word| engine.count_syllables(word).unwrap())
                    .sum();
                prop_assert_eq!(count, target, "line {:?}", line);
            }
        }
    }
}

//! Configuration for the haikufy engine.
//!
//! Every table the engine consults lives here. The defaults describe German;
//! a JSON file can overlay any subset of fields, since every struct is
//! `#[serde(default)]`.

use crate::error::{HaikuError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Literal substitutions applied to the raw text before tokenization.
pub const GERMAN_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("€", " Euro "),
    ("$", " Dollar "),
    ("z.B.", " zum Beispiel "),
    ("z.b.", " zum Beispiel "),
];

/// Words whose segmentation the dictionary gets wrong, mostly English loans.
pub const GERMAN_OVERRIDES: &[(&str, &str)] = &[
    ("idee", "i-dee"),
    ("software", "soft-ware"),
    ("hardware", "hard-ware"),
    ("update", "up-date"),
    ("upgrade", "up-grade"),
    ("facebook", "face-book"),
    ("interface", "in-ter-face"),
    ("interfaces", "in-ter-faces"),
    ("online", "on-line"),
    ("offline", "off-line"),
    ("home", "home"),
    ("office", "of-fice"),
    ("homeoffice", "home-of-fice"),
    ("image", "i-ma-ge"),
    ("34c3", "vier-und-drei-ßig-c-drei"),
    ("miyuuli", "mi-yuu-li"),
    ("stripe", "stripe"),
    ("deadname", "dead-name"),
    ("deadnames", "dead-names"),
    ("fea-ture", "fea-ture"),
    ("fea-tures", "fea-tures"),
    ("ipv4", "i-p-v-4"),
    ("ipv6", "i-p-v-6"),
    ("yeah", "yeah"),
    ("where", "whe-re"),
    ("fullhd", "full-h-d"),
    ("ios", "i-os"),
    ("cdu", "c-d-u"),
    ("csu", "c-s-u"),
    ("afd", "a-f-d"),
    ("device", "de-vice"),
    ("nope", "nope"),
];

/// Single letters spoken on their own. Everything but `y` is one syllable.
const GERMAN_LETTERS_SPOKEN: &str = "abcdefghijklmnopqrstuvwxyzöäüß";

/// Syllable sequences the dictionary splits but which are one syllable.
pub const GERMAN_JOIN_SYLLABLES: &[&str] = &[
    "ti-on", "ti-ons", "si-on", "si-ons", "nai-v", "ge-ht", "ed-ge", "kin-ky", "zi-ell", "zi-el",
    "wi-ngs", "no-te-book", "mo-bi-le", "in-dia",
];

/// Syllables the dictionary leaves joined but which must be split.
///
/// `mo-bilein-di-a` is two entries run together in the source tables; it is
/// kept verbatim until someone who speaks German decides how to split it.
pub const GERMAN_SPLIT_SYLLABLES: &[&str] = &[
    "na-iv", "de-o", "de-os", "pi-a", "o-dy", "o-nym", "o-ny", "pro-xy", "note-book",
    "mo-bilein-di-a", "bi-o", "see-ot",
];

/// Consonant clusters that cannot open a syllable.
///
/// `gqkg`, `nlpb` and `qztb` are run-together entries, kept verbatim.
pub const GERMAN_NO_SYLLABLE_START: &[&str] = &[
    "bb", "bc", "bd", "bp", "cm", "cn", "cv", "cw", "cx",
    "db", "dc", "df", "dg", "dh", "dj", "dk", "dl", "dm", "dn", "dp", "dq", "dz",
    "gb", "gc", "gd", "gf", "gj", "gk", "gqkg", "kq",
    "lr", "lv",
    "ml",
    "nlpb", "pm", "pn",
    "qb", "qc", "qd", "qf", "qg", "qh", "qj", "qk", "ql", "qm", "qn", "qp", "qr",
    "qs", "qt", "qv", "qw", "qx", "qy", "qztb", "td", "tf", "tg", "tn", "tm",
    "xg", "xk",
];

/// Consonant clusters that cannot close a syllable.
///
/// Same run-together entries as [`GERMAN_NO_SYLLABLE_START`].
pub const GERMAN_NO_SYLLABLE_END: &[&str] = &[
    "bm", "bn", "bp", "cm", "cn", "cv", "cw", "cx",
    "db", "dc", "df", "dg", "dh", "dj", "dk", "dl", "dm", "dn", "dp", "dq", "dz",
    "fm",
    "gb", "gc", "gd", "gf", "gj", "gk", "gqkg", "kq",
    "lr",
    "ml",
    "nlpb", "pm", "pn",
    "qb", "qc", "qd", "qf", "qg", "qh", "qj", "qk", "ql", "qm", "qn", "qp", "qr",
    "qs", "qt", "qv", "qw", "qx", "qy", "qztb", "td", "tf", "tg", "tn", "tm",
    "xg", "xk",
];

/// Tokens that are emoticons rather than words. Compared lowercased.
pub const EMOTICONS: &[&str] = &[
    "xd", "xf", "m(", "m)", "\\o/", "/o\\", ":d", ":3", "<3", "o.o", "o_o", "q.q", "q_q", "/o/",
    "\\o\\", ":o",
];

/// Main configuration for the haikufy engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text normalization configuration.
    pub text: TextConfig,

    /// Per-word syllable counting configuration.
    pub syllables: SyllableConfig,

    /// Correction tables applied on top of the hyphenation dictionary.
    pub corrections: CorrectionTables,

    /// Line layout configuration.
    pub haiku: HaikuConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Fields missing from the file keep their German defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every table for entries the engine cannot use.
    pub fn validate(&self) -> Result<()> {
        self.syllables.validate()?;
        self.corrections.validate()?;
        self.haiku.validate()
    }
}

/// Text normalization configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Ordered literal substitutions `(from, to)`.
    pub substitutions: Vec<(String, String)>,

    /// Compose the text to NFC before substituting.
    /// Default: true.
    pub compose_unicode: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            substitutions: GERMAN_SUBSTITUTIONS
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            compose_unicode: true,
        }
    }
}

/// Per-word syllable counting configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyllableConfig {
    /// Characters a word may consist of.
    pub letters: String,

    /// Characters dropped from inside a word.
    pub ignore_chars: String,

    /// Characters that split a word into subwords.
    pub split_chars: String,

    /// Lowercase consonants.
    pub consonants: String,

    /// Lowercase vowels.
    pub vowels: String,

    /// Regex matched against the lowercased word to detect abbreviations.
    pub abbreviation_pattern: String,

    /// Lowercase emoticon tokens, counted as zero syllables.
    pub emoticons: Vec<String>,

    /// Lowercase word to hyphen-separated segmentation.
    pub overrides: HashMap<String, String>,
}

/// The German syllable tables, built on first use.
static GERMAN_SYLLABLES: Lazy<SyllableConfig> = Lazy::new(|| {
    let mut overrides: HashMap<String, String> = GERMAN_OVERRIDES
        .iter()
        .map(|(word, syllables)| (word.to_string(), syllables.to_string()))
        .collect();
    for letter in GERMAN_LETTERS_SPOKEN.chars() {
        let spoken = if letter == 'y' {
            "yp-si-lon".to_string()
        } else {
            letter.to_string()
        };
        overrides.insert(letter.to_string(), spoken);
    }

    SyllableConfig {
        letters: "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZäöüÄÖÜßẞ".to_string(),
        ignore_chars: "'*".to_string(),
        split_chars: "-/_".to_string(),
        consonants: "bcdfghjklmnpqrstvwxyzß".to_string(),
        vowels: "aeiouäöü".to_string(),
        abbreviation_pattern: "^[bcdfghjklmnpqrstvwxzß]+$".to_string(),
        emoticons: EMOTICONS.iter().map(|e| e.to_string()).collect(),
        overrides,
    }
});

impl Default for SyllableConfig {
    fn default() -> Self {
        GERMAN_SYLLABLES.clone()
    }
}

impl SyllableConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        for (name, set) in [
            ("letters", &self.letters),
            ("consonants", &self.consonants),
            ("vowels", &self.vowels),
        ] {
            if set.is_empty() {
                return Err(HaikuError::Config(format!("{} must not be empty", name)));
            }
        }
        if let Some(c) = self.consonants.chars().find(|c| self.vowels.contains(*c)) {
            return Err(HaikuError::Config(format!(
                "'{}' is both a consonant and a vowel",
                c
            )));
        }
        if let Some(c) = self.split_chars.chars().find(|c| self.letters.contains(*c)) {
            return Err(HaikuError::Config(format!(
                "split character '{}' is also a letter",
                c
            )));
        }

        for (word, syllables) in &self.overrides {
            if word.is_empty() {
                return Err(HaikuError::Config("override for empty word".to_string()));
            }
            if syllables.split('-').any(str::is_empty) {
                return Err(HaikuError::Config(format!(
                    "override '{}' has an empty syllable: '{}'",
                    word, syllables
                )));
            }
        }
        Ok(())
    }
}

/// Correction tables, applied in field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionTables {
    /// Clusters split letter by letter at the start of a syllable.
    pub no_syllable_start: Vec<String>,

    /// Clusters split letter by letter at the end of a syllable.
    pub no_syllable_end: Vec<String>,

    /// Hyphenated sequences merged into one syllable.
    pub join_syllables: Vec<String>,

    /// Hyphenated sequences a single syllable is split into.
    pub split_syllables: Vec<String>,
}

impl Default for CorrectionTables {
    fn default() -> Self {
        fn owned(table: &[&str]) -> Vec<String> {
            table.iter().map(|s| s.to_string()).collect()
        }

        Self {
            no_syllable_start: owned(GERMAN_NO_SYLLABLE_START),
            no_syllable_end: owned(GERMAN_NO_SYLLABLE_END),
            join_syllables: owned(GERMAN_JOIN_SYLLABLES),
            split_syllables: owned(GERMAN_SPLIT_SYLLABLES),
        }
    }
}

impl CorrectionTables {
    pub(crate) fn validate(&self) -> Result<()> {
        for (name, table) in [
            ("no_syllable_start", &self.no_syllable_start),
            ("no_syllable_end", &self.no_syllable_end),
        ] {
            for cluster in table {
                if cluster.chars().count() < 2 || !cluster.chars().all(char::is_alphabetic) {
                    return Err(HaikuError::Config(format!(
                        "{} entry '{}' must be at least two letters",
                        name, cluster
                    )));
                }
            }
        }

        for (name, table) in [
            ("join_syllables", &self.join_syllables),
            ("split_syllables", &self.split_syllables),
        ] {
            for entry in table {
                let parts: Vec<&str> = entry.split('-').collect();
                if parts.len() < 2 || parts.iter().any(|p| p.is_empty()) {
                    return Err(HaikuError::Config(format!(
                        "{} entry '{}' needs at least two non-empty syllables",
                        name, entry
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Line layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HaikuConfig {
    /// Syllables per line.
    /// Default: [5, 7, 5].
    pub line_syllables: [usize; 3],
}

impl Default for HaikuConfig {
    fn default() -> Self {
        Self {
            line_syllables: [5, 7, 5],
        }
    }
}

impl HaikuConfig {
    /// Returns the syllable count a whole text must have.
    #[inline]
    pub fn total_syllables(&self) -> usize {
        self.line_syllables.iter().sum()
    }

    fn validate(&self) -> Result<()> {
        if self.line_syllables.contains(&0) {
            return Err(HaikuError::Config(
                "every line needs at least one syllable".to_string(),
            ));
        }
        Ok(())
    }
}

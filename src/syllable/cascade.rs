//! Correction passes applied to a dictionary segmentation.
//!
//! The hyphenation dictionary is tuned for line breaking, not for counting
//! spoken syllables: it refuses to split near word edges, leaves consonant
//! clusters unbroken and misses loan words. The cascade repairs its output in
//! a fixed sequence of passes over the list of syllables.
//!
//! # Pass Order
//!
//! Passes run in the order of [`PASSES`]. The four table passes can undo each
//! other's work: a join entry can re-merge what a cluster entry split.
//!
//! Every table entry is matched left to right without overlap: two matches
//! never share a syllable boundary, and the pieces an entry produces are not
//! revisited by that same entry.

use crate::config::{CorrectionTables, SyllableConfig};
use crate::error::Result;

type Segment = Vec<char>;

/// A single rewrite over the syllable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Split `V+ C? C+ V+` inside a syllable before the last consonant run,
    /// until nothing changes.
    ConsonantClusters,
    /// Merge syllables consisting of one consonant into a neighbor.
    LoneConsonants,
    /// Merge a repeated vowel split across syllables at either word edge.
    VowelEdges,
    /// Split clusters that cannot start a syllable.
    NoSyllableStart,
    /// Split clusters that cannot end a syllable.
    NoSyllableEnd,
    /// Merge known sequences back into one syllable.
    Join,
    /// Split known syllables into parts.
    Split,
}

/// The passes in the order they are applied.
pub const PASSES: [Pass; 7] = [
    Pass::ConsonantClusters,
    Pass::LoneConsonants,
    Pass::VowelEdges,
    Pass::NoSyllableStart,
    Pass::NoSyllableEnd,
    Pass::Join,
    Pass::Split,
];

/// Applies the correction passes to dictionary segmentations.
#[derive(Debug, Clone)]
pub struct CorrectionCascade {
    consonants: Vec<char>,
    vowels: Vec<char>,
    no_syllable_start: Vec<Segment>,
    no_syllable_end: Vec<Segment>,
    join_syllables: Vec<Vec<Segment>>,
    split_syllables: Vec<Vec<Segment>>,
}

impl CorrectionCascade {
    /// Creates a cascade from the character sets and correction tables.
    ///
    /// Fails on tables the passes cannot apply, such as an empty cluster.
    pub fn new(syllables: &SyllableConfig, tables: &CorrectionTables) -> Result<Self> {
        syllables.validate()?;
        tables.validate()?;

        fn clusters(table: &[String]) -> Vec<Segment> {
            table.iter().map(|cluster| cluster.chars().collect()).collect()
        }

        fn sequences(table: &[String]) -> Vec<Vec<Segment>> {
            table
                .iter()
                .map(|entry| entry.split('-').map(|part| part.chars().collect()).collect())
                .collect()
        }

        Ok(Self {
            consonants: syllables.consonants.chars().collect(),
            vowels: syllables.vowels.chars().collect(),
            no_syllable_start: clusters(&tables.no_syllable_start),
            no_syllable_end: clusters(&tables.no_syllable_end),
            join_syllables: sequences(&tables.join_syllables),
            split_syllables: sequences(&tables.split_syllables),
        })
    }

    /// Runs every pass over `syllables` and returns the corrected list.
    pub fn correct(&self, syllables: &[String]) -> Vec<String> {
        let mut segments: Vec<Segment> = syllables
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.chars().collect())
            .collect();

        for pass in PASSES {
            self.apply(pass, &mut segments);
            log::trace!("{:?}: {}", pass, render(&segments));
        }

        segments.into_iter().map(|s| s.into_iter().collect()).collect()
    }

    /// Counts the syllables of a dictionary segmentation after correction.
    ///
    /// Never returns zero.
    pub fn count(&self, syllables: &[String]) -> usize {
        self.correct(syllables)
            .iter()
            .filter(|s| !s.is_empty())
            .count()
            .max(1)
    }

    fn apply(&self, pass: Pass, segments: &mut Vec<Segment>) {
        match pass {
            Pass::ConsonantClusters => self.split_consonant_clusters(segments),
            Pass::LoneConsonants => self.merge_lone_consonants(segments),
            Pass::VowelEdges => {
                for &vowel in &self.vowels {
                    merge_leading_vowel(segments, vowel);
                    merge_trailing_vowel(segments, vowel);
                }
            }
            Pass::NoSyllableStart => {
                for cluster in &self.no_syllable_start {
                    split_cluster_at_start(segments, cluster);
                }
            }
            Pass::NoSyllableEnd => {
                for cluster in &self.no_syllable_end {
                    split_cluster_at_end(segments, cluster);
                }
            }
            Pass::Join => {
                for parts in &self.join_syllables {
                    join_sequence(segments, parts);
                }
            }
            Pass::Split => {
                for parts in &self.split_syllables {
                    split_sequence(segments, parts);
                }
            }
        }
    }

    #[inline]
    fn is_consonant(&self, c: char) -> bool {
        self.consonants.contains(&c)
    }

    #[inline]
    fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    fn is_lone_consonant(&self, segment: &[char]) -> bool {
        matches!(segment, [c] if self.is_consonant(*c))
    }

    fn split_consonant_clusters(&self, segments: &mut Vec<Segment>) {
        loop {
            let found = segments
                .iter()
                .enumerate()
                .find_map(|(i, s)| self.cluster_split_point(s).map(|at| (i, at)));

            match found {
                Some((i, at)) => {
                    let tail = segments[i].split_off(at);
                    segments.insert(i + 1, tail);
                }
                None => break,
            }
        }
    }

    /// Finds the first consonant run with a vowel on both sides.
    ///
    /// A run of one consonant goes to the next syllable ("a-ber"); longer runs
    /// keep their first consonant ("kan-te", "fen-ster").
    fn cluster_split_point(&self, segment: &[char]) -> Option<usize> {
        let mut i = 0;
        while i < segment.len() {
            if !self.is_consonant(segment[i]) {
                i += 1;
                continue;
            }

            let start = i;
            while i < segment.len() && self.is_consonant(segment[i]) {
                i += 1;
            }

            let vowel_before = start > 0 && self.is_vowel(segment[start - 1]);
            let vowel_after = i < segment.len() && self.is_vowel(segment[i]);
            if vowel_before && vowel_after {
                return Some(if i - start >= 2 { start + 1 } else { start });
            }
        }
        None
    }

    fn merge_lone_consonants(&self, segments: &mut Vec<Segment>) {
        if segments.len() >= 2 && self.is_lone_consonant(&segments[0]) {
            let mut first = segments.remove(0);
            first.append(&mut segments[0]);
            segments[0] = first;
        }

        let mut i = 1;
        while i < segments.len() {
            if self.is_lone_consonant(&segments[i]) {
                let lone = segments.remove(i);
                segments[i - 1].extend(lone);
            }
            // the syllable after a merge shares the consumed boundary
            i += 1;
        }
    }
}

/// "a-al" becomes "aal", also across several single-vowel syllables.
fn merge_leading_vowel(segments: &mut Vec<Segment>, vowel: char) {
    if segments.len() < 2 || segments[0] != [vowel] || segments[1].first() != Some(&vowel) {
        return;
    }

    let mut last = 1;
    while segments[last] == [vowel]
        && last + 1 < segments.len()
        && segments[last + 1].first() == Some(&vowel)
    {
        last += 1;
    }

    let mut merged = vec![vowel];
    merged.extend_from_slice(&segments[last]);
    segments.splice(0..=last, std::iter::once(merged));
}

/// "se-e" becomes "see", also across several single-vowel syllables.
fn merge_trailing_vowel(segments: &mut Vec<Segment>, vowel: char) {
    let mut run_start = segments.len();
    while run_start > 0 && segments[run_start - 1] == [vowel] {
        run_start -= 1;
    }
    let run = segments.len() - run_start;

    let first = if run >= 1 && run_start > 0 && segments[run_start - 1].last() == Some(&vowel) {
        run_start - 1
    } else if run >= 2 {
        run_start
    } else {
        return;
    };

    let mut merged = segments[first].clone();
    merged.push(vowel);
    segments.truncate(first);
    segments.push(merged);
}

/// Splits `cluster` letter by letter where it opens a longer syllable.
fn split_cluster_at_start(segments: &mut Vec<Segment>, cluster: &[char]) {
    if !segments
        .iter()
        .any(|s| s.len() > cluster.len() && s.starts_with(cluster))
    {
        return;
    }

    let mut result = Vec::with_capacity(segments.len() + cluster.len());
    for segment in segments.drain(..) {
        if segment.len() > cluster.len() && segment.starts_with(cluster) {
            let (head, last) = cluster.split_at(cluster.len() - 1);
            result.extend(head.iter().map(|&c| vec![c]));
            let mut rest = last.to_vec();
            rest.extend_from_slice(&segment[cluster.len()..]);
            result.push(rest);
        } else {
            result.push(segment);
        }
    }
    *segments = result;
}

/// Splits `cluster` letter by letter where it closes a longer syllable.
fn split_cluster_at_end(segments: &mut Vec<Segment>, cluster: &[char]) {
    if !segments
        .iter()
        .any(|s| s.len() > cluster.len() && s.ends_with(cluster))
    {
        return;
    }

    let mut result = Vec::with_capacity(segments.len() + cluster.len());
    for mut segment in segments.drain(..) {
        if segment.len() > cluster.len() && segment.ends_with(cluster) {
            let keep = segment.len() - cluster.len() + 1;
            let tail = segment.split_off(keep);
            result.push(segment);
            result.extend(tail.into_iter().map(|c| vec![c]));
        } else {
            result.push(segment);
        }
    }
    *segments = result;
}

fn join_sequence(segments: &mut Vec<Segment>, parts: &[Segment]) {
    let mut i = 0;
    while i + parts.len() <= segments.len() {
        if segments[i..i + parts.len()] == *parts {
            let joined: Segment = parts.concat();
            segments.splice(i..i + parts.len(), std::iter::once(joined));
            i += 2;
        } else {
            i += 1;
        }
    }
}

fn split_sequence(segments: &mut Vec<Segment>, parts: &[Segment]) {
    let joined: Segment = parts.concat();
    let mut i = 0;
    while i < segments.len() {
        if segments[i] == joined {
            segments.splice(i..=i, parts.iter().cloned());
            i += parts.len() + 1;
        } else {
            i += 1;
        }
    }
}

fn render(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| s.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("-")
}

//! Greedy grouping of words into lines.

/// Groups consecutive words into lines of exactly `targets` syllables.
///
/// Each line takes words from the front while they fit, so zero-syllable
/// words between two lines end up on the earlier one. A line that ends up
/// short rejects the whole sequence without trying another grouping, and so
/// do words left over after the last line.
///
/// Returns the number of words on each line.
///
/// # Example
/// ```
/// use haikufy::haiku::partition_lines;
///
/// assert_eq!(partition_lines(&[2, 3, 4, 3, 3, 2], &[5, 7, 5]), Some([2, 2, 2]));
/// assert_eq!(partition_lines(&[4, 2, 6, 5], &[5, 7, 5]), None);
/// ```
pub fn partition_lines<const N: usize>(
    counts: &[usize],
    targets: &[usize; N],
) -> Option<[usize; N]> {
    let mut sizes = [0; N];
    let mut next = 0;

    for (line, &target) in targets.iter().enumerate() {
        let mut sum = 0;
        while next < counts.len() && sum + counts[next] <= target {
            sum += counts[next];
            next += 1;
            sizes[line] += 1;
        }
        if sum != target {
            log::debug!("Line {} stops at {} of {} syllables", line + 1, sum, target);
            return None;
        }
    }

    if next != counts.len() {
        log::debug!("{} words left after the last line", counts.len() - next);
        return None;
    }

    Some(sizes)
}

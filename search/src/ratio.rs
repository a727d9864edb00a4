//! Edit-distance similarity.
//!
//! `ratio` is `100 * (1 - indel / (len_a + len_b))`, where `indel` is the
//! edit distance allowing only insertions and deletions, rounded half to
//! even. Lengths count Unicode scalar values.

use crate::normalize::PreparedText;

/// Similarity of two character sequences in `0..=100`.
///
/// Identical sequences score 100, including two empty ones. Otherwise an
/// empty side scores 0.
pub fn ratio(a: &[char], b: &[char]) -> u8 {
    if a == b {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let total = a.len() + b.len();
    let distance = indel_distance(a, b);
    let similarity = (total - distance) as f64 / total as f64;
    (100.0 * similarity).round_ties_even() as u8
}

/// Token-order-insensitive similarity of two raw strings.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&PreparedText::new(a).sorted, &PreparedText::new(b).sorted)
}

/// Insertions plus deletions needed to turn `a` into `b`.
pub fn indel_distance(a: &[char], b: &[char]) -> usize {
    a.len() + b.len() - 2 * lcs_len(a, b)
}

/// Length of the longest common subsequence, in one row of memory.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut row = vec![0usize; short.len() + 1];

    for &lc in long {
        let mut diagonal = 0;
        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if lc == sc {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }

    row[short.len()]
}
